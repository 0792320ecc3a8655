use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use whatsapp_widget::utils::error::ErrorSeverity;
use whatsapp_widget::utils::logger;
use whatsapp_widget::{render_button, ChatLink, CliConfig, SystemBrowser, WhatsAppWidget};

#[derive(Serialize)]
struct LinkReport<'a> {
    phone: &'a str,
    message: &'a str,
    url: &'a ChatLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    markup: Option<String>,
    opened: bool,
}

fn main() -> Result<()> {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(
                "❌ Configuration failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    let browser = match &config.browser {
        Some(program) => SystemBrowser::with_command(program.clone(), Vec::new()),
        None => SystemBrowser::new(),
    };
    let widget = WhatsAppWidget::new(&settings, browser)?;
    widget.on_page_ready();

    if config.open {
        tracing::info!("🌐 Opening chat via {}", widget.browser().program());
        widget.open_chat_link();
    }

    let markup = config
        .markup
        .then(|| render_button(&settings, widget.chat_link()));

    if config.json {
        let report = LinkReport {
            phone: &settings.phone,
            message: &settings.message,
            url: widget.chat_link(),
            markup,
            opened: config.open,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", widget.chat_link());
        if let Some(html) = markup {
            println!("{}", html);
        }
    }

    Ok(())
}
