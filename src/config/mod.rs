pub mod toml_config;

use crate::domain::model::WidgetSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "whatsapp-widget"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Build a WhatsApp chat link with a pre-filled message and open it")
)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Destination number: country code + area code + number, digits only
    #[cfg_attr(feature = "cli", arg(long))]
    pub phone: Option<String>,

    /// Text pre-filled in the chat box
    #[cfg_attr(feature = "cli", arg(long))]
    pub message: Option<String>,

    /// TOML file with a [widget] table
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<PathBuf>,

    /// Label used by the rendered button
    #[cfg_attr(feature = "cli", arg(long))]
    pub button_label: Option<String>,

    /// Open the link in a new browser window
    #[cfg_attr(feature = "cli", arg(long))]
    pub open: bool,

    /// Program used to open the link instead of the desktop default
    #[cfg_attr(feature = "cli", arg(long, requires = "open"))]
    pub browser: Option<String>,

    /// Print the floating button HTML snippet
    #[cfg_attr(feature = "cli", arg(long))]
    pub markup: bool,

    /// Emit a click event on every open
    #[cfg_attr(feature = "cli", arg(long))]
    pub analytics: bool,

    /// JSON output and JSON logs
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then flags given on the command line.
    pub fn resolve_settings(&self) -> Result<WidgetSettings> {
        let mut settings = WidgetSettings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            file.apply_to(&mut settings);
        }

        if let Some(phone) = &self.phone {
            settings.phone = phone.clone();
        }
        if let Some(message) = &self.message {
            settings.message = message.clone();
        }
        if let Some(label) = &self.button_label {
            settings.button_label = label.clone();
        }
        if self.analytics {
            settings.analytics = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_uses_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.resolve_settings().unwrap(), WidgetSettings::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[widget]\nphone = \"5511999999999\"\nmessage = \"do arquivo\"\n")
            .unwrap();

        let config = CliConfig {
            config: Some(file.path().to_path_buf()),
            message: Some("da linha de comando".to_string()),
            ..CliConfig::default()
        };

        let settings = config.resolve_settings().unwrap();
        assert_eq!(settings.phone, "5511999999999");
        assert_eq!(settings.message, "da linha de comando");
    }

    #[test]
    fn test_file_values_reach_every_setting() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[widget]\nphone = \"5511999999999\"\nmessage = \"oi\"\nbutton_label = \"Chame\"\nanalytics = true\n",
        )
        .unwrap();

        let config = CliConfig {
            config: Some(file.path().to_path_buf()),
            ..CliConfig::default()
        };

        let settings = config.resolve_settings().unwrap();
        assert_eq!(settings.phone, "5511999999999");
        assert_eq!(settings.message, "oi");
        assert_eq!(settings.button_label, "Chame");
        assert!(settings.analytics);
    }

    #[test]
    fn test_invalid_phone_flag_is_rejected() {
        let config = CliConfig {
            phone: Some("31 98446-6426".to_string()),
            ..CliConfig::default()
        };
        assert!(config.resolve_settings().is_err());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let config = CliConfig {
            config: Some(PathBuf::from("/nonexistent/widget.toml")),
            ..CliConfig::default()
        };
        assert!(matches!(
            config.resolve_settings(),
            Err(crate::utils::error::WidgetError::IoError(_))
        ));
    }
}
