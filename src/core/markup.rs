use crate::domain::model::{ChatLink, WidgetSettings};

pub const BUTTON_CLASS: &str = "whatsapp-float";

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Floating button anchor for the page footer. Opens the chat in a new tab
/// without giving the chat site a handle back to this page.
pub fn render_button(settings: &WidgetSettings, link: &ChatLink) -> String {
    let label = escape_html(&settings.button_label);
    format!(
        r#"<a class="{class}" href="{href}" target="_blank" rel="noopener noreferrer" aria-label="{label}" title="{label}">{label}</a>"#,
        class = BUTTON_CLASS,
        href = escape_html(link.as_str()),
        label = label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::link::build_chat_link;

    #[test]
    fn test_render_button_targets_new_context() {
        let settings = WidgetSettings::default();
        let link = build_chat_link(&settings.phone, &settings.message).unwrap();
        let html = render_button(&settings, &link);

        assert!(html.starts_with(r#"<a class="whatsapp-float""#));
        assert!(html.contains(&format!(r#"href="{}""#, link.as_str())));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(">Fale conosco no WhatsApp</a>"));
    }

    #[test]
    fn test_render_button_escapes_label() {
        let settings = WidgetSettings {
            button_label: r#"<b>"Chat" & more</b>"#.to_string(),
            ..WidgetSettings::default()
        };
        let link = build_chat_link(&settings.phone, &settings.message).unwrap();
        let html = render_button(&settings, &link);

        assert!(html.contains("&lt;b&gt;&quot;Chat&quot; &amp; more&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
