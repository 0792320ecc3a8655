use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use url::Url;

pub const DEFAULT_PHONE: &str = "5531984466426";
pub const DEFAULT_MESSAGE: &str =
    "Olá! Vim através do seu site e gostaria de mais informações sobre seus produtos/serviços.";
pub const DEFAULT_BUTTON_LABEL: &str = "Fale conosco no WhatsApp";

/// What the widget sends people to: a number and the text pre-filled in the chat box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    pub phone: String,
    pub message: String,
    pub button_label: String,
    pub analytics: bool,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            phone: DEFAULT_PHONE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            analytics: false,
        }
    }
}

impl WidgetSettings {
    pub fn new(phone: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            message: message.into(),
            ..Self::default()
        }
    }
}

/// A `https://wa.me/<phone>?text=<message>` deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLink {
    url: Url,
}

impl ChatLink {
    pub(crate) fn from_url(url: Url) -> Self {
        Self { url }
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The destination as given to the builder, percent-decoded.
    pub fn phone(&self) -> Cow<'_, str> {
        percent_encoding::percent_decode_str(self.url.path().trim_start_matches('/'))
            .decode_utf8_lossy()
    }

    /// The `text` parameter, percent-decoded back to the original message.
    pub fn decoded_message(&self) -> Option<String> {
        let raw = self
            .url
            .query()?
            .split('&')
            .find_map(|pair| pair.strip_prefix("text="))?;
        percent_encoding::percent_decode_str(raw)
            .decode_utf8()
            .ok()
            .map(|s| s.into_owned())
    }
}

impl std::fmt::Display for ChatLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChatLink {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
