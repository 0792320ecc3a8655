pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::browser::{RecordingBrowser, SystemBrowser};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{
    link::build_chat_link, markup::render_button, widget::WhatsAppWidget, BrowsingContext,
    ChatLink, WidgetSettings,
};
pub use utils::error::{Result, WidgetError};
