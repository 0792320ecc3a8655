use crate::domain::model::WidgetSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_phone_digits, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub widget: WidgetSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetSection {
    pub phone: Option<String>,
    pub message: Option<String>,
    pub button_label: Option<String>,
    pub analytics: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// `${NAME}` is replaced by the environment variable; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Overlays the values present in the file onto `settings`.
    pub fn apply_to(&self, settings: &mut WidgetSettings) {
        let widget = &self.widget;
        if let Some(phone) = &widget.phone {
            settings.phone = phone.clone();
        }
        if let Some(message) = &widget.message {
            settings.message = message.clone();
        }
        if let Some(label) = &widget.button_label {
            settings.button_label = label.clone();
        }
        if let Some(analytics) = widget.analytics {
            settings.analytics = analytics;
        }
    }

    pub fn settings(&self) -> WidgetSettings {
        let mut settings = WidgetSettings::default();
        self.apply_to(&mut settings);
        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // a config file exists to point the widget at a number, so the number is mandatory
        let phone = validate_required_field("widget.phone", &self.widget.phone)?;
        validate_phone_digits("widget.phone", phone)?;

        if let Some(message) = &self.widget.message {
            validate_non_empty_string("widget.message", message)?;
        }
        if let Some(label) = &self.widget.button_label {
            validate_non_empty_string("widget.button_label", label)?;
        }
        Ok(())
    }
}
