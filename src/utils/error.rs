use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Failed to build chat link: {0}")]
    UrlBuildError(#[from] url::ParseError),

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WidgetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WidgetError::TomlParseError(_)
            | WidgetError::InvalidConfigValueError { .. }
            | WidgetError::MissingConfigError { .. } => ErrorCategory::Configuration,
            WidgetError::IoError(_) => ErrorCategory::System,
            WidgetError::UrlBuildError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
            ErrorCategory::Internal => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WidgetError::IoError(_) => {
                "Check that the configuration file exists and is readable".to_string()
            }
            WidgetError::TomlParseError(_) => {
                "Make sure the file is valid TOML with a [widget] table".to_string()
            }
            WidgetError::InvalidConfigValueError { field, .. } if field.ends_with("phone") => {
                "Use country code + area code + number, digits only (e.g. 5511999999999)"
                    .to_string()
            }
            WidgetError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            WidgetError::MissingConfigError { field } => {
                format!("Set '{}' via the command line or the config file", field)
            }
            WidgetError::UrlBuildError(_) => {
                "This is likely a bug; please report it with the input used".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WidgetError::IoError(_) => "Could not read the configuration file".to_string(),
            WidgetError::TomlParseError(_) => "The configuration file is not valid".to_string(),
            WidgetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            WidgetError::MissingConfigError { field } => format!("Missing {}", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
