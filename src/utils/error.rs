use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Not a valid number: '{input}'")]
    ParseError { input: String },

    #[error("Enter a number more than / equal to {minimum}")]
    BelowMinimumError { value: f64, minimum: f64 },

    #[error("The {tool} converter does not handle {unit}")]
    UnsupportedUnitError { unit: String, tool: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConverterError {
    /// Input and export failures leave the session ready for another attempt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConverterError::ParseError { .. }
                | ConverterError::BelowMinimumError { .. }
                | ConverterError::UnsupportedUnitError { .. }
                | ConverterError::IoError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConverterError::ParseError { .. } => "Please enter a number".to_string(),
            ConverterError::BelowMinimumError { .. } => self.to_string(),
            ConverterError::UnsupportedUnitError { .. } => self.to_string(),
            ConverterError::IoError(e) => format!("Export failed: {}", e),
            ConverterError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            ConverterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConverterError::ParseError { .. } => "Type a plain decimal number such as 12 or 0.5",
            ConverterError::BelowMinimumError { .. } => {
                "Values below the physical lower limit of the unit are rejected"
            }
            ConverterError::UnsupportedUnitError { .. } => {
                "Type 'help' to see the units this converter handles"
            }
            ConverterError::IoError(_) => {
                "Check that the output directory exists and is writable, then export again"
            }
            ConverterError::ConfigError { .. }
            | ConverterError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the TOML config file and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;
