use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Birthdate has no year segment: {input:?}")]
    MissingYear { input: String },

    #[error("Invalid birth year in {input:?}: {source}")]
    InvalidYear {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Age for {input:?} does not fit in an i32 (current year {current_year})")]
    AgeOutOfRange { input: String, current_year: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::MissingYear { .. }
                | CalcError::InvalidYear { .. }
                | CalcError::AgeOutOfRange { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::MissingYear { input } => {
                format!("Could not find a year in '{}'", input)
            }
            CalcError::InvalidYear { input, .. } => {
                format!("The year in '{}' is not a number", input)
            }
            CalcError::AgeOutOfRange { input, .. } => {
                format!("The year in '{}' is too far from the current year", input)
            }
            CalcError::IoError(e) => format!("Could not read the configuration file: {}", e),
            CalcError::ConfigError { message } => format!("Configuration is invalid: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::MissingYear { .. } | CalcError::InvalidYear { .. } => {
                "Pass the birthdate as YYYY-MM-DD, e.g. 2000-06-23"
            }
            CalcError::AgeOutOfRange { .. } => {
                "Use a birth year and reference year within the supported calendar range"
            }
            CalcError::IoError(_) => "Check that the --config path exists and is readable",
            CalcError::ConfigError { .. } => "Check the TOML syntax of the configuration file",
            CalcError::InvalidConfigValueError { .. } => {
                "Fix the reported setting in the configuration file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
