use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::recommendation::SelectionSlot;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{slot} choice {choice} is out of range (expected 1..={max})")]
    OutOfRangeSelection { slot: SelectionSlot, choice: usize, max: usize },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("input failure: {0}")]
    Input(String),
    #[error("{0}")]
    Validation(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl From<ConfigError> for ApplicationError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}

impl ApplicationError {
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::OutOfRangeSelection { .. }) => "selection_out_of_range",
            Self::Input(_) => "input",
            Self::Validation(_) => "input_validation",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => 1,
            Self::Domain(_) | Self::Validation(_) | Self::Configuration(_) => 2,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => "That choice is not on the list. Pick one of the numbered options.",
            Self::Input(_) => "Input ended before the recommendation was complete.",
            Self::Validation(_) => "A value was rejected. Check it against the accepted range.",
            Self::Configuration(_) => "The configuration is invalid. Run `outfitter doctor` for details.",
        }
    }
}
