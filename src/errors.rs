// errors.rs
use thiserror::Error;

/// Errors produced while loading the offers dataset.
///
/// Cloned into every subscriber of the dataset source, so variants carry
/// rendered messages instead of the underlying error values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Could not decode offers: {0}")]
    Decode(String),

    #[error("Could not read offers file: {0}")]
    Io(String),

    #[error("Offers source closed before delivering data")]
    SourceDropped,
}

/// Errors raised by the control adapter when a raw control event can't be
/// mapped onto a selection change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("Unknown filter control: {0}")]
    UnknownControl(String),

    #[error("Invalid value {value:?} for control {control}")]
    InvalidValue { control: String, value: String },
}

impl ControlError {
    pub fn invalid(control: &str, value: &str) -> Self {
        ControlError::InvalidValue {
            control: control.to_string(),
            value: value.to_string(),
        }
    }
}
