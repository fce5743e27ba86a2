//! Setup-time errors.

use std::fmt;

/// A session could not be set up. Fatal for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// No template is registered under the requested asset name.
    MissingAsset(String),
    /// The configured pin layout has no pins; the game could never be won.
    EmptyPinLayout,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingAsset(name) => write!(f, "failed to load asset `{name}`"),
            SetupError::EmptyPinLayout => write!(f, "pin layout is empty"),
        }
    }
}

impl std::error::Error for SetupError {}
