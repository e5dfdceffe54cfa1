//! Error types for placeholder operations
//!
//! Both variants indicate a defect in the surrounding framework, not a
//! transient condition. Callers should not retry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DockingError {
    /// An operation was attempted on a disposed placeholder
    #[error("attempted to get a widget for disposed placeholder {placeholder}")]
    InvalidState { placeholder: String },

    /// The same action was registered twice on one placeholder
    #[error("duplicate action added: {action}")]
    DuplicateRegistration { action: String },
}

pub type Result<T> = std::result::Result<T, DockingError>;
