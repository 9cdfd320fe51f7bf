// File: src/error.rs
// Purpose: User-facing field errors and boundary faults

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A validation message shown next to a field.
///
/// The `Display` text is exactly what the renderer prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid phone number")]
    InvalidPhoneNumber,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Pincode must be 6 digits as integers")]
    InvalidPincode,

    #[error("Password must be at least 8 characters, including one uppercase letter, one lowercase letter, and one digit")]
    WeakPassword,

    #[error("This field is required")]
    Required,
}

/// When an error surfaces: on change (format) or only at submit (required)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Required,
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::Required => ErrorKind::Required,
            _ => ErrorKind::Format,
        }
    }

    /// Static message text, for callers that must not allocate
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::PasswordMismatch => "Passwords do not match",
            FieldError::InvalidPhoneNumber => "Invalid phone number",
            FieldError::InvalidEmail => "Invalid email address",
            FieldError::InvalidPincode => "Pincode must be 6 digits as integers",
            FieldError::WeakPassword => {
                "Password must be at least 8 characters, including one uppercase letter, one lowercase letter, and one digit"
            }
            FieldError::Required => "This field is required",
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Faults at the boundary with the rendering layer.
///
/// These are never validation outcomes; a user cannot cause them by typing.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("invalid form event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}
