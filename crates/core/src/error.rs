//! Error types for Clínica Dental
//!
//! Client-side failures that are not transport related: form validation
//! and startup configuration.

use thiserror::Error;

use crate::validation::FieldErrors;

/// The main error type for the clinic domain layer
#[derive(Debug, Error)]
pub enum ClinicError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// One or more form fields failed their required-field check
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClinicError {
    /// Create a configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        ClinicError::InvalidConfig(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, ClinicError::Validation(_))
    }

    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClinicError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias using ClinicError
pub type ClinicResult<T> = Result<T, ClinicError>;

// ============================================================================
// Tests
// ============================================================================
