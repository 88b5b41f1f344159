//! # Clínica Core
//!
//! Entity model, validation rules and error handling for Clínica Dental.
//!
//! This crate provides the building blocks shared by the REST client and
//! the UI:
//!
//! - **Types**: `Dentista`, `Paciente`, `Cita`, their form drafts and the
//!   flat appointment payload
//! - **Validation**: required-field rules per form, with field-level messages
//! - **Traits**: `Resource` (record ↔ remote collection) and `Validatable`
//! - **Errors**: `ClinicError` and `ClinicResult`
//!

pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use error::{ClinicError, ClinicResult};
pub use traits::{Resource, Validatable};
pub use types::{
    Cita, CitaDraft, CitaPayload, CitaView, Dentista, DentistaDraft, EntityKind, Paciente,
    PacienteDraft, RecordId, format_fecha_hora,
};
pub use validation::{FieldErrors, ValidationReport, fields, messages};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
