//! Core traits for Clínica Dental
//!
//! This module defines the behaviors shared by the clinic's records and
//! drafts: how a record maps onto the remote service, and how a draft is
//! validated before submission.

use serde::{Serialize, de::DeserializeOwned};

use crate::types::{
    Cita, CitaDraft, CitaPayload, Dentista, DentistaDraft, EntityKind, Paciente, PacienteDraft,
    RecordId,
};
use crate::validation::{self, ValidationReport};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for form drafts that can be validated
///
/// # Example
///
/// ```rust
/// use clinica_core::{DentistaDraft, Validatable};
///
/// let draft = DentistaDraft::default();
/// assert!(!draft.is_valid());
/// ```
pub trait Validatable {
    /// Run the form's required-field rules
    fn validate(&self) -> ValidationReport;

    /// Check if the draft is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().valid
    }
}

impl Validatable for DentistaDraft {
    fn validate(&self) -> ValidationReport {
        validation::validate_dentista(self)
    }
}

impl Validatable for PacienteDraft {
    fn validate(&self) -> ValidationReport {
        validation::validate_paciente(self)
    }
}

impl Validatable for CitaDraft {
    fn validate(&self) -> ValidationReport {
        validation::validate_cita(self)
    }
}

// ============================================================================
// Resource Trait
// ============================================================================

/// A record type served by one collection of the remote service
pub trait Resource: Clone + DeserializeOwned {
    /// Body sent on create and update (the record without its id)
    type Payload: Serialize;

    /// Which kind of record this is
    const KIND: EntityKind;

    /// Server-assigned identifier
    fn id(&self) -> RecordId;

    /// Collection path, e.g. `/api/dentistas`
    fn collection_path() -> &'static str {
        Self::KIND.path()
    }

    /// Path of a single record, e.g. `/api/dentistas/4`
    fn record_path(id: RecordId) -> String {
        format!("{}/{}", Self::collection_path(), id)
    }
}

impl Resource for Dentista {
    type Payload = DentistaDraft;
    const KIND: EntityKind = EntityKind::Dentista;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Paciente {
    type Payload = PacienteDraft;
    const KIND: EntityKind = EntityKind::Paciente;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Cita {
    type Payload = CitaPayload;
    const KIND: EntityKind = EntityKind::Cita;

    fn id(&self) -> RecordId {
        self.id
    }
}

// ============================================================================
// Tests
// ============================================================================
