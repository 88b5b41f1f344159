//! Required-field validation for the clinic forms
//!
//! Each form has a pure validation function that takes the current draft
//! (every value as text) and returns a [`ValidationReport`]: one message per
//! form field, empty when that field is fine, plus an overall verdict.

use std::fmt;

use crate::error::{ClinicError, ClinicResult};
use crate::types::{CitaDraft, DentistaDraft, PacienteDraft};

// ============================================================================
// Field names and messages
// ============================================================================

/// Form field names, matching the wire names of the remote service
pub mod fields {
    pub const NOMBRE: &str = "nombre";
    pub const APELLIDO: &str = "apellido";
    pub const ESPECIALIDAD: &str = "especialidad";
    pub const TELEFONO: &str = "telefono";
    pub const FECHA_NACIMIENTO: &str = "fechaNacimiento";
    pub const PACIENTE_ID: &str = "pacienteId";
    pub const DENTISTA_ID: &str = "dentistaId";
    pub const FECHA_HORA: &str = "fechaHora";
    pub const MOTIVO: &str = "motivo";

    /// Dentist form fields, in display order
    pub const DENTISTA: [&str; 3] = [NOMBRE, APELLIDO, ESPECIALIDAD];

    /// Patient form fields, in display order
    pub const PACIENTE: [&str; 4] = [NOMBRE, APELLIDO, TELEFONO, FECHA_NACIMIENTO];

    /// Appointment form fields, in display order
    pub const CITA: [&str; 4] = [PACIENTE_ID, DENTISTA_ID, FECHA_HORA, MOTIVO];
}

/// User-facing validation messages
pub mod messages {
    pub const NOMBRE_REQUERIDO: &str = "El nombre es requerido";
    pub const APELLIDO_REQUERIDO: &str = "El apellido es requerido";
    pub const ESPECIALIDAD_REQUERIDA: &str = "La especialidad es requerida";
    pub const TELEFONO_REQUERIDO: &str = "El teléfono es requerido";
    pub const FECHA_NACIMIENTO_REQUERIDA: &str = "La fecha de nacimiento es requerida";
    pub const SELECCIONE_PACIENTE: &str = "Debe seleccionar un paciente";
    pub const SELECCIONE_DENTISTA: &str = "Debe seleccionar un dentista";
    pub const FECHA_HORA_REQUERIDA: &str = "Debe seleccionar fecha y hora";
    pub const MOTIVO_REQUERIDO: &str = "El motivo es requerido";
}

// ============================================================================
// FieldErrors
// ============================================================================

/// Per-field error messages for one form.
///
/// Every field of the form has an entry; an empty message means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    /// Create an error map for the given fields, all clear
    pub fn new(fields: &[&'static str]) -> Self {
        Self {
            entries: fields.iter().map(|f| (*f, String::new())).collect(),
        }
    }

    /// Message for a field ("" when clear or unknown)
    pub fn get(&self, field: &str) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
            .unwrap_or("")
    }

    /// Set the message for a field
    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, msg)) => *msg = message,
            None => self.entries.push((field, message)),
        }
    }

    /// Clear the message for a field
    pub fn clear(&mut self, field: &str) {
        if let Some((_, msg)) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            msg.clear();
        }
    }

    /// Clear every message
    pub fn clear_all(&mut self) {
        for (_, msg) in &mut self.entries {
            msg.clear();
        }
    }

    /// Whether a field currently has an error
    pub fn has_error(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    /// Whether no field has an error
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|(_, msg)| msg.is_empty())
    }

    /// Fields that currently have an error, with their messages
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(name, msg)| (*name, msg.as_str()))
    }

    /// Copy every non-empty message of `other` into this map
    pub fn merge(&mut self, other: &FieldErrors) {
        for (field, message) in other.iter() {
            self.set(field, message);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

// ============================================================================
// ValidationReport
// ============================================================================

/// Result of validating one form draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Per-field messages
    pub errors: FieldErrors,
    /// Whether the draft may be submitted
    pub valid: bool,
}

impl ValidationReport {
    /// Start a passing report for the given fields
    pub fn new(fields: &[&'static str]) -> Self {
        Self {
            errors: FieldErrors::new(fields),
            valid: true,
        }
    }

    /// Record a failing field
    pub fn fail(&mut self, field: &'static str, message: &str) {
        self.valid = false;
        self.errors.set(field, message);
    }

    /// Convert to ClinicResult (fails if any field failed)
    pub fn into_result(self) -> ClinicResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(ClinicError::Validation(self.errors))
        }
    }

    /// Fail `field` when `value` is empty after trimming
    fn require_text(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.fail(field, message);
        }
    }

    /// Fail `field` when `value` is unset; picker values are not trimmed
    fn require_value(&mut self, field: &'static str, value: &str, message: &str) {
        if value.is_empty() {
            self.fail(field, message);
        }
    }
}

// ============================================================================
// Per-form rules
// ============================================================================

/// Validate the dentist form
pub fn validate_dentista(draft: &DentistaDraft) -> ValidationReport {
    let mut report = ValidationReport::new(&fields::DENTISTA);
    report.require_text(fields::NOMBRE, &draft.nombre, messages::NOMBRE_REQUERIDO);
    report.require_text(fields::APELLIDO, &draft.apellido, messages::APELLIDO_REQUERIDO);
    report.require_text(
        fields::ESPECIALIDAD,
        &draft.especialidad,
        messages::ESPECIALIDAD_REQUERIDA,
    );
    report
}

/// Validate the patient form
pub fn validate_paciente(draft: &PacienteDraft) -> ValidationReport {
    let mut report = ValidationReport::new(&fields::PACIENTE);
    report.require_text(fields::NOMBRE, &draft.nombre, messages::NOMBRE_REQUERIDO);
    report.require_text(fields::APELLIDO, &draft.apellido, messages::APELLIDO_REQUERIDO);
    report.require_text(fields::TELEFONO, &draft.telefono, messages::TELEFONO_REQUERIDO);
    report.require_value(
        fields::FECHA_NACIMIENTO,
        &draft.fecha_nacimiento,
        messages::FECHA_NACIMIENTO_REQUERIDA,
    );
    report
}

/// Validate the appointment form.
///
/// Only checks that the selectors are set; whether they match a listed
/// record is decided when the appointment is resolved.
pub fn validate_cita(draft: &CitaDraft) -> ValidationReport {
    let mut report = ValidationReport::new(&fields::CITA);
    report.require_value(fields::PACIENTE_ID, &draft.paciente_id, messages::SELECCIONE_PACIENTE);
    report.require_value(fields::DENTISTA_ID, &draft.dentista_id, messages::SELECCIONE_DENTISTA);
    report.require_value(fields::FECHA_HORA, &draft.fecha_hora, messages::FECHA_HORA_REQUERIDA);
    report.require_text(fields::MOTIVO, &draft.motivo, messages::MOTIVO_REQUERIDO);
    report
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dentista_draft() -> DentistaDraft {
        DentistaDraft {
            nombre: "Ana".to_string(),
            apellido: "Ruiz".to_string(),
            especialidad: "Ortodoncia".to_string(),
        }
    }

    fn paciente_draft() -> PacienteDraft {
        PacienteDraft {
            nombre: "Luis".to_string(),
            apellido: "Pérez".to_string(),
            telefono: "555-0101".to_string(),
            fecha_nacimiento: "1990-04-12".to_string(),
        }
    }

    fn cita_draft() -> CitaDraft {
        CitaDraft {
            paciente_id: "3".to_string(),
            dentista_id: "11".to_string(),
            fecha_hora: "2024-05-02T09:30".to_string(),
            motivo: "Revisión".to_string(),
        }
    }

    #[test]
    fn test_complete_drafts_pass() {
        assert!(validate_dentista(&dentista_draft()).valid);
        assert!(validate_paciente(&paciente_draft()).valid);
        assert!(validate_cita(&cita_draft()).valid);
        assert!(validate_cita(&cita_draft()).errors.is_clean());
    }

    #[test]
    fn test_dentista_blank_field_sets_only_that_error() {
        let mut draft = dentista_draft();
        draft.especialidad = "   ".to_string();

        let report = validate_dentista(&draft);
        assert!(!report.valid);
        assert_eq!(report.errors.get(fields::ESPECIALIDAD), messages::ESPECIALIDAD_REQUERIDA);
        assert_eq!(report.errors.get(fields::NOMBRE), "");
        assert_eq!(report.errors.get(fields::APELLIDO), "");
        assert_eq!(report.errors.iter().count(), 1);
    }

    #[test]
    fn test_dentista_all_empty() {
        let report = validate_dentista(&DentistaDraft::default());
        let failed: Vec<&str> = report.errors.iter().map(|(f, _)| f).collect();
        assert_eq!(failed, vec![fields::NOMBRE, fields::APELLIDO, fields::ESPECIALIDAD]);
    }

    #[test]
    fn test_paciente_rules() {
        let mut draft = paciente_draft();
        draft.telefono = "\t".to_string();
        draft.fecha_nacimiento = String::new();

        let report = validate_paciente(&draft);
        assert!(!report.valid);
        assert_eq!(report.errors.get(fields::TELEFONO), messages::TELEFONO_REQUERIDO);
        assert_eq!(
            report.errors.get(fields::FECHA_NACIMIENTO),
            messages::FECHA_NACIMIENTO_REQUERIDA
        );
        assert!(!report.errors.has_error(fields::NOMBRE));
    }

    #[test]
    fn test_paciente_fecha_is_not_trimmed() {
        let mut draft = paciente_draft();
        draft.fecha_nacimiento = " ".to_string();
        assert!(validate_paciente(&draft).valid);
    }

    #[test]
    fn test_cita_selectors_block_regardless_of_other_fields() {
        let mut draft = cita_draft();
        draft.paciente_id = String::new();

        let report = validate_cita(&draft);
        assert!(!report.valid);
        assert_eq!(report.errors.get(fields::PACIENTE_ID), "Debe seleccionar un paciente");
        assert_eq!(report.errors.iter().count(), 1);

        let mut draft = cita_draft();
        draft.dentista_id = String::new();
        let report = validate_cita(&draft);
        assert_eq!(report.errors.get(fields::DENTISTA_ID), "Debe seleccionar un dentista");
    }

    #[test]
    fn test_cita_motivo_trimmed_fecha_hora_not() {
        let mut draft = cita_draft();
        draft.motivo = "  ".to_string();
        draft.fecha_hora = String::new();

        let report = validate_cita(&draft);
        assert_eq!(report.errors.get(fields::MOTIVO), messages::MOTIVO_REQUERIDO);
        assert_eq!(report.errors.get(fields::FECHA_HORA), messages::FECHA_HORA_REQUERIDA);
    }

    #[test]
    fn test_report_into_result() {
        assert!(validate_dentista(&dentista_draft()).into_result().is_ok());

        let err = validate_dentista(&DentistaDraft::default())
            .into_result()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_field_errors_clear_and_merge() {
        let mut errors = FieldErrors::new(&fields::CITA);
        errors.set(fields::MOTIVO, messages::MOTIVO_REQUERIDO);
        assert!(!errors.is_clean());

        errors.clear(fields::MOTIVO);
        assert!(errors.is_clean());

        let mut other = FieldErrors::new(&fields::CITA);
        other.set(fields::PACIENTE_ID, messages::SELECCIONE_PACIENTE);
        errors.merge(&other);
        assert_eq!(errors.get(fields::PACIENTE_ID), messages::SELECCIONE_PACIENTE);
        assert_eq!(errors.to_string(), "pacienteId: Debe seleccionar un paciente");

        errors.clear_all();
        assert!(errors.is_clean());
    }
}
