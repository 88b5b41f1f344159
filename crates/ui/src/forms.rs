//! Form state
//!
//! What the user has typed into each form, and the errors shown under its
//! fields. Editing a field clears that field's error straight away; the
//! full rules only run again on the next submission attempt.

use clinica_client::to_appointment_view;
use clinica_core::{
    CitaDraft, CitaView, Dentista, DentistaDraft, FieldErrors, Paciente, PacienteDraft,
    Validatable, fields,
};

// ============================================================================
// FormDraft Trait
// ============================================================================

/// A draft whose fields can be set by name from an input event
pub trait FormDraft: Validatable + Clone + Default {
    /// Field names, in display order
    const FIELDS: &'static [&'static str];

    /// Set one field; unknown names are ignored
    fn set_field(&mut self, field: &str, value: String);
}

impl FormDraft for DentistaDraft {
    const FIELDS: &'static [&'static str] = &fields::DENTISTA;

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            fields::NOMBRE => self.nombre = value,
            fields::APELLIDO => self.apellido = value,
            fields::ESPECIALIDAD => self.especialidad = value,
            _ => {}
        }
    }
}

impl FormDraft for PacienteDraft {
    const FIELDS: &'static [&'static str] = &fields::PACIENTE;

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            fields::NOMBRE => self.nombre = value,
            fields::APELLIDO => self.apellido = value,
            fields::TELEFONO => self.telefono = value,
            fields::FECHA_NACIMIENTO => self.fecha_nacimiento = value,
            _ => {}
        }
    }
}

impl FormDraft for CitaDraft {
    const FIELDS: &'static [&'static str] = &fields::CITA;

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            fields::PACIENTE_ID => self.paciente_id = value,
            fields::DENTISTA_ID => self.dentista_id = value,
            fields::FECHA_HORA => self.fecha_hora = value,
            fields::MOTIVO => self.motivo = value,
            _ => {}
        }
    }
}

// ============================================================================
// FormState
// ============================================================================

/// Draft plus field errors for one form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    pub errors: FieldErrors,
}

impl<D: FormDraft> Default for FormState<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            errors: FieldErrors::new(D::FIELDS),
        }
    }
}

impl<D: FormDraft> FormState<D> {
    /// Empty form, no errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the form from a record being edited
    pub fn load(&mut self, draft: D) {
        self.draft = draft;
        self.errors.clear_all();
    }

    /// Back to an empty form
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Change one field and clear its error
    pub fn set(&mut self, field: &str, value: String) {
        self.draft.set_field(field, value);
        self.errors.clear(field);
    }

    /// Error to show under a field, if any
    pub fn error(&self, field: &str) -> Option<String> {
        let message = self.errors.get(field);
        (!message.is_empty()).then(|| message.to_string())
    }

    /// Validate; on success hand back the draft to send
    pub fn submit(&mut self) -> Option<D> {
        let report = self.draft.validate();
        self.errors = report.errors;
        report.valid.then(|| self.draft.clone())
    }
}

impl FormState<CitaDraft> {
    /// Validate, then resolve the selectors against the current lists
    pub fn submit_cita(&mut self, pacientes: &[Paciente], dentistas: &[Dentista]) -> Option<CitaView> {
        let draft = self.submit()?;
        match to_appointment_view(&draft, pacientes, dentistas) {
            Ok(view) => Some(view),
            Err(e) => {
                if let Some(errors) = e.field_errors() {
                    self.errors.merge(errors);
                }
                None
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
