//! Appointment association
//!
//! The appointment form picks a patient and a dentist by id from the
//! in-memory lists. Before submission the selections are resolved into the
//! full records, and the resolved appointment is flattened back into the
//! id-only body the service expects.

use clinica_core::{
    CitaDraft, CitaPayload, CitaView, ClinicError, ClinicResult, Dentista, Paciente,
    ValidationReport, fields, messages,
};

/// Resolve the form's selectors against the current lists.
///
/// A selector that is empty or names an id no longer listed fails with the
/// same message as an empty selection.
pub fn to_appointment_view(
    draft: &CitaDraft,
    pacientes: &[Paciente],
    dentistas: &[Dentista],
) -> ClinicResult<CitaView> {
    let paciente = pacientes
        .iter()
        .find(|p| !draft.paciente_id.is_empty() && p.id.to_string() == draft.paciente_id);
    let dentista = dentistas
        .iter()
        .find(|d| !draft.dentista_id.is_empty() && d.id.to_string() == draft.dentista_id);

    match (paciente, dentista) {
        (Some(paciente), Some(dentista)) => Ok(CitaView {
            paciente: paciente.clone(),
            dentista: dentista.clone(),
            fecha_hora: draft.fecha_hora.clone(),
            motivo: draft.motivo.clone(),
        }),
        (paciente, dentista) => {
            let mut report = ValidationReport::new(&[fields::PACIENTE_ID, fields::DENTISTA_ID]);
            if paciente.is_none() {
                report.fail(fields::PACIENTE_ID, messages::SELECCIONE_PACIENTE);
            }
            if dentista.is_none() {
                report.fail(fields::DENTISTA_ID, messages::SELECCIONE_DENTISTA);
            }
            tracing::debug!(
                paciente_id = %draft.paciente_id,
                dentista_id = %draft.dentista_id,
                "Appointment references did not resolve"
            );
            Err(ClinicError::Validation(report.errors))
        }
    }
}

/// Flatten a resolved appointment into its wire body.
///
/// Ids come from the embedded records, never from selector text.
pub fn to_wire_payload(view: &CitaView) -> CitaPayload {
    CitaPayload {
        paciente_id: view.paciente.id,
        dentista_id: view.dentista.id,
        fecha_hora: view.fecha_hora.clone(),
        motivo: view.motivo.clone(),
    }
}
