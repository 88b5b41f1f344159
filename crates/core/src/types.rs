//! Record types for Clínica Dental
//!
//! This module defines the three records managed by the clinic (dentists,
//! patients and appointments), the text drafts their forms edit, and the
//! flat payload an appointment is sent as.
//!
//! Field names on the wire follow the remote service: Spanish, camelCase.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Server-assigned record identifier, unique within its own record type
pub type RecordId = i64;

/// The three kinds of record the clinic manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Dentista,
    Paciente,
    Cita,
}

impl EntityKind {
    /// All kinds, in tab order
    pub const ALL: [EntityKind; 3] = [EntityKind::Dentista, EntityKind::Paciente, EntityKind::Cita];

    /// Plural display name ("Dentistas")
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Dentista => "Dentistas",
            EntityKind::Paciente => "Pacientes",
            EntityKind::Cita => "Citas",
        }
    }

    /// Collection path on the remote service
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Dentista => "/api/dentistas",
            EntityKind::Paciente => "/api/pacientes",
            EntityKind::Cita => "/api/citas",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Records
// ============================================================================

/// A dentist as returned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dentista {
    pub id: RecordId,
    pub nombre: String,
    pub apellido: String,
    pub especialidad: String,
}

impl Dentista {
    /// "nombre apellido"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }

    /// Label used in the appointment form's dentist selector
    pub fn selector_label(&self) -> String {
        format!("{} {} - {}", self.nombre, self.apellido, self.especialidad)
    }
}

/// A patient as returned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paciente {
    pub id: RecordId,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    /// ISO date string, kept as received
    pub fecha_nacimiento: String,
}

impl Paciente {
    /// "nombre apellido"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// An appointment with its patient and dentist embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cita {
    pub id: RecordId,
    pub paciente: Paciente,
    pub dentista: Dentista,
    /// ISO-8601 local date-time string, kept as received
    pub fecha_hora: String,
    pub motivo: String,
}

// ============================================================================
// Drafts
// ============================================================================

/// Dentist form values; also the create/update body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DentistaDraft {
    pub nombre: String,
    pub apellido: String,
    pub especialidad: String,
}

impl From<&Dentista> for DentistaDraft {
    fn from(dentista: &Dentista) -> Self {
        Self {
            nombre: dentista.nombre.clone(),
            apellido: dentista.apellido.clone(),
            especialidad: dentista.especialidad.clone(),
        }
    }
}

/// Patient form values; also the create/update body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacienteDraft {
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub fecha_nacimiento: String,
}

impl From<&Paciente> for PacienteDraft {
    fn from(paciente: &Paciente) -> Self {
        Self {
            nombre: paciente.nombre.clone(),
            apellido: paciente.apellido.clone(),
            telefono: paciente.telefono.clone(),
            fecha_nacimiento: paciente.fecha_nacimiento.clone(),
        }
    }
}

/// Appointment form values, selectors included, all as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitaDraft {
    pub paciente_id: String,
    pub dentista_id: String,
    pub fecha_hora: String,
    pub motivo: String,
}

/// Length of a `datetime-local` picker value (`YYYY-MM-DDThh:mm`)
const PICKER_DATE_TIME_LEN: usize = 16;

impl From<&Cita> for CitaDraft {
    fn from(cita: &Cita) -> Self {
        Self {
            paciente_id: cita.paciente.id.to_string(),
            dentista_id: cita.dentista.id.to_string(),
            fecha_hora: cita.fecha_hora.chars().take(PICKER_DATE_TIME_LEN).collect(),
            motivo: cita.motivo.clone(),
        }
    }
}

/// An appointment without identifier, references resolved to full records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitaView {
    pub paciente: Paciente,
    pub dentista: Dentista,
    pub fecha_hora: String,
    pub motivo: String,
}

/// Flat appointment body sent on create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitaPayload {
    pub paciente_id: RecordId,
    pub dentista_id: RecordId,
    pub fecha_hora: String,
    pub motivo: String,
}

// ============================================================================
// Display helpers
// ============================================================================

/// Render an appointment date-time for the listing table.
///
/// Falls back to the raw text when it is not an ISO local date-time.
pub fn format_fecha_hora(raw: &str) -> String {
    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_cita() -> Cita {
        Cita {
            id: 7,
            paciente: Paciente {
                id: 3,
                nombre: "Luis".to_string(),
                apellido: "Pérez".to_string(),
                telefono: "555-0101".to_string(),
                fecha_nacimiento: "1990-04-12".to_string(),
            },
            dentista: Dentista {
                id: 11,
                nombre: "Ana".to_string(),
                apellido: "Ruiz".to_string(),
                especialidad: "Ortodoncia".to_string(),
            },
            fecha_hora: "2024-05-02T09:30:00".to_string(),
            motivo: "Revisión".to_string(),
        }
    }

    #[test]
    fn test_entity_kind_paths() {
        assert_eq!(EntityKind::Dentista.path(), "/api/dentistas");
        assert_eq!(EntityKind::Paciente.path(), "/api/pacientes");
        assert_eq!(EntityKind::Cita.path(), "/api/citas");
        assert_eq!(EntityKind::Cita.to_string(), "Citas");
    }

    #[test]
    fn test_paciente_wire_names() {
        let value = json!({
            "id": 3,
            "nombre": "Luis",
            "apellido": "Pérez",
            "telefono": "555-0101",
            "fechaNacimiento": "1990-04-12"
        });
        let paciente: Paciente = serde_json::from_value(value).unwrap();
        assert_eq!(paciente.fecha_nacimiento, "1990-04-12");
        assert_eq!(paciente.full_name(), "Luis Pérez");

        let draft = PacienteDraft::from(&paciente);
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            json!({
                "nombre": "Luis",
                "apellido": "Pérez",
                "telefono": "555-0101",
                "fechaNacimiento": "1990-04-12"
            })
        );
    }

    #[test]
    fn test_cita_embeds_references() {
        let value = serde_json::to_value(sample_cita()).unwrap();
        assert_eq!(value["paciente"]["id"], 3);
        assert_eq!(value["dentista"]["especialidad"], "Ortodoncia");
        assert_eq!(value["fechaHora"], "2024-05-02T09:30:00");
    }

    #[test]
    fn test_cita_payload_is_flat() {
        let payload = CitaPayload {
            paciente_id: 3,
            dentista_id: 11,
            fecha_hora: "2024-05-02T09:30".to_string(),
            motivo: "Limpieza".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "pacienteId": 3,
                "dentistaId": 11,
                "fechaHora": "2024-05-02T09:30",
                "motivo": "Limpieza"
            })
        );
    }

    #[test]
    fn test_cita_draft_from_record() {
        let draft = CitaDraft::from(&sample_cita());
        assert_eq!(draft.paciente_id, "3");
        assert_eq!(draft.dentista_id, "11");
        assert_eq!(draft.fecha_hora, "2024-05-02T09:30");
        assert_eq!(draft.motivo, "Revisión");
    }

    #[test]
    fn test_dentista_labels() {
        let dentista = sample_cita().dentista;
        assert_eq!(dentista.full_name(), "Ana Ruiz");
        assert_eq!(dentista.selector_label(), "Ana Ruiz - Ortodoncia");
        assert_eq!(
            DentistaDraft::from(&dentista),
            DentistaDraft {
                nombre: "Ana".to_string(),
                apellido: "Ruiz".to_string(),
                especialidad: "Ortodoncia".to_string(),
            }
        );
    }

    #[test]
    fn test_format_fecha_hora() {
        assert_eq!(format_fecha_hora("2024-05-02T09:30:00"), "02/05/2024 09:30");
        assert_eq!(format_fecha_hora("2024-05-02T09:30"), "02/05/2024 09:30");
        assert_eq!(format_fecha_hora("mañana"), "mañana");
    }
}
