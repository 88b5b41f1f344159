//! Clinic session
//!
//! The three record stores over one shared transport, plus the dispatch
//! from "save this form" / "delete this row" to the right store call.

use std::sync::Arc;

use clinica_core::{
    Cita, CitaDraft, CitaView, ClinicResult, Dentista, DentistaDraft, EntityKind, Paciente,
    PacienteDraft, RecordId,
};

use crate::association::{to_appointment_view, to_wire_payload};
use crate::error::ClientResult;
use crate::store::RecordStore;
use crate::transport::Transport;

/// Whether a form submission creates a record or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(RecordId),
}

/// Every store the UI works with
pub struct ClinicSession<T> {
    pub dentistas: RecordStore<Dentista, T>,
    pub pacientes: RecordStore<Paciente, T>,
    pub citas: RecordStore<Cita, T>,
}

impl<T> Clone for ClinicSession<T> {
    fn clone(&self) -> Self {
        Self {
            dentistas: self.dentistas.clone(),
            pacientes: self.pacientes.clone(),
            citas: self.citas.clone(),
        }
    }
}

impl<T: Transport> ClinicSession<T> {
    /// Create empty stores over a transport
    pub fn new(transport: T) -> Self {
        Self::with_transport(Arc::new(transport))
    }

    /// Create empty stores over an already shared transport
    pub fn with_transport(transport: Arc<T>) -> Self {
        Self {
            dentistas: RecordStore::new(Arc::clone(&transport)),
            pacientes: RecordStore::new(Arc::clone(&transport)),
            citas: RecordStore::new(transport),
        }
    }

    /// Fetch all three collections.
    ///
    /// Each failure is logged by its store and leaves that list as it was.
    pub async fn load_all(&self) {
        let (dentistas, pacientes, citas) =
            tokio::join!(self.dentistas.list(), self.pacientes.list(), self.citas.list());
        tracing::info!(
            dentistas = dentistas.is_ok(),
            pacientes = pacientes.is_ok(),
            citas = citas.is_ok(),
            "Initial load finished"
        );
    }

    /// Resolve an appointment draft against the current lists
    pub fn resolve_cita(&self, draft: &CitaDraft) -> ClinicResult<CitaView> {
        to_appointment_view(draft, &self.pacientes.records(), &self.dentistas.records())
    }

    /// Create or update a dentist
    pub async fn save_dentista(&self, target: SaveTarget, draft: &DentistaDraft) -> ClientResult<()> {
        match target {
            SaveTarget::Create => self.dentistas.create(draft).await,
            SaveTarget::Update(id) => self.dentistas.update(id, draft).await,
        }
    }

    /// Create or update a patient
    pub async fn save_paciente(&self, target: SaveTarget, draft: &PacienteDraft) -> ClientResult<()> {
        match target {
            SaveTarget::Create => self.pacientes.create(draft).await,
            SaveTarget::Update(id) => self.pacientes.update(id, draft).await,
        }
    }

    /// Create or update an appointment, sent in its flat form
    pub async fn save_cita(&self, target: SaveTarget, view: &CitaView) -> ClientResult<()> {
        let payload = to_wire_payload(view);
        match target {
            SaveTarget::Create => self.citas.create(&payload).await,
            SaveTarget::Update(id) => self.citas.update(id, &payload).await,
        }
    }

    /// Delete a record of the given kind
    pub async fn delete(&self, kind: EntityKind, id: RecordId) -> ClientResult<()> {
        match kind {
            EntityKind::Dentista => self.dentistas.delete(id).await,
            EntityKind::Paciente => self.pacientes.delete(id).await,
            EntityKind::Cita => self.citas.delete(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::StubTransport;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn paciente() -> Value {
        json!({ "id": 3, "nombre": "Luis", "apellido": "Pérez", "telefono": "555-0101", "fechaNacimiento": "1990-04-12" })
    }

    fn dentista() -> Value {
        json!({ "id": 11, "nombre": "Ana", "apellido": "Ruiz", "especialidad": "Ortodoncia" })
    }

    fn cita(id: RecordId, fecha_hora: &str, motivo: &str) -> Value {
        json!({
            "id": id,
            "paciente": paciente(),
            "dentista": dentista(),
            "fechaHora": fecha_hora,
            "motivo": motivo
        })
    }

    async fn loaded() -> (Arc<StubTransport>, ClinicSession<StubTransport>) {
        let transport = Arc::new(
            StubTransport::new()
                .with_fixture("/api/pacientes", json!([paciente()]))
                .with_fixture("/api/dentistas", json!([dentista()]))
                .with_fixture("/api/citas", json!([cita(1, "2024-05-02T09:30:00", "Revisión")])),
        );
        let session = ClinicSession::with_transport(Arc::clone(&transport));
        session.load_all().await;
        (transport, session)
    }

    fn cita_draft(paciente_id: &str) -> CitaDraft {
        CitaDraft {
            paciente_id: paciente_id.to_string(),
            dentista_id: "11".to_string(),
            fecha_hora: "2024-06-10T16:00".to_string(),
            motivo: "Limpieza".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_all() {
        let (transport, session) = loaded().await;

        assert_eq!(session.dentistas.len(), 1);
        assert_eq!(session.pacientes.len(), 1);
        assert_eq!(session.citas.records()[0].paciente.nombre, "Luis");
        assert_eq!(transport.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_save_cita_sends_flat_payload() {
        let (transport, session) = loaded().await;
        transport.echo_writes(false);

        let view = session.resolve_cita(&cita_draft("3")).unwrap();
        session.save_cita(SaveTarget::Update(1), &view).await.unwrap();

        let put = transport
            .calls()
            .into_iter()
            .find(|c| c.method == "PUT")
            .unwrap();
        assert_eq!(put.path, "/api/citas/1");
        assert_eq!(
            put.body,
            Some(json!({
                "pacienteId": 3,
                "dentistaId": 11,
                "fechaHora": "2024-06-10T16:00",
                "motivo": "Limpieza"
            }))
        );
    }

    #[tokio::test]
    async fn test_create_cita_reloads_from_service() {
        let (transport, session) = loaded().await;
        transport.echo_writes(false);

        let view = session.resolve_cita(&cita_draft("3")).unwrap();

        // what the service lists once it has accepted the appointment
        transport.set_fixture(
            "/api/citas",
            json!([
                cita(1, "2024-05-02T09:30:00", "Revisión"),
                cita(2, "2024-06-10T16:00:00", "Limpieza")
            ]),
        );

        session.save_cita(SaveTarget::Create, &view).await.unwrap();

        let citas = session.citas.records();
        assert_eq!(citas.len(), 2);
        assert_eq!(citas[1].id, 2);
        assert_eq!(citas[1].motivo, "Limpieza");
        assert_eq!(citas[1].dentista.id, 11);
    }

    #[tokio::test]
    async fn test_unresolved_cita_makes_no_request() {
        let (transport, session) = loaded().await;
        let calls_before = transport.calls().len();

        let err = session.resolve_cita(&cita_draft("")).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get("pacienteId"),
            "Debe seleccionar un paciente"
        );
        assert_eq!(transport.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_save_targets_route_to_store_calls() {
        let (_, session) = loaded().await;

        let draft = DentistaDraft {
            nombre: "Ana".to_string(),
            apellido: "Ruiz".to_string(),
            especialidad: "Implantología".to_string(),
        };
        session.save_dentista(SaveTarget::Update(11), &draft).await.unwrap();
        assert_eq!(
            session.dentistas.find(11).map(|d| d.especialidad),
            Some("Implantología".to_string())
        );

        session.save_dentista(SaveTarget::Create, &draft).await.unwrap();
        assert_eq!(session.dentistas.len(), 2);
    }

    #[tokio::test]
    async fn test_save_paciente_failure_is_reported() {
        let (transport, session) = loaded().await;
        transport.fail_requests(true);

        let draft = PacienteDraft::from(&session.pacientes.records()[0]);
        assert!(session.save_paciente(SaveTarget::Update(3), &draft).await.is_err());
        assert_eq!(session.pacientes.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_routes_by_kind() {
        let (_, session) = loaded().await;

        session.delete(EntityKind::Paciente, 3).await.unwrap();
        assert!(session.pacientes.is_empty());
        assert_eq!(session.dentistas.len(), 1);
        assert_eq!(session.citas.len(), 1);
    }
}
