//! Application State Management for Clínica Dental
//!
//! The view coordinator tracks which tab is showing and, independently for
//! each record type, which record (if any) is being edited. It is held in a
//! Dioxus global signal; the record lists themselves live in the client's
//! stores and are re-read whenever [`STORE_REVISION`] changes.

use clinica_client::{ApiClient, ClinicSession, SaveTarget};
use clinica_core::{Cita, Dentista, EntityKind, Paciente, RecordId};
use dioxus::prelude::*;

/// Session type provided to every component through context
pub type AppSession = ClinicSession<ApiClient>;

// ============================================================================
// Tabs
// ============================================================================

/// Application tabs, one per record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dentistas,
    Pacientes,
    Citas,
}

impl Tab {
    /// All tabs, in display order
    pub const ALL: [Tab; 3] = [Tab::Dentistas, Tab::Pacientes, Tab::Citas];

    /// Record type managed on this tab
    pub fn entity(&self) -> EntityKind {
        match self {
            Tab::Dentistas => EntityKind::Dentista,
            Tab::Pacientes => EntityKind::Paciente,
            Tab::Citas => EntityKind::Cita,
        }
    }

    /// Tab button label
    pub fn display_name(&self) -> &'static str {
        self.entity().display_name()
    }

    /// Page heading
    pub fn heading(&self) -> String {
        format!("Gestión de {}", self.display_name())
    }
}

// ============================================================================
// View Coordinator
// ============================================================================

/// Active tab plus one edit slot per record type.
///
/// The slots are independent: switching tabs never clears them, so an edit
/// started on one tab is still pending when the user comes back to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCoordinator {
    /// Currently active tab
    pub active_tab: Tab,
    /// Dentist being edited
    pub editing_dentista: Option<Dentista>,
    /// Patient being edited
    pub editing_paciente: Option<Paciente>,
    /// Appointment being edited
    pub editing_cita: Option<Cita>,
}

impl ViewCoordinator {
    /// Initial state: dentists tab, nothing being edited
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs; edit slots are left alone
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn edit_dentista(&mut self, dentista: Dentista) {
        self.editing_dentista = Some(dentista);
    }

    pub fn edit_paciente(&mut self, paciente: Paciente) {
        self.editing_paciente = Some(paciente);
    }

    pub fn edit_cita(&mut self, cita: Cita) {
        self.editing_cita = Some(cita);
    }

    /// Id of the record being edited for a record type
    pub fn editing_id(&self, kind: EntityKind) -> Option<RecordId> {
        match kind {
            EntityKind::Dentista => self.editing_dentista.as_ref().map(|d| d.id),
            EntityKind::Paciente => self.editing_paciente.as_ref().map(|p| p.id),
            EntityKind::Cita => self.editing_cita.as_ref().map(|c| c.id),
        }
    }

    /// Whether the form of a record type is in edit mode
    pub fn is_editing(&self, kind: EntityKind) -> bool {
        self.editing_id(kind).is_some()
    }

    /// What submitting the form of a record type should do
    pub fn save_target(&self, kind: EntityKind) -> SaveTarget {
        match self.editing_id(kind) {
            Some(id) => SaveTarget::Update(id),
            None => SaveTarget::Create,
        }
    }

    /// Clear the edit slot of a record type
    pub fn cancel_edit(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Dentista => self.editing_dentista = None,
            EntityKind::Paciente => self.editing_paciente = None,
            EntityKind::Cita => self.editing_cita = None,
        }
    }

    /// Record the outcome of a save; only a success clears the slot
    pub fn finish_save(&mut self, kind: EntityKind, succeeded: bool) {
        if succeeded {
            self.cancel_edit(kind);
        }
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global view state signal
pub static APP_STATE: GlobalSignal<ViewCoordinator> = Signal::global(ViewCoordinator::new);

/// Bumped after every store operation so pages re-read the lists
pub static STORE_REVISION: GlobalSignal<u64> = Signal::global(|| 0);

/// Mark the stores as changed
pub fn bump_store_revision() {
    *STORE_REVISION.write() += 1;
}

// ============================================================================
// Tests
// ============================================================================
