//! # Application Pages
//!
//! One page per tab. Each page pairs a form with a table of its records:
//! - **DentistasPage**: dentists
//! - **PacientesPage**: patients
//! - **CitasPage**: appointments, with patient and dentist selectors

pub mod citas;
pub mod dentistas;
pub mod pacientes;

pub use citas::CitasPage;
pub use dentistas::DentistasPage;
pub use pacientes::PacientesPage;

use dioxus::prelude::*;

use clinica_core::{EntityKind, RecordId};

use crate::state::{AppSession, bump_store_revision};

/// Delete a record in the background, then refresh the pages
pub(crate) fn delete_record(session: AppSession, kind: EntityKind, id: RecordId) {
    spawn(async move {
        if session.delete(kind, id).await.is_ok() {
            tracing::info!(entity = %kind, id, "Record deleted");
        }
        bump_store_revision();
    });
}
