//! Patients page

use dioxus::prelude::*;

use clinica_client::SaveTarget;
use clinica_core::{EntityKind, Paciente, PacienteDraft, fields};

use super::delete_record;
use crate::components::{DataTable, EmptyRow, FormActions, RowActions, TextField};
use crate::forms::FormState;
use crate::state::{APP_STATE, AppSession, STORE_REVISION, bump_store_revision};

const KIND: EntityKind = EntityKind::Paciente;

/// Patient form and table
#[component]
pub fn PacientesPage() -> Element {
    let session = use_context::<AppSession>();
    let mut form = use_signal(FormState::<PacienteDraft>::new);
    let editing = use_memo(|| APP_STATE.read().editing_paciente.clone());

    use_effect(move || match editing() {
        Some(paciente) => form.write().load(PacienteDraft::from(&paciente)),
        None => form.write().reset(),
    });

    let _revision = *STORE_REVISION.read();
    let pacientes = session.pacientes.records();
    let is_editing = editing.read().is_some();

    let handle_submit = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(draft) = form.write().submit() else {
                return;
            };
            let target = APP_STATE.read().save_target(KIND);
            if target == SaveTarget::Create {
                form.write().reset();
            }

            let session = session.clone();
            spawn(async move {
                let saved = session.save_paciente(target, &draft).await.is_ok();
                APP_STATE.write().finish_save(KIND, saved);
                bump_store_revision();
            });
        }
    };

    let draft = form.read().draft.clone();

    rsx! {
        form {
            class: "record-form space-y-4 mb-6",
            onsubmit: handle_submit,

            TextField {
                label: "Nombre:",
                value: draft.nombre,
                error: form.read().error(fields::NOMBRE),
                on_change: move |v: String| form.write().set(fields::NOMBRE, v),
            }
            TextField {
                label: "Apellido:",
                value: draft.apellido,
                error: form.read().error(fields::APELLIDO),
                on_change: move |v: String| form.write().set(fields::APELLIDO, v),
            }
            TextField {
                label: "Teléfono:",
                input_type: "tel",
                value: draft.telefono,
                error: form.read().error(fields::TELEFONO),
                on_change: move |v: String| form.write().set(fields::TELEFONO, v),
            }
            TextField {
                label: "Fecha de Nacimiento:",
                input_type: "date",
                value: draft.fecha_nacimiento,
                error: form.read().error(fields::FECHA_NACIMIENTO),
                on_change: move |v: String| form.write().set(fields::FECHA_NACIMIENTO, v),
            }

            FormActions {
                editing: is_editing,
                on_cancel: move |_| {
                    form.write().reset();
                    APP_STATE.write().cancel_edit(KIND);
                },
            }
        }

        DataTable {
            headers: vec!["ID", "Nombre", "Apellido", "Fecha Nacimiento", "Teléfono"],

            if pacientes.is_empty() {
                EmptyRow { columns: 5, message: "No hay pacientes registrados" }
            }
            for paciente in pacientes.iter() {
                PacienteRow { key: "{paciente.id}", paciente: paciente.clone() }
            }
        }
    }
}

#[component]
fn PacienteRow(paciente: Paciente) -> Element {
    let session = use_context::<AppSession>();
    let id = paciente.id;
    let selected = paciente.clone();

    rsx! {
        tr {
            td { class: "px-3 py-2", "{paciente.id}" }
            td { class: "px-3 py-2", "{paciente.nombre}" }
            td { class: "px-3 py-2", "{paciente.apellido}" }
            td { class: "px-3 py-2", "{paciente.fecha_nacimiento}" }
            td { class: "px-3 py-2", "{paciente.telefono}" }

            RowActions {
                on_edit: move |_| APP_STATE.write().edit_paciente(selected.clone()),
                on_delete: move |_| delete_record(session.clone(), KIND, id),
            }
        }
    }
}
