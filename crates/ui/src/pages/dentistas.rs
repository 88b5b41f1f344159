//! Dentists page

use dioxus::prelude::*;

use clinica_client::SaveTarget;
use clinica_core::{Dentista, DentistaDraft, EntityKind, fields};

use super::delete_record;
use crate::components::{DataTable, EmptyRow, FormActions, RowActions, TextField};
use crate::forms::FormState;
use crate::state::{APP_STATE, AppSession, STORE_REVISION, bump_store_revision};

const KIND: EntityKind = EntityKind::Dentista;

/// Dentist form and table
#[component]
pub fn DentistasPage() -> Element {
    let session = use_context::<AppSession>();
    let mut form = use_signal(FormState::<DentistaDraft>::new);
    let editing = use_memo(|| APP_STATE.read().editing_dentista.clone());

    // Mirror the edit slot into the form
    use_effect(move || match editing() {
        Some(dentista) => form.write().load(DentistaDraft::from(&dentista)),
        None => form.write().reset(),
    });

    let _revision = *STORE_REVISION.read();
    let dentistas = session.dentistas.records();
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
                let saved = session.save_dentista(target, &draft).await.is_ok();
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
                label: "Especialidad:",
                value: draft.especialidad,
                error: form.read().error(fields::ESPECIALIDAD),
                on_change: move |v: String| form.write().set(fields::ESPECIALIDAD, v),
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
            headers: vec!["ID", "Nombre", "Apellido", "Especialidad"],

            if dentistas.is_empty() {
                EmptyRow { columns: 4, message: "No hay dentistas registrados" }
            }
            for dentista in dentistas.iter() {
                DentistaRow { key: "{dentista.id}", dentista: dentista.clone() }
            }
        }
    }
}

#[component]
fn DentistaRow(dentista: Dentista) -> Element {
    let session = use_context::<AppSession>();
    let id = dentista.id;
    let selected = dentista.clone();

    rsx! {
        tr {
            td { class: "px-3 py-2", "{dentista.id}" }
            td { class: "px-3 py-2", "{dentista.nombre}" }
            td { class: "px-3 py-2", "{dentista.apellido}" }
            td { class: "px-3 py-2", "{dentista.especialidad}" }

            RowActions {
                on_edit: move |_| APP_STATE.write().edit_dentista(selected.clone()),
                on_delete: move |_| delete_record(session.clone(), KIND, id),
            }
        }
    }
}
