//! Appointments page
//!
//! The form selects a patient and a dentist from the loaded lists. On
//! submission the selections are resolved into full records before anything
//! is sent; a selection that no longer resolves blocks the submission with
//! the selector's error.

use dioxus::prelude::*;

use clinica_client::SaveTarget;
use clinica_core::{Cita, CitaDraft, Dentista, EntityKind, Paciente, fields, format_fecha_hora};

use super::delete_record;
use crate::components::{
    DataTable, EmptyRow, FormActions, RowActions, SelectField, SelectOption, TextAreaField,
    TextField,
};
use crate::forms::FormState;
use crate::state::{APP_STATE, AppSession, STORE_REVISION, bump_store_revision};

const KIND: EntityKind = EntityKind::Cita;

fn paciente_options(pacientes: &[Paciente]) -> Vec<SelectOption> {
    pacientes
        .iter()
        .map(|p| SelectOption::new(p.id.to_string(), p.full_name()))
        .collect()
}

fn dentista_options(dentistas: &[Dentista]) -> Vec<SelectOption> {
    dentistas
        .iter()
        .map(|d| SelectOption::new(d.id.to_string(), d.selector_label()))
        .collect()
}

/// Appointment form and table
#[component]
pub fn CitasPage() -> Element {
    let session = use_context::<AppSession>();
    let mut form = use_signal(FormState::<CitaDraft>::new);
    let editing = use_memo(|| APP_STATE.read().editing_cita.clone());

    use_effect(move || match editing() {
        Some(cita) => form.write().load(CitaDraft::from(&cita)),
        None => form.write().reset(),
    });

    let _revision = *STORE_REVISION.read();
    let citas = session.citas.records();
    let pacientes = session.pacientes.records();
    let dentistas = session.dentistas.records();
    let is_editing = editing.read().is_some();

    let handle_submit = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let resolved = form
                .write()
                .submit_cita(&session.pacientes.records(), &session.dentistas.records());
            let Some(view) = resolved else {
                return;
            };
            let target = APP_STATE.read().save_target(KIND);
            if target == SaveTarget::Create {
                form.write().reset();
            }

            let session = session.clone();
            spawn(async move {
                let saved = session.save_cita(target, &view).await.is_ok();
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

            SelectField {
                label: "Paciente:",
                placeholder: "Seleccione un paciente",
                value: draft.paciente_id,
                options: paciente_options(&pacientes),
                error: form.read().error(fields::PACIENTE_ID),
                on_change: move |v: String| form.write().set(fields::PACIENTE_ID, v),
            }
            SelectField {
                label: "Dentista:",
                placeholder: "Seleccione un dentista",
                value: draft.dentista_id,
                options: dentista_options(&dentistas),
                error: form.read().error(fields::DENTISTA_ID),
                on_change: move |v: String| form.write().set(fields::DENTISTA_ID, v),
            }
            TextField {
                label: "Fecha y Hora:",
                input_type: "datetime-local",
                value: draft.fecha_hora,
                error: form.read().error(fields::FECHA_HORA),
                on_change: move |v: String| form.write().set(fields::FECHA_HORA, v),
            }
            TextAreaField {
                label: "Motivo:",
                value: draft.motivo,
                error: form.read().error(fields::MOTIVO),
                on_change: move |v: String| form.write().set(fields::MOTIVO, v),
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
            headers: vec!["ID", "Paciente", "Dentista", "Fecha y Hora", "Motivo"],

            if citas.is_empty() {
                EmptyRow { columns: 5, message: "No hay citas registradas" }
            }
            for cita in citas.iter() {
                CitaRow { key: "{cita.id}", cita: cita.clone() }
            }
        }
    }
}

#[component]
fn CitaRow(cita: Cita) -> Element {
    let session = use_context::<AppSession>();
    let id = cita.id;
    let selected = cita.clone();
    let paciente = cita.paciente.full_name();
    let dentista = cita.dentista.full_name();
    let fecha_hora = format_fecha_hora(&cita.fecha_hora);

    rsx! {
        tr {
            td { class: "px-3 py-2", "{cita.id}" }
            td { class: "px-3 py-2", "{paciente}" }
            td { class: "px-3 py-2", "{dentista}" }
            td { class: "px-3 py-2", "{fecha_hora}" }
            td { class: "px-3 py-2", "{cita.motivo}" }

            RowActions {
                on_edit: move |_| APP_STATE.write().edit_cita(selected.clone()),
                on_delete: move |_| delete_record(session.clone(), KIND, id),
            }
        }
    }
}
