//! Record tables
//!
//! Every tab lists its records in a table with one column per field and a
//! trailing actions column.

use dioxus::prelude::*;

/// Table with a header row; rows are passed as children
#[component]
pub fn DataTable(headers: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        table {
            class: "data-table w-full text-sm",

            thead {
                tr {
                    for header in headers {
                        th { key: "{header}", class: "text-left px-3 py-2", "{header}" }
                    }
                    th { class: "text-left px-3 py-2", "Acciones" }
                }
            }

            tbody { {children} }
        }
    }
}

/// Edit and delete buttons for one row
#[component]
pub fn RowActions(on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        td {
            class: "row-actions px-3 py-2 flex gap-2",

            button {
                class: "btn btn-small btn-secondary",
                onclick: move |_| on_edit.call(()),
                "Editar"
            }

            button {
                class: "btn btn-small btn-danger",
                onclick: move |_| on_delete.call(()),
                "Eliminar"
            }
        }
    }
}

/// Placeholder row shown when a list is empty
#[component]
pub fn EmptyRow(columns: usize, message: String) -> Element {
    let span = columns + 1;

    rsx! {
        tr {
            td {
                class: "empty-row px-3 py-4 text-slate-400 text-center",
                colspan: "{span}",
                "{message}"
            }
        }
    }
}
