//! Main Application Component for Clínica Dental
//!
//! Root layout: the tab bar, the active tab's heading and its page. The
//! three collections are fetched once when the app mounts.

use dioxus::prelude::*;

use crate::pages::{CitasPage, DentistasPage, PacientesPage};
use crate::state::{APP_STATE, AppSession, Tab, bump_store_revision};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let session = use_context::<AppSession>();

    // Initial load
    use_hook(move || {
        spawn(async move {
            session.load_all().await;
            bump_store_revision();
        });
    });

    let active = APP_STATE.read().active_tab;
    let heading = active.heading();

    rsx! {
        div {
            class: "app-container min-h-screen bg-slate-900 text-slate-100 p-6",

            TabBar { active }

            main {
                class: "tab-content mt-4",

                h2 { class: "text-2xl font-semibold mb-4", "{heading}" }

                match active {
                    Tab::Dentistas => rsx! { DentistasPage {} },
                    Tab::Pacientes => rsx! { PacientesPage {} },
                    Tab::Citas => rsx! { CitasPage {} },
                }
            }
        }
    }
}

// ============================================================================
// Tab Bar
// ============================================================================

#[component]
fn TabBar(active: Tab) -> Element {
    rsx! {
        nav {
            class: "tab-bar flex gap-2",

            for tab in Tab::ALL {
                button {
                    key: "{tab.display_name()}",
                    class: tab_class(tab == active),
                    onclick: move |_| APP_STATE.write().select_tab(tab),
                    "{tab.display_name()}"
                }
            }
        }
    }
}

fn tab_class(is_active: bool) -> &'static str {
    if is_active {
        "tab tab-active px-4 py-2 rounded-lg bg-indigo-600 text-white"
    } else {
        "tab px-4 py-2 rounded-lg bg-slate-700 text-slate-200 hover:bg-slate-600"
    }
}
