//! # Clínica Dental UI
//!
//! Dioxus Desktop UI for the dental clinic administration tool.
//!
//! ## Features
//!
//! - One tab each for dentists, patients and appointments
//! - Create and edit forms with inline field errors
//! - Record tables with edit and delete actions
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod forms;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use clinica_client;
pub use clinica_core;

pub use app::App;
pub use forms::{FormDraft, FormState};
pub use pages::{CitasPage, DentistasPage, PacientesPage};
pub use state::{APP_STATE, AppSession, STORE_REVISION, Tab, ViewCoordinator};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Clínica Dental";

/// Application display title
pub const TITLE: &str = "Clínica Dental - Administración";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the desktop application over a session.
///
/// The session is shared with every component through context.
///
/// ```rust,ignore
/// let session = ClinicSession::new(ApiClient::new(&config)?);
/// clinica_ui::launch(session);
/// ```
pub fn launch(session: AppSession) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 480.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(session)
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
