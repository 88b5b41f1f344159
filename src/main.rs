//! Clínica Dental
//!
//! Desktop administration for a dental clinic: dentists, patients and
//! appointments, kept in a remote REST service.
//!
//! Configuration comes from the environment:
//! - `CLINICA_API_URL`: base URL of the service (default `http://127.0.0.1:8080`)
//! - `RUST_LOG`: log filter (default `info`)

use clinica_client::{ApiClient, ClientConfig, ClinicSession};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .pretty()
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(api = %config.base_url, "Using clinic service");

    let session = ClinicSession::new(ApiClient::new(&config)?);

    // Launch the Dioxus desktop application
    clinica_ui::launch(session);
    Ok(())
}
