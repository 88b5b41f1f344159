//! # Clínica Client
//!
//! Remote side of Clínica Dental: the REST transport, the per-record-type
//! in-memory stores, and the appointment association logic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ClientConfig::from_env()?;
//! let session = ClinicSession::new(ApiClient::new(&config)?);
//! session.load_all().await;
//! let dentistas = session.dentistas.records();
//! ```

pub mod association;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod transport;

#[cfg(test)]
mod stub;

// Re-export commonly used items at crate root
pub use association::{to_appointment_view, to_wire_payload};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{ClinicSession, SaveTarget};
pub use store::RecordStore;
pub use transport::{ApiClient, Transport};

// Re-export the domain crate for convenience
pub use clinica_core;
