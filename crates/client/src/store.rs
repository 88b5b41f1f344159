//! # Record Store
//!
//! One in-memory collection per record type, kept in step with the remote
//! service. The remote service is the source of truth: every successful
//! write is followed by a full reload, and nothing is patched locally.
//!
//! Clones of a store share the same collection, so the whole process sees
//! a single list per record type. Failures are logged and leave the list as
//! it was; overlapping reloads resolve in completion order.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use clinica_core::{RecordId, Resource};

use crate::error::ClientResult;
use crate::transport::Transport;

/// In-memory, server-ordered collection of one record type
pub struct RecordStore<E, T> {
    transport: Arc<T>,
    records: Arc<RwLock<Vec<E>>>,
}

impl<E, T> Clone for RecordStore<E, T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            records: Arc::clone(&self.records),
        }
    }
}

impl<E: Resource, T: Transport> RecordStore<E, T> {
    /// Create an empty store over a shared transport
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    fn read(&self) -> RwLockReadGuard<'_, Vec<E>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current collection
    pub fn records(&self) -> Vec<E> {
        self.read().clone()
    }

    /// Look up a record by id
    pub fn find(&self, id: RecordId) -> Option<E> {
        self.read().iter().find(|r| r.id() == id).cloned()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // ========================================================================
    // Remote operations
    // ========================================================================

    /// Replace the collection with the service's current set
    pub async fn list(&self) -> ClientResult<()> {
        match self.transport.fetch_all::<E>().await {
            Ok(records) => {
                tracing::debug!(entity = %E::KIND, count = records.len(), "Fetched records");
                *self.records.write().unwrap_or_else(PoisonError::into_inner) = records;
                Ok(())
            }
            Err(e) => {
                tracing::error!(entity = %E::KIND, error = %e, "Error fetching records");
                Err(e)
            }
        }
    }

    /// Send a new record, then reload
    pub async fn create(&self, payload: &E::Payload) -> ClientResult<()> {
        if let Err(e) = self.transport.create::<E>(payload).await {
            tracing::error!(entity = %E::KIND, error = %e, "Error creating record");
            return Err(e);
        }
        self.list().await.ok();
        Ok(())
    }

    /// Replace the record `id`, then reload
    pub async fn update(&self, id: RecordId, payload: &E::Payload) -> ClientResult<()> {
        if let Err(e) = self.transport.update::<E>(id, payload).await {
            tracing::error!(entity = %E::KIND, id, error = %e, "Error updating record");
            return Err(e);
        }
        self.list().await.ok();
        Ok(())
    }

    /// Remove the record `id`, then reload
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        if let Err(e) = self.transport.delete::<E>(id).await {
            tracing::error!(entity = %E::KIND, id, error = %e, "Error deleting record");
            return Err(e);
        }
        self.list().await.ok();
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
