//! In-memory [`Transport`] used by the crate's tests.
//!
//! Serves JSON fixtures per collection path, assigns ids on create the way
//! a server would, records every call, and can be switched into a failing
//! mode.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use clinica_core::{RecordId, Resource};
use serde_json::{Value, json};

use crate::error::{ClientError, ClientResult};
use crate::transport::Transport;

/// One request seen by the stub
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

pub(crate) struct StubTransport {
    collections: Mutex<HashMap<&'static str, Vec<Value>>>,
    next_id: AtomicI64,
    failing: AtomicBool,
    echo_writes: AtomicBool,
    calls: Mutex<Vec<Call>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(100),
            failing: AtomicBool::new(false),
            echo_writes: AtomicBool::new(true),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replace the records served for a collection
    pub fn set_fixture(&self, path: &'static str, records: Value) {
        let records = match records {
            Value::Array(items) => items,
            other => vec![other],
        };
        self.collections.lock().unwrap().insert(path, records);
    }

    pub fn with_fixture(self, path: &'static str, records: Value) -> Self {
        self.set_fixture(path, records);
        self
    }

    /// Make every following request fail with a 500
    pub fn fail_requests(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Whether create/update bodies are written back into the fixtures.
    ///
    /// Appointment bodies are flat while listed appointments embed their
    /// references, so appointment tests turn this off and set fixtures
    /// themselves.
    pub fn echo_writes(&self, echo: bool) {
        self.echo_writes.store(echo, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, path: String, body: Option<Value>) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call { method, path, body });
        if self.failing.load(Ordering::SeqCst) {
            Err(ClientError::Status {
                status: 500,
                body: "stub failure".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn with_id(body: &Value, id: RecordId) -> Value {
        let mut record = body.clone();
        if let Value::Object(map) = &mut record {
            map.insert("id".to_string(), json!(id));
        }
        record
    }
}

impl Transport for StubTransport {
    async fn fetch_all<E: Resource>(&self) -> ClientResult<Vec<E>> {
        self.record("GET", E::collection_path().to_string(), None)?;

        let values = self
            .collections
            .lock()
            .unwrap()
            .get(E::collection_path())
            .cloned()
            .unwrap_or_default();

        values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<E>, _>>()
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn create<E: Resource>(&self, payload: &E::Payload) -> ClientResult<()> {
        let body = serde_json::to_value(payload).map_err(|e| ClientError::Parse(e.to_string()))?;
        self.record("POST", E::collection_path().to_string(), Some(body.clone()))?;

        if self.echo_writes.load(Ordering::SeqCst) {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            self.collections
                .lock()
                .unwrap()
                .entry(E::collection_path())
                .or_default()
                .push(Self::with_id(&body, id));
        }
        Ok(())
    }

    async fn update<E: Resource>(&self, id: RecordId, payload: &E::Payload) -> ClientResult<()> {
        let body = serde_json::to_value(payload).map_err(|e| ClientError::Parse(e.to_string()))?;
        self.record("PUT", E::record_path(id), Some(body.clone()))?;

        if self.echo_writes.load(Ordering::SeqCst) {
            let mut collections = self.collections.lock().unwrap();
            let records = collections.entry(E::collection_path()).or_default();
            match records.iter_mut().find(|r| r["id"] == json!(id)) {
                Some(record) => *record = Self::with_id(&body, id),
                None => {
                    return Err(ClientError::Status {
                        status: 404,
                        body: String::new(),
                    });
                }
            }
        }
        Ok(())
    }

    async fn delete<E: Resource>(&self, id: RecordId) -> ClientResult<()> {
        self.record("DELETE", E::record_path(id), None)?;

        self.collections
            .lock()
            .unwrap()
            .entry(E::collection_path())
            .or_default()
            .retain(|r| r["id"] != json!(id));
        Ok(())
    }
}
