#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use serde_json::{json, Value};

use ppl_myapi::cache::{ManualClock, MemoryTokenStore};
use ppl_myapi::clients::{SoapTransport, TransportError};
use ppl_myapi::{Credentials, PplClient};

/// Transporte falso: registra cada llamada y responde según la operación
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, Value>>,
    failures: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        let transport = Arc::new(Self::default());
        transport.respond("IsHealtly", json!({ "IsHealtlyResult": "Healthy" }));
        transport.respond("Login", json!({ "LoginResult": { "AuthToken": "token-1" } }));
        transport
    }

    pub fn respond(&self, operation: &str, response: Value) {
        self.responses.lock().insert(operation.to_string(), response);
    }

    pub fn fail(&self, operation: &str, message: &str) {
        self.failures
            .lock()
            .insert(operation.to_string(), message.to_string());
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<Value> {
        self.calls
            .lock()
            .iter()
            .filter(|(name, _)| name == operation)
            .map(|(_, request)| request.clone())
            .collect()
    }

    pub fn last_call_to(&self, operation: &str) -> Value {
        self.calls_to(operation)
            .pop()
            .unwrap_or_else(|| panic!("{operation} was never invoked"))
    }
}

#[async_trait]
impl SoapTransport for MockTransport {
    async fn invoke(&self, operation: &str, request: Value) -> Result<Value, TransportError> {
        self.calls.lock().push((operation.to_string(), request));

        if let Some(message) = self.failures.lock().get(operation) {
            return Err(TransportError::Fault {
                code: "s:Client".to_string(),
                message: message.clone(),
            });
        }
        Ok(self
            .responses
            .lock()
            .get(operation)
            .cloned()
            .unwrap_or_else(|| json!({})))
    }

    fn last_request(&self) -> Option<String> {
        self.calls.lock().last().map(|(_, request)| request.to_string())
    }

    fn last_request_headers(&self) -> Option<String> {
        None
    }

    fn last_response(&self) -> Option<String> {
        None
    }

    fn last_response_headers(&self) -> Option<String> {
        None
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("eshop", "secret", Some(2000123))
}

pub fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()))
}

/// Cliente conectado contra el transporte falso, con token en memoria
pub async fn client(transport: Arc<MockTransport>) -> PplClient {
    let clock = clock();
    let store = Arc::new(MemoryTokenStore::new(clock.clone()));
    PplClient::connect(transport, credentials(), store, clock)
        .await
        .expect("mock client connects")
}
