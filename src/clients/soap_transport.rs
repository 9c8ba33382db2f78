use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use super::envelope::{decode_envelope, encode_envelope};

/// Errores del transporte SOAP
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },

    #[error("XML error: {0}")]
    Xml(String),

    #[error("SOAP response without body")]
    MissingBody,
}

/// Colaborador RPC: invoca una operación por nombre con un documento JSON
#[async_trait]
pub trait SoapTransport: Send + Sync {
    async fn invoke(&self, operation: &str, request: Value) -> Result<Value, TransportError>;

    fn last_request(&self) -> Option<String>;

    fn last_request_headers(&self) -> Option<String>;

    fn last_response(&self) -> Option<String>;

    fn last_response_headers(&self) -> Option<String>;
}

/// Último intercambio capturado cuando la traza está activa
#[derive(Debug, Default, Clone)]
struct Exchange {
    request: Option<String>,
    request_headers: Option<String>,
    response: Option<String>,
    response_headers: Option<String>,
}

/// Transporte SOAP 1.1 sobre HTTP
pub struct HttpSoapTransport {
    client: Client,
    endpoint: String,
    namespace: String,
    action_prefix: String,
    trace: bool,
    last: Mutex<Exchange>,
}

impl HttpSoapTransport {
    pub fn new(
        endpoint: impl Into<String>,
        namespace: impl Into<String>,
        action_prefix: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            namespace: namespace.into(),
            action_prefix: action_prefix.into(),
            trace: true,
            last: Mutex::new(Exchange::default()),
        })
    }

    /// Activar o desactivar la captura del último intercambio
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn soap_action(&self, operation: &str) -> String {
        format!("\"{}{}\"", self.action_prefix, operation)
    }
}

fn format_headers(first_line: String, headers: &HeaderMap) -> String {
    let mut out = first_line;
    for (name, value) in headers {
        out.push_str("\r\n");
        out.push_str(name.as_str());
        out.push_str(": ");
        out.push_str(&String::from_utf8_lossy(value.as_bytes()));
    }
    out
}

#[async_trait]
impl SoapTransport for HttpSoapTransport {
    async fn invoke(&self, operation: &str, request: Value) -> Result<Value, TransportError> {
        let body = encode_envelope(&self.namespace, operation, &request)?;

        let http_request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", self.soap_action(operation))
            .body(body.clone())
            .build()?;

        if self.trace {
            let mut last = self.last.lock();
            *last = Exchange {
                request: Some(body),
                request_headers: Some(format_headers(
                    format!("{} {} HTTP/1.1", http_request.method(), http_request.url()),
                    http_request.headers(),
                )),
                response: None,
                response_headers: None,
            };
        }

        debug!("📡 SOAP {} -> {}", operation, self.endpoint);
        let response = self.client.execute(http_request).await?;
        let status = response.status();
        let response_headers = format_headers(format!("HTTP/1.1 {status}"), response.headers());
        let text = response.text().await?;

        if self.trace {
            let mut last = self.last.lock();
            last.response = Some(text.clone());
            last.response_headers = Some(response_headers);
        }

        if !status.is_success() {
            // SOAP 1.1 devuelve los faults con HTTP 500
            return match decode_envelope(&text) {
                Err(fault @ TransportError::Fault { .. }) => {
                    error!("❌ SOAP fault en {}: {}", operation, fault);
                    Err(fault)
                }
                _ => {
                    error!("❌ HTTP {} en {}", status, operation);
                    Err(TransportError::Status {
                        status: status.as_u16(),
                        body: text,
                    })
                }
            };
        }

        decode_envelope(&text)
    }

    fn last_request(&self) -> Option<String> {
        self.last.lock().request.clone()
    }

    fn last_request_headers(&self) -> Option<String> {
        self.last.lock().request_headers.clone()
    }

    fn last_response(&self) -> Option<String> {
        self.last.lock().response.clone()
    }

    fn last_response_headers(&self) -> Option<String> {
        self.last.lock().response_headers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soap_action_is_quoted() {
        let transport = HttpSoapTransport::new(
            "https://myapi.ppl.cz/MyApi.svc",
            "http://myapi.ppl.cz/v1",
            "http://myapi.ppl.cz/v1/IMyApi2/",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            transport.soap_action("Login"),
            "\"http://myapi.ppl.cz/v1/IMyApi2/Login\""
        );
        assert!(transport.last_request().is_none());
    }
}
