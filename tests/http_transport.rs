use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ppl_myapi::clients::{HttpSoapTransport, SoapTransport, TransportError};

const NAMESPACE: &str = "http://myapi.ppl.cz/v1";
const ACTION_PREFIX: &str = "http://myapi.ppl.cz/v1/IMyApi2/";

fn transport(server: &MockServer) -> HttpSoapTransport {
    HttpSoapTransport::new(
        format!("{}/MyApi.svc", server.uri()),
        NAMESPACE,
        ACTION_PREFIX,
        Duration::from_secs(5),
    )
    .unwrap()
}

fn envelope(body: &str) -> String {
    format!(
        r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>{body}</s:Body></s:Envelope>"#
    )
}

#[tokio::test]
async fn test_login_roundtrip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/MyApi.svc"))
        .and(header("SOAPAction", "\"http://myapi.ppl.cz/v1/IMyApi2/Login\""))
        .and(body_string_contains("<UserName>eshop</UserName>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(
            r#"<LoginResponse xmlns="http://myapi.ppl.cz/v1"><LoginResult><AuthToken>abc</AuthToken></LoginResult></LoginResponse>"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport(&server);
    let response = transport
        .invoke("Login", json!({ "Auth": { "CustId": 1, "UserName": "eshop", "Password": "secret" } }))
        .await
        .unwrap();

    assert_eq!(response, json!({ "LoginResult": { "AuthToken": "abc" } }));

    let request = transport.last_request().unwrap();
    assert!(request.contains(r#"<Login xmlns="http://myapi.ppl.cz/v1">"#));
    assert!(transport.last_request_headers().unwrap().contains("soapaction"));
    assert!(transport.last_response().unwrap().contains("<AuthToken>abc</AuthToken>"));
    assert!(transport.last_response_headers().unwrap().starts_with("HTTP/1.1 200"));
}

#[tokio::test]
async fn test_soap_fault_on_http_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(envelope(
            "<s:Fault><faultcode>s:Client</faultcode><faultstring>Token expired</faultstring></s:Fault>",
        )))
        .mount(&server)
        .await;

    let error = transport(&server)
        .invoke("GetPackages", json!({ "Auth": { "AuthToken": "old" } }))
        .await
        .unwrap_err();

    match error {
        TransportError::Fault { code, message } => {
            assert_eq!(code, "s:Client");
            assert_eq!(message, "Token expired");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_non_soap_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let error = transport(&server).invoke("IsHealtly", json!({})).await.unwrap_err();
    assert!(matches!(error, TransportError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_trace_disabled_keeps_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(
            r#"<IsHealtlyResponse xmlns="http://myapi.ppl.cz/v1"><IsHealtlyResult>Healthy</IsHealtlyResult></IsHealtlyResponse>"#,
        )))
        .mount(&server)
        .await;

    let transport = transport(&server).with_trace(false);
    let response = transport.invoke("IsHealtly", json!({})).await.unwrap();

    assert_eq!(response, json!({ "IsHealtlyResult": "Healthy" }));
    assert!(transport.last_request().is_none());
    assert!(transport.last_response().is_none());
}
