mod common;

use std::sync::Arc;

use chrono::Duration;
use serde_json::json;

use common::{clock, credentials, MockTransport};
use ppl_myapi::cache::{CachedToken, Clock, FileTokenStore, MemoryTokenStore, TokenCache, TokenStore};
use ppl_myapi::enums::Product;
use ppl_myapi::{Credentials, PplClient};

#[tokio::test]
async fn test_cached_token_within_lifespan_skips_login() {
    let dir = tempfile::tempdir().unwrap();
    let clock = clock();
    let store = Arc::new(FileTokenStore::new(dir.path()));

    let key = TokenCache::key_for(Some(2000123), "eshop");
    let cached = CachedToken {
        token: "persisted".to_string(),
        issued_at: clock.now(),
    };
    store
        .write(&key, &serde_json::to_vec(&cached).unwrap())
        .await
        .unwrap();

    let transport = MockTransport::new();
    let client = PplClient::without_health_check(transport.clone(), credentials(), store, clock.clone())
        .unwrap();

    clock.advance(Duration::minutes(10));
    client.get_number_range(Product::PplParcelCzPrivate, 1).await.unwrap();

    assert!(transport.calls_to("Login").is_empty());
    assert_eq!(
        transport.last_call_to("GetNumberRange")["Auth"]["AuthToken"],
        json!("persisted")
    );
}

#[tokio::test]
async fn test_expired_token_logs_in_once_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let clock = clock();
    let store = Arc::new(FileTokenStore::new(dir.path()));

    let transport = MockTransport::new();
    let client = PplClient::without_health_check(
        transport.clone(),
        credentials(),
        store.clone(),
        clock.clone(),
    )
    .unwrap();

    assert_eq!(client.get_token().await.unwrap(), "token-1");
    assert_eq!(transport.calls_to("Login").len(), 1);

    transport.respond("Login", json!({ "LoginResult": { "AuthToken": "token-2" } }));
    clock.advance(Duration::minutes(31));

    assert_eq!(client.get_token().await.unwrap(), "token-2");
    assert_eq!(client.get_token().await.unwrap(), "token-2");
    assert_eq!(transport.calls_to("Login").len(), 2);

    let key = TokenCache::key_for(Some(2000123), "eshop");
    let bytes = store.read(&key).await.unwrap().unwrap();
    let persisted: CachedToken = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(persisted.token, "token-2");
    assert_eq!(persisted.issued_at, clock.now());
}

#[tokio::test]
async fn test_shorter_lifespan_forces_refresh() {
    let dir = tempfile::tempdir().unwrap();
    let clock = clock();
    let transport = MockTransport::new();
    let client = PplClient::without_health_check(
        transport.clone(),
        credentials(),
        Arc::new(FileTokenStore::new(dir.path())),
        clock.clone(),
    )
    .unwrap();

    client.set_token_lifespan(Duration::minutes(5));
    client.get_token().await.unwrap();
    clock.advance(Duration::minutes(6));
    client.get_token().await.unwrap();

    assert_eq!(transport.calls_to("Login").len(), 2);
}

#[tokio::test]
async fn test_explicit_login_replaces_cached_token() {
    let dir = tempfile::tempdir().unwrap();
    let clock = clock();
    let transport = MockTransport::new();
    let client = PplClient::without_health_check(
        transport.clone(),
        credentials(),
        Arc::new(FileTokenStore::new(dir.path())),
        clock,
    )
    .unwrap();

    client.get_token().await.unwrap();
    transport.respond("Login", json!({ "LoginResult": { "AuthToken": "token-2" } }));

    assert_eq!(client.login().await.unwrap(), "token-2");
    assert_eq!(client.get_token().await.unwrap(), "token-2");
    assert_eq!(transport.calls_to("Login").len(), 2);
}

#[tokio::test]
async fn test_accounts_sharing_a_store_keep_their_own_tokens() {
    let clock = clock();
    let store = Arc::new(MemoryTokenStore::new(clock.clone()));

    let first_transport = MockTransport::new();
    let first = PplClient::without_health_check(
        first_transport.clone(),
        Credentials::new("x", "pa", Some(5)),
        store.clone(),
        clock.clone(),
    )
    .unwrap();

    let second_transport = MockTransport::new();
    second_transport.respond("Login", json!({ "LoginResult": { "AuthToken": "token-b" } }));
    let second = PplClient::without_health_check(
        second_transport.clone(),
        Credentials::new("5_x", "pb", None),
        store.clone(),
        clock,
    )
    .unwrap();

    assert_eq!(first.get_token().await.unwrap(), "token-1");
    assert_eq!(second.get_token().await.unwrap(), "token-b");
    assert_eq!(second_transport.calls_to("Login").len(), 1);
    assert_eq!(store.len(), 2);
}
