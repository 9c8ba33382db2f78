//! Configuración de variables de entorno
//!
//! Todas las variables tienen valor por defecto salvo las credenciales. Un
//! valor mal formado es un `PplError::Config`, nunca un panic.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TOKEN_LIFESPAN_MINUTES;
use crate::utils::errors::{PplError, PplResult};

pub const DEFAULT_ENDPOINT: &str = "https://myapi.ppl.cz/MyApi.svc";
pub const DEFAULT_NAMESPACE: &str = "http://myapi.ppl.cz/v1";
pub const DEFAULT_ACTION_PREFIX: &str = "http://myapi.ppl.cz/v1/IMyApi2/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuración del cliente PPL MyAPI
#[derive(Debug, Clone)]
pub struct PplConfig {
    pub endpoint: String,
    pub namespace: String,
    pub action_prefix: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub customer_id: Option<u64>,
    pub token_storage: PathBuf,
    pub token_lifespan_minutes: i64,
    pub request_timeout_secs: u64,
    pub trace: bool,
}

impl Default for PplConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            action_prefix: DEFAULT_ACTION_PREFIX.to_string(),
            username: None,
            password: None,
            customer_id: None,
            token_storage: env::temp_dir(),
            token_lifespan_minutes: DEFAULT_TOKEN_LIFESPAN_MINUTES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            trace: true,
        }
    }
}

impl PplConfig {
    /// Cargar desde las variables de entorno del proceso
    pub fn from_env() -> PplResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Cargar usando `lookup` como fuente de variables
    pub fn from_lookup<F>(lookup: F) -> PplResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Ok(Self {
            endpoint: text("PPL_MYAPI_URL").unwrap_or(defaults.endpoint),
            namespace: text("PPL_MYAPI_NAMESPACE").unwrap_or(defaults.namespace),
            action_prefix: text("PPL_MYAPI_ACTION_PREFIX").unwrap_or(defaults.action_prefix),
            username: text("PPL_USERNAME"),
            password: text("PPL_PASSWORD"),
            customer_id: text("PPL_CUSTOMER_ID")
                .map(|value| parse_var("PPL_CUSTOMER_ID", &value))
                .transpose()?,
            token_storage: text("PPL_TOKEN_STORAGE")
                .map(PathBuf::from)
                .unwrap_or(defaults.token_storage),
            token_lifespan_minutes: text("PPL_TOKEN_LIFESPAN_MINUTES")
                .map(|value| parse_positive("PPL_TOKEN_LIFESPAN_MINUTES", &value))
                .transpose()?
                .unwrap_or(defaults.token_lifespan_minutes),
            request_timeout_secs: text("PPL_REQUEST_TIMEOUT_SECS")
                .map(|value| parse_var("PPL_REQUEST_TIMEOUT_SECS", &value))
                .transpose()?
                .unwrap_or(defaults.request_timeout_secs),
            trace: text("PPL_TRACE")
                .map(|value| parse_bool("PPL_TRACE", &value))
                .transpose()?
                .unwrap_or(defaults.trace),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn token_lifespan(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token_lifespan_minutes)
    }

    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> PplResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PplError::Config(format!("{name} has invalid value '{value}'")))
}

fn parse_positive(name: &str, value: &str) -> PplResult<i64> {
    match parse_var::<i64>(name, value)? {
        minutes if minutes > 0 => Ok(minutes),
        _ => Err(PplError::Config(format!("{name} must be greater than zero, got '{value}'"))),
    }
}

fn parse_bool(name: &str, value: &str) -> PplResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PplError::Config(format!("{name} has invalid value '{value}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> PplResult<PplConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PplConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.token_lifespan_minutes, 30);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.trace);
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PPL_MYAPI_URL", "http://localhost:8080/MyApi.svc"),
            ("PPL_USERNAME", "eshop"),
            ("PPL_PASSWORD", "secret"),
            ("PPL_CUSTOMER_ID", "2000123"),
            ("PPL_TOKEN_LIFESPAN_MINUTES", "10"),
            ("PPL_TRACE", "false"),
        ])
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080/MyApi.svc");
        assert_eq!(config.customer_id, Some(2000123));
        assert_eq!(config.token_lifespan(), chrono::Duration::minutes(10));
        assert!(!config.trace);
        assert!(config.has_credentials());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("PPL_CUSTOMER_ID", "abc")]),
            Err(PplError::Config(_))
        ));
        assert!(matches!(load(&[("PPL_TRACE", "maybe")]), Err(PplError::Config(_))));
    }

    #[test]
    fn test_token_lifespan_must_be_positive() {
        for value in ["0", "-5"] {
            assert!(matches!(
                load(&[("PPL_TOKEN_LIFESPAN_MINUTES", value)]),
                Err(PplError::Config(_))
            ));
        }
        assert_eq!(
            load(&[("PPL_TOKEN_LIFESPAN_MINUTES", "1")]).unwrap().token_lifespan_minutes,
            1
        );
    }
}
