use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::token_store::TokenStore;
use crate::utils::errors::PplResult;

pub const DEFAULT_TOKEN_LIFESPAN_MINUTES: i64 = 30;

/// Fuente de la hora actual
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Reloj manual para tests: solo avanza cuando se le pide
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Token persistido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

/// Cache del token de PPL MyAPI
///
/// Dos estados: token válido (`issued_at + lifespan > now`) o hay que
/// renovarlo con login. No hay exclusión mutua entre procesos: dos instancias
/// que renuevan a la vez hacen login las dos y la última escritura gana.
pub struct TokenCache {
    store: Arc<dyn TokenStore>,
    clock: Arc<dyn Clock>,
    key: String,
    lifespan: RwLock<Duration>,
}

impl TokenCache {
    pub fn new(store: Arc<dyn TokenStore>, clock: Arc<dyn Clock>, key: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            key: key.into(),
            lifespan: RwLock::new(Duration::minutes(DEFAULT_TOKEN_LIFESPAN_MINUTES)),
        }
    }

    /// Clave del token para una cuenta
    ///
    /// El segmento del cliente es siempre numérico o `none` y nunca contiene
    /// `_`, así que cuentas distintas no comparten clave.
    pub fn key_for(customer_id: Option<u64>, username: &str) -> String {
        match customer_id {
            Some(customer_id) => format!("ppl_myapi_{customer_id}_{username}"),
            None => format!("ppl_myapi_none_{username}"),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn lifespan(&self) -> Duration {
        *self.lifespan.read()
    }

    pub fn set_lifespan(&self, lifespan: Duration) {
        *self.lifespan.write() = lifespan;
    }

    /// Token cacheado si sigue vigente
    pub async fn cached(&self) -> PplResult<Option<CachedToken>> {
        let Some(bytes) = self.store.read(&self.key).await? else {
            debug!("❌ Token cache MISS para {}", self.key);
            return Ok(None);
        };

        let cached = match serde_json::from_slice::<CachedToken>(&bytes) {
            Ok(cached) => cached,
            Err(_) => {
                // Formato antiguo: solo el token, la edad sale del almacén
                let token = String::from_utf8_lossy(&bytes).trim().to_string();
                let Some(issued_at) = self.store.last_modified(&self.key).await? else {
                    return Ok(None);
                };
                if token.is_empty() {
                    return Ok(None);
                }
                CachedToken { token, issued_at }
            }
        };

        if cached.issued_at + self.lifespan() > self.clock.now() {
            debug!("🔑 Token cache HIT para {}", self.key);
            Ok(Some(cached))
        } else {
            debug!("⏰ Token cache EXPIRADO para {}", self.key);
            Ok(None)
        }
    }

    /// Persistir un token recién obtenido con la hora actual
    pub async fn save(&self, token: &str) -> PplResult<CachedToken> {
        let cached = CachedToken {
            token: token.to_string(),
            issued_at: self.clock.now(),
        };
        let bytes = serde_json::to_vec(&cached).map_err(std::io::Error::from)?;

        info!(
            "💾 Guardando token en cache para {} (vigencia: {} min)",
            self.key,
            self.lifespan().num_minutes()
        );
        self.store.write(&self.key, &bytes).await?;
        Ok(cached)
    }

    /// Token vigente o, si no lo hay, el que devuelva `login` (una sola vez)
    pub async fn get_or_login<F, Fut>(&self, login: F) -> PplResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PplResult<String>>,
    {
        match self.cached().await {
            Ok(Some(cached)) => return Ok(cached.token),
            Ok(None) => {}
            Err(e) => warn!("⚠️ No se pudo leer el token de cache, se hace login: {}", e),
        }

        let token = login().await?;
        if let Err(e) = self.save(&token).await {
            warn!("⚠️ No se pudo guardar el token en cache: {}", e);
        }
        Ok(token)
    }
}
