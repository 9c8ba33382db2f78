//! Cache del token de autenticación
//!
//! `TokenCache` decide si el token persistido sigue vigente y, si no, pide
//! uno nuevo con login. El almacenamiento se abstrae detrás de `TokenStore`.

pub mod token_cache;
pub mod token_store;

pub use token_cache::{CachedToken, Clock, ManualClock, SystemClock, TokenCache, DEFAULT_TOKEN_LIFESPAN_MINUTES};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
