use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::fs;
use tracing::debug;

use super::token_cache::Clock;

/// Almacén de blobs por clave donde se persiste el token
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Leer el blob de `key`, `None` si no existe
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Escribir (sobrescribir) el blob de `key`
    async fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()>;

    /// Fecha de última escritura de `key`, `None` si no existe
    async fn last_modified(&self, key: &str) -> io::Result<Option<DateTime<Utc>>>;
}

/// Un fichero por clave dentro de un directorio
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    directory: PathBuf,
}

impl FileTokenStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Nombre de fichero reversible: todo lo que no sea `[A-Za-z0-9_-]` se
    /// escribe como `%XX` por byte
    fn path_for(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                file_name.push(char::from(byte));
            } else {
                file_name.push_str(&format!("%{byte:02X}"));
            }
        }
        self.directory.join(format!("{file_name}.token"))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.directory).await?;
        let path = self.path_for(key);
        debug!("💾 Escribiendo token en {}", path.display());
        fs::write(path, bytes).await
    }

    async fn last_modified(&self, key: &str) -> io::Result<Option<DateTime<Utc>>> {
        match fs::metadata(self.path_for(key)).await {
            Ok(metadata) => Ok(Some(DateTime::<Utc>::from(metadata.modified()?))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Almacén en memoria; la fecha de escritura la da el reloj inyectado
#[derive(Clone)]
pub struct MemoryTokenStore {
    clock: Arc<dyn Clock>,
    entries: Arc<Mutex<HashMap<String, (Vec<u8>, DateTime<Utc>)>>>,
}

impl MemoryTokenStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).map(|(bytes, _)| bytes.clone()))
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        let now = self.clock.now();
        self.entries
            .lock()
            .insert(key.to_string(), (bytes.to_vec(), now));
        Ok(())
    }

    async fn last_modified(&self, key: &str) -> io::Result<Option<DateTime<Utc>>> {
        Ok(self.entries.lock().get(key).map(|(_, modified)| *modified))
    }
}
