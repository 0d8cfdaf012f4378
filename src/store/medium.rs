//! Medios de almacenamiento clave-valor
//!
//! Un medio guarda strings bajo claves planas. El taller escribe un
//! documento JSON por clave; si el medio falla, la sesión sigue en
//! memoria y el fallo queda registrado.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, error, warn};

use crate::utils::errors::AppResult;

/// Dispositivo clave-valor debajo del store
pub trait StorageMedium: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Medio en disco: un archivo `<clave>.json` por clave bajo un directorio
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if let Err(e) = fs::create_dir_all(&root) {
            warn!(
                "⚠️ No se pudo preparar el directorio de datos {}: {}",
                root.display(),
                e
            );
        }
        Self { root }
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn try_write(&self, path: &Path, value: &str) -> AppResult<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(path, value)?;
        Ok(())
    }
}

impl StorageMedium for DiskStorage {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.document_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => {
                debug!("📥 Lectura de {}", path.display());
                Some(raw)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("⚠️ Error leyendo {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        let path = self.document_path(key);
        match self.try_write(&path, value) {
            Ok(()) => debug!("💾 Escritura de {}", path.display()),
            Err(e) => error!("❌ Error escribiendo {}: {}", path.display(), e),
        }
    }

    fn remove(&self, key: &str) {
        let path = self.document_path(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != ErrorKind::NotFound {
                warn!("⚠️ Error eliminando {}: {}", path.display(), e);
            }
        }
    }
}

/// Medio en memoria para tests y sesiones sin disco
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl StorageMedium for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}
