//! Persistencia del estado del taller
//!
//! Cada colección se serializa completa bajo su propia clave en cada
//! mutación. La carga es defensiva: datos ausentes, vacíos, `"null"`,
//! `"undefined"` o corruptos caen al valor por defecto del llamador
//! sin interrumpir la sesión.

pub mod medium;

pub use medium::*;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, warn};

use crate::utils::errors::AppResult;

/// Claves estables de cada colección persistida
pub const CUSTOMERS_KEY: &str = "tg_customers";
pub const VEHICLES_KEY: &str = "tg_vehicles";
pub const ORDERS_KEY: &str = "tg_orders";
pub const INVENTORY_KEY: &str = "tg_inventory";
pub const STAFF_KEY: &str = "tg_staff";
pub const CHECKLISTS_KEY: &str = "tg_checklists";

/// Store de documentos JSON sobre un medio clave-valor
#[derive(Clone)]
pub struct PersistentStore {
    medium: Arc<dyn StorageMedium>,
}

impl PersistentStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Carga el valor guardado bajo la clave, o el valor por defecto
    ///
    /// Nunca falla hacia el llamador: cualquier documento ilegible se
    /// registra y se descarta.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.medium.read(key) else {
            debug!("❌ Sin documento para la clave: {}", key);
            return default;
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
            debug!("❌ Documento vacío para la clave: {}", key);
            return default;
        }

        match serde_json::from_str(trimmed) {
            Ok(value) => {
                debug!("📥 Documento cargado para la clave: {}", key);
                value
            }
            Err(e) => {
                warn!("⚠️ Documento inválido para la clave {}: {}", key, e);
                default
            }
        }
    }

    /// Escritura de mejor esfuerzo; el fallo se registra y no se propaga
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            error!("❌ Error guardando la clave {}: {}", key, e);
        }
    }

    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let serialized = serde_json::to_string(value)?;
        self.medium.write(key, &serialized);
        Ok(())
    }
}
