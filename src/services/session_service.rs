//! Sesión local del operador
//!
//! Un solo par usuario/clave fijo y una marca durable en el medio.
//! No es una frontera de seguridad; mantiene el mismo contrato que
//! los datos ya guardados.

use std::sync::Arc;

use crate::store::StorageMedium;

/// Clave de la marca de sesión; guarda el string crudo `true`, no JSON
pub const SESSION_KEY: &str = "taller_auth";

const SESSION_ACTIVE: &str = "true";

/// Credencial provisional del dueño, comparada en texto plano
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "taller2024";

/// Manejo de la sesión sobre el medio de almacenamiento
pub struct SessionService {
    medium: Arc<dyn StorageMedium>,
}

impl SessionService {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Compara contra el par fijo y deja la marca durable si coincide
    pub fn login(&self, username: &str, password: &str) -> bool {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            self.medium.write(SESSION_KEY, SESSION_ACTIVE);
            log::info!("🔓 Sesión iniciada para {}", username);
            true
        } else {
            log::warn!("⚠️ Intento de inicio de sesión rechazado para {}", username);
            false
        }
    }

    /// La marca se lee por comparación directa de strings
    pub fn is_authenticated(&self) -> bool {
        self.medium.read(SESSION_KEY).as_deref() == Some(SESSION_ACTIVE)
    }

    pub fn logout(&self) {
        self.medium.remove(SESSION_KEY);
        log::info!("🔒 Sesión cerrada");
    }
}
