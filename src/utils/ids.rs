//! Generación de identificadores
//!
//! Los registros existentes usan tres esquemas distintos y todos
//! deben seguir produciéndose igual: token corto para entidades,
//! número legible con prefijo para órdenes y timestamp para checklists.

use chrono::Utc;
use rand::Rng;

/// Alfabeto del token corto (minúsculas + dígitos)
const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Longitud del token corto de entidades
pub const TOKEN_LENGTH: usize = 7;

/// Prefijo legible de órdenes de servicio
pub const ORDER_PREFIX: &str = "OS";

/// Prefijo de checklists
pub const CHECKLIST_PREFIX: &str = "CHK";

/// Generador de identificadores del taller
///
/// La unicidad es de mejor esfuerzo (token aleatorio), no criptográfica.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    /// Token corto para clientes, vehículos, inventario y personal
    pub fn entity_id(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..TOKEN_CHARSET.len());
                TOKEN_CHARSET[idx] as char
            })
            .collect()
    }

    /// Número legible de orden: OS- seguido de seis dígitos
    pub fn order_number(&self) -> String {
        let mut rng = rand::thread_rng();
        format!("{}-{}", ORDER_PREFIX, rng.gen_range(100_000..1_000_000))
    }

    /// Identificador de checklist derivado del reloj (CHK- + milisegundos unix)
    pub fn checklist_id(&self) -> String {
        format!("{}-{}", CHECKLIST_PREFIX, Utc::now().timestamp_millis())
    }
}
