//! Modelo de Staff
//!
//! Nómina del taller. Registro plano, sin relaciones con otras entidades.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Integrante del personal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Request para incorporar personal
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStaffRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub role: String,
}
