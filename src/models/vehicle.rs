//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Cada vehículo pertenece a exactamente un cliente.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Vehículo registrado en el taller
///
/// El kilometraje se guarda como texto libre tal como lo anota
/// el mecánico; no se valida como numérico.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub customer_id: String,
    pub model: String,
    pub plate: String,
    pub km: String,
}

/// Request para registrar un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1))]
    pub customer_id: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(custom = "crate::utils::validation::validate_plate")]
    pub plate: String,

    #[serde(default)]
    pub km: String,
}
