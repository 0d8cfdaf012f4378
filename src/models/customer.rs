//! Modelo de Customer
//!
//! Este módulo contiene el struct Customer y sus variantes para CRUD operations.
//! Los documentos persistidos usan nombres de campo camelCase.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Cliente del taller, entidad raíz del grafo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Request para registrar un nuevo cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    pub document: Option<String>,
}
