//! Modelo de InventoryItem
//!
//! Repuestos e insumos en stock. El contador de cantidad es un entero
//! con signo: si el llamador no acota la resta, puede quedar negativo.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Umbral de reposición usado cuando el alta no trae uno (o trae cero)
pub const DEFAULT_MIN_QUANTITY: i64 = 5;

/// Artículo de inventario
///
/// Stock bajo cuando `quantity <= min_quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub min_quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// Request para dar de alta un artículo de inventario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub quantity: i64,

    pub min_quantity: Option<i64>,

    pub price: Option<Decimal>,
}
