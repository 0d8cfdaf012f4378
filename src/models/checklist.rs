//! Modelo de Checklist
//!
//! Inspección de recepción del vehículo. Independiente de las órdenes
//! de servicio: borrar un vehículo no borra sus checklists.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Resultado de un punto de inspección
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItemStatus {
    Ok,
    Issue,
    NotApplicable,
}

/// Punto de inspección de la planilla
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItem {
    pub label: String,
    pub status: ChecklistItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Planilla de inspección completada en recepción
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    pub vehicle_id: String,
    pub date: String,
    pub km: String,
    pub items: Vec<ChecklistItem>,
    pub general_notes: String,
}

/// Request para registrar una planilla de inspección
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChecklistRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    #[validate(custom = "crate::utils::validation::validate_date_str")]
    pub date: String,

    #[serde(default)]
    pub km: String,

    #[serde(default)]
    pub items: Vec<ChecklistItem>,

    #[serde(default)]
    pub general_notes: String,
}

/// Planilla estándar de recepción, todos los puntos en `ok`
pub fn default_checklist_items() -> Vec<ChecklistItem> {
    [
        "Aceite de Motor",
        "Nivel de Refrigerante",
        "Pastillas de Freno",
        "Neumáticos y Presión",
        "Luces / Iluminación",
        "Suspensión",
        "Correa de Distribución",
    ]
    .into_iter()
    .map(|label| ChecklistItem {
        label: label.to_string(),
        status: ChecklistItemStatus::Ok,
        notes: None,
    })
    .collect()
}
