//! Modelo de ServiceOrder
//!
//! Este módulo contiene la orden de servicio (factura de trabajo), sus
//! renglones y los requests de creación y edición parcial.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Referencia sintética de vehículo para órdenes sin vehículo registrado
pub const MANUAL_VEHICLE_ID: &str = "manual";

/// Tipo de renglón de una orden
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceItemKind {
    Service,
    Part,
}

/// Estado de la orden de servicio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Finished,
}

/// Estado del cobro, independiente del estado del trabajo
///
/// Una orden terminada y sin cobrar es válida; nada lo impide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

/// Renglón de una orden: servicio realizado o repuesto usado
///
/// Valor embebido en la orden, sin identidad propia. En los documentos
/// persistidos el tipo viaja bajo el nombre de campo `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceItem {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ServiceItemKind,
    pub price: Decimal,
}

/// Orden de servicio
///
/// `customer_id` es una copia del dueño del vehículo tomada al crear la
/// orden; si el vehículo cambia de dueño la orden conserva el histórico.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: String,
    pub vehicle_id: String,
    pub customer_id: String,
    pub date: String,
    pub km: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_description: Option<String>,
    pub items: Vec<ServiceItem>,
    pub notes: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
}

/// Request para crear una orden de servicio
///
/// `vehicle_id` admite el valor sintético `manual` cuando el trabajo
/// se factura sin vehículo registrado.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    #[validate(length(min = 1))]
    pub customer_id: String,

    #[validate(custom = "crate::utils::validation::validate_date_str")]
    pub date: String,

    #[serde(default)]
    pub km: String,

    pub problem_description: Option<String>,

    #[serde(default)]
    #[validate(custom = "crate::utils::validation::validate_service_items")]
    pub items: Vec<ServiceItem>,

    #[serde(default)]
    pub notes: String,

    pub status: OrderStatus,

    pub payment_status: PaymentStatus,

    pub labor_value: Option<Decimal>,

    pub discount: Option<Decimal>,
}

/// Request de edición parcial de una orden
///
/// Solo los campos presentes se aplican; los demás conservan su valor.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateOrderRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: Option<String>,

    #[validate(length(min = 1))]
    pub customer_id: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_date_str")]
    pub date: Option<String>,

    pub km: Option<String>,

    pub problem_description: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_service_items")]
    pub items: Option<Vec<ServiceItem>>,

    pub notes: Option<String>,

    pub status: Option<OrderStatus>,

    pub payment_status: Option<PaymentStatus>,

    pub labor_value: Option<Decimal>,

    pub discount: Option<Decimal>,
}

impl UpdateOrderRequest {
    /// Edición parcial solo de estado (pendiente → terminada)
    pub fn finish() -> Self {
        Self {
            status: Some(OrderStatus::Finished),
            ..Self::default()
        }
    }

    /// Aplica los campos presentes sobre la orden
    pub fn apply_to(self, order: &mut ServiceOrder) {
        if let Some(vehicle_id) = self.vehicle_id {
            order.vehicle_id = vehicle_id;
        }
        if let Some(customer_id) = self.customer_id {
            order.customer_id = customer_id;
        }
        if let Some(date) = self.date {
            order.date = date;
        }
        if let Some(km) = self.km {
            order.km = km;
        }
        if let Some(problem_description) = self.problem_description {
            order.problem_description = Some(problem_description);
        }
        if let Some(items) = self.items {
            order.items = items;
        }
        if let Some(notes) = self.notes {
            order.notes = notes;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(payment_status) = self.payment_status {
            order.payment_status = payment_status;
        }
        if let Some(labor_value) = self.labor_value {
            order.labor_value = Some(labor_value);
        }
        if let Some(discount) = self.discount {
            order.discount = Some(discount);
        }
    }
}
