//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! usadas por los DTOs de entrada.

use chrono::NaiveDate;
use serde::Serialize;
use validator::ValidationError;

use crate::models::ServiceItem;

/// Validar formato de fecha (YYYY-MM-DD)
pub fn validate_date_str(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            let mut error = ValidationError::new("date");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"YYYY-MM-DD".to_string());
            error
        })
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_digit(10)).collect::<String>();
    if clean_phone.len() < 10 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de patente del vehículo
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    // Formato básico: ABC1234, AB-123-CD o similar
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar los renglones de una orden: precios no negativos
///
/// La descripción puede quedar vacía; los renglones se completan
/// durante la edición de la orden.
pub fn validate_service_items(items: &[ServiceItem]) -> Result<(), ValidationError> {
    for item in items {
        if validate_non_negative(item.price).is_err() {
            let mut error = ValidationError::new("service_items");
            error.add_param("description".into(), &item.description);
            error.add_param("price".into(), &item.price);
            return Err(error);
        }
    }
    Ok(())
}
