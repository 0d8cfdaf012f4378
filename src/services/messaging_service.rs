//! Enlaces de mensajería para el cobro
//!
//! El núcleo solo construye el enlace `wa.me` con el texto prellenado;
//! abrirlo es responsabilidad de la capa de presentación.

use regex::Regex;
use rust_decimal::Decimal;

use crate::config::EnvironmentConfig;
use crate::models::{Customer, Vehicle};

/// Armado de mensajes y enlaces de WhatsApp
pub struct MessagingService {
    country_code: String,
    shop_name: String,
    non_digit: Regex,
}

impl MessagingService {
    pub fn new(country_code: String, shop_name: String) -> Self {
        let non_digit = Regex::new(r"\D").unwrap();

        Self {
            country_code,
            shop_name,
            non_digit,
        }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(config.country_code.clone(), config.shop_name.clone())
    }

    /// Deja solo los dígitos del teléfono tal como fue cargado
    pub fn normalize_phone(&self, raw: &str) -> String {
        self.non_digit.replace_all(raw, "").into_owned()
    }

    /// Enlace `wa.me` con código de país y texto prellenado
    pub fn whatsapp_link(&self, phone: &str, text: &str) -> String {
        format!(
            "https://wa.me/{}{}?text={}",
            self.country_code,
            self.normalize_phone(phone),
            urlencoding::encode(text)
        )
    }

    /// Texto de cobro con el detalle del vehículo y el total
    pub fn billing_message(
        &self,
        customer: &Customer,
        vehicle: Option<&Vehicle>,
        total: Decimal,
    ) -> String {
        let vehicle_desc = match vehicle {
            Some(vehicle) => format!("su vehículo {} ({})", vehicle.model, vehicle.plate),
            None => "su vehículo".to_string(),
        };

        format!(
            "Hola {}, le enviamos el detalle del servicio realizado en {}.\n\n\
             Total: $ {:.2}\n\n\
             Cualquier consulta estamos a disposición.\n{}",
            customer.name, vehicle_desc, total, self.shop_name
        )
    }

    /// Enlace de cobro listo para abrir
    pub fn billing_link(
        &self,
        customer: &Customer,
        vehicle: Option<&Vehicle>,
        total: Decimal,
    ) -> String {
        let message = self.billing_message(customer, vehicle, total);
        let link = self.whatsapp_link(&customer.phone, &message);
        log::info!("💬 Enlace de cobro generado para {}", customer.name);
        link
    }
}
