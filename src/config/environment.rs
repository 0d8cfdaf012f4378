//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un valor por defecto: el taller debe poder
//! arrancar sin ningún entorno configurado.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub data_dir: String,
    pub shop_name: String,
    pub country_code: String,
    pub diagnosis_url: Option<String>,
    pub diagnosis_token: Option<String>,
    pub diagnosis_timeout_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            data_dir: env::var("TALLER_DATA_DIR").unwrap_or_else(|_| "./taller_data".to_string()),
            shop_name: env::var("TALLER_SHOP_NAME")
                .unwrap_or_else(|_| "Taller Gestión".to_string()),
            country_code: env::var("TALLER_COUNTRY_CODE").unwrap_or_else(|_| "55".to_string()),
            diagnosis_url: env::var("TALLER_DIAGNOSIS_URL").ok(),
            diagnosis_token: env::var("TALLER_DIAGNOSIS_TOKEN").ok(),
            diagnosis_timeout_secs: env::var("TALLER_DIAGNOSIS_TIMEOUT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si hay un endpoint de diagnóstico configurado
    pub fn diagnosis_enabled(&self) -> bool {
        self.diagnosis_url.is_some()
    }
}
