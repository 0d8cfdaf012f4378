//! Sugerencia de presupuesto por texto generativo
//!
//! Integración opcional y de mejor esfuerzo: el flujo de órdenes nunca
//! depende de ella. Cualquier fallo de red o de formato se convierte en
//! una sugerencia vacía con mensaje para el operador.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::config::EnvironmentConfig;
use crate::models::{ServiceItem, ServiceItemKind};
use crate::utils::errors::{external_api_error, AppResult};

/// Mensaje mostrado cuando la sugerencia no se pudo generar
pub const SUGGESTION_FALLBACK_MESSAGE: &str =
    "No se pudieron generar sugerencias automáticas. Complete los renglones manualmente.";

// Los nombres de campo del payload vienen fijados por el proveedor.
#[derive(Debug, Default, Deserialize)]
struct DiagnosisWireLine {
    #[serde(default)]
    desc: String,
    #[serde(default)]
    preco: Decimal,
}

#[derive(Debug, Default, Deserialize)]
struct DiagnosisWirePayload {
    #[serde(default)]
    servicos: Vec<DiagnosisWireLine>,
    #[serde(default)]
    pecas: Vec<DiagnosisWireLine>,
    #[serde(default)]
    maodeobra: Decimal,
}

/// Resultado de una consulta de sugerencias
#[derive(Debug, Clone)]
pub struct SuggestionResponse {
    pub success: bool,
    pub services: Vec<ServiceItem>,
    pub parts: Vec<ServiceItem>,
    pub labor_addition: Decimal,
    pub message: Option<String>,
}

impl SuggestionResponse {
    /// Sugerencia vacía con el mensaje de respaldo
    pub fn empty_fallback() -> Self {
        Self {
            success: false,
            services: Vec::new(),
            parts: Vec::new(),
            labor_addition: Decimal::ZERO,
            message: Some(SUGGESTION_FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Vuelca la sugerencia sobre el borrador de una orden
    ///
    /// Una sugerencia fallida no toca nada.
    pub fn apply_to(&self, items: &mut Vec<ServiceItem>, labor_value: &mut Option<Decimal>) {
        if !self.success {
            return;
        }

        items.extend(self.services.iter().cloned());
        items.extend(self.parts.iter().cloned());

        if !self.labor_addition.is_zero() {
            *labor_value = Some(labor_value.unwrap_or_default() + self.labor_addition);
        }
    }
}

/// Proveedor intercambiable de sugerencias
///
/// La operación es infalible por contrato: el proveedor absorbe sus
/// propios fallos y devuelve el respaldo vacío.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, problem: &str) -> SuggestionResponse;
}

/// Recorta el objeto JSON de una respuesta que puede venir con
/// fences de código o prosa alrededor
fn extract_json(raw: &str) -> &str {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => raw,
    }
}

/// Interpreta el texto devuelto por el proveedor como sugerencia
///
/// Campos ausentes caen a sus defaults; un payload sin JSON es error.
pub fn parse_suggestion_payload(raw: &str) -> AppResult<SuggestionResponse> {
    let payload: DiagnosisWirePayload = serde_json::from_str(extract_json(raw))?;

    let to_item = |line: DiagnosisWireLine, kind: ServiceItemKind| ServiceItem {
        description: line.desc,
        kind,
        price: line.preco,
    };

    Ok(SuggestionResponse {
        success: true,
        services: payload
            .servicos
            .into_iter()
            .map(|line| to_item(line, ServiceItemKind::Service))
            .collect(),
        parts: payload
            .pecas
            .into_iter()
            .map(|line| to_item(line, ServiceItemKind::Part))
            .collect(),
        labor_addition: payload.maodeobra,
        message: None,
    })
}

/// Cliente HTTP del servicio de diagnóstico
pub struct DiagnosisClient {
    endpoint: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl DiagnosisClient {
    pub fn new(endpoint: String, token: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            token,
            client,
        }
    }

    /// `None` cuando no hay endpoint configurado
    pub fn from_config(config: &EnvironmentConfig) -> Option<Self> {
        config.diagnosis_url.as_ref().map(|endpoint| {
            Self::new(
                endpoint.clone(),
                config.diagnosis_token.clone(),
                config.diagnosis_timeout_secs,
            )
        })
    }

    fn build_prompt(problem: &str) -> String {
        format!(
            "Actúa como asistente de presupuestos de un taller mecánico. \
             Para el problema descripto respondé únicamente un objeto JSON con las claves \
             \"servicos\" (lista de {{\"desc\", \"preco\"}}), \"pecas\" (lista de \
             {{\"desc\", \"preco\"}}) y \"maodeobra\" (número). Problema: {}",
            problem
        )
    }

    async fn request_suggestion(&self, problem: &str) -> AppResult<SuggestionResponse> {
        log::info!("🤖 Consultando sugerencias de diagnóstico");

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "prompt": Self::build_prompt(problem) }));

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            log::error!("❌ El servicio de diagnóstico respondió {}", status);
            return Err(external_api_error(
                "diagnosis",
                &format!("unexpected status {}", status),
            ));
        }

        let body = response.text().await?;
        parse_suggestion_payload(&body)
    }
}

#[async_trait]
impl SuggestionProvider for DiagnosisClient {
    async fn suggest(&self, problem: &str) -> SuggestionResponse {
        match self.request_suggestion(problem).await {
            Ok(suggestion) => {
                log::info!(
                    "✅ Sugerencia recibida: {} servicios, {} repuestos",
                    suggestion.services.len(),
                    suggestion.parts.len()
                );
                suggestion
            }
            Err(e) => {
                log::warn!("⚠️ Sugerencia no disponible: {}", e);
                SuggestionResponse::empty_fallback()
            }
        }
    }
}
