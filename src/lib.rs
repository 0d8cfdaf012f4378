//! Núcleo de gestión para un taller mecánico de una sola sede
//!
//! Registro de clientes y vehículos, órdenes de servicio con sus
//! renglones, inventario con umbrales de reposición, nómina y métricas
//! de facturación. Todo el estado vive en memoria y se vuelca completo
//! a un medio local clave-valor después de cada mutación.
//!
//! La única integración de red es la sugerencia opcional de presupuesto
//! ([`services::SuggestionProvider`]); el resto del núcleo es síncrono
//! y de un solo escritor.

pub mod config;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;
