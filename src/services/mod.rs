//! Services module
//! 
//! Este módulo contiene la lógica de negocio y servicios de la aplicación.
//! Los servicios encapsulan operaciones complejas que pueden involucrar 
//! múltiples modelos o integraciones externas.

pub mod diagnosis_service;
pub mod messaging_service;
pub mod metrics_service;
pub mod session_service;
pub mod workshop_service;

pub use diagnosis_service::*;
pub use messaging_service::*;
pub use metrics_service::*;
pub use session_service::*;
pub use workshop_service::*;
