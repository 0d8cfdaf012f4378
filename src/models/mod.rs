//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del taller y los
//! requests validados de cada operación de alta o edición.

pub mod checklist;
pub mod customer;
pub mod inventory;
pub mod service_order;
pub mod staff;
pub mod vehicle;

pub use checklist::*;
pub use customer::*;
pub use inventory::*;
pub use service_order::*;
pub use staff::*;
pub use vehicle::*;
