//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de entorno del taller.

pub mod environment;

pub use environment::*;
