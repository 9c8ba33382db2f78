//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de restricciones y formatos de fecha del API.

pub mod errors;
pub mod formatting;
pub mod validation;

pub use errors::{PplError, PplResult};
