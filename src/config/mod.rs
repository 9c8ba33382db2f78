//! Configuración del cliente
//!
//! Variables de entorno de la cuenta PPL, del endpoint SOAP y del cache de
//! token.

pub mod environment;

pub use environment::*;
