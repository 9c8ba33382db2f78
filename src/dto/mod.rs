//! Registros de transferencia de PPL MyAPI
//!
//! Las peticiones se serializan a JSON con los nombres exactos del contrato
//! SOAP (PascalCase) y el transporte los convierte a XML. Las respuestas
//! hacen el camino inverso.

pub mod request_dto;
pub mod response_dto;

pub use request_dto::*;
pub use response_dto::*;
