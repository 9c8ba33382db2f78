//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del cliente PPL MyAPI.
//! Las validaciones locales siempre fallan antes de tocar la red.

use std::borrow::Cow;

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::clients::TransportError;

/// Errores principales del cliente
#[derive(Error, Debug)]
pub enum PplError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("PPL MyAPI unavailable: {0}")]
    Offline(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Unexpected response for {operation}: {message}")]
    UnexpectedResponse {
        operation: &'static str,
        message: String,
    },

    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PplError {
    /// `true` si el error es una violación de validación sobre `field`
    pub fn is_validation_of(&self, field: &str) -> bool {
        match self {
            PplError::Validation(errors) => errors.field_errors().contains_key(field),
            _ => false,
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type PplResult<T> = Result<T, PplError>;

/// Función helper para crear errores de validación
pub fn validation_error(
    field: &'static str,
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> PplError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error.add_param("field".into(), &field);

    PplError::Validation(single_field(field, error))
}

/// Envolver un `ValidationError` suelto en `ValidationErrors` bajo `field`
pub fn single_field(field: &'static str, error: ValidationError) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

/// Función helper para errores de decodificación de respuestas
pub fn unexpected_response(operation: &'static str, message: impl ToString) -> PplError {
    PplError::UnexpectedResponse {
        operation,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_keyed_by_field() {
        let error = validation_error("note", "length", "too long");
        assert!(error.is_validation_of("note"));
        assert!(!error.is_validation_of("email"));
        assert!(error.to_string().starts_with("Validation error"));
    }

    #[test]
    fn test_non_validation_errors_have_no_field() {
        let error = PplError::Auth("bad credentials".to_string());
        assert!(!error.is_validation_of("username"));
        assert_eq!(error.to_string(), "Authentication error: bad credentials");
    }
}
