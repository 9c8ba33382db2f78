//! Utilidades de validación
//!
//! Este módulo contiene las comprobaciones de restricciones que usan todas
//! las entidades: longitudes máximas, pertenencia a enums, rangos numéricos
//! y formato de email. Cada comprobación recibe el nombre del campo para que
//! el error resultante quede indexado por él.

use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;
use num_traits::Zero;
use regex::Regex;
use serde::Serialize;
use strum::IntoEnumIterator;
use validator::ValidationError;

use crate::utils::errors::{single_field, PplError, PplResult};

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("valid digits regex");
}

/// Validar longitud máxima (en caracteres, no en bytes)
pub fn check_max_length<'a>(
    field: &'static str,
    value: impl Into<Option<&'a str>>,
    max: usize,
) -> PplResult<()> {
    let Some(value) = value.into() else {
        return Ok(());
    };

    let len = value.chars().count();
    if len > max {
        let mut error = ValidationError::new("length");
        error.message = Some(format!("{field} is longer than {max} characters").into());
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(PplError::Validation(single_field(field, error)));
    }
    Ok(())
}

/// Validar que un string obligatorio no esté vacío y respete el máximo
pub fn check_required(field: &'static str, value: &str, max: usize) -> PplResult<()> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(format!("{field} cannot be empty").into());
        return Err(PplError::Validation(single_field(field, error)));
    }
    check_max_length(field, value, max)
}

/// Validar formato de email y su longitud máxima
pub fn check_email<'a>(
    field: &'static str,
    value: impl Into<Option<&'a str>>,
    max: usize,
) -> PplResult<()> {
    let Some(value) = value.into() else {
        return Ok(());
    };

    check_max_length(field, value, max)?;

    if !validator::validate_email(value) {
        let mut error = ValidationError::new("email");
        error.message = Some(format!("{field} has invalid value").into());
        error.add_param("value".into(), &value);
        return Err(PplError::Validation(single_field(field, error)));
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn check_positive<T>(field: &'static str, value: T) -> PplResult<()>
where
    T: PartialOrd + Display + Zero + Serialize,
{
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.message = Some(format!("{field} must be bigger than 0").into());
        error.add_param("value".into(), &value);
        return Err(PplError::Validation(single_field(field, error)));
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico (inclusivo)
pub fn check_range<T>(field: &'static str, value: T, min: T, max: T) -> PplResult<()>
where
    T: PartialOrd + Display + Serialize,
{
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.message = Some(format!("{field} must be between {min} and {max}").into());
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(PplError::Validation(single_field(field, error)));
    }
    Ok(())
}

/// Validar una cadena de solo dígitos con longitud entre `min` y `max`
pub fn check_digits<'a>(
    field: &'static str,
    value: impl Into<Option<&'a str>>,
    min: usize,
    max: usize,
) -> PplResult<()> {
    let Some(value) = value.into() else {
        return Ok(());
    };

    let len = value.chars().count();
    if !DIGITS.is_match(value) || len < min || len > max {
        let mut error = ValidationError::new("format");
        error.message = Some(format!("{field} must be {min}-{max} digits").into());
        error.add_param("value".into(), &value);
        return Err(PplError::Validation(single_field(field, error)));
    }
    Ok(())
}

/// Convertir un código a un enum cerrado, o fallar listando los permitidos
pub fn parse_code<E>(field: &'static str, value: &str) -> PplResult<E>
where
    E: FromStr + IntoEnumIterator + AsRef<str>,
{
    E::from_str(value).map_err(|_| enum_violation::<E, _>(field, value))
}

/// Construir el error de pertenencia a enum para `value`
pub fn enum_violation<E, V>(field: &'static str, value: V) -> PplError
where
    E: IntoEnumIterator + AsRef<str>,
    V: Display + Serialize,
{
    let allowed = E::iter()
        .map(|variant| variant.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut error = ValidationError::new("enum");
    error.message = Some(format!("{field} {value} is not supported, use one of {allowed}").into());
    error.add_param("value".into(), &value);
    error.add_param("allowed_values".into(), &allowed);
    PplError::Validation(single_field(field, error))
}
