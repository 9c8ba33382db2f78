//! Piezas menores de un paquete: números externos, servicios y sets

use serde::Serialize;

use crate::utils::errors::PplResult;
use crate::utils::validation::{check_positive, check_range, check_required};

/// Número externo asociado al paquete (p. ej. referencia del e-shop)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalNumber {
    code: String,
    external_number: String,
}

impl ExternalNumber {
    pub fn new(code: impl Into<String>, external_number: impl Into<String>) -> PplResult<Self> {
        let code = code.into();
        let external_number = external_number.into();

        check_required("external_number_code", &code, 4)?;
        check_required("external_number", &external_number, 50)?;

        Ok(Self {
            code,
            external_number,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn external_number(&self) -> &str {
        &self.external_number
    }
}

/// Servicio adicional del paquete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageService {
    svc_code: String,
}

impl PackageService {
    pub fn new(svc_code: impl Into<String>) -> PplResult<Self> {
        let svc_code = svc_code.into();
        check_required("svc_code", &svc_code, 10)?;
        Ok(Self { svc_code })
    }

    pub fn svc_code(&self) -> &str {
        &self.svc_code
    }
}

/// Pertenencia a un envío multibulto: número maestro + posición/total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSet {
    master_package_number: String,
    package_position: u32,
    package_count: u32,
}

impl PackageSet {
    pub fn new(
        master_package_number: impl Into<String>,
        package_position: u32,
        package_count: u32,
    ) -> PplResult<Self> {
        let master_package_number = master_package_number.into();

        check_required("master_package_number", &master_package_number, 20)?;
        check_positive("package_count", package_count)?;
        check_range("package_position", package_position, 1, package_count)?;

        Ok(Self {
            master_package_number,
            package_position,
            package_count,
        })
    }

    pub fn master_package_number(&self) -> &str {
        &self.master_package_number
    }

    pub fn package_position(&self) -> u32 {
        self.package_position
    }

    pub fn package_count(&self) -> u32 {
        self.package_count
    }
}
