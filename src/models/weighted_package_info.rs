use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::errors::PplResult;
use crate::utils::validation::{check_positive, check_required};

/// Ruta asignada a un paquete pesado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    route_type: String,
    route_code: String,
}

impl Route {
    pub fn new(route_type: impl Into<String>, route_code: impl Into<String>) -> PplResult<Self> {
        let route_type = route_type.into();
        let route_code = route_code.into();

        check_required("route_type", &route_type, 10)?;
        check_required("route_code", &route_code, 10)?;

        Ok(Self {
            route_type,
            route_code,
        })
    }

    pub fn route_type(&self) -> &str {
        &self.route_type
    }

    pub fn route_code(&self) -> &str {
        &self.route_code
    }
}

/// Peso (kg) y rutas de un paquete pesado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedPackageInfo {
    weight: Decimal,
    routes: Vec<Route>,
}

impl WeightedPackageInfo {
    pub fn new(weight: Decimal, routes: Vec<Route>) -> PplResult<Self> {
        check_positive("weight", weight)?;
        Ok(Self { weight, routes })
    }

    pub fn weight(&self) -> Decimal {
        self.weight
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
