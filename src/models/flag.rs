use serde::Serialize;

use crate::utils::errors::PplResult;
use crate::utils::validation::check_required;

/// Flag de paquete o de dirección de servicio: código + valor booleano
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    code: String,
    value: bool,
}

impl Flag {
    pub fn new(code: impl Into<String>, value: bool) -> PplResult<Self> {
        let code = code.into();
        check_required("flag_code", &code, 10)?;
        Ok(Self { code, value })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn value(&self) -> bool {
        self.value
    }
}
