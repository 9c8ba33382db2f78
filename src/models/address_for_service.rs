use serde::Serialize;

use crate::models::address::Recipient;
use crate::models::flag::Flag;
use crate::utils::errors::PplResult;
use crate::utils::validation::check_required;

/// Dirección adicional para un servicio del paquete (p. ej. devolución)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressForService {
    service_address_type: String,
    address: Recipient,
    flags: Vec<Flag>,
}

impl AddressForService {
    pub fn new(service_address_type: impl Into<String>, address: Recipient) -> PplResult<Self> {
        let service_address_type = service_address_type.into();
        check_required("service_address_type", &service_address_type, 10)?;
        Ok(Self {
            service_address_type,
            address,
            flags: Vec::new(),
        })
    }

    pub fn with_flags(mut self, flags: Vec<Flag>) -> Self {
        self.flags = flags;
        self
    }

    pub fn service_address_type(&self) -> &str {
        &self.service_address_type
    }

    pub fn address(&self) -> &Recipient {
        &self.address
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }
}
