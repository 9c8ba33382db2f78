//! Direcciones postales de remitente y destinatario
//!
//! PPL define límites distintos para el remitente y el destinatario (por
//! ejemplo `Name` 250 vs 50, `Contact` 30 vs 300, `Email` 100 vs 50). Se
//! respetan tal cual, sin unificarlos.

use std::ops::Deref;

use serde::Serialize;

use crate::enums::Country;
use crate::utils::errors::PplResult;
use crate::utils::validation::{check_max_length, check_required};

/// Longitudes máximas de cada campo de una dirección
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressLimits {
    pub name: usize,
    pub name2: usize,
    pub contact: usize,
    pub street: usize,
    pub city: usize,
    pub zip_code: usize,
    pub phone: usize,
    pub email: usize,
}

pub const SENDER_LIMITS: AddressLimits = AddressLimits {
    name: 250,
    name2: 250,
    contact: 30,
    street: 30,
    city: 50,
    zip_code: 10,
    phone: 30,
    email: 100,
};

pub const RECIPIENT_LIMITS: AddressLimits = AddressLimits {
    name: 50,
    name2: 50,
    contact: 300,
    street: 50,
    city: 50,
    zip_code: 10,
    phone: 30,
    email: 50,
};

/// Dirección postal validada contra un juego de límites
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    name: String,
    name2: Option<String>,
    contact: Option<String>,
    street: String,
    city: String,
    zip_code: String,
    country: Country,
    phone: Option<String>,
    email: Option<String>,
}

impl Address {
    fn new(
        limits: &AddressLimits,
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        country: Country,
    ) -> PplResult<Self> {
        let address = Self {
            name: name.into(),
            name2: None,
            contact: None,
            street: street.into(),
            city: city.into(),
            zip_code: zip_code.into(),
            country,
            phone: None,
            email: None,
        };

        check_required("name", &address.name, limits.name)?;
        check_required("street", &address.street, limits.street)?;
        check_required("city", &address.city, limits.city)?;
        check_required("zip_code", &address.zip_code, limits.zip_code)?;

        Ok(address)
    }

    fn set_name2(&mut self, limits: &AddressLimits, name2: Option<String>) -> PplResult<()> {
        check_max_length("name2", name2.as_deref(), limits.name2)?;
        self.name2 = name2;
        Ok(())
    }

    fn set_contact(&mut self, limits: &AddressLimits, contact: Option<String>) -> PplResult<()> {
        check_max_length("contact", contact.as_deref(), limits.contact)?;
        self.contact = contact;
        Ok(())
    }

    fn set_phone(&mut self, limits: &AddressLimits, phone: Option<String>) -> PplResult<()> {
        check_max_length("phone", phone.as_deref(), limits.phone)?;
        self.phone = phone;
        Ok(())
    }

    fn set_email(&mut self, limits: &AddressLimits, email: Option<String>) -> PplResult<()> {
        check_max_length("email", email.as_deref(), limits.email)?;
        self.email = email;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name2(&self) -> Option<&str> {
        self.name2.as_deref()
    }

    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Remitente. Límites de `SENDER_LIMITS`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sender {
    address: Address,
}

/// Destinatario. Límites de `RECIPIENT_LIMITS`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipient {
    address: Address,
}

impl Sender {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        country: Country,
    ) -> PplResult<Self> {
        Ok(Self {
            address: Address::new(&SENDER_LIMITS, name, street, city, zip_code, country)?,
        })
    }

    pub fn with_name2(mut self, name2: impl Into<String>) -> PplResult<Self> {
        self.address.set_name2(&SENDER_LIMITS, Some(name2.into()))?;
        Ok(self)
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> PplResult<Self> {
        self.address.set_contact(&SENDER_LIMITS, Some(contact.into()))?;
        Ok(self)
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> PplResult<Self> {
        self.address.set_phone(&SENDER_LIMITS, Some(phone.into()))?;
        Ok(self)
    }

    pub fn with_email(mut self, email: impl Into<String>) -> PplResult<Self> {
        self.address.set_email(&SENDER_LIMITS, Some(email.into()))?;
        Ok(self)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl Recipient {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        country: Country,
    ) -> PplResult<Self> {
        Ok(Self {
            address: Address::new(&RECIPIENT_LIMITS, name, street, city, zip_code, country)?,
        })
    }

    pub fn with_name2(mut self, name2: impl Into<String>) -> PplResult<Self> {
        self.address.set_name2(&RECIPIENT_LIMITS, Some(name2.into()))?;
        Ok(self)
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> PplResult<Self> {
        self.address.set_contact(&RECIPIENT_LIMITS, Some(contact.into()))?;
        Ok(self)
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> PplResult<Self> {
        self.address.set_phone(&RECIPIENT_LIMITS, Some(phone.into()))?;
        Ok(self)
    }

    pub fn with_email(mut self, email: impl Into<String>) -> PplResult<Self> {
        self.address.set_email(&RECIPIENT_LIMITS, Some(email.into()))?;
        Ok(self)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl Deref for Sender {
    type Target = Address;

    fn deref(&self) -> &Address {
        &self.address
    }
}

impl Deref for Recipient {
    type Target = Address;

    fn deref(&self) -> &Address {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_and_recipient_limits_differ() {
        let long_name = "N".repeat(100);

        assert!(Sender::new(long_name.as_str(), "Ulice 1", "Praha", "11000", Country::CZ).is_ok());
        let error = Recipient::new(long_name.as_str(), "Ulice 1", "Praha", "11000", Country::CZ)
            .unwrap_err();
        assert!(error.is_validation_of("name"));
    }

    #[test]
    fn test_contact_limit_is_wider_for_recipient() {
        let contact = "C".repeat(31);

        let recipient = Recipient::new("Jan Novák", "Ulice 1", "Praha", "11000", Country::CZ)
            .unwrap()
            .with_contact(contact.as_str())
            .unwrap();
        assert_eq!(recipient.contact(), Some(contact.as_str()));

        let error = Sender::new("Eshop s.r.o.", "Ulice 1", "Praha", "11000", Country::CZ)
            .unwrap()
            .with_contact(contact.as_str())
            .unwrap_err();
        assert!(error.is_validation_of("contact"));
    }

    #[test]
    fn test_email_limit_is_wider_for_sender() {
        let email = format!("{}@example.cz", "e".repeat(50));

        assert!(Sender::new("Eshop", "Ulice 1", "Praha", "11000", Country::CZ)
            .unwrap()
            .with_email(email.as_str())
            .is_ok());
        assert!(Recipient::new("Jan", "Ulice 1", "Praha", "11000", Country::CZ)
            .unwrap()
            .with_email(email.as_str())
            .is_err());
    }

    #[test]
    fn test_required_fields() {
        let error = Sender::new("Eshop", "", "Praha", "11000", Country::CZ).unwrap_err();
        assert!(error.is_validation_of("street"));

        let error = Recipient::new("Jan", "Ulice 1", "Praha", "12345678901", Country::SK).unwrap_err();
        assert!(error.is_validation_of("zip_code"));
    }
}
