//! Paquete (`CreatePackages`)
//!
//! El paquete es el agregado más rico: remitente opcional (si falta se usa el
//! de la cuenta), destinatario obligatorio y una serie de objetos anidados
//! opcionales que solo se envían cuando existen.

use serde::Serialize;

use crate::enums::Product;
use crate::models::address::{Recipient, Sender};
use crate::models::address_for_service::AddressForService;
use crate::models::flag::Flag;
use crate::models::package_extras::{ExternalNumber, PackageService, PackageSet};
use crate::models::pallet_info::PalletInfo;
use crate::models::payment_info::PaymentInfo;
use crate::models::special_delivery::SpecialDelivery;
use crate::models::weighted_package_info::WeightedPackageInfo;
use crate::utils::errors::{validation_error, PplResult};
use crate::utils::validation::{check_max_length, check_required};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    package_number: String,
    product: Product,
    note: Option<String>,
    depo_code: Option<String>,
    sender: Option<Sender>,
    recipient: Recipient,
    special_delivery: Option<SpecialDelivery>,
    payment_info: Option<PaymentInfo>,
    external_numbers: Vec<ExternalNumber>,
    package_services: Vec<PackageService>,
    flags: Vec<Flag>,
    pallet_info: Option<PalletInfo>,
    weighted_package_info: Option<WeightedPackageInfo>,
    package_set: Option<PackageSet>,
    addresses_for_services: Vec<AddressForService>,
}

impl Package {
    pub fn new(
        package_number: impl Into<String>,
        product: Product,
        recipient: Recipient,
    ) -> PplResult<Self> {
        let package_number = package_number.into();
        check_required("package_number", &package_number, 20)?;

        Ok(Self {
            package_number,
            product,
            note: None,
            depo_code: None,
            sender: None,
            recipient,
            special_delivery: None,
            payment_info: None,
            external_numbers: Vec::new(),
            package_services: Vec::new(),
            flags: Vec::new(),
            pallet_info: None,
            weighted_package_info: None,
            package_set: None,
            addresses_for_services: Vec::new(),
        })
    }

    pub fn set_note(&mut self, note: Option<String>) -> PplResult<()> {
        check_max_length("note", note.as_deref(), 300)?;
        self.note = note;
        Ok(())
    }

    pub fn set_depo_code(&mut self, depo_code: Option<String>) -> PplResult<()> {
        check_max_length("depo_code", depo_code.as_deref(), 2)?;
        self.depo_code = depo_code;
        Ok(())
    }

    pub fn with_note(mut self, note: impl Into<String>) -> PplResult<Self> {
        self.set_note(Some(note.into()))?;
        Ok(self)
    }

    pub fn with_depo_code(mut self, depo_code: impl Into<String>) -> PplResult<Self> {
        self.set_depo_code(Some(depo_code.into()))?;
        Ok(self)
    }

    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn with_special_delivery(mut self, special_delivery: SpecialDelivery) -> Self {
        self.special_delivery = Some(special_delivery);
        self
    }

    pub fn with_payment_info(mut self, payment_info: PaymentInfo) -> Self {
        self.payment_info = Some(payment_info);
        self
    }

    pub fn with_external_numbers(mut self, external_numbers: Vec<ExternalNumber>) -> Self {
        self.external_numbers = external_numbers;
        self
    }

    pub fn with_package_services(mut self, package_services: Vec<PackageService>) -> Self {
        self.package_services = package_services;
        self
    }

    pub fn with_flags(mut self, flags: Vec<Flag>) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_pallet_info(mut self, pallet_info: PalletInfo) -> Self {
        self.pallet_info = Some(pallet_info);
        self
    }

    pub fn with_weighted_package_info(mut self, info: WeightedPackageInfo) -> Self {
        self.weighted_package_info = Some(info);
        self
    }

    pub fn with_package_set(mut self, package_set: PackageSet) -> Self {
        self.package_set = Some(package_set);
        self
    }

    pub fn with_addresses_for_services(mut self, addresses: Vec<AddressForService>) -> Self {
        self.addresses_for_services = addresses;
        self
    }

    /// Dígito de control del número de paquete (pesos 3/1, módulo 10)
    pub fn package_number_checksum(&self) -> PplResult<u8> {
        let mut sum: u32 = 0;
        for (index, c) in self.package_number.chars().enumerate() {
            let Some(digit) = c.to_digit(10) else {
                return Err(validation_error(
                    "package_number",
                    "format",
                    "package_number must contain only digits to compute its checksum",
                ));
            };
            sum += if index % 2 == 0 { digit * 3 } else { digit };
        }
        Ok(((10 - sum % 10) % 10) as u8)
    }

    /// Un producto con dobírka necesita `PaymentInfo` con importe a cobrar
    pub fn check_cash_on_delivery(&self) -> PplResult<()> {
        let has_cod = self
            .payment_info
            .as_ref()
            .and_then(PaymentInfo::cod)
            .is_some();

        if self.product.is_cod() && !has_cod {
            return Err(validation_error(
                "payment_info",
                "required",
                format!(
                    "package {} uses a cash on delivery product and needs cash on delivery payment info",
                    self.package_number
                ),
            ));
        }
        Ok(())
    }

    pub fn package_number(&self) -> &str {
        &self.package_number
    }

    pub fn product(&self) -> Product {
        self.product
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn depo_code(&self) -> Option<&str> {
        self.depo_code.as_deref()
    }

    pub fn sender(&self) -> Option<&Sender> {
        self.sender.as_ref()
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn special_delivery(&self) -> Option<&SpecialDelivery> {
        self.special_delivery.as_ref()
    }

    pub fn payment_info(&self) -> Option<&PaymentInfo> {
        self.payment_info.as_ref()
    }

    pub fn external_numbers(&self) -> &[ExternalNumber] {
        &self.external_numbers
    }

    pub fn package_services(&self) -> &[PackageService] {
        &self.package_services
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn pallet_info(&self) -> Option<&PalletInfo> {
        self.pallet_info.as_ref()
    }

    pub fn weighted_package_info(&self) -> Option<&WeightedPackageInfo> {
        self.weighted_package_info.as_ref()
    }

    pub fn package_set(&self) -> Option<&PackageSet> {
        self.package_set.as_ref()
    }

    pub fn addresses_for_services(&self) -> &[AddressForService] {
        &self.addresses_for_services
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Country, Currency};
    use rust_decimal::Decimal;

    fn recipient() -> Recipient {
        Recipient::new("Jan Novák", "Krátká 3", "Brno", "60200", Country::CZ).unwrap()
    }

    #[test]
    fn test_checksum() {
        // 4*3 + 0 + 9*3 + 5 + 0 + 0 + 0 + 0 + 1*3 + 1 + 4*3 = 60
        let package = Package::new("40950000114", Product::PplParcelCzPrivate, recipient()).unwrap();
        assert_eq!(package.package_number_checksum().unwrap(), 0);

        let package = Package::new("12345", Product::PplParcelCzPrivate, recipient()).unwrap();
        // 3 + 2 + 9 + 4 + 15 = 33
        assert_eq!(package.package_number_checksum().unwrap(), 7);

        let package = Package::new("12A45", Product::PplParcelCzPrivate, recipient()).unwrap();
        assert!(package.package_number_checksum().is_err());
    }

    #[test]
    fn test_cod_product_requires_cod_payment() {
        let package = Package::new("40950000114", Product::PplParcelCzPrivateCod, recipient()).unwrap();
        assert!(package.check_cash_on_delivery().unwrap_err().is_validation_of("payment_info"));

        let payment = PaymentInfo::cash_on_delivery(Currency::CZK, Decimal::new(1000, 0), "123").unwrap();
        let package = package.with_payment_info(payment);
        assert!(package.check_cash_on_delivery().is_ok());

        let plain = Package::new("40950000115", Product::PplParcelCzPrivate, recipient()).unwrap();
        assert!(plain.check_cash_on_delivery().is_ok());
    }

    #[test]
    fn test_depo_code_and_note_limits() {
        let package = Package::new("40950000114", Product::PplParcelCzBusiness, recipient()).unwrap();
        assert!(package.clone().with_depo_code("07").is_ok());
        assert!(package
            .clone()
            .with_depo_code("007")
            .unwrap_err()
            .is_validation_of("depo_code"));
        assert!(package.with_note("n".repeat(301)).is_err());
    }
}
