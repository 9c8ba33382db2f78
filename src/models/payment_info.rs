//! Información de pago: dobírka (COD), seguro y datos bancarios

use rust_decimal::Decimal;
use serde::Serialize;

use crate::enums::Currency;
use crate::utils::errors::PplResult;
use crate::utils::validation::{check_digits, check_max_length, check_positive};

/// Importe a cobrar contra reembolso
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashOnDelivery {
    currency: Currency,
    price: Decimal,
    variable_symbol: String,
}

impl CashOnDelivery {
    pub fn new(
        currency: Currency,
        price: Decimal,
        variable_symbol: impl Into<String>,
    ) -> PplResult<Self> {
        let variable_symbol = variable_symbol.into();

        check_positive("cash_on_delivery_price", price)?;
        check_digits("cash_on_delivery_variable_symbol", variable_symbol.as_str(), 1, 10)?;

        Ok(Self {
            currency,
            price,
            variable_symbol,
        })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn variable_symbol(&self) -> &str {
        &self.variable_symbol
    }
}

/// Valor asegurado del envío
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insurance {
    currency: Currency,
    price: Decimal,
}

impl Insurance {
    pub fn new(currency: Currency, price: Decimal) -> PplResult<Self> {
        check_positive("insurance_price", price)?;
        Ok(Self { currency, price })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentInfo {
    bank_account: Option<String>,
    bank_code: Option<String>,
    iban: Option<String>,
    swift: Option<String>,
    specific_symbol: Option<String>,
    cash_on_delivery: Option<CashOnDelivery>,
    insurance: Option<Insurance>,
}

impl PaymentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cash_on_delivery(
        currency: Currency,
        price: Decimal,
        variable_symbol: impl Into<String>,
    ) -> PplResult<Self> {
        Ok(Self::new().with_cash_on_delivery(CashOnDelivery::new(
            currency,
            price,
            variable_symbol,
        )?))
    }

    pub fn with_cash_on_delivery(mut self, cash_on_delivery: CashOnDelivery) -> Self {
        self.cash_on_delivery = Some(cash_on_delivery);
        self
    }

    pub fn with_insurance(mut self, insurance: Insurance) -> Self {
        self.insurance = Some(insurance);
        self
    }

    /// Cuenta bancaria checa (`prefijo-número`) y código de banco de 4 dígitos
    pub fn with_bank_account(
        mut self,
        bank_account: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> PplResult<Self> {
        let bank_account = bank_account.into();
        let bank_code = bank_code.into();

        check_max_length("bank_account", bank_account.as_str(), 16)?;
        check_digits("bank_code", bank_code.as_str(), 4, 4)?;

        self.bank_account = Some(bank_account);
        self.bank_code = Some(bank_code);
        Ok(self)
    }

    pub fn with_iban(mut self, iban: impl Into<String>, swift: impl Into<String>) -> PplResult<Self> {
        let iban = iban.into();
        let swift = swift.into();

        check_max_length("iban", iban.as_str(), 34)?;
        check_max_length("swift", swift.as_str(), 11)?;

        self.iban = Some(iban);
        self.swift = Some(swift);
        Ok(self)
    }

    pub fn with_specific_symbol(mut self, specific_symbol: impl Into<String>) -> PplResult<Self> {
        let specific_symbol = specific_symbol.into();
        check_digits("specific_symbol", specific_symbol.as_str(), 1, 10)?;
        self.specific_symbol = Some(specific_symbol);
        Ok(self)
    }

    pub fn bank_account(&self) -> Option<&str> {
        self.bank_account.as_deref()
    }

    pub fn bank_code(&self) -> Option<&str> {
        self.bank_code.as_deref()
    }

    pub fn iban(&self) -> Option<&str> {
        self.iban.as_deref()
    }

    pub fn swift(&self) -> Option<&str> {
        self.swift.as_deref()
    }

    pub fn specific_symbol(&self) -> Option<&str> {
        self.specific_symbol.as_deref()
    }

    pub fn cod(&self) -> Option<&CashOnDelivery> {
        self.cash_on_delivery.as_ref()
    }

    pub fn insurance(&self) -> Option<&Insurance> {
        self.insurance.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_on_delivery_validation() {
        let payment = PaymentInfo::cash_on_delivery(Currency::CZK, Decimal::new(49900, 2), "2024001")
            .unwrap();
        let cod = payment.cod().unwrap();
        assert_eq!(cod.currency(), Currency::CZK);
        assert_eq!(cod.price().to_string(), "499.00");

        assert!(PaymentInfo::cash_on_delivery(Currency::CZK, Decimal::ZERO, "1")
            .unwrap_err()
            .is_validation_of("cash_on_delivery_price"));
        assert!(PaymentInfo::cash_on_delivery(Currency::EUR, Decimal::ONE, "12345678901")
            .unwrap_err()
            .is_validation_of("cash_on_delivery_variable_symbol"));
    }

    #[test]
    fn test_bank_details() {
        let payment = PaymentInfo::new()
            .with_bank_account("19-2000145399", "0800")
            .unwrap()
            .with_specific_symbol("77")
            .unwrap();
        assert_eq!(payment.bank_code(), Some("0800"));
        assert_eq!(payment.specific_symbol(), Some("77"));

        assert!(PaymentInfo::new()
            .with_bank_account("2000145399", "80")
            .unwrap_err()
            .is_validation_of("bank_code"));
    }
}
