use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use validator::ValidationError;

use crate::utils::errors::{single_field, PplError, PplResult};

/// Productos de PPL (tipo de envío) con su código numérico `PackProductType`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Product {
    /// Firemní balík
    PplParcelCzBusiness,
    PplParcelCzBusinessCod,
    /// Exportní balík
    ExportPackage,
    ExportPackageCod,
    /// Firemní paleta
    CompanyPalette,
    CompanyPaletteCod,
    /// Soukromý balík
    PplParcelCzPrivate,
    PplParcelCzPrivateCod,
    /// Soukromá paleta
    PrivatePalette,
    PrivatePaletteCod,
    /// Balík do ParcelShopu / ParcelBoxu
    PplParcelCzSmart,
    PplParcelCzSmartCod,
}

impl Product {
    pub fn code(self) -> u16 {
        match self {
            Product::PplParcelCzBusiness => 1,
            Product::PplParcelCzBusinessCod => 2,
            Product::ExportPackage => 3,
            Product::ExportPackageCod => 4,
            Product::CompanyPalette => 8,
            Product::CompanyPaletteCod => 9,
            Product::PplParcelCzPrivate => 13,
            Product::PplParcelCzPrivateCod => 14,
            Product::PrivatePalette => 19,
            Product::PrivatePaletteCod => 20,
            Product::PplParcelCzSmart => 36,
            Product::PplParcelCzSmartCod => 37,
        }
    }

    /// Productos con dobírka: exigen `PaymentInfo` con contra reembolso
    pub fn is_cod(self) -> bool {
        matches!(
            self,
            Product::PplParcelCzBusinessCod
                | Product::ExportPackageCod
                | Product::CompanyPaletteCod
                | Product::PplParcelCzPrivateCod
                | Product::PrivatePaletteCod
                | Product::PplParcelCzSmartCod
        )
    }

    /// Códigos numéricos válidos, en el orden de la tabla
    pub fn codes() -> Vec<u16> {
        Product::iter().map(Product::code).collect()
    }
}

impl TryFrom<u16> for Product {
    type Error = PplError;

    fn try_from(code: u16) -> PplResult<Self> {
        Product::iter()
            .find(|product| product.code() == code)
            .ok_or_else(|| product_violation(code))
    }
}

fn product_violation(code: u16) -> PplError {
    let allowed = Product::codes()
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut error = ValidationError::new("enum");
    error.message = Some(format!("Product Code {code} is not supported, use one of {allowed}").into());
    error.add_param("value".into(), &code);
    error.add_param("allowed_values".into(), &allowed);
    PplError::Validation(single_field("product", error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let mut codes = Product::codes();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Product::iter().count());
    }

    #[test]
    fn test_try_from_code() {
        assert_eq!(Product::try_from(1).unwrap(), Product::PplParcelCzBusiness);
        assert_eq!(Product::try_from(14).unwrap(), Product::PplParcelCzPrivateCod);

        let error = Product::try_from(99).unwrap_err();
        assert!(error.is_validation_of("product"));
        assert!(error.to_string().contains("99"));
    }

    #[test]
    fn test_cod_products() {
        assert!(Product::PplParcelCzPrivateCod.is_cod());
        assert!(!Product::PplParcelCzPrivate.is_cod());
        assert_eq!(Product::iter().filter(|p| p.is_cod()).count(), 6);
    }
}
