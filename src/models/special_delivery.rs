//! Entrega especial: ParcelShop de destino y ventanas de entrega/recogida
//!
//! A diferencia de la orden (fecha y hora combinadas), aquí PPL espera la
//! fecha (`%Y-%m-%d`) y las horas (`%H:%M:%S`) en campos separados.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::utils::errors::{validation_error, PplResult};
use crate::utils::validation::check_max_length;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecialDelivery {
    parcel_shop_code: Option<String>,
    delivery_date: Option<NaiveDate>,
    delivery_time_from: Option<NaiveTime>,
    delivery_time_to: Option<NaiveTime>,
    take_date: Option<NaiveDate>,
    take_time_from: Option<NaiveTime>,
    take_time_to: Option<NaiveTime>,
}

impl SpecialDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entrega en un ParcelShop concreto
    pub fn to_parcel_shop(code: impl Into<String>) -> PplResult<Self> {
        Self::new().with_parcel_shop_code(code)
    }

    pub fn with_parcel_shop_code(mut self, code: impl Into<String>) -> PplResult<Self> {
        let code = code.into();
        check_max_length("parcel_shop_code", code.as_str(), 50)?;
        self.parcel_shop_code = Some(code);
        Ok(self)
    }

    pub fn with_delivery(
        mut self,
        date: NaiveDate,
        time_from: Option<NaiveTime>,
        time_to: Option<NaiveTime>,
    ) -> PplResult<Self> {
        check_window("delivery_time_to", time_from, time_to)?;
        self.delivery_date = Some(date);
        self.delivery_time_from = time_from;
        self.delivery_time_to = time_to;
        Ok(self)
    }

    pub fn with_take(
        mut self,
        date: NaiveDate,
        time_from: Option<NaiveTime>,
        time_to: Option<NaiveTime>,
    ) -> PplResult<Self> {
        check_window("take_time_to", time_from, time_to)?;
        self.take_date = Some(date);
        self.take_time_from = time_from;
        self.take_time_to = time_to;
        Ok(self)
    }

    pub fn parcel_shop_code(&self) -> Option<&str> {
        self.parcel_shop_code.as_deref()
    }

    pub fn delivery_date(&self) -> Option<NaiveDate> {
        self.delivery_date
    }

    pub fn delivery_time_from(&self) -> Option<NaiveTime> {
        self.delivery_time_from
    }

    pub fn delivery_time_to(&self) -> Option<NaiveTime> {
        self.delivery_time_to
    }

    pub fn take_date(&self) -> Option<NaiveDate> {
        self.take_date
    }

    pub fn take_time_from(&self) -> Option<NaiveTime> {
        self.take_time_from
    }

    pub fn take_time_to(&self) -> Option<NaiveTime> {
        self.take_time_to
    }
}

fn check_window(
    field: &'static str,
    from: Option<NaiveTime>,
    to: Option<NaiveTime>,
) -> PplResult<()> {
    match (from, to) {
        (Some(from), Some(to)) if to < from => Err(validation_error(
            field,
            "range",
            format!("{field} must not precede the start of the window"),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn test_delivery_window_order() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0);
        let noon = NaiveTime::from_hms_opt(12, 0, 0);

        let delivery = SpecialDelivery::new().with_delivery(date(), nine, noon).unwrap();
        assert_eq!(delivery.delivery_time_to(), noon);

        let error = SpecialDelivery::new().with_delivery(date(), noon, nine).unwrap_err();
        assert!(error.is_validation_of("delivery_time_to"));
    }

    #[test]
    fn test_take_window_order() {
        let eight = NaiveTime::from_hms_opt(8, 0, 0);
        let ten = NaiveTime::from_hms_opt(10, 0, 0);

        assert!(SpecialDelivery::new().with_take(date(), ten, None).is_ok());
        assert!(SpecialDelivery::new().with_take(date(), eight, eight).is_ok());

        let error = SpecialDelivery::new().with_take(date(), ten, eight).unwrap_err();
        assert!(error.is_validation_of("take_time_to"));
    }

    #[test]
    fn test_parcel_shop_code_length() {
        assert!(SpecialDelivery::to_parcel_shop("KM12345678").is_ok());
        let error = SpecialDelivery::to_parcel_shop("K".repeat(51)).unwrap_err();
        assert!(error.is_validation_of("parcel_shop_code"));
    }
}
