//! Filtros de las operaciones de consulta
//!
//! Los códigos de país y de tipo de punto de acceso llegan como texto y se
//! validan contra sus enums al construir el filtro, antes de cualquier
//! petición.

use chrono::NaiveDate;

use crate::enums::{AccessPointType, Country};
use crate::utils::errors::{validation_error, PplResult};
use crate::utils::validation::{check_max_length, check_positive, parse_code};

/// Filtro de `GetParcelShops`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParcelShopQuery {
    pub country: Country,
    pub code: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub access_point_type: Option<AccessPointType>,
    pub active_card_payment: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<u32>,
}

impl ParcelShopQuery {
    /// Filtro para un código de país, validado contra `Country`
    pub fn new(country_code: &str) -> PplResult<Self> {
        Ok(Self::for_country(parse_code::<Country>("country_code", country_code)?))
    }

    pub fn for_country(country: Country) -> Self {
        Self {
            country,
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> PplResult<Self> {
        let city = city.into();
        check_max_length("city", city.as_str(), 50)?;
        self.city = Some(city);
        Ok(self)
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> PplResult<Self> {
        let zip_code = zip_code.into();
        check_max_length("zip_code", zip_code.as_str(), 10)?;
        self.zip_code = Some(zip_code);
        Ok(self)
    }

    /// Tipo de punto de acceso como texto (`ParcelShop`, `ParcelBox`, `AlzaBox`)
    pub fn with_access_point_type(mut self, access_point_type: &str) -> PplResult<Self> {
        self.access_point_type = Some(parse_code::<AccessPointType>(
            "access_point_type",
            access_point_type,
        )?);
        Ok(self)
    }

    pub fn with_active_card_payment(mut self, active_card_payment: bool) -> Self {
        self.active_card_payment = Some(active_card_payment);
        self
    }

    /// Búsqueda por cercanía: coordenadas y radio en km
    pub fn near(mut self, latitude: f64, longitude: f64, radius: u32) -> PplResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(validation_error(
                "coordinates",
                "range",
                format!("coordinates {latitude},{longitude} are out of range"),
            ));
        }
        check_positive("radius", radius)?;

        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self.radius = Some(radius);
        Ok(self)
    }
}

/// Filtro de `GetCitiesRouting`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityRoutingQuery {
    pub country: Country,
    pub date_from: Option<NaiveDate>,
    pub zip_code: Option<String>,
    pub street: Option<String>,
}

impl CityRoutingQuery {
    pub fn new(country_code: &str) -> PplResult<Self> {
        Ok(Self::for_country(parse_code::<Country>("country_code", country_code)?))
    }

    pub fn for_country(country: Country) -> Self {
        Self {
            country,
            ..Self::default()
        }
    }

    pub fn with_date_from(mut self, date_from: NaiveDate) -> Self {
        self.date_from = Some(date_from);
        self
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> PplResult<Self> {
        let zip_code = zip_code.into();
        check_max_length("zip_code", zip_code.as_str(), 10)?;
        self.zip_code = Some(zip_code);
        Ok(self)
    }

    pub fn with_street(mut self, street: impl Into<String>) -> PplResult<Self> {
        let street = street.into();
        check_max_length("street", street.as_str(), 50)?;
        self.street = Some(street);
        Ok(self)
    }
}

/// Filtro de `GetPackages`; al menos uno de los cuatro criterios es obligatorio
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackageQuery {
    pub customer_references: Vec<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub package_numbers: Vec<String>,
}

impl PackageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customer_references = references.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_package_numbers<I, S>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.package_numbers = numbers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_from(mut self, date_from: NaiveDate) -> Self {
        self.date_from = Some(date_from);
        self
    }

    pub fn with_date_to(mut self, date_to: NaiveDate) -> Self {
        self.date_to = Some(date_to);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.customer_references.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.package_numbers.is_empty()
    }

    /// Falla si no hay ningún criterio o si el rango de fechas está invertido
    pub fn check(&self) -> PplResult<()> {
        if self.is_empty() {
            return Err(validation_error(
                "package_query",
                "required",
                "at least one of customer_references, date_from, date_to or package_numbers is required",
            ));
        }

        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if to < from {
                return Err(validation_error(
                    "date_to",
                    "range",
                    format!("date_to {to} precedes date_from {from}"),
                ));
            }
        }
        Ok(())
    }
}
