use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Países (ISO 3166-1 alpha-2) con los que trabaja PPL
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Country {
    AT,
    BE,
    BG,
    CH,
    #[default]
    CZ,
    DE,
    DK,
    EE,
    ES,
    FI,
    FR,
    GB,
    GR,
    HR,
    HU,
    IE,
    IT,
    LT,
    LU,
    LV,
    NL,
    NO,
    PL,
    PT,
    RO,
    SE,
    SI,
    SK,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_country_round_trips_through_its_code() {
        for country in Country::iter() {
            assert_eq!(country.as_ref().parse::<Country>().unwrap(), country);
            assert_eq!(country.as_ref().len(), 2);
        }
    }

    #[test]
    fn test_default_is_czech_republic() {
        assert_eq!(Country::default(), Country::CZ);
        assert!("cz".parse::<Country>().is_err());
    }
}
