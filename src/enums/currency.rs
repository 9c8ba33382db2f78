use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Divisas aceptadas para dobírka (COD) y seguro
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Currency {
    CZK,
    EUR,
    PLN,
    HUF,
    RON,
    BGN,
    GBP,
    CHF,
    DKK,
    SEK,
    NOK,
    USD,
}
