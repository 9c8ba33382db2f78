use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Tipos de punto de acceso para `GetParcelShops`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum AccessPointType {
    ParcelShop,
    ParcelBox,
    AlzaBox,
}
