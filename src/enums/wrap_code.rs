use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::utils::errors::PplResult;
use crate::utils::validation::enum_violation;

/// Tipo de embalaje de un colli dentro de un envío paletizado
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum WrapCode {
    Carton,
    Pallet,
    Envelope,
    Roll,
    Bag,
    // PPL documenta "BOX" aquí, pero el código real es 50
    PlasticBox,
}

impl WrapCode {
    /// Código numérico que espera el servicio
    pub fn code(self) -> u16 {
        match self {
            WrapCode::Carton => 10,
            WrapCode::Pallet => 20,
            WrapCode::Envelope => 30,
            WrapCode::Roll => 40,
            WrapCode::Bag => 45,
            WrapCode::PlasticBox => 50,
        }
    }
}

impl TryFrom<u16> for WrapCode {
    type Error = crate::utils::errors::PplError;

    fn try_from(code: u16) -> PplResult<Self> {
        use strum::IntoEnumIterator;

        WrapCode::iter()
            .find(|wrap| wrap.code() == code)
            .ok_or_else(|| enum_violation::<WrapCode, _>("wrap_code", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plastic_box_code() {
        assert_eq!(WrapCode::PlasticBox.code(), 50);
        assert_eq!(WrapCode::try_from(50).unwrap(), WrapCode::PlasticBox);
        assert!(WrapCode::try_from(7).unwrap_err().is_validation_of("wrap_code"));
    }
}
