//! Información de palé: manipulación, palés EUR y collis

use rust_decimal::Decimal;
use serde::Serialize;

use crate::enums::WrapCode;
use crate::utils::errors::PplResult;
use crate::utils::validation::{check_max_length, check_positive, check_required};

/// Unidad física dentro de un envío paletizado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colli {
    colli_number: String,
    height: Option<u32>,
    length: Option<u32>,
    width: Option<u32>,
    weight: Option<Decimal>,
    wrap_code: Option<WrapCode>,
}

impl Colli {
    pub fn new(colli_number: impl Into<String>) -> PplResult<Self> {
        let colli_number = colli_number.into();
        check_required("colli_number", &colli_number, 50)?;
        Ok(Self {
            colli_number,
            height: None,
            length: None,
            width: None,
            weight: None,
            wrap_code: None,
        })
    }

    /// Dimensiones en centímetros: alto, largo, ancho
    pub fn with_dimensions(mut self, height: u32, length: u32, width: u32) -> PplResult<Self> {
        check_positive("height", height)?;
        check_positive("length", length)?;
        check_positive("width", width)?;
        self.height = Some(height);
        self.length = Some(length);
        self.width = Some(width);
        Ok(self)
    }

    pub fn with_weight(mut self, weight: Decimal) -> PplResult<Self> {
        check_positive("weight", weight)?;
        self.weight = Some(weight);
        Ok(self)
    }

    pub fn with_wrap_code(mut self, wrap_code: WrapCode) -> Self {
        self.wrap_code = Some(wrap_code);
        self
    }

    pub fn colli_number(&self) -> &str {
        &self.colli_number
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn length(&self) -> Option<u32> {
        self.length
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn weight(&self) -> Option<Decimal> {
        self.weight
    }

    pub fn wrap_code(&self) -> Option<WrapCode> {
        self.wrap_code
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PalletInfo {
    manipulation_type: Option<u32>,
    pallet_eur_count: Option<u32>,
    pack_description: Option<String>,
    pickup_cargo_type_code: Option<String>,
    volume: Option<Decimal>,
    collies: Vec<Colli>,
}

impl PalletInfo {
    pub fn new(collies: Vec<Colli>) -> Self {
        Self {
            collies,
            ..Self::default()
        }
    }

    pub fn with_manipulation_type(mut self, manipulation_type: u32) -> Self {
        self.manipulation_type = Some(manipulation_type);
        self
    }

    pub fn with_pallet_eur_count(mut self, count: u32) -> Self {
        self.pallet_eur_count = Some(count);
        self
    }

    pub fn with_pack_description(mut self, description: impl Into<String>) -> PplResult<Self> {
        let description = description.into();
        check_max_length("pack_description", description.as_str(), 300)?;
        self.pack_description = Some(description);
        Ok(self)
    }

    pub fn with_pickup_cargo_type_code(mut self, code: impl Into<String>) -> PplResult<Self> {
        let code = code.into();
        check_max_length("pickup_cargo_type_code", code.as_str(), 10)?;
        self.pickup_cargo_type_code = Some(code);
        Ok(self)
    }

    /// Volumen en m³
    pub fn with_volume(mut self, volume: Decimal) -> PplResult<Self> {
        check_positive("volume", volume)?;
        self.volume = Some(volume);
        Ok(self)
    }

    pub fn manipulation_type(&self) -> Option<u32> {
        self.manipulation_type
    }

    pub fn pallet_eur_count(&self) -> Option<u32> {
        self.pallet_eur_count
    }

    pub fn pack_description(&self) -> Option<&str> {
        self.pack_description.as_deref()
    }

    pub fn pickup_cargo_type_code(&self) -> Option<&str> {
        self.pickup_cargo_type_code.as_deref()
    }

    pub fn volume(&self) -> Option<Decimal> {
        self.volume
    }

    pub fn collies(&self) -> &[Colli] {
        &self.collies
    }
}
