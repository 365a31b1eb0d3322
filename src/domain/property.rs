use crate::domain::address::Address;
use crate::utils::error::{AgencyError, Result};
use crate::utils::validation::{
    validate_char_length, validate_non_empty_string, validate_non_negative_amount, validate_range,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const MIN_BEDROOMS: u32 = 1;
pub const MAX_BEDROOMS: u32 = 20;
pub const MIN_PROPERTY_ID_LENGTH: usize = 1;
pub const MAX_PROPERTY_ID_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    Residence,
    Commercial,
    Retail,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Residence,
        PropertyType::Commercial,
        PropertyType::Retail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residence => "RESIDENCE",
            PropertyType::Commercial => "COMMERCIAL",
            PropertyType::Retail => "RETAIL",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = AgencyError;

    fn from_str(s: &str) -> Result<Self> {
        validate_non_empty_string("property_type", s)?;
        let wanted = s.trim();
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AgencyError::validation(
                    "property_type",
                    s,
                    "Type must be one of: residence, commercial, retail",
                )
            })
    }
}

/// A listing. Every field is checked on construction; only the price can
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    property_id: String,
    price_usd: f64,
    address: Address,
    number_of_bedrooms: u32,
    has_swimming_pool: bool,
    property_type: PropertyType,
}

impl Property {
    pub fn new(
        price_usd: f64,
        address: Address,
        number_of_bedrooms: u32,
        has_swimming_pool: bool,
        property_type: &str,
        property_id: &str,
    ) -> Result<Self> {
        validate_non_negative_amount("price_usd", price_usd)?;
        validate_range("number_of_bedrooms", number_of_bedrooms, MIN_BEDROOMS, MAX_BEDROOMS)?;
        let property_type = property_type.parse::<PropertyType>()?;
        validate_non_empty_string("property_id", property_id)?;
        validate_char_length(
            "property_id",
            property_id,
            MIN_PROPERTY_ID_LENGTH,
            MAX_PROPERTY_ID_LENGTH,
        )?;

        Ok(Self {
            property_id: property_id.to_string(),
            // -0.0 is accepted but stored as 0.0
            price_usd: price_usd + 0.0,
            address,
            number_of_bedrooms,
            has_swimming_pool,
            property_type,
        })
    }

    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    pub fn price_usd(&self) -> f64 {
        self.price_usd
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn number_of_bedrooms(&self) -> u32 {
        self.number_of_bedrooms
    }

    pub fn has_swimming_pool(&self) -> bool {
        self.has_swimming_pool
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Same rule as construction: finite and not negative. The stored price
    /// is left untouched on error.
    pub fn set_price_usd(&mut self, price_usd: f64) -> Result<()> {
        validate_non_negative_amount("price_usd", price_usd)?;
        self.price_usd = price_usd + 0.0;
        Ok(())
    }
}
