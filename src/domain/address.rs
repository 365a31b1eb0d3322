use crate::utils::error::{AgencyError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::Serialize;

/// Location of a listing. Values are stored as given; display casing is
/// applied by the report formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    unit_number: Option<String>,
    street_number: u32,
    street_name: String,
    postal_code: String,
    city: String,
}

impl Address {
    pub fn new(
        unit_number: Option<&str>,
        street_number: u32,
        street_name: &str,
        postal_code: &str,
        city: &str,
    ) -> Result<Self> {
        if let Some(unit) = unit_number {
            validate_non_empty_string("unit_number", unit)?;
        }
        if street_number == 0 {
            return Err(AgencyError::validation(
                "street_number",
                street_number,
                "Street number must be positive",
            ));
        }
        validate_non_empty_string("street_name", street_name)?;
        validate_non_empty_string("postal_code", postal_code)?;
        validate_non_empty_string("city", city)?;

        Ok(Self {
            unit_number: unit_number.map(str::to_string),
            street_number,
            street_name: street_name.to_string(),
            postal_code: postal_code.to_string(),
            city: city.to_string(),
        })
    }

    pub fn unit_number(&self) -> Option<&str> {
        self.unit_number.as_deref()
    }

    pub fn street_number(&self) -> u32 {
        self.street_number
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}
