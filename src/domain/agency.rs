use crate::domain::address::Address;
use crate::domain::property::Property;
use crate::domain::report::{listing_line, type_header, NONE_FOUND};
use crate::utils::error::{AgencyError, Result};
use crate::utils::validation::{validate_char_length, validate_non_empty_string};
use std::collections::HashMap;

pub const MAX_AGENCY_NAME_LENGTH: usize = 30;

/// A named set of listings keyed by property id.
///
/// Query results borrow from the agency. Filters returning a `Vec` signal
/// "no match" with an empty vector; `properties_on` and
/// `properties_with_bedrooms` return `None` instead and never an empty
/// collection.
#[derive(Debug, Clone)]
pub struct Agency {
    name: String,
    properties: HashMap<String, Property>,
}

impl Agency {
    pub fn new(name: &str) -> Result<Self> {
        validate_non_empty_string("agency_name", name)?;
        validate_char_length("agency_name", name, 1, MAX_AGENCY_NAME_LENGTH)?;

        Ok(Self {
            name: name.to_string(),
            properties: HashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Inserts the listing, replacing any listing with the same id.
    pub fn add_property(&mut self, property: Property) {
        let id = property.property_id().to_string();
        if self.properties.insert(id.clone(), property).is_some() {
            tracing::debug!("Replaced property {} in {}", id, self.name);
        } else {
            tracing::debug!("Added property {} to {}", id, self.name);
        }
    }

    pub fn remove_property(&mut self, property_id: &str) -> Result<Property> {
        validate_non_empty_string("property_id", property_id)?;

        let removed = self
            .properties
            .remove(property_id)
            .ok_or_else(|| AgencyError::not_found(property_id))?;
        tracing::debug!("Removed property {} from {}", property_id, self.name);
        Ok(removed)
    }

    pub fn get_property(&self, property_id: &str) -> Option<&Property> {
        self.properties.get(property_id)
    }

    pub fn update_price(&mut self, property_id: &str, price_usd: f64) -> Result<()> {
        validate_non_empty_string("property_id", property_id)?;

        let property = self
            .properties
            .get_mut(property_id)
            .ok_or_else(|| AgencyError::not_found(property_id))?;
        let previous = property.price_usd();
        property.set_price_usd(price_usd)?;
        tracing::debug!(
            "Price of property {} changed from {} to {}",
            property_id,
            previous,
            price_usd
        );
        Ok(())
    }

    pub fn total_property_values(&self) -> f64 {
        // f64 sums start from -0.0
        self.properties.values().map(Property::price_usd).sum::<f64>() + 0.0
    }

    pub fn properties_with_pools(&self) -> Vec<&Property> {
        let matches: Vec<&Property> = self
            .properties
            .values()
            .filter(|p| p.has_swimming_pool())
            .collect();
        tracing::debug!("{} properties with pools", matches.len());
        matches
    }

    /// Both bounds are inclusive. An inverted range matches nothing.
    pub fn properties_between(&self, min_usd: f64, max_usd: f64) -> Vec<&Property> {
        let matches: Vec<&Property> = self
            .properties
            .values()
            .filter(|p| p.price_usd() >= min_usd && p.price_usd() <= max_usd)
            .collect();
        tracing::debug!(
            "{} properties priced between {} and {}",
            matches.len(),
            min_usd,
            max_usd
        );
        matches
    }

    /// Addresses whose street name equals `street_name`, ignoring case.
    pub fn properties_on(&self, street_name: &str) -> Option<Vec<&Address>> {
        let wanted = street_name.to_lowercase();
        let matches: Vec<&Address> = self
            .properties
            .values()
            .map(Property::address)
            .filter(|a| a.street_name().to_lowercase() == wanted)
            .collect();
        tracing::debug!("{} properties on '{}'", matches.len(), street_name);

        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    pub fn properties_with_bedrooms(
        &self,
        min_bedrooms: u32,
        max_bedrooms: u32,
    ) -> Option<HashMap<String, &Property>> {
        let matches: HashMap<String, &Property> = self
            .properties
            .iter()
            .filter(|(_, p)| {
                (min_bedrooms..=max_bedrooms).contains(&p.number_of_bedrooms())
            })
            .map(|(id, p)| (id.clone(), p))
            .collect();
        tracing::debug!(
            "{} properties with {} to {} bedrooms",
            matches.len(),
            min_bedrooms,
            max_bedrooms
        );

        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    /// Report of every listing of the given type, ordered by property id.
    ///
    /// The first line is always the `Type: ...` header. With no matching
    /// listing the only other line is `<none found>`. An unknown type name
    /// is not an error; it just matches nothing.
    pub fn properties_of_type(&self, property_type: &str) -> Vec<String> {
        let wanted = property_type.trim();
        let mut matches: Vec<&Property> = self
            .properties
            .values()
            .filter(|p| p.property_type().as_str().eq_ignore_ascii_case(wanted))
            .collect();
        matches.sort_by(|a, b| a.property_id().cmp(b.property_id()));

        let mut lines = Vec::with_capacity(matches.len() + 1);
        lines.push(type_header(property_type));

        if matches.is_empty() {
            lines.push(NONE_FOUND.to_string());
        } else {
            lines.extend(
                matches
                    .iter()
                    .enumerate()
                    .map(|(index, property)| listing_line(index + 1, property)),
            );
        }

        tracing::debug!("Type report for '{}': {} listings", wanted, matches.len());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, price: f64, bedrooms: u32, pool: bool, property_type: &str) -> Property {
        let address = Address::new(None, 100, "main street", "v8y7r3", "victoria").unwrap();
        Property::new(price, address, bedrooms, pool, property_type, id).unwrap()
    }

    #[test]
    fn test_agency_name_validation() {
        assert_eq!(Agency::new("Maple Realty").unwrap().name(), "Maple Realty");
        assert!(Agency::new("").is_err());
        assert!(Agency::new("   ").is_err());
        assert!(Agency::new(&"x".repeat(30)).is_ok());
        assert!(Agency::new(&"x".repeat(31)).is_err());
    }

    #[test]
    fn test_add_overwrites_same_id() {
        let mut agency = Agency::new("Maple Realty").unwrap();
        agency.add_property(listing("A1", 100.0, 2, false, "residence"));
        agency.add_property(listing("A1", 200.0, 3, true, "retail"));

        assert_eq!(agency.len(), 1);
        assert_eq!(agency.get_property("A1").unwrap().price_usd(), 200.0);
    }

    #[test]
    fn test_remove_property_errors() {
        let mut agency = Agency::new("Maple Realty").unwrap();
        agency.add_property(listing("A1", 100.0, 2, false, "residence"));

        assert!(matches!(
            agency.remove_property(" "),
            Err(AgencyError::ValidationError { .. })
        ));
        assert!(matches!(
            agency.remove_property("B2"),
            Err(AgencyError::NotFound { .. })
        ));

        let removed = agency.remove_property("A1").unwrap();
        assert_eq!(removed.property_id(), "A1");
        assert!(agency.get_property("A1").is_none());
        assert!(agency.is_empty());
    }

    #[test]
    fn test_total_is_recomputed_each_call() {
        let mut agency = Agency::new("Maple Realty").unwrap();
        assert_eq!(agency.total_property_values(), 0.0);
        assert!(agency.total_property_values().is_sign_positive());

        agency.add_property(listing("A1", 100000.0, 2, false, "residence"));
        agency.add_property(listing("A2", 250000.0, 2, false, "residence"));
        agency.add_property(listing("A3", 99999.0, 2, false, "residence"));

        assert_eq!(agency.total_property_values(), 449999.0);
        assert_eq!(agency.total_property_values(), 449999.0);
    }

    #[test]
    fn test_update_price() {
        let mut agency = Agency::new("Maple Realty").unwrap();
        agency.add_property(listing("A1", 100.0, 2, false, "residence"));

        agency.update_price("A1", 150.0).unwrap();
        assert_eq!(agency.total_property_values(), 150.0);

        assert!(matches!(
            agency.update_price("A1", -1.0),
            Err(AgencyError::ValidationError { .. })
        ));
        assert!(matches!(
            agency.update_price("ZZ", 1.0),
            Err(AgencyError::NotFound { .. })
        ));
        assert!(matches!(
            agency.update_price("  ", 1.0),
            Err(AgencyError::ValidationError { .. })
        ));
        assert_eq!(agency.get_property("A1").unwrap().price_usd(), 150.0);
    }

    #[test]
    fn test_bedroom_range_is_inclusive() {
        let mut agency = Agency::new("Maple Realty").unwrap();
        for (id, bedrooms) in [("B1", 1), ("B2", 2), ("B4", 4), ("B5", 5)] {
            agency.add_property(listing(id, 1.0, bedrooms, false, "residence"));
        }

        let matches = agency.properties_with_bedrooms(2, 4).unwrap();
        let mut ids: Vec<&str> = matches.keys().map(String::as_str).collect();
        ids.sort();
        assert_eq!(ids, vec!["B2", "B4"]);
        assert_eq!(matches["B4"].number_of_bedrooms(), 4);

        assert!(agency.properties_with_bedrooms(6, 20).is_none());
    }

    #[test]
    fn test_type_report_ignores_unknown_type() {
        let mut agency = Agency::new("Maple Realty").unwrap();
        agency.add_property(listing("A1", 1.0, 2, false, "retail"));

        assert_eq!(
            agency.properties_of_type("castle"),
            vec!["Type: CASTLE".to_string(), "<none found>".to_string()]
        );
    }
}
