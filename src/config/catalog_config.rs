use crate::domain::address::Address;
use crate::domain::agency::Agency;
use crate::domain::property::Property;
use crate::utils::error::{AgencyError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub agency: AgencyConfig,
    #[serde(default)]
    pub properties: Vec<PropertyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyConfig {
    pub id: String,
    pub price_usd: f64,
    pub bedrooms: u32,
    #[serde(default)]
    pub swimming_pool: bool,
    pub r#type: String,
    pub address: AddressConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressConfig {
    pub unit: Option<String>,
    pub street_number: u32,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
}

impl AddressConfig {
    pub fn to_address(&self) -> Result<Address> {
        Address::new(
            self.unit.as_deref(),
            self.street_number,
            &self.street_name,
            &self.postal_code,
            &self.city,
        )
    }
}

impl PropertyConfig {
    pub fn to_property(&self) -> Result<Property> {
        Property::new(
            self.price_usd,
            self.address.to_address()?,
            self.bedrooms,
            self.swimming_pool,
            &self.r#type,
            &self.id,
        )
    }
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a catalog, replacing `${VAR}` with environment values first.
    /// Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AgencyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Builds the agency with every listing registered.
    pub fn build_agency(&self) -> Result<Agency> {
        self.validate()?;

        let mut agency = Agency::new(&self.agency.name)?;
        for entry in &self.properties {
            agency.add_property(entry.to_property()?);
        }
        tracing::info!(
            "Loaded {} properties into {}",
            agency.len(),
            agency.name()
        );
        Ok(agency)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        Agency::new(&self.agency.name)?;

        let mut seen = HashSet::new();
        for entry in &self.properties {
            entry.to_property()?;
            if !seen.insert(entry.id.as_str()) {
                return Err(AgencyError::validation(
                    "properties.id",
                    &entry.id,
                    "Property id appears more than once in the catalog",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::PropertyType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_CATALOG: &str = r#"
[agency]
name = "Maple Realty"

[[properties]]
id = "9999"
price_usd = 99999.0
bedrooms = 1
swimming_pool = true
type = "commercial"

[properties.address]
unit = "9"
street_number = 99
street_name = "gretzky way"
postal_code = "t6v7h3"
city = "toronto"

[[properties]]
id = "678T"
price_usd = 4000000.0
bedrooms = 2
type = "residence"

[properties.address]
street_number = 1515
street_name = "main street"
postal_code = "v8y7r3"
city = "west vancouver"
"#;

    #[test]
    fn test_parse_basic_catalog() {
        let config = CatalogConfig::from_toml_str(BASIC_CATALOG).unwrap();

        assert_eq!(config.agency.name, "Maple Realty");
        assert_eq!(config.properties.len(), 2);
        assert!(!config.properties[1].swimming_pool);
        assert_eq!(config.properties[1].address.unit, None);

        let agency = config.build_agency().unwrap();
        assert_eq!(agency.len(), 2);
        assert_eq!(
            agency.get_property("9999").unwrap().property_type(),
            PropertyType::Commercial
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CATALOG_TEST_AGENCY_NAME", "Harbour Homes");

        let toml_content = r#"
[agency]
name = "${CATALOG_TEST_AGENCY_NAME}"
"#;

        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.agency.name, "Harbour Homes");

        std::env::remove_var("CATALOG_TEST_AGENCY_NAME");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = CatalogConfig::from_toml_str("[agency\nname = 1");
        assert!(matches!(result, Err(AgencyError::ConfigError { .. })));
    }

    #[test]
    fn test_validation_rejects_bad_listing() {
        let content = BASIC_CATALOG.replace("bedrooms = 2", "bedrooms = 21");
        let config = CatalogConfig::from_toml_str(&content).unwrap();

        assert!(config.validate().is_err());
        assert!(config.build_agency().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_ids() {
        let content = BASIC_CATALOG.replace("id = \"678T\"", "id = \"9999\"");
        let config = CatalogConfig::from_toml_str(&content).unwrap();

        assert!(matches!(
            config.validate(),
            Err(AgencyError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC_CATALOG.as_bytes()).unwrap();

        let config = CatalogConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.agency.name, "Maple Realty");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CatalogConfig::from_file("/definitely/not/here/catalog.toml");
        assert!(matches!(result, Err(AgencyError::IoError(_))));
    }
}
