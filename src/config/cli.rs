use crate::domain::property::PropertyType;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "agency-catalog")]
#[command(about = "Report on the listings of a real-estate agency catalog")]
pub struct CliConfig {
    /// Path to the TOML catalog file
    #[arg(short, long, default_value = "catalog.toml")]
    pub catalog: String,

    /// Property type to report on; repeat for several (defaults to all types)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Print a JSON summary instead of text reports
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn report_types(&self) -> Vec<String> {
        if self.types.is_empty() {
            PropertyType::ALL.iter().map(|t| t.to_string()).collect()
        } else {
            self.types.clone()
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("catalog", &self.catalog)?;
        for requested in &self.types {
            requested.parse::<PropertyType>()?;
        }
        Ok(())
    }
}
