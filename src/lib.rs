pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::CatalogConfig;
pub use crate::core::CatalogSummary;
pub use domain::{
    address::Address,
    agency::Agency,
    property::{Property, PropertyType},
    shared::SharedAgency,
};
pub use utils::error::{AgencyError, Result};
