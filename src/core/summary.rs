use crate::domain::agency::Agency;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of an agency for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub agency: String,
    pub listings: usize,
    pub total_value_usd: f64,
    pub with_pools: Vec<String>,
    pub reports: BTreeMap<String, Vec<String>>,
}

impl CatalogSummary {
    pub fn from_agency(agency: &Agency, report_types: &[String]) -> Self {
        let mut with_pools: Vec<String> = agency
            .properties_with_pools()
            .into_iter()
            .map(|p| p.property_id().to_string())
            .collect();
        with_pools.sort();

        let reports = report_types
            .iter()
            .map(|t| (t.trim().to_uppercase(), agency.properties_of_type(t)))
            .collect();

        Self {
            agency: agency.name().to_string(),
            listings: agency.len(),
            total_value_usd: agency.total_property_values(),
            with_pools,
            reports,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
