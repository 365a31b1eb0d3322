use agency_catalog::utils::{logger, validation::Validate};
use agency_catalog::{CatalogConfig, CatalogSummary, CliConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Invalid arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    tracing::info!("📁 Loading catalog from: {}", config.catalog);
    let agency = match CatalogConfig::from_file(&config.catalog).and_then(|c| c.build_agency()) {
        Ok(agency) => agency,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog (category: {:?}): {}", e.category(), e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let report_types = config.report_types();

    if config.json {
        let summary = CatalogSummary::from_agency(&agency, &report_types);
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    println!("{}", agency.name());
    for property_type in &report_types {
        println!();
        for line in agency.properties_of_type(property_type) {
            println!("{}", line);
        }
    }
    println!();
    println!("Total value: ${:.0}", agency.total_property_values().round());

    Ok(())
}
