use detail_catalog::config::{DEFAULT_BASE_URL, DEFAULT_COMPANY_ABBREV};
use detail_catalog::CatalogConfig;
use dotenv::dotenv;
use std::env;

use crate::cli::CliArgs;

/// Builds the catalog config: flag, then environment (including `.env`), then default.
pub fn load_config(args: &CliArgs) -> color_eyre::eyre::Result<CatalogConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_url = resolve(
        args.base_url.clone(),
        env::var("CATALOG_BASE_URL").ok(),
        DEFAULT_BASE_URL,
    );
    let company = resolve(
        args.company.clone(),
        env::var("CATALOG_COMPANY").ok(),
        DEFAULT_COMPANY_ABBREV,
    );

    tracing::debug!(%base_url, %company, "resolved catalog config");
    Ok(CatalogConfig::new(base_url, company)?)
}

fn resolve(flag: Option<String>, env: Option<String>, default: &str) -> String {
    flag.into_iter()
        .chain(env)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
