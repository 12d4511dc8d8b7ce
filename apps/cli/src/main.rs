mod cli;
mod config;
mod http;
mod output;

use clap::Parser;
use color_eyre::Result;
use detail_catalog::{fetch_company, flatten, DetailTile};
use tracing_subscriber::EnvFilter;

use crate::cli::CliArgs;
use crate::http::ReqwestTransport;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    init_tracing(args.debug);

    let config = config::load_config(&args)?;
    let transport = ReqwestTransport::new()?;

    let company = fetch_company(&transport, &config).await?;
    let tiles: Vec<DetailTile> = flatten(&company)
        .map(|record| DetailTile::build(&config, &record))
        .collect();

    let mut out = std::io::stdout().lock();
    if args.json {
        output::write_json(&mut out, &tiles)?;
    } else {
        output::write_listing(&mut out, &company.heading(), &tiles)?;
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
