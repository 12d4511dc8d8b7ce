use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "detail-catalog",
    version,
    about = "List every detail in a company's catalog"
)]
pub struct CliArgs {
    /// Catalog host, e.g. https://workingspec.me
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Company abbreviation to fetch
    #[arg(long, value_name = "ABBREV")]
    pub company: Option<String>,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
