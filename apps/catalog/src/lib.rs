//! Company detail catalog.
//!
//! One pass: fetch the company's nested catalog, flatten it into detail
//! records and render each record as a grid tile whose click opens the
//! embed viewer. The page, the viewer and the HTTP transport are traits so
//! the browser build and the headless CLI share this code.

pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod flatten;
pub mod render;
pub mod viewer;

use std::rc::Rc;

pub use config::CatalogConfig;
pub use domain::{Brand, Company, Detail, Product};
pub use error::{CatalogError, ConfigError, Result};
pub use fetch::{fetch_company, HttpResponse, Transport};
pub use flatten::{flatten, FlatDetail};
pub use render::{render, CatalogPage, ClickHandler, DetailTile};
pub use viewer::{open_detail, EmbedViewer, ViewerState};

/// Fetches the configured company and renders it into `page`.
/// Nothing is rendered when the fetch fails.
pub async fn populate<T, P, V>(
    transport: &T,
    page: &mut P,
    viewer: &Rc<V>,
    config: &CatalogConfig,
) -> Result<usize>
where
    T: Transport,
    P: CatalogPage,
    V: EmbedViewer + 'static,
{
    let company = fetch_company(transport, config).await?;
    render(&company, page, viewer, config)
}
