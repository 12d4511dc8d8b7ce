use std::rc::Rc;

use serde::Serialize;

use crate::config::CatalogConfig;
use crate::domain::Company;
use crate::error::Result;
use crate::flatten::{flatten, FlatDetail};
use crate::viewer::{open_detail, EmbedViewer, ViewerState};

/// Everything a grid tile displays, resolved from one flattened record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailTile {
    pub logo_alt: String,
    pub logo_src: Option<String>,
    pub image_alt: String,
    pub image_src: String,
    pub detail_name: String,
    pub product_name: String,
    pub brand_name: String,
    pub abbrev: String,
    pub embed_url: String,
}

impl DetailTile {
    pub fn build(config: &CatalogConfig, record: &FlatDetail<'_>) -> Self {
        Self {
            logo_alt: record.company.name.clone(),
            logo_src: record.company.logo_uri().map(str::to_string),
            image_alt: record.detail.name.clone(),
            image_src: record.detail.preview_image_uri.clone(),
            detail_name: record.detail.name.clone(),
            product_name: record.product.name.clone(),
            brand_name: record.brand.name.clone(),
            abbrev: record.detail.abbrev.clone(),
            embed_url: config.embed_url(&record.detail.abbrev),
        }
    }
}

pub type ClickHandler = Box<dyn Fn() -> Result<ViewerState>>;

/// Builds a handler that owns its own copy of `embed_url`.
pub fn click_handler<V: EmbedViewer + 'static>(viewer: &Rc<V>, embed_url: String) -> ClickHandler {
    let viewer = Rc::clone(viewer);
    Box::new(move || open_detail(viewer.as_ref(), &embed_url))
}

/// The host page: a header, a tile template and the grid the tiles go into.
pub trait CatalogPage {
    type Tile;

    fn set_header(&mut self, text: &str) -> Result<()>;

    /// Clones the template and fills it from `tile`. The template itself stays untouched.
    fn instantiate(&mut self, tile: &DetailTile) -> Result<Self::Tile>;

    fn on_click(&mut self, tile: &Self::Tile, handler: ClickHandler) -> Result<()>;

    fn append(&mut self, tile: Self::Tile) -> Result<()>;
}

/// Fills the page with one tile per detail and returns how many were appended.
pub fn render<P, V>(
    company: &Company,
    page: &mut P,
    viewer: &Rc<V>,
    config: &CatalogConfig,
) -> Result<usize>
where
    P: CatalogPage,
    V: EmbedViewer + 'static,
{
    page.set_header(&company.heading())?;

    let mut appended = 0;
    for record in flatten(company) {
        let tile = DetailTile::build(config, &record);
        let view = page.instantiate(&tile)?;
        page.on_click(&view, click_handler(viewer, tile.embed_url))?;
        page.append(view)?;
        appended += 1;
    }

    tracing::info!(company = %company.name, tiles = appended, "rendered detail grid");
    Ok(appended)
}
