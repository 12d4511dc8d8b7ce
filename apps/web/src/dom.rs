use std::rc::Rc;

use detail_catalog::{
    CatalogError, CatalogPage, ClickHandler, DetailTile, EmbedViewer, Result, ViewerState,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, DocumentFragment, Element, HtmlDialogElement, HtmlElement, HtmlIFrameElement,
    HtmlImageElement, HtmlTemplateElement,
};

use crate::fetch::describe;

const HEADER: &str = "h2";
const TEMPLATE: &str = "#detail-grid-item-template";
const GRID: &str = "#detail-grid";
const VIEWER: &str = "#detail-viewer";
const EMBED: &str = "iframe";

const GRID_ITEM: &str = ".detail-grid-item";
const COMPANY_LOGO: &str = ".detail-company-logo";
const DETAIL_IMAGE: &str = ".detail-image";
const DETAIL_NAME: &str = ".detail-name";
const PRODUCT_NAME: &str = ".product-name";
const BRAND_NAME: &str = ".brand-name";
const DETAIL_ABBREV: &str = ".detail-abbrev small";

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| CatalogError::Dom("no document available".to_string()))
}

/// The host page's markup, looked up once before fetching.
pub struct DomPage {
    header: Element,
    template: HtmlTemplateElement,
    grid: Element,
}

impl DomPage {
    pub fn query(document: &Document) -> Result<(Self, Rc<DialogViewer>)> {
        let page = Self {
            header: select(document.query_selector(HEADER), HEADER)?,
            template: select(document.query_selector(TEMPLATE), TEMPLATE)?,
            grid: select(document.query_selector(GRID), GRID)?,
        };

        let dialog: HtmlDialogElement = select(document.query_selector(VIEWER), VIEWER)?;
        let embed: HtmlIFrameElement = select(dialog.query_selector(EMBED), EMBED)?;

        Ok((page, Rc::new(DialogViewer { dialog, embed })))
    }
}

impl CatalogPage for DomPage {
    type Tile = HtmlElement;

    fn set_header(&mut self, text: &str) -> Result<()> {
        self.header.set_text_content(Some(text));
        Ok(())
    }

    fn instantiate(&mut self, tile: &DetailTile) -> Result<HtmlElement> {
        let fragment = self
            .template
            .content()
            .clone_node_with_deep(true)
            .map_err(dom_error)?
            .dyn_into::<DocumentFragment>()
            .map_err(|_| CatalogError::Dom("template clone is not a fragment".to_string()))?;

        let item: HtmlElement = select(fragment.query_selector(GRID_ITEM), GRID_ITEM)?;

        let logo: HtmlImageElement = select(item.query_selector(COMPANY_LOGO), COMPANY_LOGO)?;
        logo.set_alt(&tile.logo_alt);
        if let Some(src) = &tile.logo_src {
            logo.set_src(src);
        }

        let image: HtmlImageElement = select(item.query_selector(DETAIL_IMAGE), DETAIL_IMAGE)?;
        image.set_alt(&tile.image_alt);
        image.set_src(&tile.image_src);

        set_text(&item, DETAIL_NAME, &tile.detail_name)?;
        set_text(&item, PRODUCT_NAME, &tile.product_name)?;
        set_text(&item, BRAND_NAME, &tile.brand_name)?;
        set_text(&item, DETAIL_ABBREV, &tile.abbrev)?;

        Ok(item)
    }

    fn on_click(&mut self, tile: &HtmlElement, handler: ClickHandler) -> Result<()> {
        let callback = Closure::<dyn FnMut()>::new(move || {
            match handler() {
                Ok(state) => tracing::debug!(?state, "detail viewer updated"),
                Err(error) => tracing::error!(%error, "failed to open detail viewer"),
            }
        });

        tile.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // the listener lives as long as the page
        callback.forget();
        Ok(())
    }

    fn append(&mut self, tile: HtmlElement) -> Result<()> {
        self.grid.append_with_node_1(&tile).map_err(dom_error)
    }
}

/// `<dialog>` wrapping the embed `<iframe>`.
pub struct DialogViewer {
    dialog: HtmlDialogElement,
    embed: HtmlIFrameElement,
}

impl EmbedViewer for DialogViewer {
    fn set_source(&self, url: &str) -> Result<()> {
        self.embed.set_src(url);
        Ok(())
    }

    fn state(&self) -> ViewerState {
        if self.dialog.open() {
            ViewerState::Open {
                embed_url: self.embed.src(),
            }
        } else {
            ViewerState::Closed
        }
    }

    fn show(&self) -> Result<()> {
        self.dialog.show_modal().map_err(dom_error)
    }
}

fn select<T: JsCast>(found: std::result::Result<Option<Element>, JsValue>, selector: &str) -> Result<T> {
    found
        .map_err(dom_error)?
        .ok_or_else(|| CatalogError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| CatalogError::Dom(format!("`{selector}` is not the expected element type")))
}

fn set_text(item: &HtmlElement, selector: &str, text: &str) -> Result<()> {
    let element: Element = select(item.query_selector(selector), selector)?;
    element.set_text_content(Some(text));
    Ok(())
}

fn dom_error(value: JsValue) -> CatalogError {
    CatalogError::Dom(describe(&value))
}
