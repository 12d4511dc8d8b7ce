mod dom;
mod fetch;

use detail_catalog::{populate, CatalogConfig, Result};
use wasm_bindgen_futures::spawn_local;

use crate::dom::DomPage;
use crate::fetch::BrowserTransport;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    spawn_local(async {
        if let Err(error) = start().await {
            tracing::error!(%error, "failed to populate details");
        }
    });
}

async fn start() -> Result<usize> {
    let config = CatalogConfig::from_build_env()?;
    let document = dom::document()?;
    let (mut page, viewer) = DomPage::query(&document)?;

    populate(&BrowserTransport, &mut page, &viewer, &config).await
}
