use detail_catalog::{CatalogError, HttpResponse, Result, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// `window.fetch` behind the catalog's transport seam.
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let Some(window) = web_sys::window() else {
            return Err(CatalogError::Transport("no window available".to_string()));
        };

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport_error)?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?;

        let response = response_value
            .dyn_into::<Response>()
            .map_err(|_| CatalogError::Transport("fetch did not return a Response".to_string()))?;

        // error bodies are never read
        let body = if response.ok() {
            let text = JsFuture::from(response.text().map_err(transport_error)?)
                .await
                .map_err(transport_error)?;
            text.as_string().unwrap_or_default()
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status: response.status(),
            status_text: response.status_text(),
            body,
        })
    }
}

fn transport_error(value: JsValue) -> CatalogError {
    CatalogError::Transport(describe(&value))
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
