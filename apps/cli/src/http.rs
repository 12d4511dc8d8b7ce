use detail_catalog::{CatalogError, HttpResponse, Result, Transport};

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("detail-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        let body = if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| CatalogError::Transport(e.to_string()))?
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
