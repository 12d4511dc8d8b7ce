use crate::config::CatalogConfig;
use crate::domain::Company;
use crate::error::{CatalogError, Result};

/// What a transport hands back from a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A way of issuing GET requests. The browser uses `fetch`, the CLI uses reqwest.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

pub async fn fetch_company<T: Transport>(transport: &T, config: &CatalogConfig) -> Result<Company> {
    let url = config.api_url();
    tracing::info!(%url, "fetching company catalog");

    let response = transport.get(&url).await?;
    decode_company(response)
}

pub fn decode_company(response: HttpResponse) -> Result<Company> {
    if !response.is_success() {
        tracing::warn!(
            status = response.status,
            status_text = %response.status_text,
            "catalog endpoint returned an error status"
        );
        return Err(CatalogError::Fetch {
            status: response.status,
            status_text: response.status_text,
        });
    }

    let company: Company = serde_json::from_str(&response.body)?;
    tracing::debug!(company = %company.name, brands = company.brands.len(), "decoded catalog");
    Ok(company)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replays one canned response and remembers the requested URLs.
    pub struct ScriptedTransport {
        response: RefCell<Option<Result<HttpResponse>>>,
        pub requested: RefCell<Vec<String>>,
    }

    impl ScriptedTransport {
        pub fn respond(status: u16, status_text: &str, body: &str) -> Self {
            Self {
                response: RefCell::new(Some(Ok(HttpResponse {
                    status,
                    status_text: status_text.to_string(),
                    body: body.to_string(),
                }))),
                requested: RefCell::new(Vec::new()),
            }
        }

        pub fn fail(message: &str) -> Self {
            Self {
                response: RefCell::new(Some(Err(CatalogError::Transport(message.to_string())))),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for ScriptedTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.requested.borrow_mut().push(url.to_string());
            self.response
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(CatalogError::Transport("no response scripted".to_string())))
        }
    }

    pub const ACME: &str = r#"{
        "name": "Acme",
        "logotypeUri": "logo.png",
        "logomarkUri": null,
        "brands": [{
            "name": "B1",
            "products": [{
                "name": "P1",
                "details": [{ "name": "D1", "abbrev": "d1", "previewImageUri": "d1.png" }]
            }]
        }]
    }"#;

    #[tokio::test]
    async fn requests_the_company_endpoint() -> Result<()> {
        let transport = ScriptedTransport::respond(200, "OK", ACME);
        let config = CatalogConfig::new("http://catalog.test", "acme")?;

        let company = fetch_company(&transport, &config).await?;

        assert_eq!(company.name, "Acme");
        assert_eq!(
            *transport.requested.borrow(),
            vec!["http://catalog.test/api/client/v1/company/acme".to_string()]
        );
        Ok(())
    }

    #[tokio::test]
    async fn server_error_is_terminal() {
        let transport = ScriptedTransport::respond(500, "Internal Server Error", "");

        let error = fetch_company(&transport, &CatalogConfig::default())
            .await
            .err();

        let Some(CatalogError::Fetch {
            status,
            status_text,
        }) = error
        else {
            panic!("expected a fetch error, got {error:?}");
        };
        assert_eq!(status, 500);
        assert_eq!(status_text, "Internal Server Error");
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let transport = ScriptedTransport::fail("connection refused");

        let error = fetch_company(&transport, &CatalogConfig::default()).await;

        assert!(matches!(error, Err(CatalogError::Transport(message)) if message == "connection refused"));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let response = HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: "<html>oops</html>".to_string(),
        };

        assert!(matches!(decode_company(response), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn any_2xx_counts_as_success() {
        let response = HttpResponse {
            status: 203,
            status_text: "Non-Authoritative Information".to_string(),
            body: ACME.to_string(),
        };

        assert!(response.is_success());
        assert!(decode_company(response).is_ok());
    }

    #[test]
    fn redirect_status_is_not_success() {
        let response = HttpResponse {
            status: 304,
            status_text: "Not Modified".to_string(),
            body: String::new(),
        };

        assert!(matches!(
            decode_company(response),
            Err(CatalogError::Fetch { status: 304, .. })
        ));
    }
}
