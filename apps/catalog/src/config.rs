use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://workingspec.me";
pub const DEFAULT_COMPANY_ABBREV: &str = "rk";

/// Where the catalog lives and which company to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: String,
    company_abbrev: String,
}

impl CatalogConfig {
    pub fn new(
        base_url: impl Into<String>,
        company_abbrev: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let company_abbrev = company_abbrev.into();
        let company_abbrev = company_abbrev.trim();
        if company_abbrev.is_empty() {
            return Err(ConfigError::EmptyCompany);
        }

        Ok(Self {
            base_url: base_url.to_string(),
            company_abbrev: company_abbrev.to_string(),
        })
    }

    /// Values baked in at compile time through `CATALOG_BASE_URL` and
    /// `CATALOG_COMPANY`; the browser has no process environment to read.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("CATALOG_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("CATALOG_COMPANY").unwrap_or(DEFAULT_COMPANY_ABBREV),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn company_abbrev(&self) -> &str {
        &self.company_abbrev
    }

    pub fn api_url(&self) -> String {
        format!(
            "{}/api/client/v1/company/{}",
            self.base_url, self.company_abbrev
        )
    }

    pub fn embed_url(&self, abbrev: &str) -> String {
        format!("{}/embed/{abbrev}", self.base_url)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            company_abbrev: DEFAULT_COMPANY_ABBREV.to_string(),
        }
    }
}
