use thiserror::Error;

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog endpoint answered with a non-success status.
    #[error("{status}: {status_text}")]
    Fetch { status: u16, status_text: String },

    #[error("failed to parse company catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("missing page element `{0}`")]
    MissingElement(String),

    #[error("page update failed: {0}")]
    Dom(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url must not be empty")]
    EmptyBaseUrl,

    #[error("company abbreviation must not be empty")]
    EmptyCompany,
}
