use serde::{Deserialize, Serialize};

/// Root of the catalog served by the company endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub logotype_uri: Option<String>,
    pub logomark_uri: Option<String>,
    pub brands: Vec<Brand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Brand {
    pub name: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    pub details: Vec<Detail>,
}

/// Leaf of the catalog; `abbrev` identifies it in embed links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub name: String,
    pub abbrev: String,
    pub preview_image_uri: String,
}

impl Company {
    /// Logotype if present, otherwise the logomark. Empty strings count as absent.
    pub fn logo_uri(&self) -> Option<&str> {
        [self.logotype_uri.as_deref(), self.logomark_uri.as_deref()]
            .into_iter()
            .flatten()
            .find(|uri| !uri.is_empty())
    }

    pub fn heading(&self) -> String {
        format!("{} Details", self.name)
    }
}
