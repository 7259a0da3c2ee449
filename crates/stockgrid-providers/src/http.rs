use crate::traits::CatalogSource;
use crate::{Error, Result};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use stockgrid_types::Product;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// REST catalog in the Fake Store API shape
///
/// - `GET {base}/products/categories` -> `["electronics", ...]`
/// - `GET {base}/products/category/{name}` -> `[Product, ...]`
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL cannot carry a path: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("stockgrid/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("base URL cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "catalog request");
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json()?)
    }
}

impl CatalogSource for HttpCatalog {
    fn id(&self) -> &'static str {
        "http"
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&["products", "categories"])?;
        self.get_json(url)
    }

    fn list_products(&self, category: &str) -> Result<Vec<Product>> {
        let url = self.endpoint(&["products", "category", category])?;
        self.get_json(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_category_segment() {
        let catalog = HttpCatalog::new("https://catalog.example/api/", Duration::from_secs(1)).unwrap();
        let url = catalog
            .endpoint(&["products", "category", "men's clothing"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://catalog.example/api/products/category/men's%20clothing"
        );
    }

    #[test]
    fn test_endpoint_without_base_path() {
        let catalog = HttpCatalog::new(DEFAULT_BASE_URL, Duration::from_secs(1)).unwrap();
        let url = catalog.endpoint(&["products", "categories"]).unwrap();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products/categories");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpCatalog::new("not a url", Duration::from_secs(1)),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            HttpCatalog::new("mailto:ops@example.com", Duration::from_secs(1)),
            Err(Error::Config(_))
        ));
    }
}
