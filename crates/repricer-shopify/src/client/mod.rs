//! HTTP client for the Shopify Admin REST API.

mod metafields;
mod origin;
mod products;
mod variants;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use repricer_core::StoreConfig;

use crate::error::StoreError;

pub use origin::store_origin;
#[cfg(test)]
use origin::store_host;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for one Shopify store's Admin REST API.
///
/// Every request carries the store's access token. Non-2xx responses are
/// surfaced as typed errors; 429 is reported as [`StoreError::RateLimited`]
/// and is not retried.
pub struct ShopifyAdminClient {
    client: Client,
    /// `{origin}/admin/api/{version}/`, always with a trailing slash.
    api_base: Url,
    access_token: String,
    store: String,
}

impl ShopifyAdminClient {
    /// Creates a client from explicit store configuration.
    ///
    /// `config.store_domain` may be a bare domain (`jewels.myshopify.com`,
    /// HTTPS is assumed) or a full origin such as a local mock server URL.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Http`] if the underlying `reqwest::Client` cannot be built.
    /// - [`StoreError::InvalidBaseUrl`] if the store domain and API version do
    ///   not form a valid URL.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let api_base = Self::api_base(&config.store_domain, &config.api_version)?;

        Ok(Self {
            client,
            api_base,
            access_token: config.access_token.clone(),
            store: origin::store_host(&config.store_domain),
        })
    }

    fn api_base(store_domain: &str, api_version: &str) -> Result<Url, StoreError> {
        let origin = store_origin(store_domain);
        // An origin without a host ("https://") would otherwise let the API
        // path be parsed as the host.
        let has_host = Url::parse(&origin).is_ok_and(|u| u.host_str().is_some());
        if !has_host {
            return Err(StoreError::InvalidBaseUrl {
                store: store_domain.to_owned(),
                reason: "store domain has no host".to_owned(),
            });
        }

        let version = api_version.trim_matches('/');
        let base = format!("{origin}/admin/api/{version}/");
        Url::parse(&base).map_err(|e| StoreError::InvalidBaseUrl {
            store: store_domain.to_owned(),
            reason: format!("\"{base}\" is not a valid URL: {e}"),
        })
    }

    /// Resolves `path` (e.g. `"products.json"`) against the versioned API base.
    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.api_base
            .join(path)
            .map_err(|e| StoreError::InvalidBaseUrl {
                store: self.store.clone(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Maps non-2xx responses onto [`StoreError`] variants.
    fn check_status(&self, response: Response, url: &Url) -> Result<Response, StoreError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                // Shopify sends fractional seconds such as "2.0".
                .and_then(|s| s.trim().split('.').next())
                .and_then(|whole| whole.parse::<u64>().ok())
                .unwrap_or(2);
            return Err(StoreError::RateLimited {
                store: self.store.clone(),
                retry_after_secs,
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Issues an authorised GET and parses the JSON body as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, StoreError> {
        tracing::debug!(url = %url, "GET");
        let response = self.authorized(self.client.get(url.clone())).send().await?;
        let response = self.check_status(response, &url)?;

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| StoreError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
