use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Identity and credentials of the catalog store a job talks to.
///
/// Built once at startup and handed to the store client; nothing reads
/// store identity from the process environment mid-job.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store domain, e.g. `"example.myshopify.com"`. A full URL with scheme
    /// is also accepted (useful for pointing at a local mock).
    pub store_domain: String,
    pub access_token: String,
    /// Admin API version path segment, e.g. `"2023-10"`.
    pub api_version: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("store_domain", &self.store_domain)
            .field("access_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub shopify_store_name: String,
    pub shopify_access_token: String,
    pub shopify_api_version: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Extracts the store identity used to build a catalog store client.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            store_domain: self.shopify_store_name.clone(),
            access_token: self.shopify_access_token.clone(),
            api_version: self.shopify_api_version.clone(),
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent.clone(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("shopify_store_name", &self.shopify_store_name)
            .field("shopify_access_token", &"[redacted]")
            .field("shopify_api_version", &self.shopify_api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
