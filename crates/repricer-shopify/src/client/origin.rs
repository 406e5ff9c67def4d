//! Store origin and host extraction for the Admin API client.

/// Normalises a configured store identity into a scheme+host origin.
///
/// `"jewels.myshopify.com"` becomes `"https://jewels.myshopify.com"`; a value
/// that already carries a scheme (`"http://127.0.0.1:8080/"`) keeps it and
/// loses any path.
#[must_use]
pub fn store_origin(store_domain: &str) -> String {
    let trimmed = store_domain.trim().trim_end_matches('/');
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    reqwest::Url::parse(&with_scheme).map_or_else(
        |e| {
            tracing::warn!(
                store_domain,
                error = %e,
                "could not parse store domain as URL; using it verbatim as origin"
            );
            with_scheme.clone()
        },
        |u| u.origin().ascii_serialization(),
    )
}

/// Extracts the hostname for use in error messages.
///
/// Falls back to the configured value if parsing fails.
pub(super) fn store_host(store_domain: &str) -> String {
    reqwest::Url::parse(&store_origin(store_domain))
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| store_domain.to_owned())
}
