/// Configuration for the frontend application

/// Article API base URL, read at compile time.
/// - Local development: `http://localhost:3000/api`
/// - Deployments set `ARTICLE_ADMIN_API_BASE` before `trunk build`.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("ARTICLE_ADMIN_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// Path prefix the dashboard is served under.
/// - For local development: "/"
/// - Behind a reverse proxy: e.g. "/admin/"
pub const BASE_URL: &str = match option_env!("ARTICLE_ADMIN_BASE_URL") {
    Some(url) => url,
    None => "/",
};

/// Router basename derived from [`BASE_URL`]; `None` when served from the root.
pub fn router_basename() -> Option<String> {
    let trimmed = BASE_URL.trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
