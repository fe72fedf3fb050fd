//! Backend endpoint resolution.

/// Environment variable consulted when no explicit base URL is given.
pub const ENV_BASE_URL: &str = "LIFTOFF_API_URL";

/// The backend's fixed host inside the compose network.
pub const DEFAULT_BASE_URL: &str = "http://backend:8000";

/// Resolution order: explicit flag, then `LIFTOFF_API_URL`, then the default.
pub fn resolve_base_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(ENV_BASE_URL).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
