use std::sync::OnceLock;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";

static BACKEND_BASE_URL: OnceLock<String> = OnceLock::new();

/// Backend base URL, resolved once. Overridable at build time with the
/// `BACKEND_URL` environment variable.
pub fn backend_base_url() -> &'static str {
    BACKEND_BASE_URL
        .get_or_init(|| normalize(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)))
}

fn normalize(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}
