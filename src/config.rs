//! Dashboard Configuration
//!
//! Where the backend lives and how many rows a page shows.

/// Origin used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Players shown per table page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// `<meta name="tracker-api-base" content="...">` overrides the build-time origin
const META_NAME: &str = "tracker-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin without trailing slash; request paths start with `/`
    pub base_url: String,
    pub per_page: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl ApiConfig {
    /// Pick the origin: page meta tag, then build-time `TRACKER_API_BASE`, then the default
    pub fn resolve(meta: Option<&str>, build_time: Option<&str>) -> Self {
        let base = [meta, build_time]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE);

        Self {
            base_url: base.trim_end_matches('/').to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Read the configuration from the current document
    pub fn from_env() -> Self {
        let meta = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{}\"]", META_NAME)).ok().flatten())
            .and_then(|el| el.get_attribute("content"));

        let config = Self::resolve(meta.as_deref(), option_env!("TRACKER_API_BASE"));
        log::info!("[config] API base: {}", config.base_url);
        config
    }
}
