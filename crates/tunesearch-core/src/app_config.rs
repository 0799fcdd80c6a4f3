use url::Url;

/// Public iTunes Search API endpoint.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://itunes.apple.com/search";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub search_base_url: Url,
    /// Total request timeout applied by the HTTP transport. `None` disables it.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub default_country: String,
    pub default_lang: String,
    pub default_result_limit: u32,
}
