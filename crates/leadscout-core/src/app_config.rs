#[derive(Clone)]
pub struct AppConfig {
    pub together_api_key: String,
    pub search_api_key: String,
    pub openai_api_key: String,
    pub together_base_url: String,
    pub searchapi_base_url: String,
    pub openai_base_url: String,
    pub request_timeout_secs: u64,
    pub probe_timeout_secs: u64,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("together_api_key", &"[redacted]")
            .field("search_api_key", &"[redacted]")
            .field("openai_api_key", &"[redacted]")
            .field("together_base_url", &self.together_base_url)
            .field("searchapi_base_url", &self.searchapi_base_url)
            .field("openai_base_url", &self.openai_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("probe_timeout_secs", &self.probe_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}
