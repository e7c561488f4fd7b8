use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Commercial places-search API credential. Absent means the commercial
    /// source reports itself unavailable and the fallback chain starts at the
    /// community source.
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub overpass_url: String,
    pub discovery_timeout_secs: u64,
    pub discovery_user_agent: String,
    pub search_radius_m: u32,
    pub result_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("overpass_url", &self.overpass_url)
            .field("discovery_timeout_secs", &self.discovery_timeout_secs)
            .field("discovery_user_agent", &self.discovery_user_agent)
            .field("search_radius_m", &self.search_radius_m)
            .field("result_limit", &self.result_limit)
            .finish()
    }
}
