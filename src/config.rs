use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MATCH_COUNT: usize = 8;
const MAX_MATCH_COUNT: usize = 20;
const DEFAULT_TIMEOUT_SECS: u64 = 90;
const MIN_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub match_count: usize,
    pub store_path: Option<PathBuf>,
    pub force_demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            match_count: DEFAULT_MATCH_COUNT,
            store_path: None,
            force_demo: false,
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call after `dotenvy` has loaded any env files.
    pub fn from_env() -> Self {
        Self::parse(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn parse(get: impl Fn(&str) -> Option<String>) -> Self {
        let opt = |key: &str| get(key).filter(|val| !val.trim().is_empty());
        let timeout_secs = opt("GEMINI_TIMEOUT_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .max(MIN_TIMEOUT_SECS);
        let match_count = opt("MATCH_COUNT")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MATCH_COUNT)
            .clamp(1, MAX_MATCH_COUNT);
        Self {
            api_key: opt("GEMINI_API_KEY").or_else(|| opt("API_KEY")),
            model: opt("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: opt("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            match_count,
            store_path: opt("PRONOSTIQ_STORE").map(PathBuf::from),
            force_demo: opt("PRONOSTIQ_DEMO").is_some_and(|val| is_truthy(&val)),
        }
    }

    pub fn use_demo(&self) -> bool {
        self.force_demo || self.api_key.is_none()
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
