use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub filter: FilterDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Request timeout in seconds, applied to each feed fetch
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Largest feed body accepted, in bytes
    #[serde(default = "default_max_feed_bytes")]
    pub max_feed_bytes: usize,
    /// Number of feeds fetched in parallel (1 = one at a time)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// HTTP proxy URL for feed fetching (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout(),
            max_feed_bytes: default_max_feed_bytes(),
            concurrency: default_concurrency(),
            proxy_url: None,
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// Job board feeds, always fetched before any extra feeds given per run
    #[serde(default = "default_job_feeds")]
    pub jobs: Vec<String>,
    /// Course, call-for-papers and fellowship feeds (unfiltered)
    #[serde(default)]
    pub courses: Vec<String>,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            jobs: default_job_feeds(),
            courses: Vec::new(),
        }
    }
}

/// Filter values used when the caller does not override them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDefaults {
    /// Salary floor in GBP
    #[serde(default = "default_min_salary")]
    pub min_salary: u64,
    /// Focus keywords (any match keeps an entry)
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            min_salary: default_min_salary(),
            keywords: default_keywords(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    20
}

fn default_max_feed_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_concurrency() -> usize {
    4
}

fn default_user_agent() -> String {
    concat!("jobwatch/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_job_feeds() -> Vec<String> {
    // Policy and advocacy roles
    vec!["https://www.w4mpjobs.org/SearchJobsRSS.aspx".to_string()]
}

fn default_min_salary() -> u64 {
    60_000
}

fn default_keywords() -> Vec<String> {
    [
        "climate",
        "environment",
        "human rights",
        "international law",
        "policy",
        "litigation",
        "strategic litigation",
        "accountability",
        "research",
        "fellow",
        "lecturer",
        "counsel",
        "advisor",
        "adviser",
        "icj",
        "iacthr",
        "inter-american",
        "state responsibility",
        "due diligence",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl AppConfig {
    /// Load configuration from `path` (usually `config_path()`), falling back to defaults if it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/jobwatch/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("jobwatch")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.filter.min_salary, 60_000);
        assert_eq!(config.feeds.jobs.len(), 1);
        assert!(config.feeds.courses.is_empty());
        assert!(config.filter.keywords.iter().any(|k| k == "climate"));
        assert_eq!(config.sync.request_timeout_secs, 20);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml(
            r#"
[filter]
min_salary = 45000

[feeds]
courses = ["https://example.com/calls.xml"]
"#,
        )
        .unwrap();

        assert_eq!(config.filter.min_salary, 45_000);
        assert!(!config.filter.keywords.is_empty());
        assert_eq!(config.feeds.courses, vec!["https://example.com/calls.xml"]);
        assert_eq!(config.feeds.jobs, default_job_feeds());
        assert_eq!(config.sync.concurrency, 4);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[filter]\nmin_salary = \"lots\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_save_then_load_from_file() {
        let dir = std::env::temp_dir().join(format!("jobwatch-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        assert_eq!(
            AppConfig::load_from(&path).unwrap().filter.min_salary,
            default_min_salary()
        );

        let mut config = AppConfig::default();
        config.filter.min_salary = 72_000;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.filter.min_salary, 72_000);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_toml_round_trip_keeps_feeds() {
        let mut config = AppConfig::default();
        config.feeds.courses.push("https://example.com/fellowships.rss".to_string());

        let text = config.to_toml().unwrap();
        let loaded = AppConfig::from_toml(&text).unwrap();
        assert_eq!(loaded.feeds.courses, config.feeds.courses);
    }
}
