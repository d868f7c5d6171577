use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a course crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCrawlerConfig {
    /// Index page listing every subject
    #[serde(default = "default_seed_url")]
    pub seed_url: String,

    /// Site root that subject and course hrefs are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Regex matched against hrefs on the index page
    #[serde(default = "default_subject_pattern")]
    pub subject_pattern: String,

    /// Regex matched against hrefs on a subject page
    #[serde(default = "default_course_pattern")]
    pub course_pattern: String,

    /// Element id of the "load more" control on subject pages
    #[serde(default = "default_load_more_id")]
    pub load_more_id: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Directory that course JSON files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Log every scraped and skipped course
    #[serde(default)]
    pub verbose: bool,

    /// Timeout for each HTTP request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub delays: CrawlDelays,
}

/// Fixed waits between crawl steps, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlDelays {
    /// Wait after fetching the subject index, before parsing it
    pub index_ms: u64,
    /// Wait after navigating to a subject page
    pub settle_ms: u64,
    /// Wait after each click on the load-more control
    pub load_more_ms: u64,
    /// Wait before fetching each course page
    pub course_ms: u64,
}

impl Default for CrawlDelays {
    fn default() -> Self {
        Self {
            index_ms: 3000,
            settle_ms: 1500,
            load_more_ms: 500,
            course_ms: 1000,
        }
    }
}

impl CrawlDelays {
    /// No waiting at all
    pub fn none() -> Self {
        Self {
            index_ms: 0,
            settle_ms: 0,
            load_more_ms: 0,
            course_ms: 0,
        }
    }

    pub fn index(&self) -> Duration {
        Duration::from_millis(self.index_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn load_more(&self) -> Duration {
        Duration::from_millis(self.load_more_ms)
    }

    pub fn course(&self) -> Duration {
        Duration::from_millis(self.course_ms)
    }
}

impl Default for CourseCrawlerConfig {
    fn default() -> Self {
        Self {
            seed_url: default_seed_url(),
            base_url: default_base_url(),
            subject_pattern: default_subject_pattern(),
            course_pattern: default_course_pattern(),
            load_more_id: default_load_more_id(),
            webdriver_url: default_webdriver_url(),
            output_dir: default_output_dir(),
            verbose: false,
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
            delays: CrawlDelays::default(),
        }
    }
}

impl CourseCrawlerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the WebDriver URL with the `WEBDRIVER_URL` environment variable if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL")
            && !webdriver_url.is_empty()
        {
            self.webdriver_url = webdriver_url;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_seed_url() -> String {
    "https://www.coursebuffet.com/areas".to_string()
}

fn default_base_url() -> String {
    "https://www.coursebuffet.com".to_string()
}

fn default_subject_pattern() -> String {
    "/sub/".to_string()
}

fn default_course_pattern() -> String {
    "/course/".to_string()
}

fn default_load_more_id() -> String {
    "load-more-button".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("courses")
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("course-crawl/", env!("CARGO_PKG_VERSION")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = CourseCrawlerConfig::from_json("{}").unwrap();
        assert_eq!(config.seed_url, "https://www.coursebuffet.com/areas");
        assert_eq!(config.subject_pattern, "/sub/");
        assert_eq!(config.course_pattern, "/course/");
        assert_eq!(config.load_more_id, "load-more-button");
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert!(!config.verbose);
        assert_eq!(config.delays, CrawlDelays::default());
        assert_eq!(config.delays.settle(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_delays() {
        let config = CourseCrawlerConfig::from_json(
            r#"{"output_dir": "/tmp/out", "verbose": true, "delays": {"course_ms": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert!(config.verbose);
        assert_eq!(config.delays.course_ms, 0);
        assert_eq!(config.delays.index_ms, 3000);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crawl.json");
        fs::write(&path, r#"{"webdriver_url": "http://localhost:9515"}"#).unwrap();
        let config = CourseCrawlerConfig::from_file(&path).unwrap();
        assert_eq!(config.webdriver_url, "http://localhost:9515");

        assert!(matches!(
            CourseCrawlerConfig::from_file(dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
        assert!(matches!(
            CourseCrawlerConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
