use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a document fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Errors raised by the dynamic page renderer
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("WebDriver command failed while {context}: {source}")]
    Command {
        context: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    #[error("no WebDriver server reachable (tried {0})")]
    Unreachable(String),
}

/// Reasons a course detail page did not yield a course
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("course page has no title or classification header")]
    MissingTitle,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Errors raised while persisting a course record
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize course: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Errors that end a crawl run
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("subject discovery failed: {0}")]
    Discovery(#[source] FetchError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
