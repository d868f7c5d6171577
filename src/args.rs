use clap::Parser;
use course_crawl::CourseCrawlerConfig;
use course_crawl::error::ConfigError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "course-crawl")]
#[command(about = "Crawls course listings and saves each course as a JSON file")]
#[command(version)]
pub struct Args {
    /// Path to a JSON crawler configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Index page listing every subject
    #[arg(long)]
    pub seed_url: Option<String>,

    /// URL of the WebDriver server (overrides WEBDRIVER_URL)
    #[arg(short, long)]
    pub webdriver_url: Option<String>,

    /// Directory that course JSON files are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Log every scraped and skipped course
    #[arg(short, long)]
    pub verbose: bool,
}

/// Build the crawler configuration: file (or defaults), then environment, then flags
pub fn resolve_config(args: &Args) -> Result<CourseCrawlerConfig, ConfigError> {
    let config = match &args.config {
        Some(path) => CourseCrawlerConfig::from_file(path)?,
        None => CourseCrawlerConfig::default(),
    };
    let mut config = config.with_env_overrides();

    if let Some(seed_url) = &args.seed_url {
        config.seed_url = seed_url.clone();
    }
    if let Some(webdriver_url) = &args.webdriver_url {
        config.webdriver_url = webdriver_url.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    config.verbose |= args.verbose;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crawl.json");
        std::fs::write(&path, r#"{"output_dir": "from-file", "course_pattern": "/c/"}"#).unwrap();

        let args = Args::try_parse_from([
            "course-crawl",
            "--config",
            path.to_str().unwrap(),
            "-o",
            "from-flag",
            "-v",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("from-flag"));
        assert_eq!(config.course_pattern, "/c/");
        assert!(config.verbose);
    }

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::try_parse_from(["course-crawl"]).unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.seed_url, "https://www.coursebuffet.com/areas");
        assert!(!config.verbose);
    }
}
