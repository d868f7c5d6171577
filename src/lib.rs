pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{CourseCrawlerConfig, CrawlDelays};
pub use error::{CrawlError, ExtractError};
pub use results::{Course, CourseDetails, CrawlSummary};

use crawlers::{CourseCrawler, HttpFetcher, WebDriverRenderer};
use store::JsonStore;

/// Runs a complete crawl against the live site.
///
/// Requires a WebDriver server at `config.webdriver_url`. The browser
/// session is closed before this returns, on success and on failure.
pub async fn crawl(config: CourseCrawlerConfig) -> Result<CrawlSummary, CrawlError> {
    let fetcher = HttpFetcher::new(config.request_timeout(), &config.user_agent)?;
    let store = JsonStore::create(&config.output_dir)?;
    let crawler = CourseCrawler::new(config, fetcher, store)?;

    ::log::info!(
        "Saving courses to {}",
        crawler.config().output_dir.display()
    );

    let renderer = WebDriverRenderer::connect(&crawler.config().webdriver_url).await?;
    crawler.run(renderer).await
}
