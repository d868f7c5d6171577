use crate::config::CourseCrawlerConfig;
use crate::crawlers::fetcher::Fetcher;
use crate::crawlers::pagination::PaginationExpander;
use crate::crawlers::renderer::Renderer;
use crate::crawlers::subjects::discover_subjects;
use crate::error::{CrawlError, ExtractError};
use crate::filter::LinkFilter;
use crate::parsers::extract_course;
use crate::results::{Course, CrawlSummary};
use crate::store::JsonStore;
use std::time::Duration;

/// Fetches one course detail page and extracts it, after the politeness delay
pub async fn fetch_course<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    delay: Duration,
) -> Result<Course, ExtractError> {
    ::log::debug!("Scraping {}", url);
    tokio::time::sleep(delay).await;

    let page = fetcher.fetch(url).await?.error_for_status()?;
    extract_course(&page.body)
}

/// Runs a whole crawl: subjects, then each subject's courses, saving every
/// course as soon as it is extracted.
pub struct CourseCrawler<F> {
    config: CourseCrawlerConfig,
    fetcher: F,
    store: JsonStore,
    subject_filter: LinkFilter,
    course_filter: LinkFilter,
}

impl<F: Fetcher> CourseCrawler<F> {
    /// Builds a crawler, compiling the link patterns from the configuration
    pub fn new(config: CourseCrawlerConfig, fetcher: F, store: JsonStore) -> Result<Self, CrawlError> {
        let subject_filter = LinkFilter::new(&config.subject_pattern, &config.base_url)?;
        let course_filter = LinkFilter::new(&config.course_pattern, &config.base_url)?;
        Ok(Self {
            config,
            fetcher,
            store,
            subject_filter,
            course_filter,
        })
    }

    pub fn config(&self) -> &CourseCrawlerConfig {
        &self.config
    }

    /// Crawls with the given renderer and shuts it down afterwards, whether
    /// or not the crawl succeeded.
    pub async fn run<R: Renderer>(&self, mut renderer: R) -> Result<CrawlSummary, CrawlError> {
        let outcome = self.crawl(&mut renderer).await;

        match renderer.shutdown().await {
            Ok(()) => ::log::debug!("Renderer session closed"),
            Err(e) => ::log::warn!("Failed to close renderer session: {}", e),
        }

        outcome
    }

    async fn crawl<R: Renderer>(&self, renderer: &mut R) -> Result<CrawlSummary, CrawlError> {
        let subjects = discover_subjects(
            &self.fetcher,
            &self.config.seed_url,
            &self.subject_filter,
            self.config.delays.index(),
        )
        .await
        .map_err(CrawlError::Discovery)?;

        let mut summary = CrawlSummary {
            subjects: subjects.len(),
            ..CrawlSummary::default()
        };

        if subjects.is_empty() {
            ::log::info!(
                "No subjects were found at {}. Check the seed URL and subject pattern.",
                self.config.seed_url
            );
            return Ok(summary);
        }

        let expander = PaginationExpander::new(
            &self.config.load_more_id,
            self.config.delays.settle(),
            self.config.delays.load_more(),
        );

        for subject in &subjects {
            self.crawl_subject(renderer, &expander, subject, &mut summary)
                .await?;
        }

        Ok(summary)
    }

    /// Expands one subject and saves its courses. Only a failed save is
    /// returned as an error; everything else is logged and counted.
    async fn crawl_subject<R: Renderer>(
        &self,
        renderer: &mut R,
        expander: &PaginationExpander<'_>,
        subject: &str,
        summary: &mut CrawlSummary,
    ) -> Result<(), CrawlError> {
        let Some(subject_url) = self.subject_filter.resolve(subject) else {
            ::log::warn!("Skipping subject {}: not a resolvable link", subject);
            summary.failed_subjects += 1;
            return Ok(());
        };
        ::log::info!("Getting courses from: {}", subject_url);

        let expanded = match expander
            .expand(renderer, &subject_url, &self.course_filter)
            .await
        {
            Ok(expanded) => expanded,
            Err(e) => {
                ::log::warn!("Skipping subject {}: {}", subject_url, e);
                summary.failed_subjects += 1;
                return Ok(());
            }
        };

        if expanded.course_urls.is_empty() {
            ::log::info!(
                "No courses were found at {}. Check the course pattern and that the subject page is valid.",
                subject_url
            );
            summary.empty_subjects += 1;
            return Ok(());
        }

        for url in &expanded.course_urls {
            match fetch_course(&self.fetcher, url, self.config.delays.course()).await {
                Ok(course) => {
                    ::log::debug!("Adding course:\n{}", course);
                    let path = self.store.save(&course)?;
                    ::log::debug!("Saved {}", path.display());
                    summary.courses_saved += 1;
                }
                Err(e) => {
                    ::log::debug!("Skipping course {}: {}", url, e);
                    summary.courses_skipped += 1;
                }
            }
        }

        ::log::info!(
            "Finished {}: {} courses saved so far",
            subject_url,
            summary.courses_saved
        );
        Ok(())
    }
}
