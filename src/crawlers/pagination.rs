use crate::crawlers::renderer::Renderer;
use crate::error::RenderError;
use crate::filter::LinkFilter;
use crate::parsers::html;
use std::collections::BTreeSet;
use std::time::Duration;

/// Course links collected from one fully expanded subject page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSubject {
    /// Absolute course URLs, deduplicated
    pub course_urls: BTreeSet<String>,
    /// Number of times the load-more control was clicked
    pub load_more_clicks: usize,
}

/// Clicks through a subject page's "load more" control until every course
/// link has been revealed.
#[derive(Debug, Clone)]
pub struct PaginationExpander<'a> {
    control_id: &'a str,
    settle_delay: Duration,
    click_delay: Duration,
}

impl<'a> PaginationExpander<'a> {
    pub fn new(control_id: &'a str, settle_delay: Duration, click_delay: Duration) -> Self {
        Self {
            control_id,
            settle_delay,
            click_delay,
        }
    }

    /// Loads `subject_url`, expands it and collects the course links matching `filter`.
    ///
    /// A page without the control is already fully expanded. Errors are only
    /// returned when the page cannot be loaded or its source read.
    pub async fn expand<R: Renderer>(
        &self,
        renderer: &mut R,
        subject_url: &str,
        filter: &LinkFilter,
    ) -> Result<ExpandedSubject, RenderError> {
        renderer.navigate(subject_url).await?;
        tokio::time::sleep(self.settle_delay).await;

        let load_more_clicks = match renderer.find_control(self.control_id).await {
            Ok(Some(control)) => self.click_until_hidden(renderer, &control).await,
            Ok(None) => {
                ::log::debug!(
                    "No load more control on {}, scraping the current page",
                    subject_url
                );
                0
            }
            Err(e) => {
                ::log::warn!("Could not look up load more control on {}: {}", subject_url, e);
                0
            }
        };

        let source = renderer.source().await?;
        let course_urls: BTreeSet<String> = html::matching_links(&source, filter)
            .iter()
            .filter_map(|href| filter.resolve(href))
            .collect();

        ::log::debug!(
            "Expanded {} with {} clicks, {} course links",
            subject_url,
            load_more_clicks,
            course_urls.len()
        );

        Ok(ExpandedSubject {
            course_urls,
            load_more_clicks,
        })
    }

    /// Clicks the control while it is displayed, waiting after each click.
    /// A failing renderer command ends the loop early.
    async fn click_until_hidden<R: Renderer>(&self, renderer: &mut R, control: &R::Control) -> usize {
        let mut clicks = 0;
        loop {
            match renderer.is_visible(control).await {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    ::log::warn!("Load more visibility check failed after {} clicks: {}", clicks, e);
                    break;
                }
            }

            if let Err(e) = renderer.click(control).await {
                ::log::warn!("Load more click failed after {} clicks: {}", clicks, e);
                break;
            }
            clicks += 1;
            tokio::time::sleep(self.click_delay).await;
        }
        clicks
    }
}
