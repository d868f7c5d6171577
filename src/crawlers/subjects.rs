use crate::crawlers::fetcher::Fetcher;
use crate::error::FetchError;
use crate::filter::LinkFilter;
use crate::parsers::html;
use std::collections::BTreeSet;
use std::time::Duration;

/// Fetches the subject index and returns every href matching the filter.
///
/// A transport failure or non-2xx status is returned as an error; the caller
/// treats it as fatal. An empty set is a valid result.
///
/// # Arguments
///
/// * `seed_url` - URL of the index page listing all subjects
/// * `delay` - Wait between the fetch and parsing, for late-rendered content
pub async fn discover_subjects<F: Fetcher + ?Sized>(
    fetcher: &F,
    seed_url: &str,
    filter: &LinkFilter,
    delay: Duration,
) -> Result<BTreeSet<String>, FetchError> {
    ::log::debug!("Gathering subjects in page: {}", seed_url);

    let page = fetcher.fetch(seed_url).await?;
    tokio::time::sleep(delay).await;
    let page = page.error_for_status()?;

    let subjects = html::matching_links(&page.body, filter);

    ::log::info!("Found {} subjects at {}", subjects.len(), seed_url);
    for subject in &subjects {
        ::log::debug!("Subject: {}", subject);
    }

    Ok(subjects)
}
