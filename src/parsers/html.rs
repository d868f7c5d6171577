use crate::filter::LinkFilter;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use std::sync::LazyLock;

static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

/// Parses HTML content and only extracts links (no text)
pub fn parse_links_only(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    doc.select(&LINK)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect()
}

/// Returns the distinct hrefs on the page that match the filter's pattern
pub fn matching_links(html: &str, filter: &LinkFilter) -> BTreeSet<String> {
    let links: BTreeSet<String> = parse_links_only(html)
        .into_iter()
        .filter(|href| filter.matches(href))
        .collect();

    ::log::debug!("HTML parser found {} matching links", links.len());
    if !links.is_empty() {
        ::log::trace!(
            "First few links: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    links
}
