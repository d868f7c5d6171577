pub mod crawler;
pub mod fetcher;
pub mod pagination;
pub mod renderer;
pub mod subjects;

#[cfg(test)]
mod tests;

pub use crawler::{CourseCrawler, fetch_course};
pub use fetcher::{FetchedPage, Fetcher, HttpFetcher};
pub use pagination::{ExpandedSubject, PaginationExpander};
pub use renderer::{Renderer, WebDriverRenderer};
pub use subjects::discover_subjects;
