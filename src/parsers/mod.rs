pub mod course;
pub mod html;

#[cfg(test)]
pub(crate) mod tests;

pub use course::extract_course;
pub use html::matching_links;
