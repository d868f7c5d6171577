use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder stored in any course field that could not be extracted
pub const NA: &str = "NA";

/// Returns the placeholder as an owned string
pub fn na() -> String {
    NA.to_string()
}

/// Every course field except the name, defaulting to "NA"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetails {
    #[serde(rename = "instructor(s)")]
    pub instructors: String,
    pub university: String,
    pub provider: String,
    pub start: String,
    pub duration: String,
    pub language: String,
    pub description: String,
}

impl Default for CourseDetails {
    fn default() -> Self {
        Self {
            instructors: na(),
            university: na(),
            provider: na(),
            start: na(),
            duration: na(),
            language: na(),
            description: na(),
        }
    }
}

/// One course scraped from a detail page.
///
/// Serializes to a flat JSON object with the keys `name`, `instructor(s)`,
/// `university`, `provider`, `start`, `duration`, `language` and
/// `description`. Deserializing applies the same name check as [`Course::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    name: String,

    #[serde(flatten)]
    details: CourseDetails,
}

impl Course {
    /// Creates a course, rejecting a blank or placeholder name
    pub fn new(name: impl Into<String>, details: CourseDetails) -> Result<Self, ExtractError> {
        let name = name.into();
        if name.trim().is_empty() || name == NA {
            return Err(ExtractError::MissingTitle);
        }
        Ok(Self { name, details })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &CourseDetails {
        &self.details
    }

    pub fn provider(&self) -> &str {
        &self.details.provider
    }
}

/// Unchecked shape of a stored course
#[derive(Deserialize)]
struct CourseRecord {
    name: String,

    #[serde(flatten)]
    details: CourseDetails,
}

impl TryFrom<CourseRecord> for Course {
    type Error = ExtractError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        Course::new(record.name, record.details)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.details;
        write!(
            f,
            "Name: {}, Instructor(s): {}, University: {}, Provider: {}, Start: {}, Duration: {}, Language: {}\nDescription: {}",
            self.name,
            d.instructors,
            d.university,
            d.provider,
            d.start,
            d.duration,
            d.language,
            d.description
        )
    }
}

/// Counters reported at the end of a crawl run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrawlSummary {
    /// Subjects found on the index page
    pub subjects: usize,
    /// Subjects whose listing yielded no course links
    pub empty_subjects: usize,
    /// Subjects skipped because their link or page could not be loaded
    pub failed_subjects: usize,
    pub courses_saved: usize,
    pub courses_skipped: usize,
}
