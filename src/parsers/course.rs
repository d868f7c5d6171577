//! Field extraction for course detail pages.
//!
//! Every step returns an `Option` and the caller substitutes "NA" for
//! `None`. Only a missing title or classification header fails a page.

use crate::error::ExtractError;
use crate::results::{Course, CourseDetails, na};
use crate::utils::{non_empty, strip_label};
use percent_encoding::percent_decode_str;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h4.coursepage-coursetitle"));
static CLASSIFICATION: LazyLock<Selector> = LazyLock::new(|| selector("div.coursepage-cbtitle"));
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector("div.coursedetails-description"));
static INFO_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector("ul.CourseInfoTab-list1"));
static ICON: LazyLock<Selector> = LazyLock::new(|| selector("div.courseinfoimg"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));

const INSTRUCTORS_LABEL: &str = "instructor(s)";
const PROVIDER_PATH_MARKER: &str = "providers";

/// Fields read from the first info block
#[derive(Debug, Default, PartialEq, Eq)]
struct Identity {
    instructors: Option<String>,
    university: Option<String>,
    provider: Option<String>,
}

/// Fields read from the second info block
#[derive(Debug, Default, PartialEq, Eq)]
struct Schedule {
    start: Option<String>,
    duration: Option<String>,
    language: Option<String>,
}

/// Extracts a course from the HTML of its detail page
pub fn extract_course(html: &str) -> Result<Course, ExtractError> {
    let doc = Html::parse_document(html);

    let (name, classification) = title(&doc).ok_or(ExtractError::MissingTitle)?;
    ::log::debug!("Extracting '{}' ({})", name, classification);

    let description = description(&doc);
    if description.is_none() {
        ::log::debug!("No description was found for '{}'", name);
    }

    // Pages are expected to carry exactly two info blocks; fewer leave
    // fields at "NA" and any beyond the second are ignored.
    let mut blocks = doc.select(&INFO_BLOCK);
    let identity = blocks.next().map(read_identity).unwrap_or_default();
    let schedule = blocks.next().map(read_schedule).unwrap_or_default();

    let details = CourseDetails {
        instructors: identity.instructors.unwrap_or_else(na),
        university: identity.university.unwrap_or_else(na),
        provider: identity.provider.unwrap_or_else(na),
        start: schedule.start.unwrap_or_else(na),
        duration: schedule.duration.unwrap_or_else(na),
        language: schedule.language.unwrap_or_else(na),
        description: description.unwrap_or_else(na),
    };

    Course::new(name, details)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Course title and the subject classification from the page header.
/// `None` if either is missing or the title is blank.
fn title(doc: &Html) -> Option<(String, String)> {
    let name = doc.select(&TITLE).next().map(text_of)?;
    let header = doc.select(&CLASSIFICATION).next()?;
    let classification = header.select(&ANCHOR).next().map(text_of)?;
    let classification = classification
        .split(" - ")
        .next()
        .unwrap_or_default()
        .to_string();

    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), classification))
}

/// First paragraph of the description section. Defaults to "NA".
fn description(doc: &Html) -> Option<String> {
    let section = doc.select(&DESCRIPTION).next()?;
    section
        .select(&PARAGRAPH)
        .next()
        .map(text_of)
        .and_then(non_empty)
}

fn read_identity(block: ElementRef<'_>) -> Identity {
    let instructors = block
        .select(&LIST_ITEM)
        .next()
        .map(|li| strip_label(&text_of(li), INSTRUCTORS_LABEL))
        .and_then(non_empty);

    let icons: Vec<Option<&str>> = block
        .select(&ICON)
        .map(|div| {
            div.select(&IMG)
                .next()
                .and_then(|img| img.value().attr("src"))
        })
        .collect();

    let (university, provider) = match icons.as_slice() {
        [] => (None, None),
        [Some(src)] if src.contains(PROVIDER_PATH_MARKER) => (None, icon_name(src)),
        [only] => (only.and_then(icon_name), None),
        [first, second, ..] => (first.and_then(icon_name), second.and_then(icon_name)),
    };

    Identity {
        instructors,
        university,
        provider,
    }
}

fn read_schedule(block: ElementRef<'_>) -> Schedule {
    let mut schedule = Schedule::default();

    for li in block.select(&LIST_ITEM) {
        let Some(label) = li.select(&SPAN).next().map(text_of) else {
            continue;
        };
        let slot = match label.as_str() {
            "Start Date" => &mut schedule.start,
            "Duration" => &mut schedule.duration,
            "Main Language" => &mut schedule.language,
            _ => {
                ::log::trace!("Ignoring info item labelled {:?}", label);
                continue;
            }
        };
        *slot = non_empty(strip_label(&text_of(li), &label));
    }

    schedule
}

/// Recovers an institution name from an icon path such as
/// `/images/university/Massachusetts%20Institute%20of%20Technology.png`.
pub fn icon_name(src: &str) -> Option<String> {
    let file = src.rsplit('/').next().unwrap_or(src);
    let decoded = percent_decode_str(file).decode_utf8_lossy();
    let keep = decoded.chars().count().saturating_sub(4);
    non_empty(decoded.chars().take(keep).collect())
}
