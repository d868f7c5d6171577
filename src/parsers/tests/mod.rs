
/// Builds a course detail page in the site's markup.
///
/// `info_a` and `info_b` are the inner HTML of the two info lists; `None`
/// leaves that list out of the page entirely.
pub fn course_page(
    title: Option<&str>,
    description: Option<&str>,
    info_a: Option<&str>,
    info_b: Option<&str>,
) -> String {
    let mut html = String::from("<html><body>");
    if let Some(title) = title {
        html.push_str(&format!(
            "<div class=\"coursepage-cbtitle\"><a href=\"/sub/cs\">Computer Science - Courses</a></div>\
             <h4 class=\"coursepage-coursetitle\">{}</h4>",
            title
        ));
    }
    if let Some(description) = description {
        html.push_str(&format!(
            "<div class=\"coursedetails-description\"><p>{}</p><p>Second paragraph</p></div>",
            description
        ));
    }
    for list in [info_a, info_b].into_iter().flatten() {
        html.push_str(&format!("<ul class=\"CourseInfoTab-list1\">{}</ul>", list));
    }
    html.push_str("</body></html>");
    html
}

pub fn icon(src: &str) -> String {
    format!("<div class=\"courseinfoimg\"><img src=\"{}\"></div>", src)
}

pub const SCHEDULE: &str = "<li><span>Start Date</span> Sep 5, 2025</li>\
                            <li><span>Duration</span> 6 weeks</li>\
                            <li><span>Main Language</span> English</li>";
