/// Strips everything except alphanumerics and `._- ` from a filename
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | ' '))
        .collect()
}

/// Drops a label of `label.len()` characters plus one separator from the
/// front of `text`. The label itself is not checked against the text.
pub fn strip_label(text: &str, label: &str) -> String {
    text.chars().skip(label.chars().count() + 1).collect()
}

/// Returns `None` for an empty string
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
