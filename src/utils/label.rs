//! Label title normalization.

/// Longest accepted label title, in characters.
pub const MAX_LABEL_LENGTH: usize = 100;

/// Normalizes a label title by trimming surrounding whitespace.
///
/// Inner whitespace is kept, so `"Spring  Boot"` and `"Spring Boot"` are
/// different labels.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_string()
}

/// Normalizes submitted tag titles, dropping blanks and repeats.
///
/// First occurrence wins, so the output keeps submission order.
pub fn normalize_tags<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = normalize_label(tag.as_ref());
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Splits a comma-separated tag list, as typed into the edit form.
pub fn split_tag_list(input: &str) -> Vec<String> {
    normalize_tags(&input.split(',').collect::<Vec<_>>())
}
