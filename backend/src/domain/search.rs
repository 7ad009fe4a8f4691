//! Case-insensitive substring filtering used by the list views.

/// True when `haystack` contains `needle` ignoring ASCII-and-Unicode case.
///
/// An empty needle matches everything, which is what gives `list("")` its
/// return-all behaviour.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when any of `fields` contains `query`, case-insensitively.
#[must_use]
pub fn any_field_matches<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    fields
        .into_iter()
        .any(|field| contains_ignore_case(field, query))
}
