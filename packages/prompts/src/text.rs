// ABOUTME: Small text helpers for assembling prompt clauses
// ABOUTME: Keeps optional clauses free of doubled or missing punctuation

/// Trim `text` and make sure it ends with sentence punctuation
pub(crate) fn sentence(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

/// Trimmed value, or `fallback` when blank
pub(crate) fn or_unspecified<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
