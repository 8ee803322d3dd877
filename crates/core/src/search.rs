//! Free-text search helpers shared by the table views.

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// A blank query matches everything, so an empty search box leaves a table
/// unfiltered.
pub fn matches_text(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}
