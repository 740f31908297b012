//! Symptom autocompletion.

use medicare_types::Symptom;

/// Returns up to `limit` symptoms whose token contains `query`, ignoring ASCII case.
///
/// `symptoms` is expected in display order (the catalog vocabulary is sorted); matches keep
/// that order.
pub fn suggest<'a>(
    symptoms: impl IntoIterator<Item = &'a Symptom>,
    query: &str,
    limit: usize,
) -> Vec<Symptom> {
    let needle = query.to_ascii_lowercase();
    symptoms
        .into_iter()
        .filter(|s| s.as_str().to_ascii_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}
