//! Input validation utilities.
//!
//! Symptom tokens arriving from clients are checked against the catalog vocabulary before they
//! reach the ranker, so an unknown or misspelt token is reported back instead of silently
//! diluting the patient match percentage.

use crate::error::{EngineError, EngineResult};
use crate::model::SymptomReport;
use medicare_types::Symptom;
use std::collections::BTreeSet;

/// Maximum number of symptoms accepted in one report.
pub const MAX_REPORTED_SYMPTOMS: usize = 100;

/// Validates a patient report against the catalog vocabulary.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if the report is empty, larger than
/// [`MAX_REPORTED_SYMPTOMS`], or names symptoms outside `vocabulary`. The message lists every
/// unknown token.
pub fn validate_report(report: &SymptomReport, vocabulary: &BTreeSet<Symptom>) -> EngineResult<()> {
    if report.is_empty() {
        return Err(EngineError::InvalidInput("symptoms are required".into()));
    }

    if report.len() > MAX_REPORTED_SYMPTOMS {
        return Err(EngineError::InvalidInput(format!(
            "at most {} symptoms may be reported",
            MAX_REPORTED_SYMPTOMS
        )));
    }

    let unknown: Vec<&str> = report
        .iter()
        .filter(|s| !vocabulary.contains(*s))
        .map(Symptom::as_str)
        .collect();

    if !unknown.is_empty() {
        return Err(EngineError::InvalidInput(format!(
            "unknown symptoms: {}",
            unknown.join(", ")
        )));
    }

    Ok(())
}

/// Validates a free-text suggestion query, returning it trimmed.
pub fn validate_query(query: &str) -> EngineResult<&str> {
    const MAX_QUERY_LEN: usize = 50;

    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput(
            "query parameter is required".into(),
        ));
    }
    if trimmed.len() > MAX_QUERY_LEN {
        return Err(EngineError::InvalidInput(format!(
            "query exceeds maximum length of {} characters",
            MAX_QUERY_LEN
        )));
    }
    Ok(trimmed)
}
