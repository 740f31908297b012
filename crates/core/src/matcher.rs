//! Symptom-to-disease matching and ranking.
//!
//! Every disease is scored on two coverages:
//!
//! - **disease match**: how much of the disease's symptom profile the patient shows, and
//! - **patient match**: how much of the patient's report the disease explains.
//!
//! The weighted score blends them 70/30 in favour of disease match. All three figures are
//! percentages rounded to two decimals, half away from zero. Results are ordered by weighted
//! score, highest first, with ties broken by ascending disease id.
//!
//! Ranking is a pure function of its arguments: it performs no I/O and borrows the catalog for
//! the duration of the call only.

use crate::constants::{DISEASE_MATCH_WEIGHT, PATIENT_MATCH_WEIGHT, SCORE_DECIMALS};
use crate::error::{EngineError, EngineResult};
use crate::model::{DiagnosisResult, Disease, SymptomReport};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Ranks `catalog` against a patient's reported symptoms.
///
/// Diseases without any known symptom are skipped, and diseases sharing no symptom with the
/// report are left out of the output. An empty catalog yields an empty list.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if `report` is empty.
pub fn rank(catalog: &[Disease], report: &SymptomReport) -> EngineResult<Vec<DiagnosisResult>> {
    if report.is_empty() {
        return Err(EngineError::InvalidInput(
            "at least one symptom is required".into(),
        ));
    }

    let mut results: Vec<DiagnosisResult> = catalog
        .iter()
        .filter_map(|disease| score(disease, report))
        .collect();

    results.sort_by(by_score_then_id);

    tracing::debug!(
        diseases = catalog.len(),
        reported = report.len(),
        matched = results.len(),
        "ranked catalog against symptom report"
    );

    Ok(results)
}

/// Scores one disease, or `None` when it has no symptoms or nothing matched.
fn score(disease: &Disease, report: &SymptomReport) -> Option<DiagnosisResult> {
    if disease.symptoms.is_empty() {
        return None;
    }

    let (matched, unmatched): (BTreeSet<_>, BTreeSet<_>) = disease
        .symptoms
        .iter()
        .cloned()
        .partition(|symptom| report.contains(symptom));

    if matched.is_empty() {
        return None;
    }

    let disease_match_pct = percentage(matched.len(), disease.symptoms.len());
    let patient_match_pct = percentage(matched.len(), report.len());
    let weighted_score =
        DISEASE_MATCH_WEIGHT * disease_match_pct + PATIENT_MATCH_WEIGHT * patient_match_pct;

    Some(DiagnosisResult {
        disease: disease.clone(),
        matched_symptoms: matched,
        unmatched_symptoms: unmatched,
        disease_match_pct: round_score(disease_match_pct),
        patient_match_pct: round_score(patient_match_pct),
        weighted_score: round_score(weighted_score),
        medicines: disease.medicines.clone(),
        precautions: disease.precautions.clone(),
    })
}

fn percentage(part: usize, whole: usize) -> f64 {
    100.0 * part as f64 / whole as f64
}

/// Rounds to [`SCORE_DECIMALS`] places, half away from zero.
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (value * factor).round() / factor
}

fn by_score_then_id(a: &DiagnosisResult, b: &DiagnosisResult) -> Ordering {
    b.weighted_score
        .total_cmp(&a.weighted_score)
        .then_with(|| a.disease.id.cmp(&b.disease.id))
}
