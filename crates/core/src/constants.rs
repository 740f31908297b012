//! Constants used throughout the MediCare core crate.

/// Weight of the disease coverage percentage in the weighted score.
pub const DISEASE_MATCH_WEIGHT: f64 = 0.7;

/// Weight of the patient coverage percentage in the weighted score.
pub const PATIENT_MATCH_WEIGHT: f64 = 0.3;

/// Number of decimal places kept on reported percentages and scores.
pub const SCORE_DECIMALS: i32 = 2;

/// Default cap on the number of symptom suggestions returned for one query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Built-in seed catalog, used when no catalog file is configured.
pub const SEED_CATALOG_YAML: &str = include_str!("../data/catalog.yaml");
