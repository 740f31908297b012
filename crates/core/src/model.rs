//! Catalog and diagnosis data types.

use crate::error::EngineResult;
use medicare_types::Symptom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A medicine recommended for a disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
}

/// A catalog entry: one disease and everything attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Symptoms medically associated with the disease.
    #[serde(default)]
    pub symptoms: BTreeSet<Symptom>,
    /// Medicines in catalog order.
    #[serde(default)]
    pub medicines: Vec<Medicine>,
    /// Precautions in catalog order.
    #[serde(default)]
    pub precautions: Vec<String>,
}

/// The identifying fields of a disease, as listed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
}

impl From<&Disease> for DiseaseSummary {
    fn from(disease: &Disease) -> Self {
        Self {
            id: disease.id,
            name: disease.name.clone(),
            description: disease.description.clone(),
        }
    }
}

/// The symptoms a patient reported for one diagnosis request.
///
/// Behaves as an ordered set: duplicates collapse onto their first occurrence, and the order
/// is kept only for display. Scoring never depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomReport {
    ordered: Vec<Symptom>,
    members: BTreeSet<Symptom>,
}

impl SymptomReport {
    pub fn new(symptoms: impl IntoIterator<Item = Symptom>) -> Self {
        symptoms.into_iter().collect()
    }

    /// Builds a report from raw tokens, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Symptom` for the first malformed token.
    pub fn parse<I, S>(raw: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symptoms = raw
            .into_iter()
            .map(Symptom::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(symptoms))
    }

    pub fn contains(&self, symptom: &Symptom) -> bool {
        self.members.contains(symptom)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Symptoms in first-reported order.
    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.ordered.iter()
    }
}

impl FromIterator<Symptom> for SymptomReport {
    fn from_iter<T: IntoIterator<Item = Symptom>>(iter: T) -> Self {
        let mut report = SymptomReport::default();
        for symptom in iter {
            if report.members.insert(symptom.clone()) {
                report.ordered.push(symptom);
            }
        }
        report
    }
}

/// How well one disease explains a patient's report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisResult {
    pub disease: Disease,
    pub matched_symptoms: BTreeSet<Symptom>,
    pub unmatched_symptoms: BTreeSet<Symptom>,
    /// Share of the disease's symptom profile present in the report, in percent.
    pub disease_match_pct: f64,
    /// Share of the report explained by the disease, in percent.
    pub patient_match_pct: f64,
    pub weighted_score: f64,
    pub medicines: Vec<Medicine>,
    pub precautions: Vec<String>,
}

impl DiagnosisResult {
    /// The weighted score as a fraction in `[0, 1]`.
    pub fn confidence(&self) -> f64 {
        self.weighted_score / 100.0
    }
}

/// Ranked outcome of one diagnosis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    /// The analysed report, deduplicated, in reported order.
    pub symptoms: Vec<Symptom>,
    pub results: Vec<DiagnosisResult>,
}

impl Diagnosis {
    /// The best-ranked disease, if any disease matched.
    pub fn top_disease(&self) -> Option<&Disease> {
        self.results.first().map(|r| &r.disease)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(token: &str) -> Symptom {
        Symptom::new(token).unwrap()
    }

    #[test]
    fn report_collapses_duplicates_keeping_first_order() {
        let report = SymptomReport::new([s("fever"), s("chills"), s("fever"), s("cough")]);

        assert_eq!(report.len(), 3);
        let order: Vec<&str> = report.iter().map(Symptom::as_str).collect();
        assert_eq!(order, ["fever", "chills", "cough"]);
        assert!(report.contains(&s("chills")));
        assert!(!report.contains(&s("rash")));
    }

    #[test]
    fn report_parse_rejects_bad_tokens() {
        let err = SymptomReport::parse(["fever", "bad token"]).unwrap_err();
        assert!(err.is_client_error());

        let empty = SymptomReport::parse(Vec::<String>::new()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn disease_yaml_defaults_optional_lists() {
        let disease: Disease =
            serde_yaml::from_str("id: 4\nname: Cold\nsymptoms: [sneezing]\n").unwrap();

        assert_eq!(disease.description, "");
        assert!(disease.medicines.is_empty());
        assert!(disease.precautions.is_empty());
        assert!(disease.symptoms.contains("sneezing"));
    }
}
