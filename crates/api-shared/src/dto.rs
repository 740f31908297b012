//! Request and response bodies shared by the API surfaces.
//!
//! Every type derives `utoipa::ToSchema` so the REST layer can publish it in the OpenAPI
//! document. Conversions from core types live here so handlers stay thin.

use medicare_core::{Diagnosis, DiagnosisResult, Disease, DiseaseSummary, Medicine, Symptom};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
    /// Number of diseases in the loaded catalog.
    pub diseases: usize,
    /// Number of distinct symptoms in the loaded catalog.
    pub symptoms: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListSymptomsRes {
    pub symptoms: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestSymptomsQuery {
    /// Case-insensitive fragment of a symptom token.
    pub q: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestSymptomsRes {
    pub query: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiseaseInfo {
    pub id: u32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListDiseasesRes {
    pub diseases: Vec<DiseaseInfo>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MedicineInfo {
    pub name: String,
    pub dosage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnoseReq {
    /// Symptom tokens reported by the patient, e.g. `["fever", "dry_cough"]`.
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiseaseMatch {
    pub disease: DiseaseInfo,
    pub matched_symptoms: Vec<String>,
    pub unmatched_symptoms: Vec<String>,
    pub disease_match_pct: f64,
    pub patient_match_pct: f64,
    pub weighted_score: f64,
    /// `weighted_score` as a fraction in `[0, 1]`.
    pub confidence: f64,
    pub medicines: Vec<MedicineInfo>,
    pub precautions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnoseRes {
    /// Matching diseases, best first.
    pub results: Vec<DiseaseMatch>,
    pub top_disease: Option<DiseaseInfo>,
    /// The reported symptoms after deduplication.
    pub symptoms_analyzed: Vec<String>,
    pub total_matches: usize,
}

fn tokens<'a>(symptoms: impl IntoIterator<Item = &'a Symptom>) -> Vec<String> {
    symptoms.into_iter().map(|s| s.as_str().to_owned()).collect()
}

impl ListSymptomsRes {
    pub fn new(symptoms: Vec<Symptom>) -> Self {
        let symptoms = tokens(&symptoms);
        Self {
            count: symptoms.len(),
            symptoms,
        }
    }
}

impl SuggestSymptomsRes {
    pub fn new(query: impl Into<String>, suggestions: Vec<Symptom>) -> Self {
        Self {
            query: query.into(),
            suggestions: tokens(&suggestions),
        }
    }
}

impl ListDiseasesRes {
    pub fn new(diseases: Vec<DiseaseSummary>) -> Self {
        let diseases: Vec<DiseaseInfo> = diseases.into_iter().map(DiseaseInfo::from).collect();
        Self {
            count: diseases.len(),
            diseases,
        }
    }
}

impl From<DiseaseSummary> for DiseaseInfo {
    fn from(summary: DiseaseSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            description: summary.description,
        }
    }
}

impl From<&Disease> for DiseaseInfo {
    fn from(disease: &Disease) -> Self {
        DiseaseSummary::from(disease).into()
    }
}

impl From<&Medicine> for MedicineInfo {
    fn from(medicine: &Medicine) -> Self {
        Self {
            name: medicine.name.clone(),
            dosage: medicine.dosage.clone(),
        }
    }
}

impl From<&DiagnosisResult> for DiseaseMatch {
    fn from(result: &DiagnosisResult) -> Self {
        Self {
            disease: DiseaseInfo::from(&result.disease),
            matched_symptoms: tokens(&result.matched_symptoms),
            unmatched_symptoms: tokens(&result.unmatched_symptoms),
            disease_match_pct: result.disease_match_pct,
            patient_match_pct: result.patient_match_pct,
            weighted_score: result.weighted_score,
            confidence: result.confidence(),
            medicines: result.medicines.iter().map(MedicineInfo::from).collect(),
            precautions: result.precautions.clone(),
        }
    }
}

impl From<&Diagnosis> for DiagnoseRes {
    fn from(diagnosis: &Diagnosis) -> Self {
        Self {
            results: diagnosis.results.iter().map(DiseaseMatch::from).collect(),
            top_disease: diagnosis.top_disease().map(DiseaseInfo::from),
            symptoms_analyzed: tokens(&diagnosis.symptoms),
            total_matches: diagnosis.results.len(),
        }
    }
}
