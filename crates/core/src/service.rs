//! Diagnosis request orchestration.
//!
//! [`DiagnosisService`] is the entry point the API layers call. Each operation takes one catalog
//! snapshot from the injected [`CatalogProvider`] and works on that snapshot alone. The service
//! owns no storage and holds no per-request state, so it can be cloned freely across handlers.

use crate::catalog::CatalogProvider;
use crate::config::CoreConfig;
use crate::error::EngineResult;
use crate::matcher;
use crate::model::{Diagnosis, DiseaseSummary, SymptomReport};
use crate::suggest::suggest;
use crate::validation::{validate_query, validate_report};
use medicare_types::Symptom;
use std::sync::Arc;

/// Counts describing the loaded catalog, reported by health checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogStatus {
    pub diseases: usize,
    pub symptoms: usize,
}

#[derive(Clone)]
pub struct DiagnosisService {
    cfg: Arc<CoreConfig>,
    provider: Arc<dyn CatalogProvider>,
}

impl DiagnosisService {
    pub fn new(cfg: Arc<CoreConfig>, provider: Arc<dyn CatalogProvider>) -> Self {
        Self { cfg, provider }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Every symptom the catalog knows about, sorted.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::CatalogUnavailable` if no snapshot can be obtained.
    pub fn list_symptoms(&self) -> EngineResult<Vec<Symptom>> {
        let catalog = self.provider.snapshot()?;
        Ok(catalog.vocabulary().into_iter().collect())
    }

    /// Symptoms containing `query`, capped at the configured suggestion limit.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` for a blank or overlong query, or
    /// `EngineError::CatalogUnavailable` if no snapshot can be obtained.
    pub fn suggest_symptoms(&self, query: &str) -> EngineResult<Vec<Symptom>> {
        let query = validate_query(query)?;
        let catalog = self.provider.snapshot()?;
        let vocabulary = catalog.vocabulary();
        Ok(suggest(&vocabulary, query, self.cfg.suggestion_limit()))
    }

    /// Disease summaries sorted by name.
    pub fn list_diseases(&self) -> EngineResult<Vec<DiseaseSummary>> {
        let catalog = self.provider.snapshot()?;
        Ok(catalog.summaries())
    }

    /// Ranks the catalog against the given raw symptom tokens.
    ///
    /// An empty [`Diagnosis`] means no disease shares a symptom with the report; it is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` or `EngineError::Symptom` if the report is empty,
    /// malformed, or names symptoms outside the catalog vocabulary, and
    /// `EngineError::CatalogUnavailable` if no snapshot can be obtained.
    pub fn diagnose<I, S>(&self, symptoms: I) -> EngineResult<Diagnosis>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let report = SymptomReport::parse(symptoms)?;
        let catalog = self.provider.snapshot()?;

        // Without a vocabulary (no diseases, or none with symptoms) ranking yields nothing.
        let vocabulary = catalog.vocabulary();
        if !vocabulary.is_empty() {
            if let Err(e) = validate_report(&report, &vocabulary) {
                tracing::warn!("rejected symptom report: {}", e);
                return Err(e);
            }
        }

        let results = matcher::rank(catalog.diseases(), &report)?;

        match results.first() {
            Some(top) => tracing::info!(
                reported = report.len(),
                matches = results.len(),
                top = %top.disease.name,
                score = top.weighted_score,
                "diagnosis completed"
            ),
            None => tracing::info!(reported = report.len(), "diagnosis found no matching disease"),
        }

        Ok(Diagnosis {
            symptoms: report.iter().cloned().collect(),
            results,
        })
    }

    /// Counts for health reporting.
    pub fn catalog_status(&self) -> EngineResult<CatalogStatus> {
        let catalog = self.provider.snapshot()?;
        Ok(CatalogStatus {
            diseases: catalog.diseases().len(),
            symptoms: catalog.vocabulary().len(),
        })
    }
}
