//! Disease catalog loading and the catalog provider seam.
//!
//! A [`Catalog`] is an immutable snapshot of every disease with its symptoms, medicines and
//! precautions. Callers obtain snapshots from a [`CatalogProvider`]; a provider may swap in a
//! fresh catalog at any time, but a snapshot already handed out never changes underneath the
//! computation holding it.
//!
//! ## File format
//!
//! ```yaml
//! diseases:
//!   - id: 1
//!     name: Pneumonia
//!     description: Infection that inflames air sacs in lungs
//!     symptoms: [fever, dry_cough]
//!     medicines:
//!       - name: Azithromycin
//!         dosage: 500mg once daily for 3-5 days
//!     precautions:
//!       - Consult doctor immediately
//! ```

use crate::constants::SEED_CATALOG_YAML;
use crate::error::{EngineError, EngineResult};
use crate::model::{Disease, DiseaseSummary};
use medicare_types::Symptom;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Every disease known to the system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    diseases: Vec<Disease>,
}

impl Catalog {
    /// Creates a catalog after checking ids are unique and names are present.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidCatalog` on duplicate ids or blank disease names.
    pub fn new(diseases: Vec<Disease>) -> EngineResult<Self> {
        let catalog = Self { diseases };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a YAML catalog document.
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        let catalog: Catalog = serde_yaml::from_str(yaml).map_err(EngineError::CatalogParse)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a YAML catalog from disk.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(EngineError::CatalogRead)?;
        let catalog = Self::from_yaml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            diseases = catalog.diseases.len(),
            "loaded disease catalog"
        );
        Ok(catalog)
    }

    /// The built-in catalog of common conditions.
    pub fn seed() -> EngineResult<Self> {
        Self::from_yaml_str(SEED_CATALOG_YAML)
    }

    fn validate(&self) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for disease in &self.diseases {
            if !seen.insert(disease.id) {
                return Err(EngineError::InvalidCatalog(format!(
                    "duplicate disease id {}",
                    disease.id
                )));
            }
            if disease.name.trim().is_empty() {
                return Err(EngineError::InvalidCatalog(format!(
                    "disease {} has no name",
                    disease.id
                )));
            }
        }
        Ok(())
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id == id)
    }

    /// Distinct symptoms across all diseases, sorted.
    pub fn vocabulary(&self) -> BTreeSet<Symptom> {
        self.diseases
            .iter()
            .flat_map(|d| d.symptoms.iter().cloned())
            .collect()
    }

    /// Disease summaries sorted by name, then id.
    pub fn summaries(&self) -> Vec<DiseaseSummary> {
        let mut summaries: Vec<DiseaseSummary> =
            self.diseases.iter().map(DiseaseSummary::from).collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        summaries
    }
}

/// Source of catalog snapshots.
///
/// Implementations own whatever storage backs the catalog. A failure to produce a snapshot is
/// reported as `EngineError::CatalogUnavailable` so callers can tell it apart from a bad request
/// or an empty result.
pub trait CatalogProvider: Send + Sync {
    fn snapshot(&self) -> EngineResult<Arc<Catalog>>;
}

/// Catalog held in memory and swapped wholesale on refresh.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl InMemoryCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Installs `catalog` for all subsequent snapshots.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::CatalogUnavailable` if the lock was poisoned.
    pub fn replace(&self, catalog: Catalog) -> EngineResult<()> {
        let mut current = self
            .current
            .write()
            .map_err(|_| EngineError::CatalogUnavailable("catalog lock poisoned".into()))?;
        *current = Arc::new(catalog);
        tracing::info!(diseases = current.diseases.len(), "catalog replaced");
        Ok(())
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn snapshot(&self) -> EngineResult<Arc<Catalog>> {
        self.current
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| EngineError::CatalogUnavailable("catalog lock poisoned".into()))
    }
}
