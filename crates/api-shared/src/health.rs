use crate::dto::HealthRes;
use medicare_core::{CatalogStatus, EngineResult};

/// Health checks shared by the REST API and the CLI.
///
/// Health is tied to catalog availability: the service is only useful while a disease catalog
/// can be read.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Builds a health response from the outcome of a catalog status probe.
    ///
    /// # Returns
    /// A `HealthRes` with `ok: false` and zero counts when the catalog is unavailable.
    pub fn check_health(status: EngineResult<CatalogStatus>) -> HealthRes {
        match status {
            Ok(status) => HealthRes {
                ok: true,
                message: "MediCare is alive".into(),
                diseases: status.diseases,
                symptoms: status.symptoms,
            },
            Err(e) => HealthRes {
                ok: false,
                message: e.to_string(),
                diseases: 0,
                symptoms: 0,
            },
        }
    }
}
