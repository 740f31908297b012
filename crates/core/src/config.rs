//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handling never reads process-wide environment variables.

use crate::catalog::Catalog;
use crate::constants::DEFAULT_SUGGESTION_LIMIT;
use crate::{EngineError, EngineResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    catalog_file: Option<PathBuf>,
    suggestion_limit: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `catalog_file` of `None` selects the built-in seed catalog.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if `suggestion_limit` is zero.
    pub fn new(catalog_file: Option<PathBuf>, suggestion_limit: usize) -> EngineResult<Self> {
        if suggestion_limit == 0 {
            return Err(EngineError::InvalidInput(
                "suggestion_limit must be at least 1".into(),
            ));
        }

        Ok(Self {
            catalog_file,
            suggestion_limit,
        })
    }

    pub fn catalog_file(&self) -> Option<&Path> {
        self.catalog_file.as_deref()
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    /// Loads the configured catalog: the catalog file if one is set, the seed otherwise.
    pub fn load_catalog(&self) -> EngineResult<Catalog> {
        match &self.catalog_file {
            Some(path) => Catalog::load(path),
            None => {
                tracing::info!("no catalog file configured, using built-in seed catalog");
                Catalog::seed()
            }
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// Parse the catalog file path from an optional string value.
///
/// `None` or empty/whitespace selects the built-in catalog.
pub fn catalog_file_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Parse the suggestion limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_SUGGESTION_LIMIT`].
pub fn suggestion_limit_from_env_value(value: Option<String>) -> EngineResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let parsed = value
        .map(|v| {
            v.parse::<usize>().map_err(|_| {
                EngineError::InvalidInput(format!("suggestion limit '{v}' is not a number"))
            })
        })
        .transpose()?;

    Ok(parsed.unwrap_or(DEFAULT_SUGGESTION_LIMIT))
}
