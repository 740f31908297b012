use medicare_types::SymptomError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid symptom: {0}")]
    Symptom(#[from] SymptomError),

    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("failed to read catalog file: {0}")]
    CatalogRead(std::io::Error),
    #[error("failed to parse catalog: {0}")]
    CatalogParse(serde_yaml::Error),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl EngineError {
    /// True for errors the caller caused and can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, EngineError::InvalidInput(_) | EngineError::Symptom(_))
    }
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
