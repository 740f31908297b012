//! # MediCare Core
//!
//! Core business logic for the MediCare symptom diagnosis service.
//!
//! This crate contains pure data operations:
//! - Symptom-to-disease matching and ranking ([`matcher`])
//! - Disease catalog loading and the [`CatalogProvider`] seam ([`catalog`])
//! - Request orchestration through [`DiagnosisService`] ([`service`])
//!
//! **No API concerns**: HTTP servers, JSON response shapes and CLI rendering belong in
//! `api-rest`, `api-shared` and `medicare-cli`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod model;
pub mod service;
pub mod suggest;
pub mod validation;

pub use catalog::{Catalog, CatalogProvider, InMemoryCatalog};
pub use config::CoreConfig;
pub use error::{EngineError, EngineResult};
pub use matcher::rank;
pub use model::{Diagnosis, DiagnosisResult, Disease, DiseaseSummary, Medicine, SymptomReport};
pub use service::{CatalogStatus, DiagnosisService};

pub use medicare_types::{Symptom, SymptomError};
