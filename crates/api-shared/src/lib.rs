//! # API Shared
//!
//! Shared utilities and definitions for MediCare APIs.
//!
//! Contains:
//! - Request/response bodies with OpenAPI schemas (`dto` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `medicare-cli` for common functionality.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
