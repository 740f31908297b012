//! # API REST
//!
//! REST API implementation for MediCare.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping)
//!
//! Uses `api-shared` for request/response bodies and `medicare-core` for the diagnosis logic.

#![warn(rust_2018_idioms)]

pub mod error;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    DiagnoseReq, DiagnoseRes, DiseaseInfo, DiseaseMatch, HealthRes, HealthService,
    ListDiseasesRes, ListSymptomsRes, MedicineInfo, SuggestSymptomsQuery, SuggestSymptomsRes,
};
use medicare_core::DiagnosisService;

pub use error::ApiError;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub diagnosis_service: DiagnosisService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_symptoms, suggest_symptoms, list_diseases, diagnose),
    components(schemas(
        HealthRes,
        ListSymptomsRes,
        SuggestSymptomsRes,
        DiseaseInfo,
        ListDiseasesRes,
        MedicineInfo,
        DiagnoseReq,
        DiseaseMatch,
        DiagnoseRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with all routes under `/api`, plus Swagger UI.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/symptoms", get(list_symptoms))
        .route("/symptoms/suggest", get(suggest_symptoms))
        .route("/diseases", get(list_diseases))
        .route("/diagnose", post(diagnose));

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service and catalog are healthy", body = HealthRes),
        (status = 503, description = "Catalog unavailable", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Reports whether the disease catalog can be read, with its disease and symptom counts.
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthRes>) {
    let res = HealthService::check_health(state.diagnosis_service.catalog_status());
    let status = if res.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(res))
}

#[utoipa::path(
    get,
    path = "/api/symptoms",
    responses(
        (status = 200, description = "All known symptoms, sorted", body = ListSymptomsRes),
        (status = 503, description = "Catalog unavailable")
    )
)]
/// List every symptom the catalog knows about.
#[axum::debug_handler]
async fn list_symptoms(State(state): State<AppState>) -> Result<Json<ListSymptomsRes>, ApiError> {
    let symptoms = state.diagnosis_service.list_symptoms()?;
    Ok(Json(ListSymptomsRes::new(symptoms)))
}

#[utoipa::path(
    get,
    path = "/api/symptoms/suggest",
    params(SuggestSymptomsQuery),
    responses(
        (status = 200, description = "Matching symptoms", body = SuggestSymptomsRes),
        (status = 400, description = "Missing or invalid query"),
        (status = 503, description = "Catalog unavailable")
    )
)]
/// Suggest symptoms containing a fragment
///
/// Matching ignores case; at most the configured suggestion limit is returned.
#[axum::debug_handler]
async fn suggest_symptoms(
    State(state): State<AppState>,
    Query(query): Query<SuggestSymptomsQuery>,
) -> Result<Json<SuggestSymptomsRes>, ApiError> {
    let q = query
        .q
        .ok_or_else(|| ApiError::BadRequest("Query parameter \"q\" is required".into()))?;
    let suggestions = state.diagnosis_service.suggest_symptoms(&q)?;
    Ok(Json(SuggestSymptomsRes::new(q.trim(), suggestions)))
}

#[utoipa::path(
    get,
    path = "/api/diseases",
    responses(
        (status = 200, description = "All diseases, sorted by name", body = ListDiseasesRes),
        (status = 503, description = "Catalog unavailable")
    )
)]
/// List all diseases in the catalog.
#[axum::debug_handler]
async fn list_diseases(State(state): State<AppState>) -> Result<Json<ListDiseasesRes>, ApiError> {
    let diseases = state.diagnosis_service.list_diseases()?;
    Ok(Json(ListDiseasesRes::new(diseases)))
}

#[utoipa::path(
    post,
    path = "/api/diagnose",
    request_body = DiagnoseReq,
    responses(
        (status = 200, description = "Ranked candidate diagnoses", body = DiagnoseRes),
        (status = 400, description = "Empty, malformed or unknown symptoms"),
        (status = 404, description = "No diagnosis found"),
        (status = 503, description = "Catalog unavailable")
    )
)]
/// Rank the catalog against a patient's symptoms
///
/// # Errors
/// - `400 Bad Request` if the symptom list is empty, malformed or names unknown symptoms.
/// - `404 Not Found` if no disease shares a symptom with the report.
/// - `503 Service Unavailable` if the catalog cannot be read.
#[axum::debug_handler]
async fn diagnose(
    State(state): State<AppState>,
    Json(req): Json<DiagnoseReq>,
) -> Result<Json<DiagnoseRes>, ApiError> {
    let diagnosis = state.diagnosis_service.diagnose(&req.symptoms)?;
    if diagnosis.is_empty() {
        return Err(ApiError::NotFound("No diagnosis found".into()));
    }
    Ok(Json(DiagnoseRes::from(&diagnosis)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use medicare_core::{
        Catalog, CatalogProvider, CoreConfig, EngineError, EngineResult, InMemoryCatalog,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    struct UnavailableCatalog;

    impl CatalogProvider for UnavailableCatalog {
        fn snapshot(&self) -> EngineResult<Arc<Catalog>> {
            Err(EngineError::CatalogUnavailable("database offline".into()))
        }
    }

    fn app_with(provider: Arc<dyn CatalogProvider>) -> Router {
        let diagnosis_service = DiagnosisService::new(Arc::new(CoreConfig::default()), provider);
        router(AppState { diagnosis_service })
    }

    fn seeded_app() -> Router {
        app_with(Arc::new(InMemoryCatalog::new(Catalog::seed().unwrap())))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn diagnose_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/diagnose")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1 << 20).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_reports_catalog_counts() {
        let response = seeded_app().oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["ok"], true);
        assert_eq!(json["diseases"], 10);
        assert_eq!(json["symptoms"], 34);
    }

    #[tokio::test]
    async fn health_is_503_when_catalog_unavailable() {
        let app = app_with(Arc::new(UnavailableCatalog));
        let response = app.oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["ok"], false);
    }

    #[tokio::test]
    async fn symptoms_are_listed_sorted() {
        let response = seeded_app().oneshot(get_request("/api/symptoms")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["count"], 34);
        assert_eq!(json["symptoms"][0], "body_ache");
    }

    #[tokio::test]
    async fn suggest_requires_query() {
        let response = seeded_app()
            .oneshot(get_request("/api/symptoms/suggest"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = seeded_app()
            .oneshot(get_request("/api/symptoms/suggest?q=%20"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn suggest_matches_fragments() {
        let response = seeded_app()
            .oneshot(get_request("/api/symptoms/suggest?q=EYES"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["query"], "EYES");
        assert_eq!(
            json["suggestions"],
            serde_json::json!(["itchy_eyes", "red_eyes", "watery_eyes"])
        );
    }

    #[tokio::test]
    async fn diseases_are_listed_by_name() {
        let response = seeded_app().oneshot(get_request("/api/diseases")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["count"], 10);
        assert_eq!(json["diseases"][0]["name"], "Bronchial Asthma");
    }

    #[tokio::test]
    async fn diagnose_ranks_pneumonia_first() {
        let request = diagnose_request(serde_json::json!({
            "symptoms": ["fever", "dry_cough", "fatigue", "chest_pain"]
        }));
        let response = seeded_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["top_disease"]["name"], "Pneumonia");
        assert_eq!(
            json["symptoms_analyzed"],
            serde_json::json!(["fever", "dry_cough", "fatigue", "chest_pain"])
        );
        assert_eq!(json["total_matches"], json["results"].as_array().unwrap().len());
        let top = &json["results"][0];
        assert_eq!(top["disease_match_pct"], 50.0);
        assert_eq!(top["patient_match_pct"], 100.0);
        assert_eq!(top["weighted_score"], 65.0);
        assert_eq!(top["confidence"], 0.65);
        assert_eq!(top["medicines"][0]["name"], "Azithromycin");
    }

    #[tokio::test]
    async fn diagnose_rejects_empty_and_unknown_symptoms() {
        let response = seeded_app()
            .oneshot(diagnose_request(serde_json::json!({ "symptoms": [] })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = seeded_app()
            .oneshot(diagnose_request(serde_json::json!({ "symptoms": ["levitation"] })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(
            json["error"]["message"],
            "invalid input: unknown symptoms: levitation"
        );
    }

    #[tokio::test]
    async fn diagnose_without_matches_is_404() {
        let app = app_with(Arc::new(InMemoryCatalog::new(Catalog::default())));
        let response = app
            .oneshot(diagnose_request(serde_json::json!({ "symptoms": ["fever"] })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn diagnose_against_symptomless_catalog_is_404() {
        let catalog = Catalog::from_yaml_str("diseases:\n  - {id: 1, name: A}\n").unwrap();
        let app = app_with(Arc::new(InMemoryCatalog::new(catalog)));
        let response = app
            .oneshot(diagnose_request(serde_json::json!({ "symptoms": ["fever"] })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["message"], "No diagnosis found");
    }

    #[tokio::test]
    async fn diagnose_is_503_when_catalog_unavailable() {
        let app = app_with(Arc::new(UnavailableCatalog));
        let response = app
            .oneshot(diagnose_request(serde_json::json!({ "symptoms": ["fever"] })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn openapi_document_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/health",
            "/api/symptoms",
            "/api/symptoms/suggest",
            "/api/diseases",
            "/api/diagnose",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
