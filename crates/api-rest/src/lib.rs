//! # API REST
//!
//! REST API implementation for Clinidesk.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (wire DTOs, CORS, error→status mapping)
//!
//! Core services come in via [`AppState`]; this crate never touches the
//! record stores directly.

#![warn(rust_2018_idioms)]

pub mod dto;
pub mod handlers;

mod error;

use axum::{
    routing::{get, post, put},
    Router,
};
use clinidesk_core::FrontDesk;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub desk: FrontDesk,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::patients::list_patients,
        handlers::patients::register_patient,
        handlers::patients::update_patient,
        handlers::patients::delete_patient,
        handlers::staff::list_staff,
        handlers::staff::add_staff,
        handlers::staff::update_staff,
        handlers::staff::set_staff_availability,
        handlers::staff::delete_staff,
        handlers::queue::list_queue,
        handlers::queue::join_queue,
        handlers::queue::update_queue_entry,
        handlers::queue::delete_queue_entry,
        handlers::consultations::list_consultations,
        handlers::consultations::record_consultation,
        handlers::consultations::consultation_templates,
        handlers::visits::list_visits,
        handlers::visits::log_visit,
    ),
    components(schemas(
        dto::HealthRes,
        dto::StatDto,
        dto::MessageRes,
        dto::PatientDto,
        dto::PatientViewRes,
        dto::RegisterPatientReq,
        dto::StaffDto,
        dto::StaffViewRes,
        dto::AddStaffReq,
        dto::SetAvailabilityReq,
        dto::QueueEntryDto,
        dto::QueueViewRes,
        dto::JoinQueueReq,
        dto::JoinQueueRes,
        dto::UpdateQueueReq,
        dto::ConsultationDto,
        dto::HistoryViewRes,
        dto::RecordConsultationReq,
        dto::QuickTemplateDto,
        dto::VisitDto,
        dto::LogVisitReq,
    ))
)]
struct ApiDoc;

/// Builds the full REST router over the given front-desk services.
///
/// Mounts Swagger UI at `/swagger-ui` and the OpenAPI document at
/// `/api-docs/openapi.json`; CORS is permissive.
pub fn router(desk: FrontDesk) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/patients",
            get(handlers::patients::list_patients).post(handlers::patients::register_patient),
        )
        .route(
            "/patients/:id",
            put(handlers::patients::update_patient).delete(handlers::patients::delete_patient),
        )
        .route(
            "/staff",
            get(handlers::staff::list_staff).post(handlers::staff::add_staff),
        )
        .route(
            "/staff/:id",
            put(handlers::staff::update_staff).delete(handlers::staff::delete_staff),
        )
        .route(
            "/staff/:id/availability",
            put(handlers::staff::set_staff_availability),
        )
        .route("/queue", get(handlers::queue::list_queue))
        .route("/queue/join", post(handlers::queue::join_queue))
        .route(
            "/queue/:id",
            put(handlers::queue::update_queue_entry).delete(handlers::queue::delete_queue_entry),
        )
        .route(
            "/consultations",
            get(handlers::consultations::list_consultations)
                .post(handlers::consultations::record_consultation),
        )
        .route(
            "/consultations/templates",
            get(handlers::consultations::consultation_templates),
        )
        .route(
            "/visits",
            get(handlers::visits::list_visits).post(handlers::visits::log_visit),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { desk })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(FrontDesk::with_demo_data())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("request handled");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collected")
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        (status, value)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        send(
            app,
            Request::builder().uri(uri).body(Body::empty()).unwrap(),
        )
        .await
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            app,
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], json!(true));
    }

    #[tokio::test]
    async fn patient_search_filters_records_and_stats() {
        let (status, body) = get_json(app(), "/patients?search=ana").await;
        assert_eq!(status, StatusCode::OK);

        let patients = body["patients"].as_array().unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0]["id"], json!("PAT-003"));

        let stats = body["stats"].as_array().unwrap();
        assert_eq!(stats[0]["title"], json!("Total Patients"));
        assert_eq!(stats[0]["value"], json!(1));
    }

    #[tokio::test]
    async fn numeric_patient_search_consults_only_ids() {
        // "45" appears in ages and contact numbers but in no patient id.
        let (status, body) = get_json(app(), "/patients?search=45").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["patients"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn staff_role_filter_is_case_insensitive() {
        let (status, body) = get_json(app(), "/staff?role=doctor").await;
        assert_eq!(status, StatusCode::OK);

        let staff = body["staff"].as_array().unwrap();
        assert_eq!(staff.len(), 2);
        assert!(body["error"].is_null());

        let stats = body["stats"].as_array().unwrap();
        let total = stats.iter().find(|s| s["title"] == "Total Staff").unwrap();
        assert_eq!(total["value"], json!(2));
    }

    #[tokio::test]
    async fn joining_the_queue_issues_the_next_ticket() {
        let (status, body) = post_json(
            app(),
            "/queue/join",
            json!({
                "name": "Pedro Penduko",
                "gender": "Male",
                "age": 40,
                "contact": "09170000000",
                "address": "7 Rizal St"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["queue_number"], json!("Q-004"));
        assert_eq!(body["status"], json!("Waiting"));
        assert_eq!(body["estimated_wait"], json!("15 mins"));
    }

    #[tokio::test]
    async fn invalid_intake_data_is_a_bad_request() {
        let (status, _) = post_json(
            app(),
            "/queue/join",
            json!({
                "name": "Pedro 2",
                "gender": "Male",
                "age": 40,
                "contact": "09170000000"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_an_unknown_patient_is_not_found() {
        let (status, _) = send(
            app(),
            Request::builder()
                .method("DELETE")
                .uri("/patients/PAT-999")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn history_filters_by_doctor_and_date() {
        let uri = "/consultations?doctor=Dr.%20Maria%20Cruz&date=2025-01-05";
        let (status, body) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::OK);

        let consultations = body["consultations"].as_array().unwrap();
        assert_eq!(consultations.len(), 1);
        assert_eq!(consultations[0]["patient_name"], json!("Maria Santos"));
        assert_eq!(consultations[0]["code"], json!("CONS-001"));
    }

    #[tokio::test]
    async fn recording_a_consultation_against_a_missing_patient_is_not_found() {
        let (status, _) = post_json(
            app(),
            "/consultations",
            json!({
                "patient_id": "PAT-999",
                "staff_id": "STAFF-001",
                "doctor": "Dr. Maria Cruz",
                "date": "2025-01-10"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn templates_are_served() {
        let (status, body) = get_json(app(), "/consultations/templates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }
}
