use super::build_criteria;
use crate::dto::{
    ConsultationDto, HistoryQuery, HistoryViewRes, QuickTemplateDto, RecordConsultationReq,
    StatDto,
};
use crate::error::{map_error, ApiError};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use clinidesk_core::{Consultation, ConsultationService};

#[utoipa::path(
    get,
    path = "/consultations",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Filtered visit history with stats", body = HistoryViewRes),
        (status = 500, description = "Internal server error")
    )
)]
/// The visit-history view: consultations filtered by search term, doctor
/// and exact date.
pub async fn list_consultations(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryViewRes>, ApiError> {
    let criteria = build_criteria(
        Consultation::view_config(),
        query.search,
        vec![("doctor", query.doctor), ("date", query.date)],
    )?;

    let view = state
        .desk
        .consultations
        .history(&criteria)
        .map_err(map_error)?;
    Ok(Json(HistoryViewRes {
        consultations: view
            .records
            .into_iter()
            .map(ConsultationDto::from)
            .collect(),
        stats: view.stats.into_iter().map(StatDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/consultations",
    request_body = RecordConsultationReq,
    responses(
        (status = 200, description = "Consultation recorded", body = ConsultationDto),
        (status = 404, description = "Patient not found")
    )
)]
/// Record a consultation note against an existing patient.
pub async fn record_consultation(
    State(state): State<AppState>,
    Json(req): Json<RecordConsultationReq>,
) -> Result<Json<ConsultationDto>, ApiError> {
    let note = state
        .desk
        .consultations
        .record(&state.desk.patients, req.into())
        .map_err(map_error)?;
    Ok(Json(note.into()))
}

#[utoipa::path(
    get,
    path = "/consultations/templates",
    responses(
        (status = 200, description = "Canned consultation templates", body = [QuickTemplateDto])
    )
)]
/// The canned notes the consultation form offers for common presentations.
pub async fn consultation_templates() -> Json<Vec<QuickTemplateDto>> {
    Json(
        ConsultationService::quick_templates()
            .iter()
            .map(QuickTemplateDto::from)
            .collect(),
    )
}
