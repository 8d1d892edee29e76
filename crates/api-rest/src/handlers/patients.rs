use super::build_criteria;
use crate::dto::{
    MessageRes, PatientDto, PatientQuery, PatientViewRes, RegisterPatientReq, StatDto,
};
use crate::error::{map_error, ApiError};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use clinidesk_core::Patient;

#[utoipa::path(
    get,
    path = "/patients",
    params(PatientQuery),
    responses(
        (status = 200, description = "Filtered patient view with stats", body = PatientViewRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List patients matching the given search term and gender filter.
///
/// Stats are computed from the filtered records, so the cards reflect the
/// current filter state.
pub async fn list_patients(
    State(state): State<AppState>,
    Query(query): Query<PatientQuery>,
) -> Result<Json<PatientViewRes>, ApiError> {
    let criteria = build_criteria(
        Patient::view_config(),
        query.search,
        vec![("gender", query.gender)],
    )?;

    let view = state.desk.patients.view(&criteria).map_err(map_error)?;
    Ok(Json(PatientViewRes {
        patients: view.records.into_iter().map(PatientDto::from).collect(),
        stats: view.stats.into_iter().map(StatDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = RegisterPatientReq,
    responses(
        (status = 200, description = "Patient registered", body = PatientDto),
        (status = 400, description = "Invalid intake data"),
        (status = 500, description = "Internal server error")
    )
)]
/// Register a new patient.
pub async fn register_patient(
    State(state): State<AppState>,
    Json(req): Json<RegisterPatientReq>,
) -> Result<Json<PatientDto>, ApiError> {
    let new = req.try_into().map_err(map_error)?;
    let patient = state.desk.patients.register(new).map_err(map_error)?;
    Ok(Json(patient.into()))
}

#[utoipa::path(
    put,
    path = "/patients/{id}",
    params(("id" = String, Path, description = "Patient id, e.g. PAT-001")),
    request_body = RegisterPatientReq,
    responses(
        (status = 200, description = "Patient updated", body = PatientDto),
        (status = 400, description = "Invalid intake data"),
        (status = 404, description = "Patient not found")
    )
)]
/// Update an existing patient record.
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RegisterPatientReq>,
) -> Result<Json<PatientDto>, ApiError> {
    let changes = req.try_into().map_err(map_error)?;
    let patient = state
        .desk
        .patients
        .update(&id, changes)
        .map_err(map_error)?;
    Ok(Json(patient.into()))
}

#[utoipa::path(
    delete,
    path = "/patients/{id}",
    params(("id" = String, Path, description = "Patient id, e.g. PAT-001")),
    responses(
        (status = 200, description = "Patient removed", body = MessageRes),
        (status = 404, description = "Patient not found")
    )
)]
/// Remove a patient record.
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageRes>, ApiError> {
    state.desk.patients.remove(&id).map_err(map_error)?;
    Ok(Json(MessageRes {
        message: format!("Patient {id} removed"),
    }))
}
