use super::build_criteria;
use crate::dto::{
    AddStaffReq, MessageRes, SetAvailabilityReq, StaffDto, StaffQuery, StaffViewRes, StatDto,
};
use crate::error::{map_error, ApiError};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use clinidesk_core::{ClinicError, StaffMember};
use clinidesk_types::Availability;

#[utoipa::path(
    get,
    path = "/staff",
    params(StaffQuery),
    responses(
        (status = 200, description = "Filtered staff view with stats", body = StaffViewRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List staff matching the given search term, role and availability.
///
/// When the last directory refresh failed the response carries the load
/// error alongside an empty list, rather than failing the request.
pub async fn list_staff(
    State(state): State<AppState>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<StaffViewRes>, ApiError> {
    let criteria = build_criteria(
        StaffMember::view_config(),
        query.search,
        vec![("role", query.role), ("status", query.status)],
    )?;

    let view = state.desk.staff.view(&criteria).map_err(map_error)?;
    let error = state.desk.staff.load_error().map_err(map_error)?;
    Ok(Json(StaffViewRes {
        staff: view.records.into_iter().map(StaffDto::from).collect(),
        stats: view.stats.into_iter().map(StatDto::from).collect(),
        error,
    }))
}

#[utoipa::path(
    post,
    path = "/staff",
    request_body = AddStaffReq,
    responses(
        (status = 200, description = "Staff member added", body = StaffDto),
        (status = 400, description = "Invalid staff data")
    )
)]
/// Add a staff member to the directory.
pub async fn add_staff(
    State(state): State<AppState>,
    Json(req): Json<AddStaffReq>,
) -> Result<Json<StaffDto>, ApiError> {
    let new = req.try_into().map_err(map_error)?;
    let member = state.desk.staff.add(new).map_err(map_error)?;
    Ok(Json(member.into()))
}

#[utoipa::path(
    put,
    path = "/staff/{id}",
    params(("id" = String, Path, description = "Staff id, e.g. STAFF-001")),
    request_body = AddStaffReq,
    responses(
        (status = 200, description = "Staff member updated", body = StaffDto),
        (status = 400, description = "Invalid staff data"),
        (status = 404, description = "Staff member not found")
    )
)]
/// Update a staff directory entry.
pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddStaffReq>,
) -> Result<Json<StaffDto>, ApiError> {
    let changes = req.try_into().map_err(map_error)?;
    let member = state.desk.staff.update(&id, changes).map_err(map_error)?;
    Ok(Json(member.into()))
}

#[utoipa::path(
    put,
    path = "/staff/{id}/availability",
    params(("id" = String, Path, description = "Staff id, e.g. STAFF-001")),
    request_body = SetAvailabilityReq,
    responses(
        (status = 200, description = "Availability updated", body = StaffDto),
        (status = 400, description = "Unrecognised availability"),
        (status = 404, description = "Staff member not found")
    )
)]
/// Set a staff member's availability.
pub async fn set_staff_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetAvailabilityReq>,
) -> Result<Json<StaffDto>, ApiError> {
    let availability: Availability = req
        .availability
        .parse()
        .map_err(|e: clinidesk_types::UnknownVariant| {
            map_error(ClinicError::InvalidInput(e.to_string()))
        })?;
    let member = state
        .desk
        .staff
        .set_availability(&id, availability)
        .map_err(map_error)?;
    Ok(Json(member.into()))
}

#[utoipa::path(
    delete,
    path = "/staff/{id}",
    params(("id" = String, Path, description = "Staff id, e.g. STAFF-001")),
    responses(
        (status = 200, description = "Staff member removed", body = MessageRes),
        (status = 404, description = "Staff member not found")
    )
)]
/// Remove a staff member from the directory.
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageRes>, ApiError> {
    state.desk.staff.remove(&id).map_err(map_error)?;
    Ok(Json(MessageRes {
        message: format!("Staff member {id} removed"),
    }))
}
