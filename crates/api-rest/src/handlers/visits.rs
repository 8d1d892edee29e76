use crate::dto::{LogVisitReq, VisitDto};
use crate::error::{map_error, ApiError};
use crate::AppState;
use axum::{extract::State, response::Json};

#[utoipa::path(
    get,
    path = "/visits",
    responses(
        (status = 200, description = "All visit log entries", body = [VisitDto])
    )
)]
/// List the front-desk visit log.
pub async fn list_visits(State(state): State<AppState>) -> Result<Json<Vec<VisitDto>>, ApiError> {
    let visits = state.desk.visits.list().map_err(map_error)?;
    Ok(Json(visits.into_iter().map(VisitDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/visits",
    request_body = LogVisitReq,
    responses(
        (status = 200, description = "Visit logged", body = VisitDto),
        (status = 400, description = "Blank visitor name")
    )
)]
/// Log a walk-in visit with the current time.
pub async fn log_visit(
    State(state): State<AppState>,
    Json(req): Json<LogVisitReq>,
) -> Result<Json<VisitDto>, ApiError> {
    let entry = state
        .desk
        .visits
        .log_now(&req.visitor_name, &req.purpose)
        .map_err(map_error)?;
    Ok(Json(entry.into()))
}
