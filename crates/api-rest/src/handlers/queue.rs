use super::build_criteria;
use crate::dto::{
    JoinQueueReq, JoinQueueRes, MessageRes, QueueEntryDto, QueueQuery, QueueViewRes, StatDto,
    UpdateQueueReq,
};
use crate::error::{map_error, ApiError};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use clinidesk_core::QueueEntry;

#[utoipa::path(
    get,
    path = "/queue",
    params(QueueQuery),
    responses(
        (status = 200, description = "Filtered queue view with stats", body = QueueViewRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List today's queue, filtered by search term and status.
pub async fn list_queue(
    State(state): State<AppState>,
    Query(query): Query<QueueQuery>,
) -> Result<Json<QueueViewRes>, ApiError> {
    let criteria = build_criteria(
        QueueEntry::view_config(),
        query.search,
        vec![("status", query.status)],
    )?;

    let view = state.desk.queue.view(&criteria).map_err(map_error)?;
    Ok(Json(QueueViewRes {
        queue: view.records.into_iter().map(QueueEntryDto::from).collect(),
        stats: view.stats.into_iter().map(StatDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/queue/join",
    request_body = JoinQueueReq,
    responses(
        (status = 200, description = "Walk-in queued", body = JoinQueueRes),
        (status = 400, description = "Invalid intake data")
    )
)]
/// Register a walk-in patient and add them to the queue.
///
/// Creates the patient record and the queue entry together; the response
/// carries the assigned ticket number and an estimated wait.
pub async fn join_queue(
    State(state): State<AppState>,
    Json(req): Json<JoinQueueReq>,
) -> Result<Json<JoinQueueRes>, ApiError> {
    let request = req.try_into().map_err(map_error)?;
    let ticket = state
        .desk
        .queue
        .join(&state.desk.patients, request)
        .map_err(map_error)?;
    Ok(Json(ticket.into()))
}

#[utoipa::path(
    put,
    path = "/queue/{id}",
    params(("id" = u32, Path, description = "Queue entry id")),
    request_body = UpdateQueueReq,
    responses(
        (status = 200, description = "Queue entry updated", body = QueueEntryDto),
        (status = 400, description = "Unrecognised status or priority"),
        (status = 404, description = "Queue entry not found")
    )
)]
/// Update a queue entry's status, assignment or priority.
pub async fn update_queue_entry(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<UpdateQueueReq>,
) -> Result<Json<QueueEntryDto>, ApiError> {
    let update = req.try_into().map_err(map_error)?;
    let entry = state.desk.queue.update(id, update).map_err(map_error)?;
    Ok(Json(entry.into()))
}

#[utoipa::path(
    delete,
    path = "/queue/{id}",
    params(("id" = u32, Path, description = "Queue entry id")),
    responses(
        (status = 200, description = "Queue entry removed", body = MessageRes),
        (status = 404, description = "Queue entry not found")
    )
)]
/// Remove an entry from the queue.
pub async fn delete_queue_entry(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<MessageRes>, ApiError> {
    state.desk.queue.remove(id).map_err(map_error)?;
    Ok(Json(MessageRes {
        message: "Queue item deleted successfully".into(),
    }))
}
