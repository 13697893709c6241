use axum::{Json, extract::State};
use serde_json::Value;

use crate::error::AppError;
use crate::handlers::records::create_from_body;
use crate::models::Record;
use crate::state::AppState;

/// GET /api/reservations
pub async fn list_reservations(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.reservation_repo.list())
}

/// POST /api/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Record>, AppError> {
    Ok(Json(create_from_body(&state.reservation_repo, body, "reservation")?))
}
