use axum::{Json, extract::State};
use serde_json::Value;

use crate::error::AppError;
use crate::handlers::records::create_from_body;
use crate::models::Record;
use crate::state::AppState;

/// GET /api/menu
pub async fn list_menu(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.menu_repo.list())
}

/// POST /api/menu
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Record>, AppError> {
    Ok(Json(create_from_body(&state.menu_repo, body, "menu")?))
}
