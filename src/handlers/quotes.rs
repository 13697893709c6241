use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::records::create_from_body;
use crate::models::Record;
use crate::state::AppState;

/// GET /api/quotes
pub async fn list_quotes(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.quote_repo.list())
}

/// POST /api/quotes
pub async fn create_quote(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Record>, AppError> {
    Ok(Json(create_from_body(&state.quote_repo, body, "quote")?))
}

#[derive(Debug, Serialize)]
pub struct SendQuoteResponse {
    pub message: String,
    pub note: String,
}

/// POST /api/quotes/{id}/send
///
/// メール送信は行わない。管理者が手動で送る前提の案内を返す。
pub async fn send_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SendQuoteResponse>, AppError> {
    let quote = state
        .quote_repo
        .find_by_id(id)
        .ok_or_else(|| AppError::NotFound("Devis".to_string()))?;

    tracing::info!(quote_id = %quote.id, "見積送信準備完了（手動送信）");

    Ok(Json(SendQuoteResponse {
        message: "Devis prêt à envoyer".to_string(),
        note: "Envoi manuel requis - le système génère le devis mais l'envoi par courriel doit être fait manuellement par l'administrateur".to_string(),
    }))
}
