use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::blocking::run_blocking;
use crate::models::Account;
use crate::state::AppState;

/// ログインリクエスト
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// ログインレスポンス
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: Account,
    /// 不透明なトークン（サーバー側でセッションは保持しない）
    pub token: String,
}

/// ログインハンドラー
///
/// POST /api/auth/login
///
/// 処理フロー:
/// 1. リクエストバリデーション
/// 2. 認証情報ストアと照合
/// 3. アカウント情報とトークンを返却
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // 1. リクエストバリデーション
    validate_login_request(&request)?;

    // 2. 認証情報ストアと照合（argon2 検証はブロッキングスレッドで実行）
    let auth_service = state.auth_service.clone();
    let user = run_blocking(move || {
        auth_service.authenticate(&request.username, &request.password)
    })
    .await?;

    // 3. アカウント情報とトークンを返却
    Ok(Json(LoginResponse {
        user,
        token: Uuid::new_v4().to_string(),
    }))
}

/// ログインリクエストのバリデーション
fn validate_login_request(request: &LoginRequest) -> Result<(), AppError> {
    if request.username.trim().is_empty() {
        return Err(AppError::Validation(
            "Le nom d'utilisateur est requis".to_string(),
        ));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("Le mot de passe est requis".to_string()));
    }
    Ok(())
}
