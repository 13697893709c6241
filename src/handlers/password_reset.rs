use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::handlers::blocking::run_blocking;
use crate::models::{AccountSummary, ResetCode};
use crate::services::Verification;
use crate::state::AppState;

// === コード発行（管理者向け） ===

#[derive(Debug, Deserialize)]
pub struct GenerateResetRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResetResponse {
    pub reset_code: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub message: String,
}

/// POST /api/admin/generate-password-reset
///
/// # Note
/// 管理者権限のチェックはこの層では行わない
pub async fn generate_password_reset(
    State(state): State<AppState>,
    Json(request): Json<GenerateResetRequest>,
) -> Result<Json<GenerateResetResponse>, AppError> {
    // バリデーション（存在チェックのみ）
    if request.email.trim().is_empty() {
        return Err(AppError::Validation(
            "L'adresse courriel est requise".to_string(),
        ));
    }

    let reset_code = state.password_reset_service.issue(&request.email);

    Ok(Json(GenerateResetResponse {
        reset_code: reset_code.code,
        expires_at: reset_code.expires_at,
        message: "Code de récupération généré avec succès".to_string(),
    }))
}

// === 有効なコード一覧（管理者向け） ===

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetCodeEntry {
    pub code: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub used: bool,
}

impl From<ResetCode> for ResetCodeEntry {
    fn from(reset_code: ResetCode) -> Self {
        Self {
            code: reset_code.code,
            email: reset_code.email,
            expires_at: reset_code.expires_at,
            used: reset_code.used,
        }
    }
}

/// GET /api/admin/password-reset-codes
pub async fn list_password_reset_codes(State(state): State<AppState>) -> Json<Vec<ResetCodeEntry>> {
    let codes = state
        .password_reset_service
        .list_active()
        .into_iter()
        .map(ResetCodeEntry::from)
        .collect();

    Json(codes)
}

// === コード検証（公開） ===

#[derive(Debug, Deserialize)]
pub struct VerifyResetCodeRequest {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResetCodeResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Verification> for VerifyResetCodeResponse {
    fn from(verification: Verification) -> Self {
        if verification.valid {
            Self {
                valid: true,
                user: verification.account,
                message: None,
            }
        } else {
            Self {
                valid: false,
                user: None,
                message: Some("Code invalide ou expiré".to_string()),
            }
        }
    }
}

/// POST /api/auth/verify-reset-code
///
/// 無効なコードでも 200 で `valid: false` を返す。
pub async fn verify_reset_code(
    State(state): State<AppState>,
    Json(request): Json<VerifyResetCodeRequest>,
) -> Json<VerifyResetCodeResponse> {
    let verification = state.password_reset_service.verify(request.code.trim());
    Json(verification.into())
}

// === パスワードリセット実行（公開） ===

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordResponse {
    pub message: String,
}

/// POST /api/auth/reset-password
///
/// # Security
/// - code, newPassword はログに出力しない
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<ResetPasswordResponse>, AppError> {
    // argon2 ハッシュ化はブロッキングスレッドで実行
    let password_reset_service = state.password_reset_service.clone();
    run_blocking(move || {
        password_reset_service.consume(request.code.trim(), &request.new_password)
    })
    .await?;

    Ok(Json(ResetPasswordResponse {
        message: "Mot de passe réinitialisé avec succès".to_string(),
    }))
}
