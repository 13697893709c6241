use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("認証エラー: {0}")]
    Authentication(String),

    #[error("未認証")]
    Unauthenticated,

    #[error("バリデーションエラー: {0}")]
    Validation(String),

    #[error("内部エラー")]
    Internal(#[from] anyhow::Error),

    /// コード不在・使用済み・期限切れを区別しない
    #[error("無効または期限切れのリセットコードです")]
    InvalidOrExpiredCode,

    #[error("パスワードの強度が不足しています")]
    WeakPassword,

    #[error("リソースが見つかりません: {0}")]
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Authentication(_) => (
                StatusCode::UNAUTHORIZED,
                "Identifiants invalides".to_string(),
            ),
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Authentification requise".to_string(),
            ),
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(e) => {
                tracing::error!(error = ?e, "内部エラー");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Une erreur interne est survenue".to_string(),
                )
            }
            Self::InvalidOrExpiredCode => (
                StatusCode::BAD_REQUEST,
                "Code invalide ou expiré".to_string(), // 存在有無の漏洩防止
            ),
            Self::WeakPassword => (
                StatusCode::BAD_REQUEST,
                "Le mot de passe doit contenir au moins 8 caractères".to_string(),
            ),
            Self::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} introuvable", what)),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_maps_to_bad_request() {
        let response = AppError::InvalidOrExpiredCode.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_weak_password_maps_to_bad_request() {
        let response = AppError::WeakPassword.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_maps_to_unauthorized() {
        let response = AppError::Authentication("invalid_credentials".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unauthenticated_maps_to_unauthorized() {
        let response = AppError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let response = AppError::NotFound("Devis".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_maps_to_server_error() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
