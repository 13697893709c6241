use axum::Json;
use serde::Serialize;

/// ログアウトレスポンス
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// ログアウトハンドラー
///
/// POST /api/auth/logout
///
/// セッションを保持していないため、常に成功を返す。
pub async fn logout() -> Json<LogoutResponse> {
    tracing::info!("ログアウト");

    Json(LogoutResponse {
        message: "Déconnexion réussie".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logout_always_succeeds() {
        let response = logout().await;
        assert_eq!(response.message, "Déconnexion réussie");
    }
}
