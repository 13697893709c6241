use crate::error::AppError;

/// 現在のユーザー取得ハンドラー
///
/// GET /api/auth/me
///
/// セッションを保持しないため、常に未認証として 401 を返す。
pub async fn current_user() -> AppError {
    tracing::debug!("セッションなし: 未認証");
    AppError::Unauthenticated
}
