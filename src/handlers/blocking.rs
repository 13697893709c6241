use crate::error::AppError;

/// CPU負荷の高い同期処理（argon2 など）をブロッキングスレッドで実行
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!(error = ?e, "ブロッキングタスクの実行に失敗");
        AppError::Internal(anyhow::anyhow!("blocking task failed: {}", e))
    })?
}
