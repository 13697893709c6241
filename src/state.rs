use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::repositories::{AccountRepository, RecordRepository, ResetCodeRepository};
use crate::services::auth::seed_default_accounts;
use crate::services::{AuthService, Clock, PasswordResetService, SystemClock};

/// アプリケーション共有状態
///
/// axum の State として全ハンドラーで共有される。
/// Clone は必須（axum が内部で clone するため）。
/// 各ストアは Arc で共有されるため、Clone しても同じデータを参照する。
#[derive(Clone)]
pub struct AppState {
    /// 認証サービス
    pub auth_service: AuthService,
    /// パスワードリセットサービス
    pub password_reset_service: PasswordResetService,
    /// メニュー
    pub menu_repo: RecordRepository,
    /// 見積
    pub quote_repo: RecordRepository,
    /// 予約
    pub reservation_repo: RecordRepository,
}

impl AppState {
    /// システム時計で AppState を作成
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// 時計を指定して AppState を作成
    ///
    /// 設定値を検証し、初期アカウントを登録する。
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let reset_code_ttl = config.reset_code_ttl()?;

        let account_repo = AccountRepository::new();
        seed_default_accounts(&account_repo, &config)?;

        let auth_service = AuthService::new(account_repo.clone())?;
        let password_reset_service = PasswordResetService::new(
            ResetCodeRepository::new(),
            account_repo,
            clock,
            reset_code_ttl,
        );

        Ok(Self {
            auth_service,
            password_reset_service,
            menu_repo: RecordRepository::new(),
            quote_repo: RecordRepository::new(),
            reservation_repo: RecordRepository::new(),
        })
    }
}
