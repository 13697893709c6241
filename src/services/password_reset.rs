use std::sync::Arc;

use rand::Rng;
use time::Duration;

use crate::error::AppError;
use crate::models::{AccountSummary, ResetCode};
use crate::repositories::{AccountRepository, ResetCodeRepository};
use crate::services::auth::{hash_password, validate_password_strength};
use crate::services::clock::Clock;

const CODE_LENGTH: usize = 8;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// リセットコード検証結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub valid: bool,
    /// コードのメールアドレスに一致するアカウント（存在する場合のみ）
    pub account: Option<AccountSummary>,
}

impl Verification {
    fn invalid() -> Self {
        Self {
            valid: false,
            account: None,
        }
    }
}

/// パスワードリセットサービス
///
/// リセットコードの発行・一覧・検証・使用を担う。
/// コードは 発行 → 使用済み（`consume` 成功時）または 期限切れ（時間経過）の順に遷移し、
/// どちらの終端状態からも戻らない。
#[derive(Clone)]
pub struct PasswordResetService {
    code_repo: ResetCodeRepository,
    account_repo: AccountRepository,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl PasswordResetService {
    /// 新しい PasswordResetService を作成
    pub fn new(
        code_repo: ResetCodeRepository,
        account_repo: AccountRepository,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            code_repo,
            account_repo,
            clock,
            ttl,
        }
    }

    /// リセットコードを発行
    ///
    /// メールアドレスの形式やアカウントの存在は確認しない。
    pub fn issue(&self, email: &str) -> ResetCode {
        let now = self.clock.now();
        loop {
            let reset_code =
                ResetCode::new(Self::generate_code(), email.to_string(), now, self.ttl);
            if self.code_repo.insert_if_vacant(reset_code.clone(), now) {
                tracing::info!(
                    code = %reset_code.code,
                    email = %email,
                    expires_at = %reset_code.expires_at,
                    "リセットコード発行"
                );
                return reset_code;
            }
            tracing::warn!("リセットコード衝突（再生成）");
        }
    }

    /// 有効なリセットコード一覧（スナップショット）
    pub fn list_active(&self) -> Vec<ResetCode> {
        let now = self.clock.now();
        self.code_repo
            .list_all()
            .into_iter()
            .filter(|c| c.is_active(now))
            .collect()
    }

    /// リセットコードを検証（状態は変更しない）
    ///
    /// 無効なコードもエラーではなく `valid: false` として返す。
    pub fn verify(&self, code: &str) -> Verification {
        let now = self.clock.now();
        let Some(reset_code) = self.code_repo.find_by_code(code).filter(|c| c.is_active(now))
        else {
            tracing::debug!("リセットコード検証: 無効");
            return Verification::invalid();
        };

        let account = self
            .account_repo
            .find_by_email(&reset_code.email)
            .map(|a| AccountSummary::from(&a));

        tracing::debug!(email = %reset_code.email, "リセットコード検証: 有効");

        Verification {
            valid: true,
            account,
        }
    }

    /// リセットコードを使用してパスワードを更新
    ///
    /// 1. コードが有効か（不在・使用済み・期限切れは区別しない）
    /// 2. 新パスワードが最小文字数を満たすか
    ///
    /// の順に検証する。同一コードへの並行呼び出しは1件のみ成功する。
    ///
    /// # Security
    /// - 新パスワードはログに出力しない
    pub fn consume(&self, code: &str, new_password: &str) -> Result<(), AppError> {
        let now = self.clock.now();
        if !self
            .code_repo
            .find_by_code(code)
            .is_some_and(|c| c.is_active(now))
        {
            tracing::warn!("無効または期限切れのリセットコード");
            return Err(AppError::InvalidOrExpiredCode);
        }

        validate_password_strength(new_password)?;

        // ロック外でハッシュ化してから使用済みにする
        let password_hash = hash_password(new_password)?;

        let consumed = self
            .code_repo
            .mark_used_if_active(code, self.clock.now())
            .ok_or_else(|| {
                tracing::warn!("リセットコードは既に使用済み（並行リクエスト）");
                AppError::InvalidOrExpiredCode
            })?;

        let updated = self
            .account_repo
            .update_password_by_email(&consumed.email, &password_hash);

        tracing::info!(
            email = %consumed.email,
            account_updated = updated,
            "パスワードリセット完了"
        );

        Ok(())
    }

    /// 英大文字と数字からなる8文字のコードを生成
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }
}
