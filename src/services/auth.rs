use std::sync::Arc;

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use secrecy::ExposeSecret;

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Account, Role};
use crate::repositories::AccountRepository;

/// パスワードの最小文字数
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// パスワードをargon2idでハッシュ化
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = ?e, "パスワードハッシュ生成エラー");
            AppError::Internal(anyhow::anyhow!("password hash error"))
        })?;
    Ok(hash.to_string())
}

/// パスワード強度チェック（文字数のみ）
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::WeakPassword);
    }
    Ok(())
}

/// 初期アカウント（管理者・スタッフ）を登録
///
/// 初期パスワードは設定から読み込み、ハッシュ化して保存する。
pub fn seed_default_accounts(repo: &AccountRepository, config: &Config) -> Result<(), AppError> {
    repo.insert(Account::new(
        "admin",
        "admin@dounie-cuisine.ca",
        "Admin",
        "Dounie",
        Role::Admin,
        hash_password(config.admin_password.expose_secret())?,
    ));
    repo.insert(Account::new(
        "staff",
        "staff@dounie-cuisine.ca",
        "Staff",
        "Member",
        Role::Staff,
        hash_password(config.staff_password.expose_secret())?,
    ));

    tracing::info!("初期アカウント登録完了");

    Ok(())
}

/// ユーザー不在時の検証に使うダミーパスワード
const DUMMY_PASSWORD: &str = "dounie-dummy-password";

/// 認証サービス
#[derive(Clone)]
pub struct AuthService {
    account_repo: AccountRepository,
    /// 実際のハッシュと同じパラメータで生成したダミーハッシュ
    dummy_hash: Arc<str>,
}

impl AuthService {
    /// 新しい AuthService を作成
    ///
    /// ダミーハッシュを生成するため失敗しうる。
    pub fn new(account_repo: AccountRepository) -> Result<Self, AppError> {
        let dummy_hash = hash_password(DUMMY_PASSWORD)?;
        Ok(Self {
            account_repo,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// ユーザー名とパスワードで認証
    ///
    /// タイミング攻撃対策: ユーザーが存在しない場合もダミーのパスワード検証を実行
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Account, AppError> {
        match self.account_repo.find_by_username(username) {
            Some(account) => {
                if self.verify_password(password, &account.password_hash)? {
                    tracing::info!(username = %username, "認証成功");
                    Ok(account)
                } else {
                    tracing::warn!(username = %username, "認証失敗: パスワード不一致");
                    Err(AppError::Authentication("invalid_credentials".to_string()))
                }
            }
            None => {
                // タイミング攻撃対策: 既存ユーザーと同じコストの検証を実行
                let _ = self.verify_password(password, &self.dummy_hash);
                tracing::warn!(username = %username, "認証失敗: ユーザー不在");
                Err(AppError::Authentication("invalid_credentials".to_string()))
            }
        }
    }

    /// パスワードを検証
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            tracing::error!(error = ?e, "パスワードハッシュのパースエラー");
            AppError::Internal(anyhow::anyhow!("password hash parse error"))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
