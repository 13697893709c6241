use secrecy::SecretBox;
use serde::Deserialize;
use time::Duration;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    // パスワードリセット設定
    /// リセットコードの有効期間（秒）
    #[serde(default = "default_reset_code_ttl_secs")]
    pub reset_code_ttl_secs: i64,

    // 初期アカウント設定
    /// 管理者アカウントの初期パスワード
    #[serde(default = "default_admin_password")]
    pub admin_password: SecretBox<String>,
    /// スタッフアカウントの初期パスワード
    #[serde(default = "default_staff_password")]
    pub staff_password: SecretBox<String>,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_RESET_CODE_TTL_SECS: i64 = 24 * 60 * 60;
const MAX_RESET_CODE_TTL_SECS: i64 = 30 * 24 * 60 * 60;
const DEFAULT_ADMIN_PASSWORD: &str = "Admin123!";
const DEFAULT_STAFF_PASSWORD: &str = "Staff123!";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_reset_code_ttl_secs() -> i64 {
    DEFAULT_RESET_CODE_TTL_SECS
}

fn default_admin_password() -> SecretBox<String> {
    SecretBox::new(Box::new(DEFAULT_ADMIN_PASSWORD.to_string()))
}

fn default_staff_password() -> SecretBox<String> {
    SecretBox::new(Box::new(DEFAULT_STAFF_PASSWORD.to_string()))
}

impl Config {
    pub fn load() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// リセットコードの有効期間
    ///
    /// 1秒以上30日以下のみ許可する。
    pub fn reset_code_ttl(&self) -> Result<Duration, AppError> {
        let secs = self.reset_code_ttl_secs;
        if !(1..=MAX_RESET_CODE_TTL_SECS).contains(&secs) {
            tracing::error!(
                reset_code_ttl_secs = secs,
                max = MAX_RESET_CODE_TTL_SECS,
                "RESET_CODE_TTL_SECS が範囲外"
            );
            return Err(AppError::Internal(anyhow::anyhow!(
                "RESET_CODE_TTL_SECS must be between 1 and {}, got {}",
                MAX_RESET_CODE_TTL_SECS,
                secs
            )));
        }
        Ok(Duration::seconds(secs))
    }
}

impl Default for Config {
    /// 環境変数を参照しないデフォルト設定（テスト用）
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            reset_code_ttl_secs: default_reset_code_ttl_secs(),
            admin_password: default_admin_password(),
            staff_password: default_staff_password(),
        }
    }
}
