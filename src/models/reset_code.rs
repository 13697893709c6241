use serde::Serialize;
use time::OffsetDateTime;

/// パスワードリセットコード
///
/// `used` は false → true に一度だけ遷移する。
/// 有効かどうかは保存せず、参照時に時刻と比較して導出する。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetCode {
    pub code: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub used: bool,
}

impl ResetCode {
    pub fn new(code: String, email: String, issued_at: OffsetDateTime, ttl: time::Duration) -> Self {
        Self {
            code,
            email,
            issued_at,
            // 範囲外の期間でも panic しない
            expires_at: issued_at.saturating_add(ttl),
            used: false,
        }
    }

    /// 未使用かつ期限内であれば有効
    pub fn is_active(&self, now: OffsetDateTime) -> bool {
        !self.used && now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;
    use time::macros::datetime;

    fn sample(now: OffsetDateTime) -> ResetCode {
        ResetCode::new(
            "ABCD1234".to_string(),
            "staff@example.com".to_string(),
            now,
            Duration::hours(24),
        )
    }

    #[test]
    fn test_new_code_is_active() {
        let now = datetime!(2025-06-26 17:40 UTC);
        let code = sample(now);
        assert!(!code.used);
        assert_eq!(code.expires_at, datetime!(2025-06-27 17:40 UTC));
        assert!(code.is_active(now));
    }

    #[test]
    fn test_inactive_at_expiry() {
        let now = datetime!(2025-06-26 17:40 UTC);
        let code = sample(now);
        assert!(code.is_active(code.expires_at - Duration::seconds(1)));
        // 期限ちょうどは無効
        assert!(!code.is_active(code.expires_at));
    }

    #[test]
    fn test_huge_ttl_saturates_instead_of_panicking() {
        let now = datetime!(2025-06-26 17:40 UTC);
        let code = ResetCode::new(
            "ABCD1234".to_string(),
            "staff@example.com".to_string(),
            now,
            Duration::seconds(i64::MAX / 2),
        );
        assert!(code.expires_at > now);
        assert!(code.is_active(now));
    }

    #[test]
    fn test_used_code_is_inactive() {
        let now = datetime!(2025-06-26 17:40 UTC);
        let mut code = sample(now);
        code.used = true;
        assert!(!code.is_active(now));
    }
}
