use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use time::OffsetDateTime;

use crate::models::ResetCode;

/// リセットコードのインメモリストア
///
/// コード文字列をキーとする。プロセス再起動で消える。
#[derive(Clone, Default)]
pub struct ResetCodeRepository {
    codes: Arc<Mutex<HashMap<String, ResetCode>>>,
}

impl ResetCodeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同じコードの有効なエントリがなければ保存する
    ///
    /// 使用済み・期限切れのエントリは置き換える。
    ///
    /// # Returns
    /// 保存できた場合 true（有効なコードと衝突した場合 false）
    pub fn insert_if_vacant(&self, reset_code: ResetCode, now: OffsetDateTime) -> bool {
        let mut codes = self.codes.lock();
        if let Some(existing) = codes.get(&reset_code.code)
            && existing.is_active(now)
        {
            return false;
        }
        codes.insert(reset_code.code.clone(), reset_code);
        true
    }

    /// コードで検索
    ///
    /// # Note
    /// 有効期限や使用済みフラグの検証は呼び出し側で行う
    pub fn find_by_code(&self, code: &str) -> Option<ResetCode> {
        self.codes.lock().get(code).cloned()
    }

    /// 全エントリのスナップショットを発行日時順で返す
    pub fn list_all(&self) -> Vec<ResetCode> {
        let mut codes: Vec<ResetCode> = self.codes.lock().values().cloned().collect();
        codes.sort_by(|a, b| a.issued_at.cmp(&b.issued_at).then_with(|| a.code.cmp(&b.code)));
        codes
    }

    /// 有効なコードを使用済みにマーク
    ///
    /// 判定と更新を同じロック内で行うため、同一コードへの並行呼び出しは
    /// 最初の1件だけが `Some` を受け取る。
    pub fn mark_used_if_active(&self, code: &str, now: OffsetDateTime) -> Option<ResetCode> {
        let mut codes = self.codes.lock();
        let entry = codes.get_mut(code)?;
        if !entry.is_active(now) {
            return None;
        }
        entry.used = true;
        Some(entry.clone())
    }

    pub fn len(&self) -> usize {
        self.codes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.lock().is_empty()
    }
}
