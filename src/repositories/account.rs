use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::Account;

/// アカウント（認証情報）のインメモリストア
#[derive(Clone, Default)]
pub struct AccountRepository {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl AccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// アカウントを追加
    pub fn insert(&self, account: Account) {
        self.accounts.write().push(account);
    }

    /// ユーザー名でアカウントを検索
    pub fn find_by_username(&self, username: &str) -> Option<Account> {
        self.accounts
            .read()
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }

    /// メールアドレスでアカウントを検索（完全一致）
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .read()
            .iter()
            .find(|a| a.email == email)
            .cloned()
    }

    /// メールアドレスが一致するアカウントのパスワードを更新
    ///
    /// # Note
    /// password_hash はログに出力しないこと
    ///
    /// # Returns
    /// 更新されたアカウントがあれば true
    pub fn update_password_by_email(&self, email: &str, new_password_hash: &str) -> bool {
        let mut accounts = self.accounts.write();
        match accounts.iter_mut().find(|a| a.email == email) {
            Some(account) => {
                account.password_hash = new_password_hash.to_string();
                true
            }
            None => false,
        }
    }
}
