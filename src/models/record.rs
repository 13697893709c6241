use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// メニュー・見積・予約などの汎用レコード
///
/// 本文はスキーマ検証せずそのまま保持する。
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub id: Uuid,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl Record {
    /// 新しいIDでレコードを作成（本文中の `id` は上書きされる）
    pub fn new(mut body: Map<String, Value>) -> Self {
        body.remove("id");
        Self {
            id: Uuid::new_v4(),
            body,
        }
    }
}
