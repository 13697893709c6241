use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::Record;

/// 汎用レコードのインメモリストア（挿入順を保持）
#[derive(Clone, Default)]
pub struct RecordRepository {
    records: Arc<RwLock<Vec<Record>>>,
}

impl RecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいレコードを作成
    pub fn create(&self, body: Map<String, Value>) -> Record {
        let record = Record::new(body);
        self.records.write().push(record.clone());
        record
    }

    /// 全レコードを取得
    pub fn list(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    /// IDでレコードを検索
    pub fn find_by_id(&self, id: Uuid) -> Option<Record> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }
}
