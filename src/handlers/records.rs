use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::Record;
use crate::repositories::RecordRepository;

/// JSONオブジェクト本文からレコードを作成
///
/// 本文がオブジェクトでなければバリデーションエラー。
pub(crate) fn create_from_body(
    repo: &RecordRepository,
    body: Value,
    kind: &str,
) -> Result<Record, AppError> {
    let fields = into_object(body)?;
    let record = repo.create(fields);

    tracing::info!(kind = %kind, id = %record.id, "レコード作成");

    Ok(record)
}

fn into_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(AppError::Validation(
            "Le corps de la requête doit être un objet JSON".to_string(),
        )),
    }
}
