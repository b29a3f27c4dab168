use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::types::{ListOrder, Record, RecordFields, RecordId};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: Option<u16>,
    /// 错误码（PostgREST / Postgres SQLSTATE）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(
        status: Option<u16>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound` 等错误）
    pub record_id: Option<String>,
    /// 表名（用于 `TableNotFound`）
    pub table: Option<String>,
}

/// Store 错误映射 Trait（内部使用）
/// 各 Store 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait StoreErrorMapper {
    /// 返回 Store 标识符
    fn store_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> StoreError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> StoreError {
        StoreError::Api {
            store: self.store_name().to_string(),
            status: raw.status,
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote record store over one named collection.
///
/// Every call either returns its payload or a [`StoreError`]; implementations
/// never panic on remote failures. Identity and timestamps are assigned by the
/// store, so writes only carry [`RecordFields`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store identifier, used in errors and logs.
    fn id(&self) -> &'static str;

    /// Name of the collection this store operates on.
    fn table(&self) -> &str;

    /// Fetch every record in the given order. Unbounded, no pagination.
    async fn list(&self, order: &ListOrder) -> Result<Vec<Record>>;

    /// Insert a new record.
    async fn insert(&self, fields: &RecordFields) -> Result<()>;

    /// Overwrite `email` and `username` of the record matching `id`.
    async fn update(&self, fields: &RecordFields, id: &RecordId) -> Result<()>;

    /// Delete the record matching `id`.
    async fn delete(&self, id: &RecordId) -> Result<()>;
}
