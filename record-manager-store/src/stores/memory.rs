//! 进程内 record store
//!
//! 与远程表行为一致：服务端分配 `id`（UUID）与 `created_at`，`email` 唯一。
//! 用于离线演示与测试，进程退出后数据丢失。

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::traits::RecordStore;
use crate::types::{ListOrder, OrderColumn, Record, RecordFields, RecordId, SortDirection};

const STORE_NAME: &str = "memory";

/// In-memory record store
pub struct InMemoryRecordStore {
    table: String,
    records: RwLock<Vec<Record>>,
}

impl InMemoryRecordStore {
    pub fn new(table: impl Into<String>) -> Self {
        Self::with_records(table, Vec::new())
    }

    /// 使用已有记录初始化
    pub fn with_records(table: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            table: table.into(),
            records: RwLock::new(records),
        }
    }

    /// 当前记录数
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn conflict(&self, email: &str) -> StoreError {
        StoreError::Conflict {
            store: STORE_NAME.to_string(),
            raw_message: format!(
                "duplicate key value violates unique constraint \"{}_email_key\" (email={email})",
                self.table
            ),
        }
    }

    fn not_found(id: &RecordId) -> StoreError {
        StoreError::RecordNotFound {
            store: STORE_NAME.to_string(),
            record_id: id.to_string(),
            raw_message: Some(format!("No record with id {id}")),
        }
    }

    /// 新记录时间戳，保证严格递增以便按 `created_at` 排序稳定
    fn next_timestamp(records: &[Record]) -> DateTime<Utc> {
        let now = Utc::now();
        match records.iter().map(|r| r.created_at).max() {
            Some(latest) if latest >= now => latest + Duration::microseconds(1),
            _ => now,
        }
    }
}

fn compare(a: &Record, b: &Record, column: OrderColumn) -> std::cmp::Ordering {
    match column {
        OrderColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        OrderColumn::Email => a.email.cmp(&b.email),
        OrderColumn::Username => a.username.cmp(&b.username),
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    fn id(&self) -> &'static str {
        STORE_NAME
    }

    fn table(&self) -> &str {
        &self.table
    }

    async fn list(&self, order: &ListOrder) -> Result<Vec<Record>> {
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| {
            let ord = compare(a, b, order.column);
            match order.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        Ok(records)
    }

    async fn insert(&self, fields: &RecordFields) -> Result<()> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.email == fields.email()) {
            return Err(self.conflict(fields.email()));
        }
        let created_at = Self::next_timestamp(&records);
        records.push(Record {
            id: RecordId::new(uuid::Uuid::new_v4().to_string()),
            email: fields.email().to_string(),
            username: fields.username().to_string(),
            created_at,
        });
        log::debug!("[{STORE_NAME}] Inserted record, {} total", records.len());
        Ok(())
    }

    async fn update(&self, fields: &RecordFields, id: &RecordId) -> Result<()> {
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|r| &r.id != id && r.email == fields.email())
        {
            return Err(self.conflict(fields.email()));
        }
        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        record.email = fields.email().to_string();
        record.username = fields.username().to_string();
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, username: &str) -> RecordFields {
        RecordFields::new(email, username).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamp() {
        let store = InMemoryRecordStore::new("Users");
        store.insert(&fields("a@x.com", "alice")).await.unwrap();

        let records = store.list(&ListOrder::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].id.as_str().is_empty());
        assert_eq!(records[0].fields(), ("a@x.com", "alice"));
    }

    #[tokio::test]
    async fn list_newest_first() {
        let store = InMemoryRecordStore::new("Users");
        store.insert(&fields("a@x.com", "alice")).await.unwrap();
        store.insert(&fields("b@x.com", "bob")).await.unwrap();
        store.insert(&fields("c@x.com", "carol")).await.unwrap();

        let emails: Vec<String> = store
            .list(&ListOrder::newest_first())
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.email)
            .collect();
        assert_eq!(emails, ["c@x.com", "b@x.com", "a@x.com"]);
    }

    #[tokio::test]
    async fn list_by_username_ascending() {
        let store = InMemoryRecordStore::new("Users");
        store.insert(&fields("z@x.com", "zed")).await.unwrap();
        store.insert(&fields("a@x.com", "amy")).await.unwrap();

        let order = ListOrder::new(OrderColumn::Username, SortDirection::Ascending);
        let names: Vec<String> = store
            .list(&order)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.username)
            .collect();
        assert_eq!(names, ["amy", "zed"]);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let store = InMemoryRecordStore::new("Users");
        store.insert(&fields("a@x.com", "alice")).await.unwrap();
        let err = store.insert(&fields("a@x.com", "other")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_overwrites_fields_only() {
        let store = InMemoryRecordStore::new("Users");
        store.insert(&fields("a@x.com", "alice")).await.unwrap();
        let before = store.list(&ListOrder::default()).await.unwrap().remove(0);

        store
            .update(&fields("a2@x.com", "alice2"), &before.id)
            .await
            .unwrap();

        let after = store.list(&ListOrder::default()).await.unwrap().remove(0);
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.fields(), ("a2@x.com", "alice2"));
    }

    #[tokio::test]
    async fn update_keeping_own_email_is_not_conflict() {
        let store = InMemoryRecordStore::new("Users");
        store.insert(&fields("a@x.com", "alice")).await.unwrap();
        let id = store.list(&ListOrder::default()).await.unwrap()[0].id.clone();
        assert!(store.update(&fields("a@x.com", "renamed"), &id).await.is_ok());
    }

    #[tokio::test]
    async fn update_to_taken_email_conflicts() {
        let store = InMemoryRecordStore::new("Users");
        store.insert(&fields("a@x.com", "alice")).await.unwrap();
        store.insert(&fields("b@x.com", "bob")).await.unwrap();
        let bob = store.list(&ListOrder::default()).await.unwrap()[0].id.clone();
        let err = store.update(&fields("a@x.com", "bob"), &bob).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = InMemoryRecordStore::new("Users");
        let id = RecordId::new("missing");
        let err = store.update(&fields("a@x.com", "a"), &id).await.unwrap_err();
        assert!(matches!(err, StoreError::RecordNotFound { .. }));
        let err = store.delete(&id).await.unwrap_err();
        assert!(err.store_message().is_some());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryRecordStore::new("Users");
        store.insert(&fields("a@x.com", "alice")).await.unwrap();
        let id = store.list(&ListOrder::default()).await.unwrap()[0].id.clone();
        store.delete(&id).await.unwrap();
        assert!(store.is_empty().await);
    }
}
