//! Supabase RecordStore trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::stores::common::eq_filter;
use crate::traits::{ErrorContext, RecordStore, StoreErrorMapper};
use crate::types::{ListOrder, Record, RecordFields, RecordId};

use super::SupabaseStore;

impl SupabaseStore {
    fn table_context(&self) -> ErrorContext {
        ErrorContext {
            record_id: None,
            table: Some(self.table.clone()),
        }
    }

    fn record_context(&self, id: &RecordId) -> ErrorContext {
        ErrorContext {
            record_id: Some(id.to_string()),
            table: Some(self.table.clone()),
        }
    }

    /// `{table}?id=eq.{id}`
    fn record_url(&self, id: &RecordId) -> String {
        format!("{}?{}", self.table_url(), eq_filter("id", id.as_str()))
    }

    /// `{table}?select=*&order={column}.{direction}`
    fn list_url(&self, order: &ListOrder) -> String {
        format!(
            "{}?select=*&order={}.{}",
            self.table_url(),
            order.column.as_str(),
            order.direction.as_str()
        )
    }

    /// 解析 `select` 返回的行数组
    fn decode_rows(&self, text: &str) -> Result<Vec<Record>> {
        HttpUtils::parse_json(text, self.store_name())
    }
}

#[async_trait]
impl RecordStore for SupabaseStore {
    fn id(&self) -> &'static str {
        "supabase"
    }

    fn table(&self) -> &str {
        &self.table
    }

    async fn list(&self, order: &ListOrder) -> Result<Vec<Record>> {
        let url = self.list_url(order);
        let text = self.get_text(&url, self.table_context()).await?;
        let records = self.decode_rows(&text)?;
        log::debug!("[supabase] Fetched {} records", records.len());
        Ok(records)
    }

    async fn insert(&self, fields: &RecordFields) -> Result<()> {
        let url = self.table_url();
        // PostgREST 批量插入格式：单条也以数组提交
        let body = HttpUtils::to_json(std::slice::from_ref(fields), self.store_name())?;
        self.write_json(Method::POST, &url, body, self.table_context())
            .await
    }

    async fn update(&self, fields: &RecordFields, id: &RecordId) -> Result<()> {
        let url = self.record_url(id);
        let body = HttpUtils::to_json(fields, self.store_name())?;
        self.write_json(Method::PATCH, &url, body, self.record_context(id))
            .await
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let url = self.record_url(id);
        self.delete_at(&url, self.record_context(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderColumn, SortDirection};

    fn store() -> SupabaseStore {
        SupabaseStore::new("https://xyz.supabase.co", "anon-key", "Users").unwrap()
    }

    #[test]
    fn list_url_orders_newest_first() {
        assert_eq!(
            store().list_url(&ListOrder::newest_first()),
            "https://xyz.supabase.co/rest/v1/Users?select=*&order=created_at.desc"
        );
    }

    #[test]
    fn list_url_custom_order() {
        let order = ListOrder::new(OrderColumn::Email, SortDirection::Ascending);
        assert_eq!(
            store().list_url(&order),
            "https://xyz.supabase.co/rest/v1/Users?select=*&order=email.asc"
        );
    }

    #[test]
    fn record_url_filters_by_id() {
        assert_eq!(
            store().record_url(&RecordId::new("42")),
            "https://xyz.supabase.co/rest/v1/Users?id=eq.42"
        );
    }

    #[test]
    fn record_context_carries_id_and_table() {
        let ctx = store().record_context(&RecordId::new("42"));
        assert_eq!(ctx.record_id.as_deref(), Some("42"));
        assert_eq!(ctx.table.as_deref(), Some("Users"));
    }

    #[test]
    fn decode_rows_reads_postgrest_array() {
        let text = r#"[{"id":7,"email":"a@x.com","username":"alice","created_at":"2024-03-01T10:00:00+00:00"}]"#;
        let records = store().decode_rows(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, RecordId::new("7"));
        assert_eq!(records[0].fields(), ("a@x.com", "alice"));
    }

    #[test]
    fn decode_rows_rejects_non_json_body() {
        let err = store().decode_rows("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(
            matches!(&err, crate::error::StoreError::Parse { store, .. } if store == "supabase"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn insert_body_is_single_element_array() {
        let fields = RecordFields::new("c@x.com", "carol").unwrap();
        let body = HttpUtils::to_json(std::slice::from_ref(&fields), "supabase").unwrap();
        assert_eq!(body, r#"[{"email":"c@x.com","username":"carol"}]"#);
    }
}
