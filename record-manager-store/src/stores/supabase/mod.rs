//! Supabase (PostgREST) record store

mod error;
mod http;
mod store;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, StoreError};
use crate::stores::common::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::PostgrestError;

/// PostgREST 路径前缀
pub(crate) const REST_PATH: &str = "/rest/v1";

/// Supabase record store
///
/// 通过 PostgREST 接口操作单张表，使用 `apikey` 与 `Authorization: Bearer` 头认证。
pub struct SupabaseStore {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) table: String,
}

impl SupabaseStore {
    /// 使用默认超时创建
    pub fn new(url: &str, api_key: &str, table: &str) -> Result<Self> {
        Self::with_timeout(url, api_key, table, None)
    }

    /// 创建并指定整个请求的超时
    pub fn with_timeout(
        url: &str,
        api_key: &str,
        table: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let base_url = url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Self::config_error("project URL is empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Self::config_error(format!(
                "project URL must start with http:// or https://, got {base_url}"
            )));
        }
        if api_key.is_empty() {
            return Err(Self::config_error("API key is empty"));
        }
        if table.is_empty() {
            return Err(Self::config_error("table name is empty"));
        }

        log::info!(
            "[supabase] Using {base_url}{REST_PATH}/{table} (key {})",
            mask_secret(api_key)
        );

        Ok(Self {
            client: create_http_client("supabase", timeout)?,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
        })
    }

    /// 表资源 URL：`{base}/rest/v1/{table}`
    pub(crate) fn table_url(&self) -> String {
        format!(
            "{}{REST_PATH}/{}",
            self.base_url,
            urlencoding::encode(&self.table)
        )
    }

    fn config_error(detail: impl Into<String>) -> StoreError {
        StoreError::Configuration {
            store: "supabase".to_string(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_strips_trailing_slash() {
        let store = SupabaseStore::new("https://xyz.supabase.co/", "anon-key", "Users").unwrap();
        assert_eq!(store.table_url(), "https://xyz.supabase.co/rest/v1/Users");
    }

    #[test]
    fn table_url_encodes_table_name() {
        let store = SupabaseStore::new("https://xyz.supabase.co", "anon-key", "my users").unwrap();
        assert_eq!(store.table_url(), "https://xyz.supabase.co/rest/v1/my%20users");
    }

    #[test]
    fn rejects_unusable_config() {
        for (url, key, table) in [
            ("", "k", "Users"),
            ("xyz.supabase.co", "k", "Users"),
            ("https://xyz.supabase.co", "", "Users"),
            ("https://xyz.supabase.co", "k", ""),
        ] {
            let result = SupabaseStore::new(url, key, table);
            assert!(
                matches!(result, Err(StoreError::Configuration { .. })),
                "expected configuration error for ({url:?}, {key:?}, {table:?})"
            );
        }
    }
}
