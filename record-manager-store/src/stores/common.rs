//! Store 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, StoreError};

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
///
/// `timeout` 为整个请求的超时，`None` 时使用 [`DEFAULT_REQUEST_TIMEOUT_SECS`]。
pub fn create_http_client(store: &str, timeout: Option<Duration>) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(timeout.unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)))
        .build()
        .map_err(|e| StoreError::Configuration {
            store: store.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ 请求参数 ============

/// 构造 PostgREST 等值过滤条件 `column=eq.value`
///
/// 值会做 URL 编码，保证 id 中的保留字符不会改变查询语义。
pub fn eq_filter(column: &str, value: &str) -> String {
    format!("{column}=eq.{}", urlencoding::encode(value))
}
