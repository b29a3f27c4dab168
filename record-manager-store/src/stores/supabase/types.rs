//! PostgREST API 类型定义

use serde::Deserialize;

/// PostgREST 错误响应体
///
/// 数据库错误时 `code` 为 Postgres SQLSTATE（如 `23505`），
/// PostgREST 自身错误为 `PGRSTxxx`。网关（Kong）返回的认证错误只有 `message`。
#[derive(Debug, Default, Deserialize)]
pub struct PostgrestError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, alias = "msg", alias = "error")]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestError {
    /// 从响应文本解析，无法解析时返回空错误体
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// 面向用户的错误消息
    ///
    /// 优先使用 `message`；缺失时依次回退到 `details`、原始响应文本、HTTP 状态。
    pub fn user_message(&self, status: u16, body: &str) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        if let Some(details) = self.details.as_deref().filter(|d| !d.is_empty()) {
            return details.to_string();
        }
        let body = body.trim();
        if !body.is_empty() && !body.starts_with('{') && !body.starts_with('<') {
            return body.to_string();
        }
        format!("HTTP {status}")
    }
}
