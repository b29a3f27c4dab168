//! Supabase HTTP 请求方法

use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, RawApiError, StoreErrorMapper};

use super::{PostgrestError, SupabaseStore};

/// 写操作不需要返回行
pub(crate) const PREFER_MINIMAL: &str = "return=minimal";

impl SupabaseStore {
    /// 附加认证头
    pub(crate) fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
    }

    /// 执行 GET 请求并返回响应文本
    pub(crate) async fn get_text(&self, url: &str, ctx: ErrorContext) -> Result<String> {
        let builder = self.authorized(self.client.get(url));
        self.send(builder, "GET", url, ctx).await
    }

    /// 执行带 JSON body 的写请求（POST / PATCH）
    pub(crate) async fn write_json(
        &self,
        method: reqwest::Method,
        url: &str,
        body: String,
        ctx: ErrorContext,
    ) -> Result<()> {
        let method_name = method.to_string();
        let builder = self
            .authorized(self.client.request(method, url))
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", PREFER_MINIMAL)
            .body(body);
        self.send(builder, &method_name, url, ctx).await.map(|_| ())
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete_at(&self, url: &str, ctx: ErrorContext) -> Result<()> {
        let builder = self
            .authorized(self.client.delete(url))
            .header("Prefer", PREFER_MINIMAL);
        self.send(builder, "DELETE", url, ctx).await.map(|_| ())
    }

    /// 发送请求；非 2xx 响应按 PostgREST 错误体映射
    async fn send(
        &self,
        builder: RequestBuilder,
        method_name: &str,
        url: &str,
        ctx: ErrorContext,
    ) -> Result<String> {
        let (status, text) =
            HttpUtils::execute_request(builder, self.store_name(), method_name, url).await?;

        if HttpUtils::is_success(status) {
            return Ok(text);
        }

        let body = PostgrestError::from_body(&text);
        let message = body.user_message(status, &text);
        if let Some(hint) = body.hint.as_deref() {
            log::debug!("[{}] hint: {hint}", self.store_name());
        }
        let raw = match body.code {
            Some(code) => RawApiError::with_code(Some(status), code, message),
            None => RawApiError::new(Some(status), message),
        };
        Err(self.map_error(raw, ctx))
    }
}
