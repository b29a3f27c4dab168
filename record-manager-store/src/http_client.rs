//! Generic HTTP client tools
//!
//! Shared request handling for HTTP-backed stores: sending, logging and
//! reading the response. Each store builds its own `RequestBuilder` (URL,
//! headers, body) and decides how to interpret the returned status and text.
//!
//! Requests are sent exactly once. Timeouts come from the `reqwest::Client`
//! configuration.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `store_name` - store name (for logging and errors)
    /// * `method_name` - HTTP method (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP response, including 4xx/5xx
    /// * `Err(StoreError::Network | StoreError::Timeout)` when no response was received
    pub async fn execute_request(
        request_builder: RequestBuilder,
        store_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), StoreError> {
        log::debug!("[{store_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout {
                    store: store_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                StoreError::Network {
                    store: store_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{store_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| StoreError::Network {
            store: store_name.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{store_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(StoreError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, store_name: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{store_name}] JSON parse failed: {e}");
            log::error!(
                "[{store_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            StoreError::Parse {
                store: store_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Serialize a request body
    pub fn to_json<T>(body: &T, store_name: &str) -> Result<String, StoreError>
    where
        T: serde::Serialize + ?Sized,
    {
        serde_json::to_string(body).map_err(|e| StoreError::Serialization {
            store: store_name.to_string(),
            detail: e.to_string(),
        })
    }

    /// Whether a status code is a 2xx success
    pub fn is_success(status_code: u16) -> bool {
        (200..300).contains(&status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            email: String,
        }
        let result: Result<Vec<Row>, StoreError> =
            HttpUtils::parse_json(r#"[{"email":"a@x.com"}]"#, "test");
        assert!(
            matches!(&result, Ok(rows) if rows.len() == 1 && rows[0].email == "a@x.com"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<serde_json::Value>, StoreError> =
            HttpUtils::parse_json("<html>502</html>", "test");
        assert!(
            matches!(&result, Err(StoreError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn success_range() {
        assert!(HttpUtils::is_success(200));
        assert!(HttpUtils::is_success(201));
        assert!(HttpUtils::is_success(204));
        assert!(!HttpUtils::is_success(301));
        assert!(!HttpUtils::is_success(409));
    }

    #[test]
    fn to_json_serializes_slice() {
        let body = HttpUtils::to_json(&[serde_json::json!({"a": 1})][..], "test").unwrap();
        assert_eq!(body, r#"[{"a":1}]"#);
    }
}
