use serde::{Deserialize, Serialize};

/// Unified error type for all record store operations.
///
/// Each variant includes a `store` field identifying which backend produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Store-provided messages
///
/// Variants produced from an error body returned by the remote store keep the
/// store's own text in `raw_message`; [`store_message`](Self::store_message)
/// exposes it. Transport-level variants ([`Network`](Self::Network),
/// [`Timeout`](Self::Timeout), [`Parse`](Self::Parse),
/// [`Serialization`](Self::Serialization)) carry no store text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum StoreError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    Network {
        /// Store that produced the error.
        store: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Store that produced the error.
        store: String,
        /// Error details.
        detail: String,
    },

    /// The API key is missing, invalid or expired.
    Unauthorized {
        /// Store that produced the error.
        store: String,
        /// Original error message from the store, if available.
        raw_message: Option<String>,
    },

    /// The caller lacks permission for the requested operation (row level security, grants).
    PermissionDenied {
        /// Store that produced the error.
        store: String,
        /// Original error message from the store, if available.
        raw_message: Option<String>,
    },

    /// A unique constraint was violated (for example a duplicate email).
    Conflict {
        /// Store that produced the error.
        store: String,
        /// Original error message from the store.
        raw_message: String,
    },

    /// The targeted record does not exist.
    RecordNotFound {
        /// Store that produced the error.
        store: String,
        /// ID of the record that was not found.
        record_id: String,
        /// Original error message from the store, if available.
        raw_message: Option<String>,
    },

    /// The configured table does not exist or is not exposed.
    TableNotFound {
        /// Store that produced the error.
        store: String,
        /// Table name.
        table: String,
        /// Original error message from the store, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected by the store (bad id format, null column, ...).
    InvalidParameter {
        /// Store that produced the error.
        store: String,
        /// Name of the invalid parameter.
        param: String,
        /// Original error message from the store.
        detail: String,
    },

    /// Failed to parse the store's response.
    Parse {
        /// Store that produced the error.
        store: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Store that produced the error.
        store: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// Store configuration is unusable (missing URL, bad header value, ...).
    Configuration {
        /// Store that produced the error.
        store: String,
        /// Details about the problem.
        detail: String,
    },

    /// Any other error reported by the store.
    Api {
        /// Store that produced the error.
        store: String,
        /// HTTP status, when the error came from an HTTP response.
        status: Option<u16>,
        /// Raw error code from the store, if available.
        raw_code: Option<String>,
        /// Raw error message from the store.
        raw_message: String,
    },
}

impl StoreError {
    /// Shortcut for an [`Api`](Self::Api) error without status or code.
    pub fn api(store: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            store: store.into(),
            status: None,
            raw_code: None,
            raw_message: message.into(),
        }
    }

    /// The message the remote store attached to this failure, if any.
    ///
    /// This is the text shown to the user; callers fall back to their own
    /// per-operation message when this returns `None`.
    pub fn store_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { raw_message, .. }
            | Self::PermissionDenied { raw_message, .. }
            | Self::RecordNotFound { raw_message, .. }
            | Self::TableNotFound { raw_message, .. } => raw_message.as_deref(),
            Self::Conflict { raw_message, .. } | Self::Api { raw_message, .. } => {
                Some(raw_message.as_str())
            }
            Self::InvalidParameter { detail, .. } => Some(detail.as_str()),
            Self::Network { .. }
            | Self::Timeout { .. }
            | Self::Parse { .. }
            | Self::Serialization { .. }
            | Self::Configuration { .. } => None,
        }
    }

    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::PermissionDenied { .. }
                | Self::Conflict { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { store, detail } => {
                write!(f, "[{store}] Network error: {detail}")
            }
            Self::Timeout { store, detail } => {
                write!(f, "[{store}] Request timeout: {detail}")
            }
            Self::Unauthorized { store, raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{store}] Unauthorized: {msg}")
                } else {
                    write!(f, "[{store}] Unauthorized")
                }
            }
            Self::PermissionDenied { store, raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{store}] Permission denied: {msg}")
                } else {
                    write!(f, "[{store}] Permission denied")
                }
            }
            Self::Conflict { store, raw_message } => {
                write!(f, "[{store}] Conflict: {raw_message}")
            }
            Self::RecordNotFound {
                store, record_id, ..
            } => {
                write!(f, "[{store}] Record '{record_id}' not found")
            }
            Self::TableNotFound { store, table, .. } => {
                write!(f, "[{store}] Table '{table}' not found")
            }
            Self::InvalidParameter {
                store,
                param,
                detail,
            } => {
                write!(f, "[{store}] Invalid parameter '{param}': {detail}")
            }
            Self::Parse { store, detail } => {
                write!(f, "[{store}] Parse error: {detail}")
            }
            Self::Serialization { store, detail } => {
                write!(f, "[{store}] Serialization error: {detail}")
            }
            Self::Configuration { store, detail } => {
                write!(f, "[{store}] Configuration error: {detail}")
            }
            Self::Api {
                store,
                status,
                raw_message,
                ..
            } => {
                if let Some(status) = status {
                    write!(f, "[{store}] HTTP {status}: {raw_message}")
                } else {
                    write!(f, "[{store}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Convenience type alias for `Result<T, StoreError>`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Local validation failure: a write payload is missing a required field.
///
/// Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Email and username are required")]
pub struct MissingFields;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = StoreError::Network {
            store: "supabase".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[supabase] Network error: connection refused");
    }

    #[test]
    fn display_api_with_status() {
        let e = StoreError::Api {
            store: "supabase".to_string(),
            status: Some(500),
            raw_code: Some("XX000".to_string()),
            raw_message: "internal error".to_string(),
        };
        assert_eq!(e.to_string(), "[supabase] HTTP 500: internal error");
    }

    #[test]
    fn display_api_without_status() {
        let e = StoreError::api("memory", "network down");
        assert_eq!(e.to_string(), "[memory] network down");
    }

    #[test]
    fn display_record_not_found() {
        let e = StoreError::RecordNotFound {
            store: "memory".to_string(),
            record_id: "42".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[memory] Record '42' not found");
    }

    #[test]
    fn store_message_prefers_raw_text() {
        let e = StoreError::Conflict {
            store: "supabase".into(),
            raw_message: "duplicate key value violates unique constraint \"Users_email_key\""
                .into(),
        };
        assert_eq!(
            e.store_message(),
            Some("duplicate key value violates unique constraint \"Users_email_key\"")
        );
        assert_eq!(
            StoreError::api("memory", "network down").store_message(),
            Some("network down")
        );
    }

    #[test]
    fn transport_errors_have_no_store_message() {
        let transport = [
            StoreError::Network {
                store: "t".into(),
                detail: "refused".into(),
            },
            StoreError::Timeout {
                store: "t".into(),
                detail: "30s".into(),
            },
            StoreError::Parse {
                store: "t".into(),
                detail: "eof".into(),
            },
            StoreError::Serialization {
                store: "t".into(),
                detail: "bad".into(),
            },
        ];
        for e in &transport {
            assert_eq!(e.store_message(), None, "{e}");
        }
    }

    #[test]
    fn unauthorized_without_message_has_none() {
        let e = StoreError::Unauthorized {
            store: "t".into(),
            raw_message: None,
        };
        assert_eq!(e.store_message(), None);
    }

    #[test]
    fn serialize_tags_variant() {
        let e = StoreError::TableNotFound {
            store: "supabase".to_string(),
            table: "Users".to_string(),
            raw_message: None,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"TableNotFound\""));
        assert!(json.contains("\"table\":\"Users\""));
    }

    #[test]
    fn expected_errors() {
        assert!(
            StoreError::Conflict {
                store: "t".into(),
                raw_message: "dup".into(),
            }
            .is_expected()
        );
        assert!(
            !StoreError::Network {
                store: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(!StoreError::api("t", "boom").is_expected());
    }

    #[test]
    fn missing_fields_message() {
        assert_eq!(MissingFields.to_string(), "Email and username are required");
    }
}
