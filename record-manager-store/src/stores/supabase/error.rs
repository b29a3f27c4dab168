//! Supabase error mapping

use crate::error::StoreError;
use crate::traits::{ErrorContext, RawApiError, StoreErrorMapper};

use super::SupabaseStore;

/// PostgREST / Postgres error code mapping
/// Reference: <https://postgrest.org/en/stable/references/errors.html>
impl StoreErrorMapper for SupabaseStore {
    fn store_name(&self) -> &'static str {
        "supabase"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> StoreError {
        match (raw.code.as_deref(), raw.status) {
            // 23505: unique_violation
            (Some("23505"), _) => StoreError::Conflict {
                store: self.store_name().to_string(),
                raw_message: raw.message,
            },

            // PGRST301: JWT could not be decoded / expired
            // PGRST302: anonymous access disabled
            // PGRST303: JWT claims validation failed
            (Some("PGRST301" | "PGRST302" | "PGRST303"), _) | (None, Some(401)) => {
                StoreError::Unauthorized {
                    store: self.store_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // 42501: insufficient_privilege (grants, row level security)
            (Some("42501"), _) | (None, Some(403)) => StoreError::PermissionDenied {
                store: self.store_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 42P01: undefined_table
            // PGRST205: table not found in the schema cache
            (Some("42P01" | "PGRST205"), _) => StoreError::TableNotFound {
                store: self.store_name().to_string(),
                table: context.table.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 22P02: invalid_text_representation (malformed id)
            // 23502: not_null_violation
            // 23514: check_violation
            // 22001: string_data_right_truncation
            // PGRST100: unparsable query parameter
            // PGRST204: column not found
            (Some(code @ ("22P02" | "23502" | "23514" | "22001" | "PGRST100" | "PGRST204")), _) => {
                let param = match code {
                    "22P02" => "id",
                    "PGRST100" => "query",
                    _ => "fields",
                };
                StoreError::InvalidParameter {
                    store: self.store_name().to_string(),
                    param: param.to_string(),
                    detail: raw.message,
                }
            }

            // PGRST116: singular response requested but no row matched
            (Some("PGRST116"), _) => StoreError::RecordNotFound {
                store: self.store_name().to_string(),
                record_id: context.record_id.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // Other errors fallback
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SupabaseStore {
        SupabaseStore::new("https://xyz.supabase.co", "anon-key", "Users").unwrap()
    }

    fn ctx() -> ErrorContext {
        ErrorContext {
            record_id: Some("rec-1".to_string()),
            table: Some("Users".to_string()),
        }
    }

    fn coded(status: u16, code: &str, message: &str) -> RawApiError {
        RawApiError::with_code(Some(status), code, message)
    }

    #[test]
    fn unique_violation_is_conflict() {
        let err = store().map_error(
            coded(409, "23505", "duplicate key value violates unique constraint"),
            ctx(),
        );
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(
            err.store_message(),
            Some("duplicate key value violates unique constraint")
        );
    }

    #[test]
    fn jwt_errors_are_unauthorized() {
        for code in ["PGRST301", "PGRST302", "PGRST303"] {
            let err = store().map_error(coded(401, code, "JWT expired"), ctx());
            assert!(matches!(err, StoreError::Unauthorized { .. }), "{code}");
        }
    }

    #[test]
    fn bare_401_is_unauthorized() {
        let err = store().map_error(RawApiError::new(Some(401), "Invalid API key"), ctx());
        assert!(matches!(err, StoreError::Unauthorized { .. }));
        assert_eq!(err.store_message(), Some("Invalid API key"));
    }

    #[test]
    fn insufficient_privilege_is_permission_denied() {
        let err = store().map_error(
            coded(401, "42501", "new row violates row-level security policy"),
            ctx(),
        );
        assert!(matches!(err, StoreError::PermissionDenied { .. }));

        let err = store().map_error(RawApiError::new(Some(403), "forbidden"), ctx());
        assert!(matches!(err, StoreError::PermissionDenied { .. }));
    }

    #[test]
    fn missing_table() {
        for code in ["42P01", "PGRST205"] {
            let err = store().map_error(coded(404, code, "relation does not exist"), ctx());
            assert!(
                matches!(&err, StoreError::TableNotFound { table, .. } if table == "Users"),
                "{code}: {err:?}"
            );
        }
    }

    #[test]
    fn invalid_parameters_name_the_param() {
        let err = store().map_error(
            coded(400, "22P02", "invalid input syntax for type uuid: \"x\""),
            ctx(),
        );
        assert!(matches!(&err, StoreError::InvalidParameter { param, .. } if param == "id"));

        let err = store().map_error(
            coded(400, "23502", "null value in column \"email\""),
            ctx(),
        );
        assert!(matches!(&err, StoreError::InvalidParameter { param, .. } if param == "fields"));

        let err = store().map_error(coded(400, "PGRST100", "failed to parse filter"), ctx());
        assert!(matches!(&err, StoreError::InvalidParameter { param, .. } if param == "query"));
    }

    #[test]
    fn singular_no_rows_is_not_found() {
        let err = store().map_error(coded(406, "PGRST116", "0 rows"), ctx());
        assert!(matches!(&err, StoreError::RecordNotFound { record_id, .. } if record_id == "rec-1"));
    }

    #[test]
    fn unknown_code_falls_back_to_api() {
        let err = store().map_error(coded(500, "XX000", "internal error"), ctx());
        match err {
            StoreError::Api {
                status,
                raw_code,
                raw_message,
                ..
            } => {
                assert_eq!(status, Some(500));
                assert_eq!(raw_code.as_deref(), Some("XX000"));
                assert_eq!(raw_message, "internal error");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn status_only_5xx_falls_back_to_api() {
        let err = store().map_error(RawApiError::new(Some(503), "HTTP 503"), ctx());
        assert!(matches!(err, StoreError::Api { status: Some(503), .. }));
    }
}
