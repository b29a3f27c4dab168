use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MissingFields;

// ============ Identity ============

/// Opaque record identifier assigned by the store.
///
/// Stores differ in their key type (uuid text, bigint identity); on the wire
/// both string and integer ids are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            String(String),
            I64(i64),
            U64(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::String(s) => Self(s),
            RawId::I64(n) => Self(n.to_string()),
            RawId::U64(n) => Self(n.to_string()),
        })
    }
}

// ============ Records ============

/// A stored record.
///
/// `id` and `created_at` are owned by the store and never sent on writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Email address, expected unique.
    pub email: String,
    /// Display name.
    pub username: String,
    /// Insertion timestamp assigned by the store.
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// The writable projection of this record.
    pub fn fields(&self) -> (&str, &str) {
        (&self.email, &self.username)
    }
}

/// Write payload for insert and update: exactly `email` and `username`.
///
/// Only constructible through [`RecordFields::new`], so every value that
/// reaches a store has passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFields {
    email: String,
    username: String,
}

impl RecordFields {
    /// Build a payload, rejecting empty values.
    ///
    /// Only presence is checked; values are sent exactly as typed.
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, MissingFields> {
        let email = email.into();
        let username = username.into();
        if email.is_empty() || username.is_empty() {
            return Err(MissingFields);
        }
        Ok(Self { email, username })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// ============ Ordering ============

/// Sort direction for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// PostgREST `order=` suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Sortable record columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderColumn {
    #[default]
    CreatedAt,
    Email,
    Username,
}

impl OrderColumn {
    /// Column name in the remote table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Email => "email",
            Self::Username => "username",
        }
    }
}

/// Ordering requested from `list`.
///
/// # Default
///
/// Newest first: `created_at` descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListOrder {
    pub column: OrderColumn,
    pub direction: SortDirection,
}

impl ListOrder {
    pub const fn new(column: OrderColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Newest records first.
    pub const fn newest_first() -> Self {
        Self::new(OrderColumn::CreatedAt, SortDirection::Descending)
    }
}

// ============ Configuration ============

/// Default collection name.
pub const DEFAULT_TABLE: &str = "Users";

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

/// Which store to build and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend")]
pub enum StoreConfig {
    /// PostgREST table behind a Supabase project. Requires feature `supabase`.
    #[cfg(feature = "supabase")]
    #[serde(rename = "supabase")]
    Supabase {
        /// Project URL, e.g. `https://xyzcompany.supabase.co`.
        url: String,
        /// Anon or service role key.
        api_key: String,
        /// Table name.
        #[serde(default = "default_table")]
        table: String,
        /// Whole-request timeout in seconds, `None` for the client default.
        #[serde(default)]
        timeout_secs: Option<u64>,
    },

    /// Process-local store, starts empty.
    #[serde(rename = "memory")]
    Memory {
        /// Table name (display only).
        #[serde(default = "default_table")]
        table: String,
    },
}

impl StoreConfig {
    /// Name of the collection this config points at.
    pub fn table(&self) -> &str {
        match self {
            #[cfg(feature = "supabase")]
            Self::Supabase { table, .. } => table,
            Self::Memory { table } => table,
        }
    }
}
