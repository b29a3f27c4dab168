//! # record-manager-store
//!
//! Record store abstraction for Record Manager: one named table of
//! `{ id, email, username, created_at }` rows, behind the [`RecordStore`] trait.
//!
//! ## Supported Stores
//!
//! | Store | Feature Flag | Auth Method |
//! |-------|-------------|-------------|
//! | [Supabase](https://supabase.com/) / PostgREST | `supabase` | `apikey` + Bearer key |
//! | In-memory | *(always)* | none |
//!
//! ## Feature Flags
//!
//! - **`supabase`** *(default)*: enable the PostgREST store.
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use record_manager_store::{create_store, ListOrder, RecordFields, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = create_store(&StoreConfig::Supabase {
//!         url: "https://xyzcompany.supabase.co".to_string(),
//!         api_key: "your-anon-key".to_string(),
//!         table: "Users".to_string(),
//!         timeout_secs: None,
//!     })?;
//!
//!     store.insert(&RecordFields::new("a@x.com", "alice")?).await?;
//!
//!     for record in store.list(&ListOrder::newest_first()).await? {
//!         println!("{} {} {}", record.email, record.username, record.created_at);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All store operations return [`Result<T, StoreError>`](StoreError).
//! [`StoreError::store_message`] gives the text the remote store attached to a
//! failure, if any. Requests are never retried.

mod error;
mod factory;
#[cfg(feature = "supabase")]
mod http_client;
mod stores;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{MissingFields, Result, StoreError};

// Re-export factory functions
pub use factory::create_store;

// Re-export core trait only (internal traits are not exported)
pub use traits::RecordStore;

// Re-export types
pub use types::{
    DEFAULT_TABLE, ListOrder, OrderColumn, Record, RecordFields, RecordId, SortDirection,
    StoreConfig,
};

// Re-export utils module
pub use utils::{datetime, log_sanitizer};

// Re-export concrete stores
pub use stores::InMemoryRecordStore;

#[cfg(feature = "supabase")]
pub use stores::SupabaseStore;
