//! Store factory.

use std::sync::Arc;

use crate::error::Result;
use crate::stores::InMemoryRecordStore;
#[cfg(feature = "supabase")]
use crate::stores::SupabaseStore;
use crate::traits::RecordStore;
use crate::types::StoreConfig;

/// Creates a [`RecordStore`] from the given configuration.
///
/// The concrete store type is determined by the [`StoreConfig`] variant.
/// The returned store is wrapped in `Arc<dyn RecordStore>` so it can be shared
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use record_manager_store::{create_store, StoreConfig};
///
/// let store = create_store(&StoreConfig::Memory {
///     table: "Users".to_string(),
/// }).unwrap();
/// assert_eq!(store.table(), "Users");
/// ```
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>> {
    match config {
        #[cfg(feature = "supabase")]
        StoreConfig::Supabase {
            url,
            api_key,
            table,
            timeout_secs,
        } => Ok(Arc::new(SupabaseStore::with_timeout(
            url,
            api_key,
            table,
            timeout_secs.map(std::time::Duration::from_secs),
        )?)),
        StoreConfig::Memory { table } => Ok(Arc::new(InMemoryRecordStore::new(table.clone()))),
    }
}
