//! Record store implementations

/// Shared utilities used by HTTP-backed store implementations.
#[cfg(feature = "supabase")]
pub mod common;

mod memory;
#[cfg(feature = "supabase")]
mod supabase;

pub use memory::InMemoryRecordStore;
#[cfg(feature = "supabase")]
pub use supabase::SupabaseStore;
