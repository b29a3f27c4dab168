//! Store 结果消息

use record_manager_store::{Record, StoreError};

/// 后台 store 请求的完成结果
#[derive(Debug, Clone)]
pub enum StoreMessage {
    Listed(Result<Vec<Record>, StoreError>),
    Inserted(Result<(), StoreError>),
    Updated(Result<(), StoreError>),
    Deleted(Result<(), StoreError>),
}
