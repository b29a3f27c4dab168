//! Update 产生的副作用

use record_manager_store::{RecordFields, RecordId};

/// 需要在后台执行的 store 请求
///
/// Update 层只描述要做什么，由 backend 层执行，
/// 完成后以 [`StoreMessage`](crate::message::StoreMessage) 的形式回到 Update。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 拉取全部记录（`created_at` 降序）
    List,
    /// 新建记录
    Insert(RecordFields),
    /// 覆盖指定记录的字段
    Update { id: RecordId, fields: RecordFields },
    /// 删除指定记录
    Delete(RecordId),
}
