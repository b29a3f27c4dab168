//! 表格消息类型

/// 表格面板相关消息
#[derive(Debug, Clone)]
pub enum TableMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    /// 编辑选中记录
    Edit,

    /// 删除选中记录（先弹出确认）
    Delete,
}
