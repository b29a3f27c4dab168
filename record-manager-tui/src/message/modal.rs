//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（删除确认弹窗中等同于拒绝）
    Close,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 确认/提交当前焦点按钮
    Confirm,

    /// 直接确认删除（`y`）
    Accept,
}
