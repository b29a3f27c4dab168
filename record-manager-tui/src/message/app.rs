//! 应用主消息枚举

use super::{FormMessage, ModalMessage, StoreMessage, TableMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（表单 ↔ 表格）
    ToggleFocus,

    /// 表单面板相关消息
    Form(FormMessage),

    /// 表格面板相关消息
    Table(TableMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// store 请求完成
    Store(StoreMessage),

    /// 重新拉取列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
