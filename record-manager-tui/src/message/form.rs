//! 表单消息类型

/// 表单面板相关消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 切换到另一个输入框
    SwitchField,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 提交（新建或更新，取决于是否处于编辑模式）
    Submit,

    /// 取消编辑
    Cancel,
}
