//! 应用主状态结构

use record_manager_store::Record;

use super::{FocusPanel, FormState, ModalState, RecordsState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 记录列表状态
    pub records: RecordsState,

    /// 表单输入
    pub form: FormState,

    /// 正在编辑的记录，`None` 时表单处于新建模式
    pub editing: Option<Record>,

    /// 最近一次失败的消息
    pub error: Option<String>,

    /// 表名（标题栏显示）
    pub table_name: String,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 启动时首个列表请求尚未返回，因此 `loading` 为 `true`。
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Form,
            records: RecordsState::new(),
            form: FormState::new(),
            editing: None,
            error: None,
            table_name: table_name.into(),
            status_message: None,
            modal: ModalState::new(),
        }
    }

    /// 表单是否处于编辑模式
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(record_manager_store::DEFAULT_TABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_in_create_mode() {
        let app = App::default();
        assert!(app.records.loading);
        assert!(app.records.records.is_empty());
        assert!(app.error.is_none());
        assert!(!app.is_editing());
        assert!(app.form.is_blank());
        assert!(app.focus.is_form());
        assert_eq!(app.table_name, "Users");
    }
}
