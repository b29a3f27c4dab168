//! 弹窗/对话框状态

use record_manager_store::RecordId;

/// 确认删除弹窗中的按钮焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFocus {
    /// 取消（默认，避免误删）
    #[default]
    Cancel,
    /// 确认删除
    Confirm,
}

impl DeleteFocus {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            DeleteFocus::Cancel => DeleteFocus::Confirm,
            DeleteFocus::Confirm => DeleteFocus::Cancel,
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 删除确认
    ConfirmDelete {
        record_id: RecordId,
        /// 被删除记录的邮箱（展示用）
        email: String,
        focus: DeleteFocus,
    },

    /// 帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 显示删除确认弹窗
    pub fn show_confirm_delete(&mut self, record_id: RecordId, email: String) {
        self.active = Some(Modal::ConfirmDelete {
            record_id,
            email,
            focus: DeleteFocus::Cancel,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
