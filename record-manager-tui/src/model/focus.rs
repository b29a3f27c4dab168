//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 上方表单面板
    #[default]
    Form,
    /// 下方记录表格
    Table,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Form,
        }
    }

    /// 是否是表单面板
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    /// 是否是表格面板
    pub fn is_table(self) -> bool {
        matches!(self, FocusPanel::Table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(FocusPanel::default(), FocusPanel::Form);
        assert_eq!(FocusPanel::Form.toggle(), FocusPanel::Table);
        assert_eq!(FocusPanel::Table.toggle(), FocusPanel::Form);
    }
}
