//! 表单输入状态

use record_manager_store::Record;

/// 表单输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Email,
    Username,
}

impl FormField {
    /// 切换到另一个输入框（只有两个字段，上下移动等价）
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FormField::Email => FormField::Username,
            FormField::Username => FormField::Email,
        }
    }
}

/// 表单状态
///
/// 编辑时是被编辑记录 `(email, username)` 的投影，新建时为空。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub username: String,
    /// 当前接收按键的输入框
    pub active: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以记录内容填充表单
    pub fn from_record(record: &Record) -> Self {
        Self {
            email: record.email.clone(),
            username: record.username.clone(),
            active: FormField::Email,
        }
    }

    /// 清空表单
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        self.email.is_empty() && self.username.is_empty()
    }

    /// 当前输入框的值
    pub fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            FormField::Email => &mut self.email,
            FormField::Username => &mut self.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_active_field() {
        let mut form = FormState::new();
        form.active_value_mut().push_str("a@x.com");
        form.active = form.active.toggle();
        form.active_value_mut().push('a');
        assert_eq!(form.email, "a@x.com");
        assert_eq!(form.username, "a");

        form.clear();
        assert!(form.is_blank());
        assert_eq!(form.active, FormField::Email);
    }
}
