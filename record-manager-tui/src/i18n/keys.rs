//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 错误消息（来自 store 或兜底提示）不做翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 表单面板文本
    pub form: FormTexts,
    /// 记录表格文本
    pub table: TableTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status: StatusTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub table: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str, // "↑↓"
    pub edit: &'static str,      // "e/Enter"
    pub delete: &'static str,    // "d"
    pub refresh: &'static str,   // "r"
    pub help: &'static str,      // "?"
    pub quit: &'static str,      // "Alt+q"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub switch_field: &'static str,
    pub submit: &'static str,
    pub cancel_edit: &'static str,
    pub select: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 表单与表格
// ============================================================================

/// 表单面板文本
pub struct FormTexts {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub email: &'static str,
    pub username: &'static str,
    pub email_placeholder: &'static str,
    pub username_placeholder: &'static str,
    pub create_button: &'static str,
    pub update_button: &'static str,
    pub cancel_button: &'static str,
}

/// 记录表格文本
pub struct TableTexts {
    /// 标题，后接记录数
    pub title: &'static str,
    pub email: &'static str,
    pub username: &'static str,
    pub created_at: &'static str,
    pub actions: &'static str,
    pub actions_hint: &'static str,
    pub loading: &'static str,
    /// 已有数据时，标题中的加载标记
    pub loading_marker: &'static str,
    pub empty: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub confirm_delete: ConfirmDeleteTexts,
}

/// 删除确认弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub key_hint: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏消息
pub struct StatusTexts {
    pub loading: &'static str,
    pub creating: &'static str,
    pub updating: &'static str,
    pub deleting: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub form_shortcuts: &'static str,
    pub table_shortcuts: &'static str,
    pub close_hint: &'static str,
    pub actions: HelpActionTexts,
}

/// 帮助页面中的动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub switch_field: &'static str,
    pub type_text: &'static str,
    pub submit: &'static str,
    pub cancel_edit: &'static str,
    pub move_up_down: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
}
