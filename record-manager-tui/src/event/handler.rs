//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage, TableMessage};
use crate::model::{App, FocusPanel, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize 等事件不产生消息，下一轮循环自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(ref modal) = app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    match app.focus {
        FocusPanel::Form => handle_form_keys(key, app),
        FocusPanel::Table => handle_table_keys(key),
    }
}

/// 处理表单面板的按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    // Esc 只在编辑模式下取消
    if DefaultKeymap::CANCEL.matches(&key) {
        return if app.is_editing() {
            AppMessage::Form(FormMessage::Cancel)
        } else {
            AppMessage::Noop
        };
    }

    match key.code {
        // ↑↓ / Shift+Tab: 切换输入框
        KeyCode::Up | KeyCode::Down | KeyCode::BackTab => {
            AppMessage::Form(FormMessage::SwitchField)
        }

        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // 普通字符输入（大写字母带 Shift）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理记录表格的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::TABLE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TABLE_HELP.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::TABLE_REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Table(TableMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Table(TableMessage::Delete);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Table(TableMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Table(TableMessage::SelectNext),
        KeyCode::Home => AppMessage::Table(TableMessage::SelectFirst),
        KeyCode::End => AppMessage::Table(TableMessage::SelectLast),
        // Enter: 编辑选中记录
        KeyCode::Enter => AppMessage::Table(TableMessage::Edit),
        KeyCode::Delete => AppMessage::Table(TableMessage::Delete),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← → 或 h l: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right | KeyCode::Char('h' | 'l') => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }

        // Enter: 执行当前焦点按钮
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        KeyCode::Char('y' | 'Y') => AppMessage::Modal(ModalMessage::Accept),
        KeyCode::Char('n' | 'N') => AppMessage::Modal(ModalMessage::Close),

        _ => AppMessage::Noop,
    }
}
