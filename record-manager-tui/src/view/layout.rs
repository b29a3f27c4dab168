//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::Styles;

/// 表单面板高度：边框 2 + 两个输入框 + 空行 + 按钮行
const FORM_HEIGHT: u16 = 6;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let error_height = app
        .error
        .as_deref()
        .map_or(0, |message| components::error_banner::height(message, size.width));

    // 标题栏 + 表单 + 错误横幅 + 表格 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(error_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::form::render(app, frame, main_layout[1]);
    if let Some(ref message) = app.error {
        components::error_banner::render(message, frame, main_layout[2]);
    }
    pages::records::render(app, frame, main_layout[3]);
    components::statusbar::render(app, frame, main_layout[4]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let title = Paragraph::new(format!(
        " {} · {}: {}",
        texts.common.app_name, texts.common.table, app.table_name
    ))
    .style(Styles::bar());
    frame.render_widget(title, area);
}
