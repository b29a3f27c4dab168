//! 表单面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, FormField};
use crate::view::theme::{colors, Styles};

/// 渲染表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_form() && !app.modal.is_open();

    let title = if app.is_editing() {
        texts.form.edit_title
    } else {
        texts.form.create_title
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    // 标签按显示宽度对齐（中文标签占两列）
    let label_width = texts
        .form
        .email
        .width()
        .max(texts.form.username.width());

    let mut lines = vec![
        input_line(
            texts.form.email,
            &app.form.email,
            texts.form.email_placeholder,
            label_width,
            focused && app.form.active == FormField::Email,
        ),
        input_line(
            texts.form.username,
            &app.form.username,
            texts.form.username_placeholder,
            label_width,
            focused && app.form.active == FormField::Username,
        ),
        Line::from(""),
    ];

    let key_style = Styles::muted();
    let mut buttons = vec![
        Span::styled(
            format!("[ {} ]", submit_label(app)),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", texts.hints.keys.enter), key_style),
    ];
    if app.is_editing() {
        buttons.push(Span::raw("   "));
        buttons.push(Span::styled(
            format!("[ {} ]", texts.form.cancel_button),
            Style::default().fg(c.warning),
        ));
        buttons.push(Span::styled(format!(" {}", texts.hints.keys.esc), key_style));
    }
    lines.push(Line::from(buttons));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 提交按钮文字：编辑模式为“更新”，否则为“新建”
fn submit_label(app: &App) -> &'static str {
    if app.is_editing() {
        t().form.update_button
    } else {
        t().form.create_button
    }
}

/// 单个输入框：`标签  值▏`，值为空时显示占位符
fn input_line(
    label: &str,
    value: &str,
    placeholder: &str,
    label_width: usize,
    active: bool,
) -> Line<'static> {
    let c = colors();
    let padding = " ".repeat(label_width.saturating_sub(label.width()));
    let label_style = if active {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let mut spans = vec![
        Span::styled(format!("{label}{padding}  "), label_style),
    ];
    if value.is_empty() && !active {
        spans.push(Span::styled(placeholder.to_string(), Styles::muted()));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(c.fg)));
    }
    if active {
        spans.push(Span::styled("▏", Style::default().fg(c.highlight)));
    }
    Line::from(spans)
}
