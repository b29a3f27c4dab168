//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, DeleteFocus, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { email, focus, .. } => render_confirm_delete(frame, email, *focus),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距区域
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染删除确认弹窗
fn render_confirm_delete(frame: &mut Frame, email: &str, focus: DeleteFocus) {
    let texts = &t().modal.confirm_delete;
    let c = colors();

    let area = centered_rect(52, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));
    frame.render_widget(block, area);

    let cancel_style = if focus == DeleteFocus::Cancel {
        Style::default().fg(c.selected_fg).bg(c.muted)
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if focus == DeleteFocus::Confirm {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(texts.message, Style::default().fg(c.fg)),
        Line::styled(format!("\"{email}\""), Style::default().fg(c.warning)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.confirm), confirm_style),
        ]),
        Line::from(""),
        Line::styled(texts.key_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

/// 帮助中的一行：按键 + 说明
fn shortcut(key: &'static str, desc: &'static str) -> Line<'static> {
    let c = colors();
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(c.warning)),
        Span::styled(desc, Style::default().fg(c.fg)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = &t().help;
    let actions = &texts.actions;
    let c = colors();

    let area = centered_rect(56, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight));
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        section(texts.global_shortcuts),
        shortcut("Tab", actions.switch_panel),
        shortcut("Alt+r", actions.refresh),
        shortcut("Alt+h", actions.help),
        shortcut("Alt+q", actions.quit),
        Line::from(""),
        section(texts.form_shortcuts),
        shortcut("↑↓", actions.switch_field),
        shortcut("a-z…", actions.type_text),
        shortcut("Enter", actions.submit),
        shortcut("Esc", actions.cancel_edit),
        Line::from(""),
        section(texts.table_shortcuts),
        shortcut("↑↓/jk", actions.move_up_down),
        shortcut("e/Enter", actions.edit),
        shortcut("d/Del", actions.delete),
        shortcut("r", actions.refresh),
        Line::from(""),
        Line::styled(texts.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
