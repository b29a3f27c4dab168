//! 记录表格视图

use chrono::Local;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use record_manager_store::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 创建时间列宽度（`YYYY-MM-DD HH:MM:SS`）
const CREATED_AT_WIDTH: u16 = 19;
/// 操作列宽度
const ACTIONS_WIDTH: u16 = 20;

/// 渲染记录表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus.is_table() && !app.modal.is_open();

    let mut title = format!(" {} ({}) ", texts.table.title, app.records.records.len());
    // 表格内容保持不变，只在标题上提示正在重新拉取
    if app.records.loading && !app.records.records.is_empty() {
        title.push_str(texts.table.loading_marker);
        title.push(' ');
    }

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if app.records.loading && app.records.records.is_empty() {
        render_message(frame, area, block, texts.table.loading);
    } else if app.records.records.is_empty() {
        render_message(frame, area, block, texts.table.empty);
    } else {
        render_table(app, frame, area, block, focused);
    }
}

/// 加载中 / 空状态
fn render_message(frame: &mut Frame, area: Rect, block: Block<'_>, message: &str) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_table(app: &App, frame: &mut Frame, area: Rect, block: Block<'_>, focused: bool) {
    let c = colors();
    let texts = t();

    // 邮箱与用户名平分剩余宽度（扣除边框、固定列与列间距）
    let fixed = CREATED_AT_WIDTH + ACTIONS_WIDTH + 2 + 3;
    let flexible = area.width.saturating_sub(fixed);
    let email_width = flexible * 3 / 5;
    let username_width = flexible - email_width;

    let header = Row::new(vec![
        Cell::from(texts.table.email),
        Cell::from(texts.table.username),
        Cell::from(texts.table.created_at),
        Cell::from(texts.table.actions),
    ])
    .style(Style::default().fg(c.highlight).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .records
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let actions = if focused && i == app.records.selected {
                texts.table.actions_hint
            } else {
                ""
            };
            Row::new(vec![
                Cell::from(truncate(&record.email, email_width as usize)),
                Cell::from(truncate(&record.username, username_width as usize)),
                Cell::from(format_created_at(record)),
                Cell::from(actions),
            ])
            .style(Style::default().fg(c.fg))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(email_width),
            Constraint::Length(username_width),
            Constraint::Length(CREATED_AT_WIDTH),
            Constraint::Length(ACTIONS_WIDTH),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(if focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    });

    let mut state = TableState::default().with_selected(Some(app.records.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 以本地时区显示创建时间
pub fn format_created_at(record: &Record) -> String {
    record
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// 按显示宽度截断，超出时以 `…` 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        result.push(ch);
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("alice", 10), "alice");
        assert_eq!(truncate("alice", 5), "alice");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("alice@example.com", 8), "alice@e…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // 每个汉字占两列
        let out = truncate("张三李四王五", 7);
        assert_eq!(out, "张三李…");
        assert!(out.width() <= 7);
    }
}
