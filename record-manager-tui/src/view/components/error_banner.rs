//! 错误横幅组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::view::theme::colors;

/// 横幅最多显示的文本行数，超出部分截断
const MAX_LINES: u16 = 4;

/// 横幅高度（含上下边框），按 `width` 宽度折行后的行数计算
pub fn height(message: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1);
    wrapped_lines(message, inner).clamp(1, MAX_LINES) + 2
}

/// 按词折行后的行数，超宽的词单独按宽度切分
fn wrapped_lines(message: &str, width: u16) -> u16 {
    let width = usize::from(width);
    let mut total = 0usize;
    for line in message.lines() {
        let mut lines = 1usize;
        let mut used = 0usize;
        for word in line.split_whitespace() {
            let w = word.width();
            let needed = if used == 0 { w } else { used + 1 + w };
            if needed <= width {
                used = needed;
            } else if w <= width {
                lines += usize::from(used > 0);
                used = w;
            } else {
                let extra = (w - 1) / width;
                lines += usize::from(used > 0) + extra;
                used = w - extra * width;
            }
        }
        total += lines;
    }
    u16::try_from(total).unwrap_or(u16::MAX)
}

/// 渲染错误消息
pub fn render(message: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", t().common.error))
        .title_style(Style::default().fg(c.error).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(c.error))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
