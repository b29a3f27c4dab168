//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let separator = || Span::styled(" │ ", Style::default().fg(c.muted));

    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(separator());
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::bar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    match app.focus {
        FocusPanel::Form => {
            hints.push((keys.arrows_ud, actions.switch_field));
            hints.push((keys.enter, actions.submit));
            if app.is_editing() {
                hints.push((keys.esc, actions.cancel_edit));
            }
        }
        FocusPanel::Table => {
            hints.push((keys.arrows_ud, actions.select));
            hints.push((keys.edit, actions.edit));
            hints.push((keys.delete, actions.delete));
            hints.push((keys.refresh, actions.refresh));
            hints.push((keys.help, actions.help));
        }
    }

    hints.push((keys.quit, actions.quit));
    hints
}
