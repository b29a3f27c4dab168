//! 主题和样式定义
//!
//! 两套配色以常量表给出，当前主题存放在原子变量里，渲染时按需读取。

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// `true` 表示浅色主题
static LIGHT_THEME: AtomicBool = AtomicBool::new(false);

/// 主题，配置文件中写作 `"dark"` / `"light"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 该主题的配色
    pub fn colors(self) -> &'static ThemeColors {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// 切换全局主题
pub fn set_theme(theme: Theme) {
    LIGHT_THEME.store(theme == Theme::Light, Ordering::Relaxed);
}

/// 当前主题
pub fn current_theme() -> Theme {
    if LIGHT_THEME.load(Ordering::Relaxed) {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// 当前主题的配色
pub fn colors() -> &'static ThemeColors {
    current_theme().colors()
}

/// 配色表
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    /// 快捷键提示中的按键
    pub key: Color,
}

const DARK: ThemeColors = ThemeColors {
    fg: Color::Rgb(220, 220, 220),
    border: Color::Rgb(70, 70, 70),
    border_focused: Color::Rgb(62, 142, 208),
    highlight: Color::Rgb(62, 142, 208),
    selected_bg: Color::Rgb(40, 70, 110),
    selected_fg: Color::White,
    success: Color::Rgb(96, 190, 120),
    warning: Color::Rgb(220, 170, 90),
    error: Color::Rgb(235, 110, 100),
    muted: Color::Rgb(130, 130, 130),
    key: Color::Yellow,
};

const LIGHT: ThemeColors = ThemeColors {
    fg: Color::Rgb(40, 40, 40),
    border: Color::Rgb(200, 200, 200),
    border_focused: Color::Rgb(30, 100, 190),
    highlight: Color::Rgb(30, 100, 190),
    selected_bg: Color::Rgb(210, 228, 250),
    selected_fg: Color::Black,
    success: Color::Rgb(30, 130, 60),
    warning: Color::Rgb(170, 110, 0),
    error: Color::Rgb(200, 40, 50),
    muted: Color::Rgb(120, 120, 120),
    key: Color::Rgb(150, 90, 0),
};

/// 常用样式
pub struct Styles;

impl Styles {
    /// 面板边框，获得焦点时高亮
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 表格选中行
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 面板标题
    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 顶部标题栏与底部状态栏
    pub fn bar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 快捷键提示中的按键
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().key)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键提示中的说明
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().selected_fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_in_config() {
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Dark.colors().fg, Theme::Light.colors().fg);
    }
}
