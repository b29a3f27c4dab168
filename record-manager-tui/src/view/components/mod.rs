//! 可复用 UI 组件

pub mod error_banner;
pub mod form;
pub mod modal;
pub mod statusbar;
