//! Record Manager TUI
//!
//! 单页记录管理界面：上方表单新建/编辑记录，下方表格列出全部记录。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，纯函数，需要 I/O 时返回 `Effect`
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与 store 调用 (`backend/`)

pub mod app;
pub mod backend;
pub mod event;
pub mod i18n;
pub mod message;
pub mod model;
pub mod update;
pub mod util;
pub mod view;
