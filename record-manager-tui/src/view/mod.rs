//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//! ```text
//!     ┌──────────────────────────────────────────┐
//!     │ 标题栏                                    │
//!     ├──────────────────────────────────────────┤
//!     │ 表单（新建 / 编辑）                        │
//!     ├──────────────────────────────────────────┤
//!     │ 错误横幅（仅 error 存在时）                 │
//!     ├──────────────────────────────────────────┤
//!     │ 记录表格                                  │
//!     ├──────────────────────────────────────────┤
//!     │ 状态栏                                    │
//!     └──────────────────────────────────────────┘
//! ```
//!
//! 弹窗最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
