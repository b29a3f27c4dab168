//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//! ```text
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod form;           // 表单面板子消息
//!         mod table;          // 表格面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod store;          // 异步 store 请求完成后的结果消息
//!
//!
//!     与按键消息不同，StoreMessage 不由 Event 层产生：
//!     Update 返回的 Effect 在后台任务中执行，结果经 channel 回到主循环，
//!     再包装为 AppMessage::Store 交给 Update。
//! ```
//!

mod app;
mod form;
mod modal;
mod store;
mod table;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use store::StoreMessage;
pub use table::TableMessage;
