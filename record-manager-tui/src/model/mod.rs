//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//! ```text
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Form / Table）
//!
//!         pub mod state;      // 表格、表单、弹窗状态
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     pub struct App {
//!         pub should_quit: bool,              // 退出标志
//!         pub focus: FocusPanel,              // 当前焦点
//!         pub records: RecordsState,          // 记录列表 + 选中项 + loading
//!         pub form: FormState,                // 表单输入
//!         pub editing: Option<Record>,        // 编辑目标，None = 新建模式
//!         pub error: Option<String>,          // 最近一次失败消息
//!         pub status_message: Option<String>, // 状态栏消息
//!         pub modal: ModalState,              // 弹窗状态
//!     }
//!
//!     `editing` 存在时，其 id 是 update 的唯一键；表单是它的 (email, username) 投影。
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、表单状态机
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     Create (editing = None)  ── StartEdit ──▶  Edit (editing = Some(r))
//!            ▲                                        │
//!            └──── Update 成功 / CancelEdit ───────────┘
//!
//!     提交时：Create → insert，Edit → update。
//! ```
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{DeleteFocus, FormField, FormState, Modal, ModalState, RecordsState};
