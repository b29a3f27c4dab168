//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改 / Effect │   │
//！│  │        │               │ FormMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ TableMsg  │          ┌──────────┐         │   │
//！│  │   │  View   │          │ ModalMsg  │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └──────────┘         │   │
//！│  │        │                                           ▲               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                 StoreMessage (channel)        │
//！│           ▼                                           │                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │record-manager-    │           │
//！│                                           │      store        │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//! ```text
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，下一轮重绘
//!             其他                                 // 忽略
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键（Ctrl+C、Alt+q、Alt+h、Alt+r、Tab），就地处理
//!                 - 焦点位于表单，调用 handle_form_keys 处理
//!                 - 焦点位于表格，调用 handle_table_keys 处理
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     删除确认弹窗：
//!             Esc / n      → ModalMessage::Close              // 拒绝，不发请求
//!             Tab / ←→     → ModalMessage::ToggleDeleteFocus
//!             Enter        → ModalMessage::Confirm            // 执行当前焦点按钮
//!             y            → ModalMessage::Accept             // 直接确认
//!
//!     帮助弹窗：
//!             Esc / Enter / q / ?  → ModalMessage::Close
//! ```
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
