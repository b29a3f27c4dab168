//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//! ```text
//!     src/update/mod.rs
//!         mod effect;             // 需要后台执行的 store 请求
//!         mod form;               // 表单子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         pub mod records;        // 六个记录操作 + store 结果处理
//!         mod store;              // StoreMessage 分发
//!         mod table;              // 表格子消息处理
//!
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Option<Effect>
//!
//!     Update 本身不做 I/O。需要访问 store 时返回 Effect，
//!     主循环把它交给 backend 在后台执行：
//!
//!         按键 ──▶ AppMessage ──▶ update() ──▶ Some(Effect::Insert(..))
//!                                                    │ 后台任务
//!                                                    ▼
//!         update() ◀── AppMessage::Store(Inserted(Ok)) ◀── store.insert()
//!            │
//!            └──▶ Some(Effect::List)        // 每次变更成功后整体刷新列表
//! ```
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod effect;
mod form;
mod modal;
pub mod records;
mod store;
mod table;

pub use effect::Effect;

use crate::message::AppMessage;
use crate::model::App;

/// 启动时的初始请求
pub fn init(app: &mut App) -> Effect {
    records::list(app)
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Effect> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Table(table_msg) => {
            table::update(app, table_msg);
            None
        }

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Store(store_msg) => store::update(app, store_msg),

        AppMessage::Refresh => {
            app.set_status(crate::i18n::t().status.loading);
            Some(records::list(app))
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Noop => None,
    }
}
