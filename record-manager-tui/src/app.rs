//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 初始化为以下状态：
//!
//! App {
//! ```text
//!     should_quit: false,
//!     focus: FocusPanel::Form,                        // 焦点在表单
//!     records: RecordsState { loading: true, .. },    // 首个列表请求尚未返回
//!     form: 空表单,
//!     editing: None,                                  // 新建模式
//!     error: None,
//!     ..
//! ```
//! }
//!
//! 随后 main.rs 派发 update::init() 返回的首个 Effect::List。
//!
//!
//! 应用的主循环中有：
//! loop {
//!
//! ```text
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }
//!
//!     while let Ok(result) = rx.try_recv() {          // 取出所有已完成的 store 请求
//!         apply(AppMessage::Store(result))
//!     }
//!
//!     if let Some(event) = poll_event(50ms) {         // 轮询输入，最长等待 50ms
//!         apply(handle_event(event, &app))
//!     }
//! ```
//! }
//!
//! apply(msg) = update(&mut app, msg) 返回的 Effect 交给 EffectRunner 在后台执行。
//! 每条消息都在下一条之前处理完毕，App 不需要加锁。
//!

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::EffectRunner;
use crate::event;
use crate::message::{AppMessage, StoreMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时，也决定后台结果最迟多久被渲染
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// 处理一条消息并派发其产生的 Effect
fn apply(app: &mut App, runner: &EffectRunner, msg: AppMessage) {
    if let Some(effect) = update::update(app, msg) {
        runner.dispatch(effect);
    }
}

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    runner: &EffectRunner,
    rx: &mut UnboundedReceiver<StoreMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理已完成的 store 请求
        while let Ok(result) = rx.try_recv() {
            apply(app, runner, AppMessage::Store(result));
        }

        // 4. 轮询输入事件
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            let msg = event::handle_event(event, app);
            apply(app, runner, msg);
        }
    }

    Ok(())
}
