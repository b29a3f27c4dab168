//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务无关的代码：终端的进入/恢复，以及日志输出。
//!
//!
//! 有模块结构：
//! ```text
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 终端
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     init_terminal()
//!         - raw mode：按键立即送达，不回显
//!         - 备用屏幕：退出后原终端内容原样恢复
//!         - panic hook：panic 时先退出 raw mode 与备用屏幕，再打印信息
//!
//!     restore_terminal(&mut terminal)
//!         - 与 init_terminal 相反的三步：关闭 raw mode、离开备用屏幕、显示光标
//!         - main.rs 在 app::run 返回后立即调用，run 出错也不例外
//!
//!     Term = Terminal<CrosstermBackend<Stdout>>
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 日志
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     stdout 归 TUI 所有，日志只能写文件：
//!
//!         Linux:   ~/.local/share/record-manager/logs/record-manager.log
//!         macOS:   ~/Library/Application Support/record-manager/logs/record-manager.log
//!         Windows: %LOCALAPPDATA%\record-manager\logs\record-manager.log
//!
//!     级别：RUST_LOG=debug record-manager 可看到每个 HTTP 请求与响应状态。
//! ```
//!

mod logging;
mod terminal;

pub use logging::{default_log_dir, init_logging};
pub use terminal::{init_terminal, restore_terminal, Term};
