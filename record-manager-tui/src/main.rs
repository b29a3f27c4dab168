//! Record Manager TUI
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写文件，stdout 留给 TUI
//!     load config             // 配置文件 + 环境变量
//!     create_store()          // 按配置创建 Supabase / 内存 store
//!     tokio runtime           // 后台执行 store 请求
//!     init_terminal()
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//! 配置或 store 创建失败时直接退出，此时终端尚未进入 raw mode，错误信息正常打印。

use std::sync::Arc;

use anyhow::{Context, Result};
use record_manager_store::create_store;
use tokio::sync::mpsc;

use record_manager_tui::backend::{
    apply_env_overrides, EffectRunner, FileConfigService, RecordService,
};
use record_manager_tui::i18n::{set_language, Language};
use record_manager_tui::model::App;
use record_manager_tui::util::{default_log_dir, init_logging, init_terminal, restore_terminal};
use record_manager_tui::view::theme::set_theme;
use record_manager_tui::{app, update};

fn main() -> Result<()> {
    // 1. 日志（失败不影响运行）
    match default_log_dir().map(|dir| init_logging(&dir)) {
        Some(Ok(path)) => tracing::info!("Logging to {}", path.display()),
        Some(Err(e)) => eprintln!("Logging disabled: {e:#}"),
        None => eprintln!("Logging disabled: no data directory"),
    }

    // 2. 配置
    let config_service = FileConfigService::new()?;
    let mut config = config_service.load_or_create()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    tracing::info!(
        "Loaded config from {} (backend: {:?}, table: {})",
        config_service.path().display(),
        config.store.backend,
        config.store.table
    );

    set_language(Language::from_code(&config.language).unwrap_or_default());
    set_theme(config.theme);

    // 3. Store
    let store_config = config.store_config()?;
    let store = create_store(&store_config).context("Failed to create record store")?;

    // 4. 后台运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = Arc::new(RecordService::new(store));
    let runner = EffectRunner::new(service, runtime.handle().clone(), tx);

    let mut app = App::new(store_config.table());
    runner.dispatch(update::init(&mut app));

    // 5. 终端 + 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &runner, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Exiting");
    result
}
