//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，不读写 Model。
//! 通过 record-manager-store 库访问远程表。
//!
//!
//! 有模块结构：
//! ```text
//!     src/backend/mod.rs
//!         mod config_service;             // 配置文件 + 环境变量
//!         mod record_service;             // 执行 Effect
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（FileConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/record-manager/config.json
//!
//!             {
//!               "store": {
//!                 "backend": "supabase",          // 或 "memory"
//!                 "url": "https://xyz.supabase.co",
//!                 "api_key": "...",
//!                 "table": "Users",
//!                 "timeout_secs": 30
//!               },
//!               "language": "en-US",              // 或 "zh-CN"
//!               "theme": "dark"                   // 或 "light"
//!             }
//!
//!         文件不存在时使用默认值。
//!         环境变量 RECORD_MANAGER_URL / RECORD_MANAGER_API_KEY /
//!         RECORD_MANAGER_TABLE / RECORD_MANAGER_BACKEND 覆盖文件中的值。
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、记录服务（RecordService / EffectRunner）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     在 src/backend/record_service.rs 中定义：
//!
//!         RecordService::execute(effect) 调用 store，返回 StoreMessage。
//!         EffectRunner::dispatch(effect) 在 tokio 运行时上 spawn 一个任务执行，
//!         结果通过 mpsc channel 送回主循环。
//!
//!         不做重试、去重和取消：两个并发的 List 各自返回，后到者覆盖。
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     用户在表单按 Enter
//!         ↓
//!     Update 层处理 FormMessage::Submit，返回 Effect::Insert(fields)
//!         ↓
//!     主循环调用 EffectRunner::dispatch（立即返回，界面继续响应）
//!         ↓
//!     后台任务调用 RecordStore::insert
//!         ↓
//!     StoreMessage::Inserted(result) 经 channel 回到主循环
//!         ↓
//!     Update 层处理结果，成功时返回 Effect::List 刷新列表
//!         ↓
//!     View 层重新渲染
//! ```
//!

mod config_service;
mod record_service;

pub use config_service::{
    apply_env_overrides, AppConfig, BackendKind, ConfigError, ConfigService, FileConfigService,
    StoreSettings,
};
pub use record_service::{EffectRunner, RecordService};
