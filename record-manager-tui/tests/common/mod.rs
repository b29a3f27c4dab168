//! 测试辅助模块
//!
//! 提供可编排的 mock store 和驱动 Update ↔ Effect 循环的工具。

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use record_manager_store::{
    ListOrder, Record, RecordFields, RecordId, RecordStore, Result, StoreError,
};
use tokio::sync::RwLock;

use record_manager_tui::backend::RecordService;
use record_manager_tui::message::AppMessage;
use record_manager_tui::model::App;
use record_manager_tui::update::{self, Effect};

/// store 操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Insert,
    Update,
    Delete,
}

// ===== MockRecordStore =====

/// 记录调用次数、可注入失败的 mock store
///
/// `list` 按 `created_at` 降序返回，与远程表的排序一致。
pub struct MockRecordStore {
    records: RwLock<Vec<Record>>,
    /// 如果存在，对应操作返回此错误
    failures: RwLock<HashMap<Op, StoreError>>,
    calls: HashMap<Op, AtomicUsize>,
    next_id: AtomicUsize,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        let calls = [Op::List, Op::Insert, Op::Update, Op::Delete]
            .into_iter()
            .map(|op| (op, AtomicUsize::new(0)))
            .collect();
        Self {
            next_id: AtomicUsize::new(records.len() + 1),
            records: RwLock::new(records),
            failures: RwLock::new(HashMap::new()),
            calls,
        }
    }

    pub async fn set_failure(&self, op: Op, error: Option<StoreError>) {
        let mut failures = self.failures.write().await;
        match error {
            Some(e) => failures.insert(op, e),
            None => failures.remove(&op),
        };
    }

    pub fn calls(&self, op: Op) -> usize {
        self.calls[&op].load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    pub async fn snapshot(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    async fn enter(&self, op: Op) -> Result<()> {
        self.calls[&op].fetch_add(1, Ordering::SeqCst);
        match self.failures.read().await.get(&op) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn table(&self) -> &str {
        "Users"
    }

    async fn list(&self, _order: &ListOrder) -> Result<Vec<Record>> {
        self.enter(Op::List).await?;
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn insert(&self, fields: &RecordFields) -> Result<()> {
        self.enter(Op::Insert).await?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.write().await;
        records.push(record(
            &n.to_string(),
            fields.email(),
            fields.username(),
            day(1) + Duration::days(i64::try_from(n).unwrap_or(0)),
        ));
        Ok(())
    }

    async fn update(&self, fields: &RecordFields, id: &RecordId) -> Result<()> {
        self.enter(Op::Update).await?;
        let mut records = self.records.write().await;
        if let Some(r) = records.iter_mut().find(|r| &r.id == id) {
            r.email = fields.email().to_string();
            r.username = fields.username().to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        self.enter(Op::Delete).await?;
        self.records.write().await.retain(|r| &r.id != id);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 2024-01-{n} 00:00:00 UTC
pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, n, 0, 0, 0).unwrap()
}

pub fn record(id: &str, email: &str, username: &str, created_at: DateTime<Utc>) -> Record {
    Record {
        id: RecordId::new(id),
        email: email.to_string(),
        username: username.to_string(),
        created_at,
    }
}

/// 带 store 文本的错误
pub fn api_error(message: &str) -> StoreError {
    StoreError::api("mock", message)
}

/// 无 store 文本的传输错误
pub fn network_error() -> StoreError {
    StoreError::Network {
        store: "mock".to_string(),
        detail: "connection refused".to_string(),
    }
}

// ===== 驱动 =====

/// 应用 + mock store + 记录服务
pub struct Harness {
    pub app: App,
    pub store: Arc<MockRecordStore>,
    pub service: RecordService,
}

impl Harness {
    pub fn new(store: MockRecordStore) -> Self {
        let store = Arc::new(store);
        let service = RecordService::new(store.clone());
        Self {
            app: App::default(),
            store,
            service,
        }
    }

    /// 启动：执行首个 List
    pub async fn start(store: MockRecordStore) -> Self {
        let mut harness = Self::new(store);
        let effect = update::init(&mut harness.app);
        harness.run(Some(effect)).await;
        harness
    }

    /// 依次执行 Effect 直到不再产生新的 Effect
    pub async fn run(&mut self, mut effect: Option<Effect>) {
        while let Some(e) = effect {
            let result = self.service.execute(e).await;
            effect = update::update(&mut self.app, AppMessage::Store(result));
        }
    }

    /// 发送一条消息并执行其后续 Effect
    pub async fn send(&mut self, msg: AppMessage) {
        let effect = update::update(&mut self.app, msg);
        self.run(effect).await;
    }

    /// 逐字符输入到当前输入框
    pub async fn type_text(&mut self, text: &str) {
        use record_manager_tui::message::FormMessage;
        for ch in text.chars() {
            self.send(AppMessage::Form(FormMessage::Input(ch))).await;
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.app
            .records
            .records
            .iter()
            .map(|r| r.id.as_str())
            .collect()
    }
}
