//! 记录服务
//!
//! 执行 Update 层产生的 [`Effect`]，把结果包装成 [`StoreMessage`]。

use std::sync::Arc;

use record_manager_store::{ListOrder, RecordStore, StoreError};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::StoreMessage;
use crate::update::Effect;

/// 记录服务：持有 store 与列表排序
pub struct RecordService {
    store: Arc<dyn RecordStore>,
    order: ListOrder,
}

impl RecordService {
    /// 列表按 `created_at` 降序
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_order(store, ListOrder::newest_first())
    }

    pub fn with_order(store: Arc<dyn RecordStore>, order: ListOrder) -> Self {
        Self { store, order }
    }

    /// 执行一个 Effect，每个 Effect 恰好发起一次 store 请求
    pub async fn execute(&self, effect: Effect) -> StoreMessage {
        match effect {
            Effect::List => {
                let result = self.store.list(&self.order).await;
                match &result {
                    Ok(records) => log::debug!("Listed {} records", records.len()),
                    Err(e) => self.log_failure("list", e),
                }
                StoreMessage::Listed(result)
            }
            Effect::Insert(fields) => {
                let result = self.store.insert(&fields).await;
                self.log_result("insert", &result);
                StoreMessage::Inserted(result)
            }
            Effect::Update { id, fields } => {
                let result = self.store.update(&fields, &id).await;
                self.log_result("update", &result);
                StoreMessage::Updated(result)
            }
            Effect::Delete(id) => {
                let result = self.store.delete(&id).await;
                self.log_result("delete", &result);
                StoreMessage::Deleted(result)
            }
        }
    }

    fn log_result(&self, operation: &str, result: &Result<(), StoreError>) {
        match result {
            Ok(()) => log::info!("[{}] {operation} succeeded", self.store.table()),
            Err(e) => self.log_failure(operation, e),
        }
    }

    /// 预期内的错误（冲突、权限等）记 warn，其余记 error
    fn log_failure(&self, operation: &str, error: &StoreError) {
        if error.is_expected() {
            log::warn!("[{}] {operation} failed: {error}", self.store.table());
        } else {
            log::error!("[{}] {operation} failed: {error}", self.store.table());
        }
    }
}

/// 在 tokio 运行时上执行 Effect，结果通过 channel 送回主循环
pub struct EffectRunner {
    service: Arc<RecordService>,
    handle: Handle,
    tx: UnboundedSender<StoreMessage>,
}

impl EffectRunner {
    pub fn new(service: Arc<RecordService>, handle: Handle, tx: UnboundedSender<StoreMessage>) -> Self {
        Self {
            service,
            handle,
            tx,
        }
    }

    /// 派发 Effect，不等待结果
    pub fn dispatch(&self, effect: Effect) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let message = service.execute(effect).await;
            // 接收端已关闭说明主循环退出，丢弃结果
            if tx.send(message).is_err() {
                log::debug!("Main loop gone, dropping store result");
            }
        });
    }
}
