//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use record_manager_store::{
    ListOrder, Record, RecordFields, RecordId, RecordStore, StoreConfig, create_store,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试邮箱
pub fn generate_test_email() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}@example.com", &uuid.to_string()[..8])
}

/// 生成测试写入数据
pub fn test_fields(username: &str) -> RecordFields {
    RecordFields::new(generate_test_email(), username).unwrap_or_else(|_| unreachable!())
}

/// 测试上下文 - 封装 Store
pub struct TestContext {
    pub store: Arc<dyn RecordStore>,
}

impl TestContext {
    /// 内存 store 测试上下文
    pub fn memory() -> Self {
        let store = create_store(&StoreConfig::Memory {
            table: "Users".to_string(),
        })
        .unwrap_or_else(|e| panic!("创建内存 store 失败: {e}"));
        Self { store }
    }

    /// Supabase 测试上下文
    pub fn supabase() -> Option<Self> {
        let url = env::var("SUPABASE_URL").ok()?;
        let api_key = env::var("SUPABASE_KEY").ok()?;
        let table = env::var("SUPABASE_TABLE").unwrap_or_else(|_| "Users".to_string());

        let store = create_store(&StoreConfig::Supabase {
            url,
            api_key,
            table,
            timeout_secs: Some(15),
        })
        .ok()?;

        Some(Self { store })
    }

    /// 按邮箱查找记录
    pub async fn find_by_email(&self, email: &str) -> Option<Record> {
        self.store
            .list(&ListOrder::newest_first())
            .await
            .ok()?
            .into_iter()
            .find(|r| r.email == email)
    }

    /// 创建测试记录并返回创建后的记录
    pub async fn create_test_record(&self, username: &str) -> Option<Record> {
        let fields = test_fields(username);
        self.store.insert(&fields).await.ok()?;
        self.find_by_email(fields.email()).await
    }

    /// 清理测试记录
    pub async fn cleanup_record(&self, id: &RecordId) {
        let _ = self.store.delete(id).await;
    }

    /// 查找并清理所有测试记录（邮箱以 _test- 开头）
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.store.list(&ListOrder::newest_first()).await {
            for record in records {
                if record.email.starts_with("_test-") {
                    let _ = self.store.delete(&record.id).await;
                }
            }
        }
    }
}
