//! 内存 Store 集成测试（通过工厂与 trait 对象访问）

mod common;

use common::{TestContext, test_fields};
use record_manager_store::{ListOrder, RecordFields, RecordId, StoreError};

#[tokio::test]
async fn test_memory_full_lifecycle() {
    let ctx = TestContext::memory();

    let created = require_some!(ctx.create_test_record("lifecycle").await, "创建记录失败");
    assert_eq!(created.username, "lifecycle");

    let fields = require_ok!(RecordFields::new(created.email.clone(), "renamed"));
    require_ok!(ctx.store.update(&fields, &created.id).await, "更新记录失败");

    let updated = require_some!(ctx.find_by_email(&created.email).await);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.created_at, created.created_at);

    require_ok!(ctx.store.delete(&created.id).await, "删除记录失败");
    assert!(ctx.find_by_email(&created.email).await.is_none());
}

#[tokio::test]
async fn test_memory_list_is_newest_first() {
    let ctx = TestContext::memory();
    let first = require_some!(ctx.create_test_record("first").await);
    let second = require_some!(ctx.create_test_record("second").await);

    let records = require_ok!(ctx.store.list(&ListOrder::newest_first()).await);
    let ids: Vec<&RecordId> = records.iter().map(|r| &r.id).collect();
    assert_eq!(ids, [&second.id, &first.id]);
    assert!(records[0].created_at > records[1].created_at);
}

#[tokio::test]
async fn test_memory_duplicate_email_reports_store_message() {
    let ctx = TestContext::memory();
    let fields = test_fields("dup");
    require_ok!(ctx.store.insert(&fields).await);

    let result = ctx.store.insert(&fields).await;
    let Err(err) = result else {
        panic!("重复邮箱应当冲突");
    };
    assert!(matches!(err, StoreError::Conflict { .. }));
    assert!(
        err.store_message()
            .is_some_and(|m| m.contains("duplicate key")),
        "unexpected message: {err}"
    );
}

#[tokio::test]
async fn test_memory_cleanup_removes_test_records() {
    let ctx = TestContext::memory();
    for name in ["a", "b", "c"] {
        require_some!(ctx.create_test_record(name).await);
    }
    ctx.cleanup_all_test_records().await;
    let records = require_ok!(ctx.store.list(&ListOrder::default()).await);
    assert!(records.is_empty());
}

#[test]
fn test_memory_store_from_sync_code() {
    let ctx = TestContext::memory();
    let fields = require_ok!(RecordFields::new("sync@example.com", "sync"));

    tokio_test::block_on(async {
        tokio_test::assert_ok!(ctx.store.insert(&fields).await);
        let records = tokio_test::assert_ok!(ctx.store.list(&ListOrder::default()).await);
        assert_eq!(records.len(), 1);
    });
}
