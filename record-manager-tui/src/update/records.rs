//! 记录操作
//!
//! 视图的六个用户操作（List / Create / Update / Delete / StartEdit / CancelEdit）
//! 以及 store 结果的处理。每个操作都是对 `App` 的同步状态变更，
//! 需要访问 store 时返回一个 [`Effect`]。

use record_manager_store::{MissingFields, Record, RecordFields, StoreError};

use crate::i18n::t;
use crate::model::{App, FocusPanel, FormState};

use super::Effect;

/// 列表请求失败且 store 未给出消息时的提示
pub const FETCH_FAILED: &str = "Failed to fetch records";
/// 新建失败的兜底提示
pub const CREATE_FAILED: &str = "Failed to create record";
/// 更新失败的兜底提示
pub const UPDATE_FAILED: &str = "Failed to update record";
/// 删除失败的兜底提示
pub const DELETE_FAILED: &str = "Failed to delete record";

// ========== 用户操作 ==========

/// List：标记加载中并请求全部记录
pub fn list(app: &mut App) -> Effect {
    app.records.loading = true;
    Effect::List
}

/// 提交表单：编辑模式走 Update，否则走 Create
pub fn submit(app: &mut App) -> Option<Effect> {
    if app.is_editing() {
        update_record(app)
    } else {
        create(app)
    }
}

/// Create：校验表单后请求新建
pub fn create(app: &mut App) -> Option<Effect> {
    let fields = validated_fields(app)?;
    app.set_status(t().status.creating);
    Some(Effect::Insert(fields))
}

/// Update：要求处于编辑模式，校验表单后请求更新
pub fn update_record(app: &mut App) -> Option<Effect> {
    let Some(id) = app.editing.as_ref().map(|r| r.id.clone()) else {
        app.error = Some(MissingFields.to_string());
        return None;
    };
    let fields = validated_fields(app)?;
    app.set_status(t().status.updating);
    Some(Effect::Update { id, fields })
}

/// StartEdit：进入编辑模式，表单填入记录内容。不访问 store
pub fn start_edit(app: &mut App, record: Record) {
    app.form = FormState::from_record(&record);
    app.editing = Some(record);
    app.focus = FocusPanel::Form;
}

/// CancelEdit：回到新建模式并清空表单与错误
pub fn cancel_edit(app: &mut App) {
    app.editing = None;
    app.form.clear();
    app.error = None;
}

/// 请求删除选中记录：弹出确认框，确认前不做任何变更
pub fn request_delete(app: &mut App) {
    let Some(record) = app.records.selected_record() else {
        return;
    };
    let (id, email) = (record.id.clone(), record.email.clone());
    app.modal.show_confirm_delete(id, email);
}

/// 表单内容转为写入数据，缺字段时写入错误并返回 `None`
fn validated_fields(app: &mut App) -> Option<RecordFields> {
    match RecordFields::new(app.form.email.clone(), app.form.username.clone()) {
        Ok(fields) => Some(fields),
        Err(e) => {
            app.error = Some(e.to_string());
            None
        }
    }
}

// ========== Store 结果 ==========

/// 列表结果：成功时整体替换记录；无论成败都结束加载
pub fn on_listed(app: &mut App, result: Result<Vec<Record>, StoreError>) {
    app.records.loading = false;
    // 手动刷新的提示到此结束；变更成功的提示保留
    if app.status_message.as_deref() == Some(t().status.loading) {
        app.clear_status();
    }
    match result {
        Ok(records) => app.records.set_records(records),
        Err(e) => app.error = Some(failure_message(&e, FETCH_FAILED)),
    }
}

/// 新建结果：成功时清空表单与错误并重新拉取列表
pub fn on_inserted(app: &mut App, result: Result<(), StoreError>) -> Option<Effect> {
    match result {
        Ok(()) => {
            app.form.clear();
            app.error = None;
            app.set_status(t().status.created);
            Some(list(app))
        }
        Err(e) => {
            fail(app, &e, CREATE_FAILED);
            None
        }
    }
}

/// 更新结果：成功时退出编辑模式并重新拉取列表，失败时保持编辑
pub fn on_updated(app: &mut App, result: Result<(), StoreError>) -> Option<Effect> {
    match result {
        Ok(()) => {
            app.editing = None;
            app.form.clear();
            app.error = None;
            app.set_status(t().status.updated);
            Some(list(app))
        }
        Err(e) => {
            fail(app, &e, UPDATE_FAILED);
            None
        }
    }
}

/// 删除结果：成功时重新拉取列表（不做本地移除）
pub fn on_deleted(app: &mut App, result: Result<(), StoreError>) -> Option<Effect> {
    match result {
        Ok(()) => {
            app.error = None;
            app.set_status(t().status.deleted);
            Some(list(app))
        }
        Err(e) => {
            fail(app, &e, DELETE_FAILED);
            None
        }
    }
}

fn fail(app: &mut App, error: &StoreError, fallback: &str) {
    app.error = Some(failure_message(error, fallback));
    app.clear_status();
}

/// store 消息优先，否则使用操作对应的兜底提示
pub fn failure_message(error: &StoreError, fallback: &str) -> String {
    error
        .store_message()
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
