//! 弹窗更新逻辑

use record_manager_store::RecordId;

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, DeleteFocus, Modal};

use super::Effect;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Effect> {
    let modal = app.modal.active.as_ref()?;

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Help => {
            handle_simple_modal(app, msg);
            None
        }
    }
}

/// 处理确认删除弹窗
///
/// 只有明确确认才会产生删除请求；关闭或选择取消都不改变任何状态。
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<Effect> {
    let Some(Modal::ConfirmDelete {
        ref record_id,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }

        ModalMessage::ToggleDeleteFocus => {
            *focus = focus.toggle();
            None
        }

        ModalMessage::Confirm => {
            let confirmed = *focus == DeleteFocus::Confirm;
            let id = record_id.clone();
            app.modal.close();
            confirmed.then(|| delete(app, id))
        }

        ModalMessage::Accept => {
            let id = record_id.clone();
            app.modal.close();
            Some(delete(app, id))
        }
    }
}

/// Delete：确认后请求删除
fn delete(app: &mut App, id: RecordId) -> Effect {
    app.set_status(t().status.deleting);
    Effect::Delete(id)
}

/// 处理帮助弹窗：任何关闭/确认都关闭
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm | ModalMessage::Accept => {
            app.modal.close();
        }
        ModalMessage::ToggleDeleteFocus => {}
    }
}
