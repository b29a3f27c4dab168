//! Store 结果更新逻辑

use crate::message::StoreMessage;
use crate::model::App;

use super::{records, Effect};

/// 处理后台请求结果
pub fn update(app: &mut App, msg: StoreMessage) -> Option<Effect> {
    match msg {
        StoreMessage::Listed(result) => {
            records::on_listed(app, result);
            None
        }
        StoreMessage::Inserted(result) => records::on_inserted(app, result),
        StoreMessage::Updated(result) => records::on_updated(app, result),
        StoreMessage::Deleted(result) => records::on_deleted(app, result),
    }
}
