//! 表格面板更新逻辑

use crate::message::TableMessage;
use crate::model::App;

use super::records;

/// 处理表格消息
pub fn update(app: &mut App, msg: TableMessage) {
    match msg {
        TableMessage::SelectPrevious => app.records.select_previous(),
        TableMessage::SelectNext => app.records.select_next(),
        TableMessage::SelectFirst => app.records.select_first(),
        TableMessage::SelectLast => app.records.select_last(),

        TableMessage::Edit => {
            if let Some(record) = app.records.selected_record().cloned() {
                records::start_edit(app, record);
            }
        }

        TableMessage::Delete => records::request_delete(app),
    }
}
