//! 表单面板更新逻辑

use crate::message::FormMessage;
use crate::model::App;

use super::{records, Effect};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Option<Effect> {
    match msg {
        FormMessage::SwitchField => {
            app.form.active = app.form.active.toggle();
            None
        }

        FormMessage::Input(ch) => {
            app.form.active_value_mut().push(ch);
            None
        }

        FormMessage::Backspace => {
            app.form.active_value_mut().pop();
            None
        }

        FormMessage::Submit => records::submit(app),

        FormMessage::Cancel => {
            // 取消只在编辑模式下有意义
            if app.is_editing() {
                records::cancel_edit(app);
                app.clear_status();
            }
            None
        }
    }
}
