//! 页面数据状态

mod form;
mod modal;
mod records;

pub use form::{FormField, FormState};
pub use modal::{DeleteFocus, Modal, ModalState};
pub use records::RecordsState;
