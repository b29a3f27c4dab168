//! 记录表格状态

use record_manager_store::Record;

/// 记录表格状态
#[derive(Debug)]
pub struct RecordsState {
    /// 记录列表（按 store 返回顺序）
    pub records: Vec<Record>,
    /// 当前选中的索引
    pub selected: usize,
    /// 列表请求是否在进行中
    pub loading: bool,
}

impl RecordsState {
    /// 创建新的记录状态
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            selected: 0,
            loading: true,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.records.is_empty() && self.selected < self.records.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.selected = self.records.len() - 1;
        }
    }

    /// 获取当前选中的记录
    pub fn selected_record(&self) -> Option<&Record> {
        self.records.get(self.selected)
    }

    /// 整体替换记录列表
    ///
    /// 选中项保持原索引，超出新列表长度时落到最后一项。
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.selected = self.selected.min(self.records.len().saturating_sub(1));
    }
}

impl Default for RecordsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use record_manager_store::RecordId;

    fn record(id: &str) -> Record {
        Record {
            id: RecordId::new(id),
            email: format!("{id}@x.com"),
            username: id.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = RecordsState::new();
        state.select_next();
        state.select_last();
        assert_eq!(state.selected, 0);

        state.set_records(vec![record("1"), record("2"), record("3")]);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        state.select_first();
        state.select_previous();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn set_records_clamps_selection() {
        let mut state = RecordsState::new();
        state.set_records(vec![record("1"), record("2"), record("3")]);
        state.select_last();
        state.set_records(vec![record("1")]);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("1"));

        state.set_records(Vec::new());
        assert_eq!(state.selected, 0);
        assert!(state.selected_record().is_none());
    }
}
