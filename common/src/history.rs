//! スキャン履歴の同期
//!
//! サーバ側の履歴一覧をスナップショットとして保持する。
//! 更新は常に一覧の丸ごと置き換えで、部分マージはしない。
//! 取得に失敗したときは直前の一覧を維持する（空にするより古い方がまし）。

use crate::error::ServiceError;
use crate::types::HistoryEntry;

/// 過去スキャンの一覧スナップショット
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 取得結果を反映する。
    ///
    /// 成功時は一覧を置き換える。失敗時は一覧に触れず、
    /// 診断用にエラーを呼び出し側へ返す。
    pub fn apply(
        &mut self,
        fetched: Result<Vec<HistoryEntry>, ServiceError>,
    ) -> Result<(), ServiceError> {
        self.entries = fetched?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    fn entry(id: i64, filename: &str) -> HistoryEntry {
        HistoryEntry {
            id,
            filename: filename.to_string(),
            risk_score: 50,
            verdict: Verdict::Review,
            reasons: vec![],
            timestamp: "2026-08-07T10:00:00".to_string(),
        }
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_apply_replaces_whole_list() {
        let mut log = HistoryLog::new();
        log.apply(Ok(vec![entry(1, "a.jpg")])).expect("反映失敗");

        // 置き換えであってマージではない: 旧要素は残らない
        log.apply(Ok(vec![entry(3, "c.jpg"), entry(2, "b.jpg")]))
            .expect("反映失敗");
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].id, 3);
        assert_eq!(log.entries()[1].id, 2);
    }

    #[test]
    fn test_apply_failure_keeps_previous_list() {
        let mut log = HistoryLog::new();
        log.apply(Ok(vec![entry(1, "a.jpg"), entry(2, "b.jpg")]))
            .expect("反映失敗");

        let err = ServiceError::HistoryUnavailable("API error: 502".to_string());
        let result = log.apply(Err(err.clone()));

        assert_eq!(result, Err(err));
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].filename, "a.jpg");
    }

    #[test]
    fn test_apply_failure_on_empty_list() {
        let mut log = HistoryLog::new();
        let result = log.apply(Err(ServiceError::HistoryUnavailable("down".to_string())));
        assert!(result.is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_apply_empty_list_is_valid() {
        // サーバが空配列を返したら一覧も空になる（失敗とは区別する）
        let mut log = HistoryLog::new();
        log.apply(Ok(vec![entry(1, "a.jpg")])).expect("反映失敗");
        log.apply(Ok(vec![])).expect("反映失敗");
        assert!(log.is_empty());
    }
}
