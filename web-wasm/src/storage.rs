//! 検索履歴の local storage 永続化
//!
//! 1キーにJSON配列をまるごと読み書きする。読み込みは
//! キー不在・壊れたJSONのどちらでも空リストに倒す。

use gloo::storage::{LocalStorage, Storage};
use manga_scan_common::{Error, HistoryEntry, HistoryStore, Result};

use crate::config::HISTORY_STORAGE_KEY;

/// local storage 実装
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHistoryStore;

impl HistoryStore for LocalHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        LocalStorage::get(HISTORY_STORAGE_KEY).unwrap_or_default()
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        LocalStorage::set(HISTORY_STORAGE_KEY, entries)
            .map_err(|e| Error::Storage(e.to_string()))
    }

    fn clear(&self) {
        LocalStorage::delete(HISTORY_STORAGE_KEY);
    }
}
