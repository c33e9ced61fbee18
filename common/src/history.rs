//! 最近の検索履歴
//!
//! タイトルで重複排除した新しい順のリスト。上限5件。
//! 永続化の媒体は HistoryStore の実装側（ブラウザでは local storage）が持つ。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::SearchResult;

/// 履歴の最大件数
pub const HISTORY_LIMIT: usize = 5;

/// 履歴エントリ
///
/// 検索結果のスナップショットに記録時刻を付けたもの。
/// ワイヤ上は結果のフィールドに timestamp を並べた形で永続化する。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub result: SearchResult,

    /// 記録時刻（epochミリ秒）
    #[serde(rename = "timestamp", default)]
    pub timestamp_ms: f64,
}

impl HistoryEntry {
    /// 重複排除キー
    pub fn title(&self) -> Option<&str> {
        self.result.title.as_deref()
    }
}

/// 永続化の差し替え口
///
/// 読み込みは失敗しても空リストを返す（起動を止めない）。
pub trait HistoryStore {
    fn load(&self) -> Vec<HistoryEntry>;
    fn save(&self, entries: &[HistoryEntry]) -> Result<()>;
    fn clear(&self);
}

/// 成功した検索を履歴へ記録する
///
/// 同タイトルの既存エントリを除去してから先頭に積み、上限で切り詰める。
/// タイトルの無い結果は記録しない。
pub fn record(entries: &mut Vec<HistoryEntry>, result: SearchResult, now_ms: f64) {
    let Some(title) = result.title.clone() else {
        return;
    };

    entries.retain(|e| e.title() != Some(title.as_str()));
    entries.insert(
        0,
        HistoryEntry {
            result,
            timestamp_ms: now_ms,
        },
    );
    entries.truncate(HISTORY_LIMIT);
}

/// タイトル一致で1件削除する（存在しなければ何もしない）
pub fn remove(entries: &mut Vec<HistoryEntry>, title: &str) {
    entries.retain(|e| e.title() != Some(title));
}
