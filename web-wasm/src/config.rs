//! コンパイル時設定

/// 画像認識バックエンドのベースURL
pub const API_URL: &str = "http://localhost:8000";

/// 検索履歴を保存する local storage のキー
pub const HISTORY_STORAGE_KEY: &str = "manga_scan_history";
