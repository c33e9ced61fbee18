//! local storage 履歴ストアのブラウザテスト

#![cfg(target_arch = "wasm32")]

use gloo::storage::{LocalStorage, Storage};
use manga_scan_common::{history, HistoryStore, SearchResult};
use manga_scan_wasm::config::HISTORY_STORAGE_KEY;
use manga_scan_wasm::storage::LocalHistoryStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn result(title: &str) -> SearchResult {
    SearchResult {
        found: true,
        title: Some(title.to_string()),
        ..Default::default()
    }
}

#[wasm_bindgen_test]
fn save_and_load_round_trip() {
    let store = LocalHistoryStore;
    store.clear();

    let mut entries = Vec::new();
    history::record(&mut entries, result("Naruto"), 1000.0);
    history::record(&mut entries, result("Bleach"), 2000.0);
    store.save(&entries).expect("保存失敗");

    let loaded = store.load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].title(), Some("Bleach"));
    assert_eq!(loaded[1].title(), Some("Naruto"));

    store.clear();
    assert!(store.load().is_empty());
}

#[wasm_bindgen_test]
fn malformed_storage_loads_empty() {
    LocalStorage::raw()
        .set_item(HISTORY_STORAGE_KEY, "{not json")
        .expect("書き込み失敗");

    // 壊れた保存データでも落ちずに空として扱う
    let store = LocalHistoryStore;
    assert!(store.load().is_empty());

    store.clear();
}

#[wasm_bindgen_test]
fn missing_key_loads_empty() {
    let store = LocalHistoryStore;
    store.clear();
    assert!(store.load().is_empty());
}
