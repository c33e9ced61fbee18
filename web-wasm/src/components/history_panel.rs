//! 検索履歴コンポーネント
//!
//! 最近の検索のグリッド。個別削除と、確認付きの全消去。

use leptos::prelude::*;
use manga_scan_common::{HistoryEntry, Lang};
use wasm_bindgen::JsValue;

use super::confirmation_modal::ConfirmationModal;

const NO_IMAGE_PLACEHOLDER: &str = "https://placehold.co/200x300/1e1e1e/FFF?text=No+Image";

#[component]
pub fn HistoryPanel<FS, FR, FC>(
    entries: Vec<HistoryEntry>,
    lang: Lang,
    on_select: FS,
    on_remove: FR,
    on_clear: FC,
) -> impl IntoView
where
    FS: Fn(String, Option<String>) + 'static + Clone,
    FR: Fn(String) + 'static + Clone,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let t = lang.t();

    if entries.is_empty() {
        return ().into_any();
    }

    let (confirm_open, set_confirm_open) = signal(false);

    view! {
        <div class="history-panel">
            <div class="divider-heading">
                <span class="divider-line"></span>
                <h3>{t.recent_searches}</h3>
                <button
                    class="btn btn-small btn-tertiary"
                    on:click=move |_| set_confirm_open.set(true)
                >
                    {t.clear_history}
                </button>
                <span class="divider-line"></span>
            </div>

            <div class="history-grid">
                {entries
                    .into_iter()
                    .map(|entry| {
                        let on_select = on_select.clone();
                        let on_remove = on_remove.clone();
                        let title = entry.result.title.clone();
                        let cover = entry.result.cover_url.clone();
                        let remove_title = entry.result.title.clone();
                        let image = entry
                            .result
                            .cover_url
                            .clone()
                            .unwrap_or_else(|| NO_IMAGE_PLACEHOLDER.to_string());
                        let label = entry
                            .result
                            .title
                            .clone()
                            .unwrap_or_else(|| "?".to_string());
                        let date = js_sys::Date::new(&JsValue::from_f64(entry.timestamp_ms))
                            .to_locale_date_string(lang.code(), &JsValue::UNDEFINED);
                        view! {
                            <div
                                class="history-tile"
                                on:click=move |_| {
                                    if let Some(title) = title.clone() {
                                        on_select(title, cover.clone());
                                    }
                                }
                            >
                                <img src=image alt=label.clone() />
                                <div class="history-meta">
                                    <p class="history-title">{label}</p>
                                    <p class="history-date">{String::from(date)}</p>
                                </div>
                                <button
                                    class="history-remove"
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.stop_propagation();
                                        if let Some(title) = remove_title.clone() {
                                            on_remove(title);
                                        }
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <ConfirmationModal
                open=confirm_open
                title=t.confirm_clear_title.to_string()
                message=t.confirm_clear_message.to_string()
                confirm_label=t.confirm.to_string()
                cancel_label=t.cancel.to_string()
                on_confirm={
                    let on_clear = on_clear.clone();
                    move |_| {
                        on_clear(());
                        set_confirm_open.set(false);
                    }
                }
                on_close=move |_| set_confirm_open.set(false)
            />
        </div>
    }
    .into_any()
}
