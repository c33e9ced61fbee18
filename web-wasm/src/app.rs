//! メインアプリケーションコンポーネント
//!
//! セッション状態は Workflow ひとつに集約し、UIはそこから導出する。
//! 応答の適用はワークフローのトークン照合を通すので、リセット後や
//! 上書き後に遅れて届いた応答が画面を汚すことはない。

use leptos::logging::{error, log};
use leptos::prelude::*;
use manga_scan_common::{history, FileMeta, HistoryEntry, HistoryStore, Lang, Phase, Workflow};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Url;

use crate::api;
use crate::components::header::Header;
use crate::storage::LocalHistoryStore;
use crate::views::home::HomeView;
use crate::views::results::ResultsView;

/// 選択中のファイルとそのプレビューURL
#[derive(Clone)]
pub struct SelectedImage {
    pub file: web_sys::File,
    pub preview_url: String,
}

impl SelectedImage {
    /// File からオブジェクトURLを作って保持する
    pub fn new(file: web_sys::File) -> Result<Self, JsValue> {
        let preview_url = Url::create_object_url_with_blob(&file)?;
        Ok(Self { file, preview_url })
    }

    /// プレビューURLを解放する
    pub fn revoke(&self) {
        let _ = Url::revoke_object_url(&self.preview_url);
    }
}

/// ワークフロー全体を保持するシグナル
///
/// File を含むためローカルストレージのシグナルにする。
pub type WorkflowSignal = RwSignal<Workflow<SelectedImage>, LocalStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let store = LocalHistoryStore;

    // アプリケーション状態
    let workflow: WorkflowSignal = RwSignal::new_local(Workflow::new());
    let (language, set_language) = signal(Lang::default());
    let (nsfw, set_nsfw) = signal(false);
    let (error_message, set_error_message) = signal(None::<&'static str>);
    let (history_entries, set_history_entries) = signal(store.load());
    let (details_loading, set_details_loading) = signal(false);

    let persist_history = move |entries: &[HistoryEntry]| {
        if let Err(e) = store.save(entries) {
            error!("history save failed: {e}");
        }
    };

    // ファイル選択ハンドラ（ドロップ・ピッカー共通）
    let on_file_selected = move |file: web_sys::File| {
        let meta = FileMeta {
            content_type: file.type_(),
            size_bytes: file.size(),
        };
        let image = match SelectedImage::new(file) {
            Ok(image) => image,
            Err(e) => {
                error!("preview url: {e:?}");
                set_error_message.set(Some(language.get_untracked().t().error));
                return;
            }
        };

        let mut rejection = None;
        workflow.update(|wf| {
            if let Err(err) = wf.select_file(image.clone(), &meta) {
                rejection = Some(err);
            }
        });
        match rejection {
            Some(err) => {
                image.revoke();
                set_error_message.set(Some(err.message(language.get_untracked())));
            }
            None => set_error_message.set(None),
        }
    };

    // 画像検索ハンドラ
    let on_search = move |_: ()| {
        let lang = language.get_untracked();
        let include_nsfw = nsfw.get_untracked();

        let mut launch = None;
        workflow.update(|wf| {
            if wf.phase() == Phase::Preview {
                if let Some(image) = wf.file() {
                    let file = image.file.clone();
                    let token = wf.begin_search();
                    launch = Some((file, token));
                }
            }
        });
        let Some((file, token)) = launch else {
            return;
        };
        set_error_message.set(None);

        spawn_local(async move {
            match api::search_by_image(&file, lang, include_nsfw).await {
                Ok(result) => {
                    let recordable =
                        (result.found && result.title.is_some()).then(|| result.clone());
                    let applied = workflow
                        .try_update(|wf| wf.complete_search(token, result))
                        .unwrap_or(false);
                    if !applied {
                        log!("discarding stale search response");
                        return;
                    }
                    if let Some(result) = recordable {
                        set_history_entries.update(|entries| {
                            history::record(entries, result, js_sys::Date::now());
                        });
                        persist_history(&history_entries.get_untracked());
                    }
                }
                Err(e) => {
                    error!("search failed: {e}");
                    if workflow
                        .try_update(|wf| wf.fail_search(token))
                        .unwrap_or(false)
                    {
                        set_error_message.set(Some(lang.t().error));
                    }
                }
            }
        });
    };

    // 代替候補・履歴エントリの選択ハンドラ
    let on_select_match = move |title: String, cover: Option<String>| {
        let lang = language.get_untracked();
        let Some(token) = workflow.try_update(|wf| wf.begin_details()) else {
            return;
        };
        set_error_message.set(None);
        set_details_loading.set(true);

        spawn_local(async move {
            match api::fetch_details_by_title(&title).await {
                Ok(details) => {
                    let applied = workflow
                        .try_update(|wf| wf.complete_details(token, details, cover))
                        .unwrap_or(false);
                    if applied {
                        if let Some(window) = web_sys::window() {
                            window.scroll_to_with_x_and_y(0.0, 0.0);
                        }
                    } else {
                        log!("discarding stale details response");
                    }
                }
                Err(e) => {
                    error!("details fetch failed: {e}");
                    if workflow
                        .try_update(|wf| wf.fail_details(token))
                        .unwrap_or(false)
                    {
                        set_error_message.set(Some(lang.t().error));
                    }
                }
            }
            set_details_loading.set(false);
        });
    };

    // 切り抜きハンドラ
    let on_request_crop = move |_: ()| workflow.update(|wf| wf.request_crop());

    let on_crop_complete = move |file: web_sys::File| match SelectedImage::new(file) {
        Ok(image) => workflow.update(|wf| {
            if let Some(previous) = wf.apply_crop(image) {
                previous.revoke();
            }
        }),
        Err(e) => {
            error!("preview url: {e:?}");
            workflow.update(|wf| wf.cancel_crop());
            set_error_message.set(Some(language.get_untracked().t().error));
        }
    };

    let on_crop_cancel = move |_: ()| workflow.update(|wf| wf.cancel_crop());

    let on_cancel_selection = move |_: ()| {
        workflow.update(|wf| {
            if let Some(image) = wf.cancel_selection() {
                image.revoke();
            }
        });
        set_error_message.set(None);
    };

    let on_reset = move |_: ()| {
        workflow.update(|wf| {
            if let Some(image) = wf.reset() {
                image.revoke();
            }
        });
        set_error_message.set(None);
    };

    // 履歴ハンドラ
    let on_remove_history = move |title: String| {
        set_history_entries.update(|entries| history::remove(entries, &title));
        persist_history(&history_entries.get_untracked());
    };

    let on_clear_history = move |_: ()| {
        set_history_entries.set(Vec::new());
        store.clear();
    };

    // 設定トグル
    let on_toggle_language = move |_: ()| set_language.update(|lang| *lang = lang.toggled());
    let on_toggle_nsfw = move |_: ()| set_nsfw.update(|value| *value = !*value);

    view! {
        <div class="app-shell">
            <Header
                language=language
                on_toggle_language=on_toggle_language
                nsfw=nsfw
                on_toggle_nsfw=on_toggle_nsfw
            />

            <main class="app-main">
                <Show when=move || error_message.get().is_some()>
                    <div class="error-banner">{move || error_message.get()}</div>
                </Show>

                {move || {
                    let lang = language.get();
                    let phase = workflow.with(|wf| wf.phase());
                    let preview_url =
                        workflow.with(|wf| wf.file().map(|image| image.preview_url.clone()));

                    if phase == Phase::Result {
                        let result = workflow
                            .with(|wf| wf.result().cloned())
                            .unwrap_or_default();
                        view! {
                            <ResultsView
                                result=result
                                lang=lang
                                preview_url=preview_url
                                details_loading=details_loading.get()
                                on_reset=on_reset
                                on_select_match=on_select_match
                            />
                        }
                        .into_any()
                    } else {
                        view! {
                            <HomeView
                                phase=phase
                                lang=lang
                                preview_url=preview_url
                                details_loading=details_loading.get()
                                entries=history_entries.get()
                                on_file=on_file_selected
                                on_search=on_search
                                on_request_crop=on_request_crop
                                on_crop_complete=on_crop_complete
                                on_crop_cancel=on_crop_cancel
                                on_cancel_selection=on_cancel_selection
                                on_select_entry=on_select_match
                                on_remove_entry=on_remove_history
                                on_clear_history=on_clear_history
                            />
                        }
                        .into_any()
                    }
                }}
            </main>

            <footer class="app-footer">{move || language.get().t().footer}</footer>
        </div>
    }
}
