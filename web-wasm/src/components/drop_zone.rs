//! ドロップゾーンコンポーネント
//!
//! ドラッグ&ドロップとクリックでのファイル選択。検証は呼び出し側。

use leptos::prelude::*;
use manga_scan_common::Lang;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

#[component]
pub fn DropZone<F>(lang: Lang, is_loading: bool, on_file: F) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static + Clone,
{
    let t = lang.t();
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if is_loading {
                return;
            }

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_loading {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_file = on_file.clone();
        move |_| {
            if is_loading {
                return;
            }

            // ファイル選択ダイアログを開く
            let document = match web_sys::window().and_then(|w| w.document()) {
                Some(document) => document,
                None => return,
            };
            let input: HtmlInputElement = match document
                .create_element("input")
                .ok()
                .and_then(|element| element.dyn_into().ok())
            {
                Some(input) => input,
                None => return,
            };
            input.set_type("file");
            input.set_accept("image/*");

            let on_file = on_file.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = picker.files().and_then(|files| files.get(0)) {
                    on_file(file);
                }
            }) as Box<dyn FnMut(_)>);
            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class="drop-zone"
            class:dragover=move || is_dragover.get()
            class:loading=is_loading
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            {if is_loading {
                view! {
                    <div class="spinner"></div>
                    <p class="scanning-label">{t.scanning}</p>
                }
                .into_any()
            } else {
                view! {
                    <div class="drop-icon">"📂"</div>
                    <Show
                        when=move || is_dragover.get()
                        fallback=move || {
                            view! {
                                <p class="drop-title">{t.upload_title}</p>
                                <p class="text-muted">{t.upload_subtitle}</p>
                            }
                        }
                    >
                        <p class="drop-active">{t.drop_active}</p>
                    </Show>
                }
                .into_any()
            }}
        </div>
    }
}
