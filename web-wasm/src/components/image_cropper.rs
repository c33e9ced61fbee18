//! 切り抜きオーバーレイコンポーネント
//!
//! 画像上をドラッグして矩形を選び、その範囲だけをJPEGに
//! 切り出して作業ファイルを差し替える。

use leptos::logging::error;
use leptos::prelude::*;
use manga_scan_common::Lang;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use crate::crop::{self, CropRect};

#[component]
pub fn ImageCropper<FD, FX>(
    image_src: String,
    lang: Lang,
    on_crop_complete: FD,
    on_cancel: FX,
) -> impl IntoView
where
    FD: Fn(web_sys::File) + 'static + Clone,
    FX: Fn(()) + 'static + Clone,
{
    let t = lang.t();
    let (drag_origin, set_drag_origin) = signal(None::<(f64, f64)>);
    let (selection, set_selection) = signal(None::<CropRect>);
    let (busy, set_busy) = signal(false);

    let image_ref: NodeRef<leptos::html::Img> = NodeRef::new();

    // 選択矩形は表示座標で持ち、確定時に自然解像度へ換算する
    let on_mouse_down = move |ev: MouseEvent| {
        ev.prevent_default();
        let point = (ev.offset_x() as f64, ev.offset_y() as f64);
        set_drag_origin.set(Some(point));
        set_selection.set(Some(CropRect::from_drag(point, point)));
    };

    let on_mouse_move = move |ev: MouseEvent| {
        if let Some(origin) = drag_origin.get_untracked() {
            let point = (ev.offset_x() as f64, ev.offset_y() as f64);
            set_selection.set(Some(CropRect::from_drag(origin, point)));
        }
    };

    let on_mouse_up = move |_: MouseEvent| {
        set_drag_origin.set(None);
    };

    let confirm = {
        let on_crop_complete = on_crop_complete.clone();
        let image_src = image_src.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            let Some(rect) = selection.get_untracked().filter(|rect| rect.is_usable()) else {
                return;
            };
            let Some(image) = image_ref.get_untracked() else {
                return;
            };

            let scale = if image.client_width() > 0 {
                image.natural_width() as f64 / image.client_width() as f64
            } else {
                1.0
            };
            let rect = rect.scaled(scale);

            let src = image_src.clone();
            let on_crop_complete = on_crop_complete.clone();
            set_busy.set(true);
            spawn_local(async move {
                match crop::crop_to_file(&src, rect).await {
                    Ok(file) => on_crop_complete(file),
                    Err(e) => error!("crop failed: {e}"),
                }
                set_busy.set(false);
            });
        }
    };

    view! {
        <div class="cropper-overlay">
            <div class="cropper-panel">
                <div
                    class="cropper-stage"
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move
                    on:mouseup=on_mouse_up
                    on:mouseleave=on_mouse_up
                >
                    <img node_ref=image_ref src=image_src.clone() alt="Crop" draggable="false" />
                    <Show when=move || selection.get().is_some()>
                        <div
                            class="crop-selection"
                            style=move || {
                                selection
                                    .get()
                                    .map(|rect| {
                                        format!(
                                            "left:{}px;top:{}px;width:{}px;height:{}px",
                                            rect.x, rect.y, rect.width, rect.height
                                        )
                                    })
                                    .unwrap_or_default()
                            }
                        ></div>
                    </Show>
                </div>
                <div class="cropper-actions">
                    <button
                        class="btn btn-danger"
                        disabled=move || busy.get()
                        on:click={
                            let on_cancel = on_cancel.clone();
                            move |_| on_cancel(())
                        }
                    >
                        {t.cancel}
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || {
                            busy.get()
                                || !selection.get().map(|rect| rect.is_usable()).unwrap_or(false)
                        }
                        on:click=confirm
                    >
                        {t.search_this_area}
                    </button>
                </div>
            </div>
        </div>
    }
}
