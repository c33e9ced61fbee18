//! 選択画像プレビューコンポーネント

use leptos::prelude::*;
use manga_scan_common::Lang;

#[component]
pub fn ImagePreview<FS, FC, FX>(
    preview_url: String,
    lang: Lang,
    on_search: FS,
    on_crop: FC,
    on_cancel: FX,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
    FX: Fn(()) + 'static + Clone,
{
    let t = lang.t();

    view! {
        <div class="preview-panel">
            <div class="preview-stage">
                <img src=preview_url alt="Preview" />
            </div>
            <div class="preview-actions">
                <button
                    class="btn btn-danger"
                    on:click={
                        let on_cancel = on_cancel.clone();
                        move |_| on_cancel(())
                    }
                >
                    {t.cancel}
                </button>
                <div class="preview-actions-right">
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_crop = on_crop.clone();
                            move |_| on_crop(())
                        }
                    >
                        {t.crop_image}
                    </button>
                    <button
                        class="btn btn-primary"
                        on:click={
                            let on_search = on_search.clone();
                            move |_| on_search(())
                        }
                    >
                        {t.search}
                    </button>
                </div>
            </div>
        </div>
    }
}
