//! ホーム画面
//!
//! ファイル未選択ならドロップゾーンと履歴、選択済みならプレビュー、
//! 切り抜き中はプレビューの上にオーバーレイを重ねる。

use leptos::prelude::*;
use manga_scan_common::{HistoryEntry, Lang, Phase};

use crate::components::drop_zone::DropZone;
use crate::components::history_panel::HistoryPanel;
use crate::components::image_cropper::ImageCropper;
use crate::components::image_preview::ImagePreview;

#[component]
pub fn HomeView<FF, FS, FC, FD, FX, FQ, FM, FR, FL>(
    phase: Phase,
    lang: Lang,
    preview_url: Option<String>,
    details_loading: bool,
    entries: Vec<HistoryEntry>,
    on_file: FF,
    on_search: FS,
    on_request_crop: FC,
    on_crop_complete: FD,
    on_crop_cancel: FX,
    on_cancel_selection: FQ,
    on_select_entry: FM,
    on_remove_entry: FR,
    on_clear_history: FL,
) -> impl IntoView
where
    FF: Fn(web_sys::File) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
    FD: Fn(web_sys::File) + 'static + Clone,
    FX: Fn(()) + 'static + Clone,
    FQ: Fn(()) + 'static + Clone,
    FM: Fn(String, Option<String>) + 'static + Clone,
    FR: Fn(String) + 'static + Clone,
    FL: Fn(()) + 'static + Clone + Send + Sync,
{
    match (phase, preview_url) {
        (Phase::Preview, Some(url)) => view! {
            <ImagePreview
                preview_url=url
                lang=lang
                on_search=on_search
                on_crop=on_request_crop
                on_cancel=on_cancel_selection
            />
        }
        .into_any(),
        (Phase::Cropping, Some(url)) => view! {
            <ImagePreview
                preview_url=url.clone()
                lang=lang
                on_search=on_search
                on_crop=on_request_crop
                on_cancel=on_cancel_selection
            />
            <ImageCropper
                image_src=url
                lang=lang
                on_crop_complete=on_crop_complete
                on_cancel=on_crop_cancel
            />
        }
        .into_any(),
        _ => view! {
            <DropZone
                lang=lang
                is_loading={phase == Phase::Searching || details_loading}
                on_file=on_file
            />
            <HistoryPanel
                entries=entries
                lang=lang
                on_select=on_select_entry
                on_remove=on_remove_entry
                on_clear=on_clear_history
            />
        }
        .into_any(),
    }
}
