//! 結果カードコンポーネント
//!
//! アップロード画像と一致画像の比較、確信度、表紙、あらすじ。
//! 画像クリックで拡大モーダル。

use leptos::prelude::*;
use manga_scan_common::{localized_synopsis, Lang, SearchResult};

/// 表紙が無いときのプレースホルダ
const NO_COVER_PLACEHOLDER: &str = "https://placehold.co/400x600/1e1e1e/FFF?text=No+Cover";

#[component]
pub fn ResultCard<F>(
    result: SearchResult,
    lang: Lang,
    preview_url: Option<String>,
    on_reset: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let t = lang.t();
    let (enlarged, set_enlarged) = signal(None::<String>);

    let title = result
        .title
        .clone()
        .unwrap_or_else(|| t.unknown_title.to_string());
    let confidence = result.similarity_confidence;
    let cover_url = result
        .cover_url
        .clone()
        .unwrap_or_else(|| NO_COVER_PLACEHOLDER.to_string());
    let synopsis = localized_synopsis(&result, lang)
        .unwrap_or(t.no_synopsis)
        .to_string();
    let match_image_url = result.match_image_url.clone();
    let estimated_chapter = result.estimated_chapter.clone();
    let estimated_page = result.estimated_page.clone();
    let warning = result.warning.clone();

    view! {
        <div class="result-card">
            <div class="match-header">
                {preview_url.map(|url| {
                    let enlarge_url = url.clone();
                    view! {
                        <figure
                            class="match-figure"
                            on:click=move |_| set_enlarged.set(Some(enlarge_url.clone()))
                        >
                            <img src=url alt="Upload" />
                            <figcaption>"UPLOAD"</figcaption>
                        </figure>
                    }
                })}

                <div class="match-versus">
                    <span class="versus-label">"VS"</span>
                    <span
                        class="confidence"
                        class=("conf-high", move || confidence > 80.0)
                        class=("conf-low", move || confidence <= 80.0)
                    >
                        {format!("{confidence:.0}%")}
                    </span>
                </div>

                {match_image_url.map(|url| {
                    let enlarge_url = url.clone();
                    view! {
                        <figure
                            class="match-figure match-hit"
                            on:click=move |_| set_enlarged.set(Some(enlarge_url.clone()))
                        >
                            <img src=url alt="Match" />
                            <figcaption>"MATCH"</figcaption>
                        </figure>
                    }
                })}

                <button
                    class="btn btn-primary reset-button"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    {t.search_again}
                </button>
            </div>

            <div class="result-body">
                <div
                    class="result-cover"
                    on:click={
                        let cover = cover_url.clone();
                        move |_| set_enlarged.set(Some(cover.clone()))
                    }
                >
                    <img src=cover_url.clone() alt=title.clone() />
                </div>

                <div class="result-content">
                    <h2 class="result-title">{title}</h2>

                    <div class="result-badges">
                        {estimated_chapter
                            .map(|chapter| view! { <span class="badge badge-chapter">{chapter}</span> })}
                        {estimated_page
                            .map(|page| {
                                view! {
                                    <span class="badge badge-page">
                                        {format!("{} {}", t.page, page)}
                                    </span>
                                }
                            })}
                    </div>

                    <div class="synopsis-box">
                        <h3 class="section-label">{t.synopsis}</h3>
                        <p class="synopsis-text">{synopsis}</p>
                    </div>

                    {warning.map(|warning| view! { <div class="warning-banner">"⚠️ " {warning}</div> })}
                </div>
            </div>

            {move || {
                enlarged
                    .get()
                    .map(|url| {
                        view! {
                            <div class="image-modal" on:click=move |_| set_enlarged.set(None)>
                                <img src=url.clone() alt="Full view" />
                            </div>
                        }
                    })
            }}
        </div>
    }
}
