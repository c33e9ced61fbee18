//! 代替候補コンポーネント
//!
//! 候補を選ぶとタイトル詳細の取得が走り、表示中の結果が
//! 置き換わる（候補リスト自体は残る）。

use leptos::prelude::*;
use manga_scan_common::{CandidateMatch, Lang};

const NO_IMAGE_PLACEHOLDER: &str = "https://placehold.co/200x300/1e1e1e/FFF?text=No+Image";

#[component]
pub fn OtherMatches<F>(matches: Vec<CandidateMatch>, lang: Lang, on_select: F) -> impl IntoView
where
    F: Fn(String, Option<String>) + 'static + Clone,
{
    let t = lang.t();

    if matches.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="other-matches">
            <div class="divider-heading">
                <span class="divider-line"></span>
                <h3>{t.not_what_you_looking_for}</h3>
                <span class="divider-line"></span>
            </div>

            <div class="matches-grid">
                {matches
                    .into_iter()
                    .map(|candidate| {
                        let on_select = on_select.clone();
                        let title = candidate.title.clone();
                        let cover = candidate.cover_url.clone();
                        let image = candidate
                            .cover_url
                            .unwrap_or_else(|| NO_IMAGE_PLACEHOLDER.to_string());
                        let label = candidate.title.unwrap_or_else(|| "?".to_string());
                        view! {
                            <div
                                class="match-tile"
                                on:click=move |_| {
                                    if let Some(title) = title.clone() {
                                        on_select(title, cover.clone());
                                    }
                                }
                            >
                                <div class="match-thumb">
                                    <img src=image alt=label.clone() />
                                    <span class="similarity-badge">
                                        {format!("{:.0}%", candidate.similarity)}
                                    </span>
                                </div>
                                <p class="match-title">{label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
