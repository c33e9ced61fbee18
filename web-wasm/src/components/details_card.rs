//! 詳細カードコンポーネント
//!
//! 章数・連載状態・掲載期間・スコアのタイルと関連作品。

use leptos::prelude::*;
use manga_scan_common::{Lang, SearchResult};

#[component]
pub fn DetailsCard(result: SearchResult, lang: Lang) -> impl IntoView {
    let t = lang.t();

    let chapters = result
        .chapters
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    let status = result
        .status
        .as_deref()
        .map(|raw| t.status_label(raw).to_string())
        .unwrap_or_else(|| "?".to_string());
    let published = result.published.clone().unwrap_or_else(|| "?".to_string());
    let score = result
        .score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "?".to_string());

    view! {
        <div class="details-card">
            <h3 class="section-label">{t.details}</h3>

            <div class="stat-grid">
                <div class="stat-tile">
                    <h4>{t.chapters}</h4>
                    <span class="stat-value">{chapters}</span>
                </div>
                <div class="stat-tile">
                    <h4>{t.status}</h4>
                    <span class="stat-value">{status}</span>
                </div>
                <div class="stat-tile">
                    <h4>{t.published}</h4>
                    <span class="stat-value">{published}</span>
                </div>
                <div class="stat-tile">
                    <h4>{t.score}</h4>
                    <span class="stat-value">{score}</span>
                </div>
            </div>

            {(!result.related_manga.is_empty())
                .then(|| {
                    view! {
                        <div class="relations-grid">
                            {result
                                .related_manga
                                .iter()
                                .map(|related| {
                                    let label = related
                                        .relation_type
                                        .as_deref()
                                        .map(|raw| t.relation_label(raw).to_string())
                                        .unwrap_or_default();
                                    let name =
                                        related.title.clone().unwrap_or_else(|| "?".to_string());
                                    let url = related.url.clone().unwrap_or_default();
                                    view! {
                                        <div class="relation-tile">
                                            <h4>{label}</h4>
                                            <a href=url target="_blank" rel="noopener noreferrer">
                                                {name}
                                            </a>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}
