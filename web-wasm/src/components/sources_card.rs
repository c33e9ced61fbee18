//! 読める場所カード
//!
//! タイトルから組み立てる公式検索リンクと、バックエンドが返した
//! 外部リンク、非公式ソースの3グループ。

use leptos::prelude::*;
use manga_scan_common::{ExternalLink, Lang};

#[component]
pub fn SourcesCard(title: String, external_links: Vec<ExternalLink>, lang: Lang) -> impl IntoView {
    let t = lang.t();
    let encoded = urlencoding::encode(&title).into_owned();

    let official: Vec<(String, String)> = vec![
        (
            "MangaPlus".to_string(),
            format!("https://mangaplus.shueisha.co.jp/search_result?keyword={encoded}"),
        ),
        (
            "Viz Media".to_string(),
            format!("https://www.viz.com/search?search={encoded}"),
        ),
        (
            "BookWalker".to_string(),
            format!("https://global.bookwalker.jp/search/?word={encoded}"),
        ),
    ];
    let unofficial: Vec<(String, String)> = vec![
        (
            "ZonaTMO".to_string(),
            "https://zonatmo.com/library".to_string(),
        ),
        (
            "MangaDex".to_string(),
            format!("https://mangadex.org/search?q={encoded}"),
        ),
        (
            "Mangakatana".to_string(),
            format!("https://mangakatana.com/?search={encoded}&search_by=book_name"),
        ),
    ];

    // 読む場所の一覧なのでWikipediaは除外する
    let fetched: Vec<(String, String)> = external_links
        .into_iter()
        .filter_map(|link| match (link.name, link.url) {
            (Some(name), Some(url)) if !name.to_lowercase().contains("wikipedia") => {
                Some((name, url))
            }
            _ => None,
        })
        .collect();

    let link_tile = |(name, url): (String, String)| {
        view! {
            <a class="source-link" href=url target="_blank" rel="noopener noreferrer">
                <span>{name}</span>
                <span class="link-arrow">"↗"</span>
            </a>
        }
    };

    view! {
        <div class="sources-card">
            <h3 class="section-label">{t.sources}</h3>

            <div class="source-group">
                <h4>{t.official_sources}</h4>
                <div class="source-links">
                    {official.into_iter().map(link_tile).collect_view()}
                    {fetched.into_iter().map(link_tile).collect_view()}
                </div>
            </div>

            <div class="source-group">
                <h4>{t.unofficial_sources}</h4>
                <div class="source-links">
                    {unofficial.into_iter().map(link_tile).collect_view()}
                </div>
            </div>
        </div>
    }
}
