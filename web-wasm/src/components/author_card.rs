//! 作者カードコンポーネント

use leptos::prelude::*;
use manga_scan_common::{Author, Lang};

#[component]
pub fn AuthorCard(authors: Vec<Author>, lang: Lang) -> impl IntoView {
    let t = lang.t();

    if authors.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="author-card">
            <h3 class="section-label">{t.author}</h3>

            <div class="author-list">
                {authors
                    .into_iter()
                    .map(|author| {
                        let name = author.name.unwrap_or_else(|| "?".to_string());
                        let url = author.url.unwrap_or_default();
                        view! {
                            <a
                                class="author-entry"
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <div class="author-portrait">
                                    {match author.image_url {
                                        Some(src) => {
                                            view! { <img src=src alt=name.clone() /> }.into_any()
                                        }
                                        None => {
                                            view! { <span class="author-fallback">"✒️"</span> }
                                                .into_any()
                                        }
                                    }}
                                </div>
                                <div class="author-name">
                                    <span>{name}</span>
                                    <span class="author-role">"Mangaka"</span>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
