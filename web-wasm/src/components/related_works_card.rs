//! 同作者の他作品カード

use leptos::prelude::*;
use manga_scan_common::{Lang, RelatedWork};

const NO_IMAGE_PLACEHOLDER: &str = "https://placehold.co/200x300/1e1e1e/FFF?text=No+Image";

#[component]
pub fn RelatedWorksCard(
    works: Vec<RelatedWork>,
    author_name: String,
    lang: Lang,
) -> impl IntoView {
    let t = lang.t();

    if works.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="related-works-card">
            <h3 class="section-label">{format!("{} {}", t.related_works, author_name)}</h3>

            <div class="works-grid">
                {works
                    .into_iter()
                    .map(|work| {
                        let title = work.title.unwrap_or_else(|| "?".to_string());
                        let image = work
                            .image_url
                            .unwrap_or_else(|| NO_IMAGE_PLACEHOLDER.to_string());
                        let url = work.url.unwrap_or_default();
                        view! {
                            <a class="work-tile" href=url target="_blank" rel="noopener noreferrer">
                                <img src=image alt=title.clone() />
                                <p class="work-title">{title}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
