//! 結果画面
//!
//! found = false のときは結果カードではなく不一致パネルを出す。

use leptos::prelude::*;
use manga_scan_common::{Lang, SearchResult};

use crate::components::author_card::AuthorCard;
use crate::components::details_card::DetailsCard;
use crate::components::other_matches::OtherMatches;
use crate::components::related_works_card::RelatedWorksCard;
use crate::components::result_card::ResultCard;
use crate::components::skeleton::ResultSkeleton;
use crate::components::sources_card::SourcesCard;

#[component]
pub fn ResultsView<FR, FM>(
    result: SearchResult,
    lang: Lang,
    preview_url: Option<String>,
    details_loading: bool,
    on_reset: FR,
    on_select_match: FM,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone,
    FM: Fn(String, Option<String>) + 'static + Clone,
{
    let t = lang.t();

    if details_loading {
        return view! { <ResultSkeleton /> }.into_any();
    }

    if !result.found {
        let message = result
            .message
            .clone()
            .unwrap_or_else(|| t.no_match_message.to_string());
        return view! {
            <div class="no-match-panel">
                <div class="no-match-icon">"⚠️"</div>
                <h2>{t.no_match_title}</h2>
                <p>{message}</p>
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    {t.search_again}
                </button>
            </div>
        }
        .into_any();
    }

    let author_name = result
        .authors
        .first()
        .and_then(|author| author.name.clone())
        .unwrap_or_default();
    let has_authors = !result.authors.is_empty();
    let title = result.title.clone().unwrap_or_default();

    view! {
        <ResultCard
            result=result.clone()
            lang=lang
            preview_url=preview_url
            on_reset=on_reset
        />

        <DetailsCard result=result.clone() lang=lang />

        <AuthorCard authors=result.authors.clone() lang=lang />

        {has_authors
            .then(|| {
                view! {
                    <RelatedWorksCard
                        works=result.related_works.clone()
                        author_name=author_name
                        lang=lang
                    />
                }
            })}

        <SourcesCard title=title external_links=result.external_links.clone() lang=lang />

        <OtherMatches matches=result.other_matches lang=lang on_select=on_select_match />
    }
    .into_any()
}
