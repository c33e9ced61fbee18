//! ローディングスケルトン

use leptos::prelude::*;

#[component]
pub fn ResultSkeleton() -> impl IntoView {
    view! {
        <div class="result-card skeleton">
            <div class="skeleton-block skeleton-header"></div>
            <div class="result-body">
                <div class="skeleton-block skeleton-cover"></div>
                <div class="result-content">
                    <div class="skeleton-block skeleton-line wide"></div>
                    <div class="skeleton-block skeleton-line"></div>
                    <div class="skeleton-block skeleton-line"></div>
                    <div class="skeleton-block skeleton-text"></div>
                </div>
            </div>
        </div>
    }
}
