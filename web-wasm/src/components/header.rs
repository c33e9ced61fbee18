//! ヘッダーコンポーネント

use leptos::prelude::*;
use manga_scan_common::Lang;

#[component]
pub fn Header<FL, FN>(
    language: ReadSignal<Lang>,
    on_toggle_language: FL,
    nsfw: ReadSignal<bool>,
    on_toggle_nsfw: FN,
) -> impl IntoView
where
    FL: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <h1>
                <span class="header-title">{move || language.get().t().title}</span>
                <span class="header-subtitle">{move || language.get().t().subtitle}</span>
            </h1>

            <div class="header-controls">
                <button
                    class="nsfw-toggle"
                    class:active=move || nsfw.get()
                    on:click={
                        let on_toggle_nsfw = on_toggle_nsfw.clone();
                        move |_| on_toggle_nsfw(())
                    }
                >
                    {move || if nsfw.get() { "R18 ON" } else { "R18 OFF" }}
                </button>

                <button
                    class="lang-toggle"
                    on:click={
                        let on_toggle_language = on_toggle_language.clone();
                        move |_| on_toggle_language(())
                    }
                >
                    <span class:active=move || language.get() == Lang::En>"EN"</span>
                    <span class:active=move || language.get() == Lang::Es>"ES"</span>
                </button>
            </div>
        </header>
    }
}
