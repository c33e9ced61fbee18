//! 確認モーダルコンポーネント

use leptos::prelude::*;

#[component]
pub fn ConfirmationModal<FC, FX>(
    open: ReadSignal<bool>,
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    on_confirm: FC,
    on_close: FX,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FX: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-panel">
                    <h3 class="modal-title">"⚠️ " {title.clone()}</h3>
                    <p class="modal-message">{message.clone()}</p>
                    <div class="modal-actions">
                        <button
                            class="btn btn-small"
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close(())
                            }
                        >
                            {cancel_label.clone()}
                        </button>
                        <button
                            class="btn btn-small btn-danger"
                            on:click={
                                let on_confirm = on_confirm.clone();
                                move |_| on_confirm(())
                            }
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
