//! 並び順ボタン

use emote_gallery_common::OrderMode;
use leptos::prelude::*;

const BUTTONS: [(OrderMode, &str); 3] = [
    (OrderMode::Latest, "Latest"),
    (OrderMode::Oldest, "Oldest"),
    (OrderMode::Shuffled, "Randomize"),
];

#[component]
pub fn OrderButtons<F>(mode: Memo<OrderMode>, on_order: F) -> impl IntoView
where
    F: Fn(OrderMode) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="order-buttons">
            {BUTTONS
                .into_iter()
                .map(|(button_mode, label)| {
                    let on_order = on_order.clone();
                    view! {
                        <button
                            class=format!("btn order-btn order-{}", button_mode.as_str())
                            class:active=move || mode.get() == button_mode
                            on:click=move |_| on_order(button_mode)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
