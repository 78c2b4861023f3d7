//! ヘッダーコンポーネント（検索・並び順・サプライズ・外部リンク）

use crate::components::{install_button::InstallButton, live_badge::LiveBadge, order_buttons::OrderButtons};
use emote_gallery_common::{GalleryState, OrderMode};
use leptos::prelude::*;

#[component]
pub fn Header<FQ, FO, FS>(
    total: Memo<usize>,
    gallery: ReadSignal<GalleryState>,
    on_query: FQ,
    on_order: FO,
    on_surprise: FS,
) -> impl IntoView
where
    FQ: Fn(String) + 'static + Clone,
    FO: Fn(OrderMode) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone,
{
    let mode = Memo::new(move |_| gallery.with(|g| g.mode));

    view! {
        <header class="header">
            <div class="banner">
                <h1>"Emote Gallery"</h1>
                <span class="emote-counter">{move || total.get()}" emotes"</span>
            </div>

            <nav class="social-links">
                <LiveBadge />
                <InstallButton />
            </nav>

            <div class="controls">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search emotes or tags..."
                    prop:value=move || gallery.with(|g| g.query.clone())
                    on:input=move |ev| {
                        on_query(event_target_value(&ev));
                    }
                />

                <OrderButtons mode=mode on_order=on_order />

                <button
                    class="btn surprise-btn"
                    on:click=move |_| on_surprise(())
                >
                    "Surprise me"
                </button>
            </div>
        </header>
    }
}
