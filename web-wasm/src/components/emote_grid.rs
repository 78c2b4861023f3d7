//! エモート一覧グリッド

use crate::app::LoadState;
use emote_gallery_common::{emote_url, CatalogEntry};
use leptos::prelude::*;

/// セルに名前を表示するか
const SHOW_EMOTE_NAMES: bool = false;

#[component]
pub fn EmoteGrid(items: Memo<Vec<CatalogEntry>>, load_state: ReadSignal<LoadState>) -> impl IntoView {
    view! {
        <div class="gallery" id="gallery">
            {move || match load_state.get() {
                LoadState::Loading => view! { <p class="text-muted">"Loading emotes..."</p> }.into_any(),
                LoadState::Failed => view! {
                    <p class="gallery-error">"Failed to load emotes. Please refresh the page."</p>
                }
                .into_any(),
                LoadState::Ready if items.with(Vec::is_empty) => {
                    view! { <p class="text-muted">"No emotes found"</p> }.into_any()
                }
                LoadState::Ready => view! {
                    <For
                        each=move || items.get()
                        key=|emote| emote.file.clone()
                        children=move |emote| view! { <EmoteCell emote=emote /> }
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
pub fn EmoteCell(emote: CatalogEntry) -> impl IntoView {
    let url = emote_url(&emote.file);

    view! {
        <div class="emote">
            <img src=url.clone() alt=emote.name.clone() loading="lazy" />
            <a class="btn download-btn" href=url download=emote.file.clone()>
                "Download"
            </a>
            {SHOW_EMOTE_NAMES.then(|| view! { <div class="emote-name">{emote.name.clone()}</div> })}
        </div>
    }
}
