//! 「Surprise me」で選んだエモートの表示

use emote_gallery_common::{emote_url, CatalogEntry};
use leptos::prelude::*;

#[component]
pub fn SurpriseDisplay(
    emote: ReadSignal<Option<CatalogEntry>>,
    set_emote: WriteSignal<Option<CatalogEntry>>,
) -> impl IntoView {
    view! {
        {move || emote.get().map(|emote| {
            let url = emote_url(&emote.file);
            view! {
                <div class="surprise-overlay" on:click=move |_| set_emote.set(None)>
                    <div class="surprise-content" on:click=|ev| ev.stop_propagation()>
                        <button class="close-btn" on:click=move |_| set_emote.set(None)>"✕"</button>
                        <img src=url.clone() alt=emote.name.clone() />
                        <h3>{emote.name.clone()}</h3>
                        <a class="btn surprise-download-btn" href=url download=emote.file.clone()>
                            "Download"
                        </a>
                    </div>
                </div>
            }
        })}
    }
}
