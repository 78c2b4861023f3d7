//! ページ送り

use emote_gallery_common::PageControls;
use leptos::prelude::*;

#[component]
pub fn Pagination<F>(controls: Memo<PageControls>, on_page: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    let pages = move || controls.with(|c| c.pages().collect::<Vec<_>>());

    view! {
        <nav class="pagination" class:hidden=move || controls.with(|c| c.total <= 1)>
            <button
                class="pagination-btn"
                disabled=move || !controls.with(|c| c.has_previous)
                on:click={
                    let on_page = on_page.clone();
                    move |_| on_page(controls.get_untracked().current.saturating_sub(1))
                }
            >
                "◀"
            </button>

            <For
                each=pages
                key=|page| *page
                children={
                    let on_page = on_page.clone();
                    move |page| {
                        let on_page = on_page.clone();
                        view! {
                            <button
                                class="pagination-btn"
                                class:active=move || controls.with(|c| c.current == page)
                                on:click=move |_| on_page(page)
                            >
                                {page}
                            </button>
                        }
                    }
                }
            />

            <button
                class="pagination-btn"
                disabled=move || !controls.with(|c| c.has_next)
                on:click={
                    let on_page = on_page.clone();
                    move |_| on_page(controls.get_untracked().current + 1)
                }
            >
                "▶"
            </button>
        </nav>
    }
}
