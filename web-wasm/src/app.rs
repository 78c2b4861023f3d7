//! メインアプリケーションコンポーネント

use crate::api::gallery::fetch_catalog;
use crate::components::{
    contact_form::ContactForm,
    emote_grid::EmoteGrid,
    header::Header,
    music_player::MusicPlayer,
    pagination::Pagination,
    surprise::SurpriseDisplay,
};
use emote_gallery_common::{items_per_page, pick_surprise, CatalogEntry, GalleryState, OrderMode};
use gloo::events::EventListener;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// カタログの読み込み状態
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// `0..n` の乱数（暗号用途ではない）
pub fn random_index(n: usize) -> usize {
    (js_sys::Math::random() * n as f64).floor() as usize
}

fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w as u32)
        .unwrap_or(0)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (catalog, set_catalog) = signal(Vec::<CatalogEntry>::new());
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (gallery, set_gallery) = signal(GalleryState::new(0));
    let (per_page, set_per_page) = signal(items_per_page(viewport_width()));
    let (surprise, set_surprise) = signal(None::<CatalogEntry>);

    spawn_local(async move {
        match fetch_catalog().await {
            Ok(entries) => {
                set_gallery.set(GalleryState::new(entries.len()));
                set_catalog.set(entries);
                set_load_state.set(LoadState::Ready);
            }
            Err(err) => {
                warn!("emotes.json の読み込みに失敗: {:?}", err);
                set_load_state.set(LoadState::Failed);
            }
        }
    });

    // 画面幅が変わったらページサイズを再計算
    if let Some(window) = web_sys::window() {
        EventListener::new(&window, "resize", move |_| {
            let size = items_per_page(viewport_width());
            if size != per_page.get_untracked() {
                set_per_page.set(size);
                catalog.with_untracked(|c| set_gallery.update(|g| g.fit(c, size)));
            }
        })
        .forget();
    }

    let total = Memo::new(move |_| catalog.with(Vec::len));
    let page_items = Memo::new(move |_| {
        let size = per_page.get();
        catalog.with(|c| {
            gallery.with(|g| g.page_items(c, size).into_iter().cloned().collect::<Vec<_>>())
        })
    });
    let controls = Memo::new(move |_| {
        let size = per_page.get();
        catalog.with(|c| gallery.with(|g| g.controls(c, size)))
    });

    let on_query = move |query: String| {
        set_gallery.update(|g| g.set_query(query));
    };

    let on_order = move |mode: OrderMode| {
        let len = catalog.with_untracked(Vec::len);
        set_gallery.update(|g| g.set_mode(mode, len, &mut random_index));
        scroll_to_top();
    };

    let on_page = move |page: usize| {
        let total = controls.get_untracked().total;
        set_gallery.update(|g| {
            g.go_to(page, total);
        });
        scroll_to_top();
    };

    let on_surprise = move |_| {
        let picked = catalog.with_untracked(|c| pick_surprise(c, &mut random_index).cloned());
        set_surprise.set(picked);
    };

    view! {
        <div class="container">
            <Header
                total=total
                gallery=gallery
                on_query=on_query
                on_order=on_order
                on_surprise=on_surprise
            />

            <SurpriseDisplay emote=surprise set_emote=set_surprise />

            <EmoteGrid items=page_items load_state=load_state />

            <Pagination controls=controls on_page=on_page />

            <MusicPlayer />

            <ContactForm />
        </div>
    }
}
