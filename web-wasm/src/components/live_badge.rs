//! 配信ステータス付きのTwitchリンク
//!
//! 起動時・一定間隔・タブが再表示されたときに状態を取り直す。

use crate::api::status::{channel_url, fetch_live_status, CHANNEL};
use emote_gallery_common::live_status::STATUS_REFRESH_MS;
use emote_gallery_common::{LiveState, StatusTracker};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn LiveBadge() -> impl IntoView {
    let (state, set_state) = signal(LiveState::Unknown);
    let tracker = Rc::new(RefCell::new(StatusTracker::new()));

    let refresh = move || {
        let ticket = tracker.borrow_mut().begin();
        let tracker = tracker.clone();
        spawn_local(async move {
            let outcome = match fetch_live_status(CHANNEL).await {
                Ok(live) => Some(live),
                Err(err) => {
                    warn!("配信ステータスを取得できません: {:?}", err);
                    None
                }
            };

            // 追い越された古い応答は捨てる
            let mut tracker = tracker.borrow_mut();
            if tracker.complete(ticket, outcome) {
                set_state.set(tracker.state());
            }
        });
    };

    refresh();

    Interval::new(STATUS_REFRESH_MS, {
        let refresh = refresh.clone();
        move || refresh()
    })
    .forget();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let target = document.clone();
        EventListener::new(&target, "visibilitychange", move |_| {
            if !document.hidden() {
                refresh();
            }
        })
        .forget();
    }

    view! {
        <a
            id="twitchBtn"
            class=move || format!("social-btn twitch-btn {}", state.get().css_class())
            href=channel_url(CHANNEL)
            target="_blank"
            rel="noopener noreferrer"
            title=move || state.get().title()
            aria-label=move || state.get().aria_label()
        >
            <span class="live-dot"></span>
            "Twitch"
        </a>
    }
}
