//! 音楽プレイヤー
//!
//! music-list.json の曲を順番に再生し、末尾の次は先頭に戻る。

use crate::api::gallery::fetch_track_list;
use emote_gallery_common::playlist::DEFAULT_VOLUME;
use emote_gallery_common::{Playlist, TrackLoad};
use leptos::html::Audio;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

fn play(audio: &HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                warn!("再生できません: {:?}", err);
            }
        }),
        Err(err) => warn!("再生できません: {:?}", err),
    }
}

/// 表示用の曲名（拡張子を除く）
fn display_title(track: &str) -> String {
    let name = track.rsplit('/').next().unwrap_or(track);
    match name.rfind('.') {
        Some(dot) if dot > 0 => name[..dot].to_string(),
        _ => name.to_string(),
    }
}

#[component]
pub fn MusicPlayer() -> impl IntoView {
    let audio_ref: NodeRef<Audio> = NodeRef::new();
    let playlist = RwSignal::new(Playlist::default());
    let (is_playing, set_is_playing) = signal(false);
    // 読み込み完了後に再生を始めるか
    let (pending_play, set_pending_play) = signal(false);

    spawn_local(async move {
        match fetch_track_list().await {
            Ok(tracks) => playlist.set(Playlist::new(tracks)),
            Err(err) => log!("音楽リストがありません。曲を追加したら music コマンドを実行してください: {:?}", err),
        }
    });

    Effect::new(move |_| {
        if let Some(audio) = audio_ref.get() {
            audio.set_volume(DEFAULT_VOLUME);
        }
    });

    let apply = move |load: TrackLoad| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        audio.set_src(&load.url);
        audio.load();
        set_pending_play.set(load.autoplay);
    };

    let was_playing = move || audio_ref.get_untracked().map(|a| !a.paused()).unwrap_or(false);

    let on_toggle = move |_| {
        if playlist.with_untracked(Playlist::is_empty) {
            return;
        }
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };

        if !audio.paused() {
            if let Err(err) = audio.pause() {
                warn!("停止できません: {:?}", err);
            }
            return;
        }

        match playlist.try_update(|p| p.start()).flatten() {
            Some(load) => apply(load),
            None => play(&audio),
        }
    };

    let on_previous = move |_| {
        let playing = was_playing();
        if let Some(load) = playlist.try_update(|p| p.previous(playing)).flatten() {
            apply(load);
        }
    };

    let on_next = move |_| {
        let playing = was_playing();
        if let Some(load) = playlist.try_update(|p| p.next(playing)).flatten() {
            apply(load);
        }
    };

    let on_ended = move |_| {
        if let Some(load) = playlist.try_update(|p| p.on_ended()).flatten() {
            apply(load);
        }
    };

    let on_can_play = move |_| {
        if pending_play.get_untracked() {
            set_pending_play.set(false);
            if let Some(audio) = audio_ref.get_untracked() {
                play(&audio);
            }
        }
    };

    let title = move || {
        playlist.with(|p| match p.current_track() {
            Some(track) if p.is_loaded() => display_title(track),
            _ if p.is_empty() => "No music".to_string(),
            _ => "Music".to_string(),
        })
    };

    view! {
        <div class="music-player">
            <audio
                node_ref=audio_ref
                preload="none"
                on:ended=on_ended
                on:canplay=on_can_play
                on:play=move |_| set_is_playing.set(true)
                on:pause=move |_| set_is_playing.set(false)
            ></audio>

            <span class="music-title">{title}</span>

            <div class="music-controls">
                <button class="music-btn" on:click=on_previous title="Previous">"⏮"</button>
                <button class="music-btn" on:click=on_toggle title="Play / Pause">
                    {move || if is_playing.get() { "⏸" } else { "▶" }}
                </button>
                <button class="music-btn" on:click=on_next title="Next">"⏭"</button>
            </div>

            <input
                type="range"
                class="volume-slider"
                min="0"
                max="100"
                value={(DEFAULT_VOLUME * 100.0).to_string()}
                on:input=move |ev| {
                    let percent: f64 = event_target_value(&ev).parse().unwrap_or(DEFAULT_VOLUME * 100.0);
                    if let Some(audio) = audio_ref.get_untracked() {
                        audio.set_volume((percent / 100.0).clamp(0.0, 1.0));
                    }
                }
            />
        </div>
    }
}
