//! アプリのインストールボタン

use emote_gallery_common::install::INSTALLED_KEY;
use emote_gallery_common::{install_action, InstallAction};
use gloo::dialogs::alert;
use gloo::events::EventListener;
use gloo::storage::{LocalStorage, Storage};
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn is_standalone() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(display-mode: standalone)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn remembered_installed() -> bool {
    LocalStorage::get::<bool>(INSTALLED_KEY).unwrap_or(false)
}

/// 保留中の beforeinstallprompt イベントでプロンプトを表示し、ユーザーの選択を返す
async fn show_install_prompt(event: &JsValue) -> Result<String, JsValue> {
    let prompt: js_sys::Function = js_sys::Reflect::get(event, &JsValue::from_str("prompt"))?.dyn_into()?;
    prompt.call0(event)?;

    let choice = js_sys::Reflect::get(event, &JsValue::from_str("userChoice"))?;
    let choice = JsFuture::from(js_sys::Promise::resolve(&choice)).await?;
    let outcome = js_sys::Reflect::get(&choice, &JsValue::from_str("outcome"))?;

    Ok(outcome.as_string().unwrap_or_default())
}

#[component]
pub fn InstallButton() -> impl IntoView {
    let deferred: Rc<RefCell<Option<JsValue>>> = Rc::default();
    let (available, set_available) = signal(false);

    if let Some(window) = web_sys::window() {
        let slot = deferred.clone();
        EventListener::new(&window, "beforeinstallprompt", move |event| {
            // ブラウザ標準のバナーを抑止して後で使う
            event.prevent_default();
            *slot.borrow_mut() = Some(event.clone().into());
            set_available.set(true);
        })
        .forget();

        let slot = deferred.clone();
        EventListener::new(&window, "appinstalled", move |_| {
            if let Err(err) = LocalStorage::set(INSTALLED_KEY, true) {
                warn!("インストール状態を保存できません: {:?}", err);
            }
            slot.borrow_mut().take();
        })
        .forget();
    }

    let on_click = move |_| {
        let has_prompt = deferred.borrow().is_some();
        let action = install_action(is_standalone(), remembered_installed(), has_prompt);

        if let Some(notice) = action.notice() {
            alert(notice);
            return;
        }

        if action == InstallAction::Prompt {
            if let Some(event) = deferred.borrow_mut().take() {
                spawn_local(async move {
                    match show_install_prompt(&event).await {
                        Ok(outcome) => log!("インストールプロンプトの結果: {}", outcome),
                        Err(err) => warn!("インストールプロンプトを表示できません: {:?}", err),
                    }
                });
            }
        }
    };

    view! {
        <button
            id="appInstallBtn"
            class="social-btn install-btn"
            class:available=move || available.get()
            on:click=on_click
        >
            "Install App"
        </button>
    }
}
