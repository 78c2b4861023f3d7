//! お問い合わせフォーム

use crate::api::contact::send_message;
use emote_gallery_common::contact::{
    prepare_message, EMPTY_MESSAGE_NOTICE, SEND_FAILED_NOTICE, SUCCESS_NOTICE_MS,
};
use gloo::timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::html::Form;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn ContactForm() -> impl IntoView {
    let form_ref: NodeRef<Form> = NodeRef::new();
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);
    let (sending, set_sending) = signal(false);
    let (sent, set_sent) = signal(false);
    let notice_timer: Rc<RefCell<Option<Timeout>>> = Rc::default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Ok(text) = prepare_message(&message.get_untracked()) else {
            set_error.set(Some(EMPTY_MESSAGE_NOTICE));
            return;
        };
        let Some(form) = form_ref.get_untracked() else {
            return;
        };

        set_error.set(None);
        set_sending.set(true);

        let notice_timer = notice_timer.clone();
        spawn_local(async move {
            match send_message(&form, &text).await {
                Ok(()) => {
                    set_sent.set(true);
                    // 前のタイマーは破棄時にキャンセルされる
                    *notice_timer.borrow_mut() =
                        Some(Timeout::new(SUCCESS_NOTICE_MS, move || set_sent.set(false)));
                    form.reset();
                    set_message.set(String::new());
                }
                Err(err) => {
                    warn!("メッセージを送信できません: {:?}", err);
                    set_error.set(Some(SEND_FAILED_NOTICE));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <form node_ref=form_ref class="contact-form" id="contactForm" on:submit=on_submit>
            <h2>"Contact"</h2>
            <input type="email" name="email" placeholder="Your email (optional)" />
            <textarea
                name="message"
                id="contactMessage"
                placeholder="Your message"
                prop:value=move || message.get()
                on:input=move |ev| {
                    set_message.set(event_target_value(&ev));
                }
            ></textarea>

            <button type="submit" class="btn" disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send" }}
            </button>

            {move || error.get().map(|msg| view! {
                <p class="form-message form-message-error">{msg}</p>
            })}
            <p class="message-send-ok" class:hidden=move || !sent.get()>
                "Message sent!"
            </p>
        </form>
    }
}
