//! Newsletter signup widget. Validation and the response copy live in core;
//! this just wires the form to a toast.

use byline_core::notify::NotificationKind;
use byline_core::subscribe::subscribe;
use dioxus::prelude::*;

use crate::notifications::push_notification;

#[component]
pub fn NewsletterWidget() -> Element {
    let mut email = use_signal(|| String::new());

    rsx! {
        div {
            class: "sidebar-section",
            id: "newsletter",
            h3 { class: "sidebar-title", "Newsletter" }
            p { class: "newsletter-blurb", "Get new posts in your inbox. No spam, ever." }
            form {
                class: "newsletter-form",
                onsubmit: move |e: Event<FormData>| {
                    e.prevent_default();
                    let address = email.read().trim().to_string();
                    match subscribe(&address) {
                        Ok(msg) => {
                            push_notification(NotificationKind::Success, msg);
                            email.set(String::new());
                        }
                        Err(msg) => push_notification(NotificationKind::Error, msg),
                    }
                },
                input {
                    class: "newsletter-input",
                    r#type: "email",
                    placeholder: "Your email address",
                    value: "{email}",
                    oninput: move |e: Event<FormData>| email.set(e.value()),
                }
                button {
                    class: "newsletter-button",
                    r#type: "submit",
                    "Subscribe"
                }
            }
        }
    }
}
