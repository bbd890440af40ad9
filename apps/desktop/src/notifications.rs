//! Toast stack — renders the queue from core and expires entries on a timer.

use byline_core::notify::{NotificationKind, AUTO_DISMISS};
use dioxus::prelude::*;

use crate::state::NOTIFICATIONS;

/// Queue a toast and arm its auto-dismiss timer. Dismissing by hand first
/// makes the timer a no-op.
pub fn push_notification(kind: NotificationKind, message: impl Into<String>) {
    let id = NOTIFICATIONS.write().push(kind, message);
    spawn(async move {
        tokio::time::sleep(AUTO_DISMISS).await;
        NOTIFICATIONS.write().dismiss(id);
    });
}

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "notification notification-success",
        NotificationKind::Error => "notification notification-error",
    }
}

#[component]
pub fn NotificationStack() -> Element {
    let center = NOTIFICATIONS.read();

    rsx! {
        div {
            class: "notification-stack",
            for toast in center.items().iter() {
                div {
                    key: "{toast.id}",
                    class: toast_class(toast.kind),
                    div {
                        class: "notification-content",
                        span { "{toast.message}" }
                        button {
                            class: "notification-close",
                            onclick: {
                                let id = toast.id;
                                move |_| {
                                    NOTIFICATIONS.write().dismiss(id);
                                }
                            },
                            "\u{00D7}"
                        }
                    }
                }
            }
        }
    }
}
