//! Scroll-linked behaviors — header hide/show, the scroll-to-top button, and
//! smooth scrolling to page sections.
//!
//! The webview owns the scroll position, so a small script forwards every
//! offset over the eval channel and the signal updates happen on this side.

use dioxus::prelude::*;

use crate::state::{HEADER_HIDDEN, SHOW_SCROLL_TOP};

/// Scrolling down past this offset hides the header; scrolling up restores it.
const HEADER_HIDE_PX: f64 = 100.0;

/// The scroll-to-top button appears past this offset.
const SCROLL_TOP_PX: f64 = 300.0;

// Scroll events don't bubble; a capture-phase listener on the document sees
// the shell's scrolls no matter when the shell element mounts.
const SCROLL_FORWARDER: &str = r#"
    document.addEventListener('scroll', () => {
        const el = document.getElementById('reader-scroll');
        if (el) { dioxus.send(el.scrollTop); }
    }, { capture: true, passive: true });
"#;

/// Forward webview scroll offsets into signals until the app closes.
pub async fn track_scroll() {
    let mut eval = document::eval(SCROLL_FORWARDER);
    let mut last_y = 0.0_f64;
    while let Ok(y) = eval.recv::<f64>().await {
        *HEADER_HIDDEN.write() = y > last_y && y > HEADER_HIDE_PX;
        *SHOW_SCROLL_TOP.write() = y > SCROLL_TOP_PX;
        last_y = y;
    }
}

/// Smooth-scroll the shell to a section by element id.
pub fn scroll_to_section(id: &str) {
    let js = format!(
        "const t = document.getElementById('{id}'); \
         if (t) t.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    );
    let _ = document::eval(&js);
}

/// Smooth-scroll back to the top of the shell.
pub fn scroll_to_top() {
    let _ = document::eval(
        "document.getElementById('reader-scroll').scrollTo({ top: 0, behavior: 'smooth' });",
    );
}

/// Floating button in the corner once the reader is deep into the page.
#[component]
pub fn ScrollTopButton() -> Element {
    let visible = *SHOW_SCROLL_TOP.read();

    rsx! {
        button {
            class: if visible { "scroll-to-top visible" } else { "scroll-to-top" },
            aria_label: "Scroll to top",
            onclick: move |_| scroll_to_top(),
            "\u{2191}"
        }
    }
}
