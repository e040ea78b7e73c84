//! Webview bridge for scrolling and navigation.
//!
//! A small script posts a [`ViewportSample`] on every scroll event; the
//! [`SectionTracker`] turns those into the shared [`ScrollState`].
//! Smooth scrolling and the Start redirect are one-shot evals.

use chakshu_core::{ScrollState, Section, SectionTracker, ViewportSample};
use dioxus::prelude::*;

/// Script that reports the viewport and section bounds on every scroll.
fn bridge_script() -> String {
    let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
    format!(
        r#"
        const ids = {ids};
        const report = () => {{
            const sections = ids
                .map((id) => document.getElementById(id))
                .filter((el) => el !== null)
                .map((el) => {{
                    const rect = el.getBoundingClientRect();
                    return {{ id: el.id, top: rect.top }};
                }});
            dioxus.send({{
                scroll_y: window.scrollY,
                height: window.innerHeight,
                sections,
            }});
        }};
        window.addEventListener("scroll", report, {{ passive: true }});
        window.addEventListener("resize", report);
        report();
        await new Promise(() => {{}});
        "#,
        ids = js_literal(&ids),
    )
}

/// Encode a value as a JS literal.
fn js_literal<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to encode JS literal: {}", e);
        "null".to_string()
    })
}

/// Keep `state` in sync with the webview scroll position.
pub fn use_scroll_tracking(mut state: Signal<ScrollState>) {
    use_future(move || async move {
        let mut bridge = document::eval(&bridge_script());
        let mut tracker = SectionTracker::new();

        loop {
            match bridge.recv::<ViewportSample>().await {
                Ok(sample) => {
                    let next = tracker.on_scroll(&sample);
                    if *state.peek() != next {
                        tracing::trace!(active = ?next.active, "Scroll state changed");
                        state.set(next);
                    }
                }
                Err(e) => {
                    tracing::warn!("Scroll bridge closed: {:?}", e);
                    break;
                }
            }
        }
    });
}

/// Run a one-shot script, logging a failed eval instead of dropping it.
fn run_script(action: &'static str, js: String) {
    let eval = document::eval(&js);
    spawn(async move {
        if let Err(e) = eval.join::<serde_json::Value>().await {
            tracing::warn!("{} failed: {:?}", action, e);
        }
    });
}

fn scroll_to_section_script(section: Section) -> String {
    format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: \"smooth\" }});",
        js_literal(section.id())
    )
}

const SCROLL_TO_TOP_SCRIPT: &str = "window.scrollTo({ top: 0, behavior: \"smooth\" });";

fn launch_script(url: &str) -> String {
    format!("window.location.href = {};", js_literal(url))
}

/// Smooth-scroll a section into view.
pub fn scroll_to_section(section: Section) {
    run_script("Scroll to section", scroll_to_section_script(section));
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    run_script("Scroll to top", SCROLL_TO_TOP_SCRIPT.to_string());
}

/// Send the webview to the classifier.
pub fn launch(url: &str) {
    tracing::info!("Launching classifier at {}", url);
    run_script("Launch redirect", launch_script(url));
}

/// CSS classes for a section that fades and slides in while active.
pub fn reveal_class(active: bool) -> &'static str {
    if active {
        "section visible"
    } else {
        "section"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_script_lists_every_section() {
        let script = bridge_script();
        assert!(script.contains(r#"["main-section","mission-section","about-section"]"#));
        assert!(script.contains("dioxus.send"));
        assert!(!script.contains("rect.height"));
    }

    #[test]
    fn section_scroll_targets_the_dom_id() {
        assert_eq!(
            scroll_to_section_script(Section::Mission),
            r#"document.getElementById("mission-section")?.scrollIntoView({ behavior: "smooth" });"#
        );
    }

    #[test]
    fn launch_script_quotes_the_url() {
        assert_eq!(
            launch_script("http://127.0.0.1:8051/"),
            r#"window.location.href = "http://127.0.0.1:8051/";"#
        );
        assert_eq!(
            launch_script("https://x.org/?q=\"';alert(1)//"),
            r#"window.location.href = "https://x.org/?q=\"';alert(1)//";"#
        );
    }

    #[test]
    fn js_literal_escapes_quotes() {
        assert_eq!(js_literal("a\"b"), r#""a\"b""#);
    }

    #[test]
    fn reveal_classes() {
        assert_eq!(reveal_class(true), "section visible");
        assert_eq!(reveal_class(false), "section");
    }
}
