//! Typewriter Line Component
//!
//! Draws one typewriter frame: the partially typed quote, faded in or out,
//! followed by a blinking cursor.

use std::time::Duration;

use chakshu_core::TypewriterFrame;
use dioxus::prelude::*;

/// Properties for the TypewriterLine component
#[derive(Clone, PartialEq, Props)]
pub struct TypewriterLineProps {
    /// Frame to draw
    pub frame: TypewriterFrame,
    /// Fade duration between quotes
    #[props(default = Duration::from_millis(250))]
    pub transition: Duration,
}

/// Inline style for the quote text.
pub fn fade_style(visible: bool, transition: Duration) -> String {
    format!(
        "opacity: {}; transition: opacity {}ms cubic-bezier(.4,0,.2,1);",
        if visible { 1 } else { 0 },
        transition.as_millis()
    )
}

/// Renders the typed text and the cursor
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TypewriterLine { frame: frame(), transition: timing.transition_duration }
/// }
/// ```
#[component]
pub fn TypewriterLine(props: TypewriterLineProps) -> Element {
    let style = fade_style(props.frame.visible, props.transition);

    rsx! {
        div { class: "typewriter",
            span { class: "typewriter-text", style: "{style}", "{props.frame.text}" }
            span { class: "typewriter-cursor", "aria-hidden": "true", "|" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_frame_is_opaque() {
        let style = fade_style(true, Duration::from_millis(250));
        assert_eq!(
            style,
            "opacity: 1; transition: opacity 250ms cubic-bezier(.4,0,.2,1);"
        );
    }

    #[test]
    fn hidden_frame_fades_out() {
        let style = fade_style(false, Duration::from_millis(100));
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("100ms"));
    }
}
