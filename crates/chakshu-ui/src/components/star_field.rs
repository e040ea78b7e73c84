//! Star Field Overlay
//!
//! Fixed, click-through layer of small white dots. Each dot runs the
//! `fallDown` keyframes from the global stylesheet with its own duration
//! and delay.

use chakshu_core::Star;
use dioxus::prelude::*;

/// Properties for the StarFieldView component
#[derive(Clone, PartialEq, Props)]
pub struct StarFieldViewProps {
    /// Stars to draw, generated once by the caller
    pub stars: Vec<Star>,
}

/// Renders the falling stars
///
/// # Example
///
/// ```rust,ignore
/// let stars = use_hook(|| StarField::generate(&mut rand::rng(), 100).stars().to_vec());
/// rsx! { StarFieldView { stars } }
/// ```
#[component]
pub fn StarFieldView(props: StarFieldViewProps) -> Element {
    rsx! {
        div { class: "star-field", "aria-hidden": "true",
            for star in props.stars.iter() {
                div {
                    key: "{star.id}",
                    class: "star",
                    style: star.style(),
                }
            }
        }
    }
}
