//! Developers Panel
//!
//! Pill-shaped links to each team member's profile, opened outside the app.

use chakshu_core::Developer;
use dioxus::prelude::*;

#[component]
pub fn DeveloperLinks(developers: Vec<Developer>) -> Element {
    rsx! {
        div { class: "developer-links",
            for (index, dev) in developers.iter().enumerate() {
                a {
                    key: "{index}",
                    class: "developer-link",
                    href: "{dev.profile_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{dev.name}"
                }
            }
        }
    }
}
