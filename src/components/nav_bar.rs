//! Navigation Bar
//!
//! Brand on the left, one link per section on the right. The link of the
//! active section is bold with a full underline; hover styling is CSS only.

use chakshu_core::Section;
use dioxus::prelude::*;

use super::scroll_to_section;
use crate::context::use_scroll_state;

#[component]
pub fn NavBar() -> Element {
    let scroll = use_scroll_state();
    let active = scroll().active;

    rsx! {
        nav { class: "nav-bar",
            h2 { class: "brand", "Chakshu.AI" }
            ul { class: "nav-links",
                for section in Section::ALL {
                    li {
                        class: if section == active { "nav-link active" } else { "nav-link" },
                        onclick: move |_| scroll_to_section(section),
                        {section.nav_label()}
                        span { class: "nav-underline" }
                    }
                }
            }
        }
    }
}
