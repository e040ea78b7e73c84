//! Landing page - the only page of Chakshu.AI.
//!
//! "Hunting for Exoplanets with AI" - hero, Start button and quotes,
//! mission statement and the team, over a looping Earth video and a
//! falling star field.

use chakshu_core::{Section, StarField};
use chakshu_ui::{Button, ButtonVariant, ScrollTopButton, StarFieldView};
use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::{
    launch, reveal_class, scroll_to_top, use_scroll_tracking, DeveloperLinks, NavBar,
    TypewriterQuotes,
};
use crate::context::{use_config, use_scroll_state};

const MISSION_INTRO: &str = "The search for worlds beyond our solar system has fascinated scientists and dreamers alike for centuries. With data from space missions like Kepler, K2, and TESS, humanity has already identified thousands of exoplanets — distant worlds orbiting other stars. Yet, many more remain hidden in the vast sea of data collected by these missions. At A World Away, our mission is to revolutionize how we discover new planets by harnessing the power of Artificial Intelligence (AI) and Machine Learning (ML). Instead of relying solely on manual analysis by astronomers, our AI models are designed to automatically scan, learn from, and interpret massive datasets from NASA’s open-source exoplanet archives. Using the transit method, these missions detect tiny dips in starlight when a planet passes in front of its star. Our AI system analyzes these light patterns — along with features like orbital period, transit duration, and planetary radius — to distinguish between confirmed exoplanets, planetary candidates, and false positives with remarkable accuracy.";

const MISSION_INVITE: &str = "But our mission doesn’t stop there. We aim to make exoplanet discovery more interactive and accessible through a user-friendly web interface where scientists, students, and enthusiasts can:";

const MISSION_GOALS: [&str; 3] = [
    "Upload or input new data for analysis",
    "Explore how AI classifies potential exoplanets",
    "Visualize key insights and predictions in real time",
];

const MISSION_CLOSING: &str = "By combining space science and intelligent automation, we hope to uncover new worlds that have yet to be found — and inspire a new generation of explorers to look a world away for the answers to our biggest cosmic questions.";

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let config = use_config();
    let scroll = use_scroll_state();
    use_scroll_tracking(scroll);

    // Stars are generated once per mount
    let stars = use_hook(|| {
        StarField::seeded(config.star_seed, config.star_count)
            .stars()
            .to_vec()
    });

    let state = scroll();
    let home_active = state.active == Section::Home;
    let mission_class = format!(
        "{} mission-section",
        reveal_class(state.active == Section::Mission)
    );

    let launch_url = config.launch_url.clone();
    let on_start = move |_: ()| launch(&launch_url);

    let year = chrono::Local::now().year();

    rsx! {
        div { class: "landing",
            video {
                class: "bg-video",
                src: "{config.background_video}",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
            }
            div { class: "bg-overlay" }

            StarFieldView { stars }

            NavBar {}

            header {
                id: Section::Home.id(),
                class: reveal_class(home_active),
                h1 { class: "hero-title", "Hunting for Exoplanets with AI" }
                p { class: "hero-tagline", "An eye that can see beyond IMAGINATION" }
            }

            main {
                id: "main-section-content",
                class: reveal_class(home_active),
                p { class: "hero-blurb",
                    "Chakshu.AI – Where Technology Meets the Endless Cosmos Discovering "
                    "Hidden Worlds That Have Never Been Seen Before"
                }

                div { class: "cta",
                    Button {
                        variant: ButtonVariant::Launch,
                        onclick: on_start,
                        "Start"
                    }
                }

                TypewriterQuotes { quotes: config.quotes(), timing: config.timing() }
            }

            section {
                id: Section::Mission.id(),
                class: "{mission_class}",
                h2 { class: "section-header", "Mission" }
                p { class: "mission-subtitle",
                    "Our Mission: A World Away — Hunting for Exoplanets with AI"
                }
                p { class: "mission-text", "{MISSION_INTRO}" }
                p { class: "mission-text", "{MISSION_INVITE}" }
                ul { class: "mission-goals",
                    for goal in MISSION_GOALS {
                        li { key: "{goal}", "{goal}" }
                    }
                }
                p { class: "mission-text", "{MISSION_CLOSING}" }
            }

            section {
                id: Section::About.id(),
                class: "about-section",
                h2 { class: "section-header", "Developers" }
                DeveloperLinks { developers: config.developers.clone() }
            }

            if state.show_scroll_top {
                ScrollTopButton { onclick: move |_: ()| scroll_to_top() }
            }

            footer { class: "landing-footer",
                "© {year} Chakshu-AI — Exploring Space Intelligently"
            }
        }
    }
}
