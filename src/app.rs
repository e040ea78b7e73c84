use chakshu_core::ScrollState;
use dioxus::prelude::*;

use crate::context::get_config;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The landing page (hero, mission, developers)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, the landing config, scroll state and routing.
#[component]
pub fn App() -> Element {
    let scroll_state: Signal<ScrollState> = use_signal(ScrollState::default);

    use_context_provider(get_config);
    use_context_provider(|| scroll_state);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
