//! Shared context for the landing page.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_config);
//!
//! // In child components
//! let config = use_config();
//! let scroll = use_scroll_state();
//! ```

use chakshu_core::{LandingConfig, ScrollState};
use dioxus::prelude::*;

/// Get the landing configuration set from the command line.
pub fn get_config() -> LandingConfig {
    crate::get_config()
}

/// Hook to access the landing configuration from context.
pub fn use_config() -> LandingConfig {
    use_context::<LandingConfig>()
}

/// Hook to access the scroll state shared by the page and the nav bar.
///
/// Written by `use_scroll_tracking`, read by anything that highlights or
/// reveals per section.
pub fn use_scroll_state() -> Signal<ScrollState> {
    use_context::<Signal<ScrollState>>()
}
