//! Stateful components for the Chakshu.AI landing page.
//!
//! Presentational pieces live in `chakshu-ui`; these own timers, scroll
//! listeners and webview calls.

mod developer_links;
mod nav_bar;
mod scroll_tracking;
mod typewriter_quotes;

pub use developer_links::DeveloperLinks;
pub use nav_bar::NavBar;
pub use scroll_tracking::{
    launch, reveal_class, scroll_to_section, scroll_to_top, use_scroll_tracking,
};
pub use typewriter_quotes::TypewriterQuotes;
