//! Styling for the landing page.

mod styles;

pub use styles::GLOBAL_STYLES;
