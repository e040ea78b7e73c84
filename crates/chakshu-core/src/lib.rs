//! Chakshu.AI Landing Core Library
//!
//! Framework-independent logic behind the landing page.
//!
//! ## Overview
//!
//! The landing page is decorative, but a few pieces carry real state:
//!
//! - **Typewriter**: cycles through quotes, typing and erasing one
//!   character per tick with pauses in between
//! - **Driver**: owns the typewriter plus its single pending timer
//! - **Sections**: decides which page section is active from scroll position
//! - **Star field**: generates the falling-star particles from an injected RNG
//!
//! None of it depends on Dioxus, so everything is testable headless.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chakshu_core::{default_quotes, Typewriter, TypewriterDriver, TypewriterTiming};
//!
//! #[tokio::main]
//! async fn main() {
//!     let machine = Typewriter::new(default_quotes(), TypewriterTiming::default());
//!     let driver = TypewriterDriver::start(machine);
//!     let mut frames = driver.subscribe();
//!
//!     while frames.changed().await.is_ok() {
//!         println!("{}", frames.borrow().text);
//!     }
//! }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod quotes;
pub mod sections;
pub mod starfield;
pub mod typewriter;

// Re-exports
pub use config::{
    Developer, LandingConfig, TimingConfig, DEFAULT_BACKGROUND_VIDEO, DEFAULT_LAUNCH_URL,
};
pub use driver::TypewriterDriver;
pub use error::{LandingError, LandingResult};
pub use quotes::{default_quotes, ASTRONOMY_QUOTES};
pub use sections::{
    SampledSection, ScrollState, Section, SectionBounds, SectionTracker, Viewport, ViewportSample,
    SCROLL_TOP_THRESHOLD,
};
pub use starfield::{Star, StarField, DEFAULT_STAR_COUNT};
pub use typewriter::{Phase, Typewriter, TypewriterFrame, TypewriterTiming};
