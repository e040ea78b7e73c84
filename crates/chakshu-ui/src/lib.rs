//! Chakshu.AI Landing UI Components
//!
//! Stateless Dioxus components for the landing page. State lives in
//! `chakshu-core` and in the page components of the desktop binary; these
//! only render what they are given.
//!
//! ## Look
//!
//! - **Night sky**: black page under a looping Earth video and a dark gradient
//! - **Ice blue (#aad4ff)**: quotes, links and inactive nav items
//! - **White glow**: titles, the Start button and the falling stars
//! - **Monospace quotes** with a blinking cursor

pub mod components;

pub use components::*;
