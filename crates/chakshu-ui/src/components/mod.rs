//! Reusable landing page components.

mod button;
mod star_field;
mod typewriter_line;

pub use button::*;
pub use star_field::*;
pub use typewriter_line::*;
