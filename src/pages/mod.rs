//! Page components for Chakshu.AI.

mod landing;

pub use landing::Landing;
