//! Falling-star particle generation.
//!
//! Stars are generated once and never change; the falling motion is a CSS
//! animation. The random source is injected so a seeded RNG reproduces the
//! same field.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of stars on the landing page
pub const DEFAULT_STAR_COUNT: usize = 100;

/// One decorative star.
#[derive(Clone, PartialEq, Debug)]
pub struct Star {
    pub id: usize,
    /// Horizontal offset, percent of viewport width in [0, 100)
    pub left_percent: f64,
    /// Diameter in px, [1, 3)
    pub size_px: f64,
    /// One fall cycle in seconds, [10, 25)
    pub duration_secs: f64,
    /// Start delay in seconds, [0, 15)
    pub delay_secs: f64,
}

impl Star {
    /// Draw one star from `rng`.
    pub fn random(id: usize, rng: &mut impl Rng) -> Self {
        Self {
            id,
            left_percent: rng.random_range(0.0..100.0),
            size_px: rng.random_range(1.0..3.0),
            duration_secs: rng.random_range(10.0..25.0),
            delay_secs: rng.random_range(0.0..15.0),
        }
    }

    /// Inline style for the star element.
    pub fn style(&self) -> String {
        format!(
            "left: {left:.3}%; width: {size:.3}px; height: {size:.3}px; \
             animation-duration: {dur:.3}s; animation-delay: {delay:.3}s;",
            left = self.left_percent,
            size = self.size_px,
            dur = self.duration_secs,
            delay = self.delay_secs,
        )
    }
}

/// The full set of stars.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn generate(rng: &mut impl Rng, count: usize) -> Self {
        let stars = (0..count).map(|id| Star::random(id, &mut *rng)).collect();
        Self { stars }
    }

    /// Reproducible field for `Some(seed)`, fresh thread-local randomness
    /// otherwise.
    pub fn seeded(seed: Option<u64>, count: usize) -> Self {
        match seed {
            Some(seed) => Self::generate(&mut StdRng::seed_from_u64(seed), count),
            None => Self::generate(&mut rand::rng(), count),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
