//! Typewriter state machine.
//!
//! Cycles through an ordered list of quotes forever:
//!
//! ```text
//! Typing ──full──▶ PausedAfterTyping ──pause──▶ Erasing ──empty──▶ PausedBeforeNext
//!   ▲                                                                    │
//!   └────────────────────── erase pause, next quote ◀────────────────────┘
//! ```
//!
//! The machine knows nothing about clocks. [`Typewriter::next_delay`] says how
//! long the single pending timer should wait, and [`Typewriter::tick`] is what
//! happens when it fires. The two untimed transitions (text became full, text
//! became empty) are settled at the end of every tick.
//!
//! Text is measured in `char`s so multi-byte dashes and apostrophes never get
//! split.

use std::time::Duration;

/// Where the typewriter is in its cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    /// Appending one character per tick
    #[default]
    Typing,
    /// Full quote shown, holding before erasing
    PausedAfterTyping,
    /// Removing one character per tick
    Erasing,
    /// Text empty and faded out, holding before the next quote
    PausedBeforeNext,
}

impl Phase {
    /// Whether the current phase is a hold rather than a per-character step
    pub fn is_paused(&self) -> bool {
        matches!(self, Phase::PausedAfterTyping | Phase::PausedBeforeNext)
    }
}

/// Caller-supplied cadence of the animation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TypewriterTiming {
    /// Interval between typed characters
    pub typing_speed: Duration,
    /// Hold after the full quote is shown
    pub pause: Duration,
    /// Interval between erased characters
    pub erase_speed: Duration,
    /// Hold after the text is fully erased
    pub erase_pause: Duration,
    /// Length of the fade transition; only used for styling
    pub transition_duration: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(30),
            pause: Duration::from_millis(700),
            erase_speed: Duration::from_millis(16),
            erase_pause: Duration::from_millis(250),
            transition_duration: Duration::from_millis(250),
        }
    }
}

impl TypewriterTiming {
    /// Same delay for every step; handy in tests.
    pub fn uniform(step: Duration) -> Self {
        Self {
            typing_speed: step,
            pause: step,
            erase_speed: step,
            erase_pause: step,
            transition_duration: step,
        }
    }
}

/// Render snapshot of a [`Typewriter`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypewriterFrame {
    pub text: String,
    pub quote_index: usize,
    pub phase: Phase,
    /// False while fading out between quotes
    pub visible: bool,
}

impl Default for TypewriterFrame {
    fn default() -> Self {
        Self {
            text: String::new(),
            quote_index: 0,
            phase: Phase::Typing,
            visible: true,
        }
    }
}

/// The typing / pause / erasing / pause cycle over a quote list.
#[derive(Clone, Debug)]
pub struct Typewriter {
    quotes: Vec<String>,
    timing: TypewriterTiming,
    index: usize,
    /// Number of chars of the active quote currently shown
    shown: usize,
    phase: Phase,
    visible: bool,
    /// Total of every delay in one pass over all quotes
    cycle: Duration,
}

impl Typewriter {
    /// Start at the first quote with nothing typed.
    ///
    /// An empty list is allowed; the typewriter then shows nothing and
    /// never asks for a timer.
    pub fn new(quotes: Vec<String>, timing: TypewriterTiming) -> Self {
        let cycle = cycle_duration(&quotes, &timing);
        let mut typewriter = Self {
            quotes,
            timing,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            visible: true,
            cycle,
        };
        typewriter.settle();
        typewriter
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn quote_index(&self) -> usize {
        self.index
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The quote being typed or erased, if there is one.
    pub fn active_quote(&self) -> Option<&str> {
        self.quotes.get(self.index).map(String::as_str)
    }

    /// Currently displayed text, always a prefix of the active quote.
    pub fn displayed(&self) -> &str {
        self.active_quote()
            .map(|quote| char_prefix(quote, self.shown))
            .unwrap_or("")
    }

    /// Time one full pass over every quote takes.
    pub fn cycle_duration(&self) -> Duration {
        self.cycle
    }

    /// How long the next tick should wait, or `None` if nothing will change.
    ///
    /// A cycle that adds up to zero (every quote empty and both pauses zero)
    /// would re-fire instantly forever, so it stays frozen instead.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.quotes.is_empty() || self.cycle.is_zero() {
            return None;
        }
        Some(match self.phase {
            Phase::Typing => self.timing.typing_speed,
            Phase::PausedAfterTyping => self.timing.pause,
            Phase::Erasing => self.timing.erase_speed,
            Phase::PausedBeforeNext => self.timing.erase_pause,
        })
    }

    /// Apply one timer firing.
    pub fn tick(&mut self) {
        if self.quotes.is_empty() {
            return;
        }

        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(self.active_len());
            }
            Phase::PausedAfterTyping => {
                self.phase = Phase::Erasing;
            }
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
            }
            Phase::PausedBeforeNext => {
                self.index = (self.index + 1) % self.quotes.len();
                self.shown = 0;
                self.visible = true;
                self.phase = Phase::Typing;
            }
        }

        self.settle();
    }

    /// Apply `ticks` timer firings.
    pub fn advance(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Replace the cadence. The current phase and text are kept; the new
    /// delays apply from the next scheduled tick.
    pub fn set_timing(&mut self, timing: TypewriterTiming) {
        self.timing = timing;
        self.cycle = cycle_duration(&self.quotes, &self.timing);
    }

    /// Go back to typing the first quote from scratch.
    pub fn restart(&mut self) {
        self.index = 0;
        self.shown = 0;
        self.phase = Phase::Typing;
        self.visible = true;
        self.settle();
    }

    /// Swap the quote list and restart.
    pub fn replace_quotes(&mut self, quotes: Vec<String>) {
        self.quotes = quotes;
        self.cycle = cycle_duration(&self.quotes, &self.timing);
        self.restart();
    }

    pub fn frame(&self) -> TypewriterFrame {
        TypewriterFrame {
            text: self.displayed().to_string(),
            quote_index: self.index,
            phase: self.phase,
            visible: self.visible,
        }
    }

    fn active_len(&self) -> usize {
        self.active_quote().map(|q| q.chars().count()).unwrap_or(0)
    }

    /// Take the untimed transitions: full text stops typing, empty text
    /// stops erasing and fades out.
    fn settle(&mut self) {
        if self.quotes.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing if self.shown >= self.active_len() => {
                self.phase = Phase::PausedAfterTyping;
            }
            Phase::Erasing if self.shown == 0 => {
                self.phase = Phase::PausedBeforeNext;
                self.visible = false;
            }
            _ => {}
        }
    }
}

/// Sum of every tick delay over one pass of `quotes`, saturating.
pub(crate) fn cycle_duration(quotes: &[String], timing: &TypewriterTiming) -> Duration {
    quotes.iter().fold(Duration::ZERO, |total, quote| {
        let chars = u32::try_from(quote.chars().count()).unwrap_or(u32::MAX);
        total
            .saturating_add(timing.typing_speed.saturating_mul(chars))
            .saturating_add(timing.pause)
            .saturating_add(timing.erase_speed.saturating_mul(chars))
            .saturating_add(timing.erase_pause)
    })
}

/// First `chars` characters of `s`, cut on a char boundary.
fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
