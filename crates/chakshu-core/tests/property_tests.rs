//! Property-based tests for the Typewriter state machine.

use std::time::Duration;

use chakshu_core::{Phase, Typewriter, TypewriterTiming};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Non-empty quote lists, including empty and multi-byte quotes
fn quotes_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z .’–]{0,12}", 1..6)
}

fn timing_strategy() -> impl Strategy<Value = TypewriterTiming> {
    (1u64..1000, 0u64..2000, 1u64..1000, 0u64..2000, 0u64..1000).prop_map(
        |(typing, pause, erase, erase_pause, transition)| TypewriterTiming {
            typing_speed: Duration::from_millis(typing),
            pause: Duration::from_millis(pause),
            erase_speed: Duration::from_millis(erase),
            erase_pause: Duration::from_millis(erase_pause),
            transition_duration: Duration::from_millis(transition),
        },
    )
}

/// Ticks needed to go from the start of one quote to the start of the next
fn ticks_per_quote(quote: &str) -> usize {
    2 * quote.chars().count() + 2
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Quotes are visited in order and the sequence wraps around
    #[test]
    fn visits_every_quote_cyclically(quotes in quotes_strategy(), timing in timing_strategy()) {
        let mut tw = Typewriter::new(quotes.clone(), timing);
        let rounds: usize = quotes.iter().map(|q| ticks_per_quote(q)).sum();

        let mut visited = vec![tw.quote_index()];
        for _ in 0..rounds * 2 {
            let leaving_pause = tw.phase() == Phase::PausedBeforeNext;
            tw.tick();
            if leaving_pause {
                visited.push(tw.quote_index());
            }
        }

        let n = quotes.len();
        let expected: Vec<usize> = (0..=2 * n).map(|i| i % n).collect();
        prop_assert_eq!(visited, expected);
    }

    /// Displayed text is always a prefix of the active quote
    #[test]
    fn displayed_is_prefix_of_active_quote(quotes in quotes_strategy(), ticks in 0usize..200) {
        let mut tw = Typewriter::new(quotes.clone(), TypewriterTiming::default());
        for _ in 0..ticks {
            tw.tick();
            let active = &quotes[tw.quote_index()];
            prop_assert!(active.starts_with(tw.displayed()));
        }
    }

    /// Advancing zero ticks leaves the machine unchanged
    #[test]
    fn zero_ticks_is_identity(quotes in quotes_strategy(), ticks in 0usize..100) {
        let mut tw = Typewriter::new(quotes, TypewriterTiming::default());
        tw.advance(ticks);
        let before = tw.frame();
        tw.advance(0);
        prop_assert_eq!(tw.frame(), before);
    }

    /// Text only hides while paused between quotes
    #[test]
    fn hidden_only_between_quotes(quotes in quotes_strategy(), ticks in 0usize..200) {
        let mut tw = Typewriter::new(quotes, TypewriterTiming::default());
        for _ in 0..ticks {
            tw.tick();
            prop_assert_eq!(tw.is_visible(), tw.phase() != Phase::PausedBeforeNext);
        }
    }

    /// The pending delay always comes from the timing of the current phase
    #[test]
    fn delay_comes_from_phase(quotes in quotes_strategy(), timing in timing_strategy(), ticks in 0usize..100) {
        let mut tw = Typewriter::new(quotes, timing);
        tw.advance(ticks);
        let expected = match tw.phase() {
            Phase::Typing => timing.typing_speed,
            Phase::PausedAfterTyping => timing.pause,
            Phase::Erasing => timing.erase_speed,
            Phase::PausedBeforeNext => timing.erase_pause,
        };
        if tw.cycle_duration().is_zero() {
            prop_assert_eq!(tw.next_delay(), None);
        } else {
            prop_assert_eq!(tw.next_delay(), Some(expected));
        }
    }

    /// A cycle that takes no time never schedules a timer
    #[test]
    fn zero_cycle_means_no_delay(len in 1usize..6, ticks in 0usize..50) {
        let timing = TypewriterTiming {
            pause: Duration::ZERO,
            erase_pause: Duration::ZERO,
            ..TypewriterTiming::uniform(Duration::from_millis(5))
        };
        let mut tw = Typewriter::new(vec![String::new(); len], timing);
        tw.advance(ticks);
        prop_assert_eq!(tw.next_delay(), None);
    }
}
