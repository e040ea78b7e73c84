//! Typewriter Quotes Component
//!
//! Hooks a [`TypewriterDriver`] into the component lifecycle:
//! - the driver is created once, on mount
//! - every published frame is copied into a signal and re-rendered
//! - prop changes are forwarded (new timing applies on the next tick,
//!   new quotes restart the cycle)
//! - unmount disposes the driver, cancelling its pending tick

use std::cell::RefCell;
use std::rc::Rc;

use chakshu_core::{Typewriter, TypewriterDriver, TypewriterFrame, TypewriterTiming};
use chakshu_ui::TypewriterLine;
use dioxus::prelude::*;

/// Cycling quote line under the Start button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TypewriterQuotes { quotes: config.quotes(), timing: config.timing() }
/// }
/// ```
#[component]
pub fn TypewriterQuotes(quotes: Vec<String>, timing: TypewriterTiming) -> Element {
    let mut frame: Signal<TypewriterFrame> = use_signal(TypewriterFrame::default);

    let driver = use_hook(|| {
        Rc::new(TypewriterDriver::start(Typewriter::new(
            quotes.clone(),
            timing,
        )))
    });

    // Last props handed to the driver
    let applied = use_hook(|| Rc::new(RefCell::new((quotes.clone(), timing))));
    {
        let mut last = applied.borrow_mut();
        if last.1 != timing {
            tracing::debug!("Typewriter timing changed");
            driver.set_timing(timing);
            last.1 = timing;
        }
        if last.0 != quotes {
            tracing::debug!("Typewriter quotes changed, restarting");
            driver.replace_quotes(quotes.clone());
            last.0 = quotes.clone();
        }
    }

    // Mirror driver frames into the signal
    use_future({
        let driver = driver.clone();
        move || {
            let mut frames = driver.subscribe();
            async move {
                frame.set(frames.borrow_and_update().clone());
                while frames.changed().await.is_ok() {
                    let next = frames.borrow_and_update().clone();
                    frame.set(next);
                }
            }
        }
    });

    use_drop({
        let driver = driver.clone();
        move || driver.dispose()
    });

    rsx! {
        TypewriterLine { frame: frame(), transition: timing.transition_duration }
    }
}
