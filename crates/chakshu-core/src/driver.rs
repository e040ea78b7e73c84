//! Timer-owning typewriter driver.
//!
//! [`TypewriterDriver`] wraps a [`Typewriter`] together with the one
//! single-shot timer that is allowed to be pending for it. Every firing
//! ticks the machine, publishes a [`TypewriterFrame`] on a watch channel and
//! arms the next timer. Arming always cancels whatever was pending first.
//!
//! ## Usage
//!
//! ```ignore
//! let driver = TypewriterDriver::start(Typewriter::new(quotes, timing));
//! let mut frames = driver.subscribe();
//! while frames.changed().await.is_ok() {
//!     render(&frames.borrow_and_update());
//! }
//! // Dropping the driver (or calling dispose) cancels the pending tick.
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::typewriter::{Typewriter, TypewriterFrame, TypewriterTiming};

struct Shared {
    /// Machine plus the disposed flag; both change under the same lock so
    /// nothing mutates after `dispose` returns.
    machine: Mutex<MachineSlot>,
    pending: Mutex<PendingTick>,
    frames: watch::Sender<TypewriterFrame>,
}

/// The armed timer. `generation` bumps on every arm so a timer that was
/// already running when it got replaced can tell it is stale.
#[derive(Default)]
struct PendingTick {
    generation: u64,
    handle: Option<AbortHandle>,
}

struct MachineSlot {
    typewriter: Typewriter,
    disposed: bool,
}

/// Drives a [`Typewriter`] on tokio timers.
///
/// Must be created inside a tokio runtime.
pub struct TypewriterDriver {
    shared: Arc<Shared>,
}

impl TypewriterDriver {
    /// Publish the initial frame and arm the first tick.
    pub fn start(typewriter: Typewriter) -> Self {
        let (frames, _) = watch::channel(typewriter.frame());
        tracing::debug!(
            quotes = typewriter.quotes().len(),
            "Starting typewriter driver"
        );

        let shared = Arc::new(Shared {
            machine: Mutex::new(MachineSlot {
                typewriter,
                disposed: false,
            }),
            pending: Mutex::new(PendingTick::default()),
            frames,
        });
        arm(&shared);

        Self { shared }
    }

    /// Receive every published frame. The receiver starts at the latest one.
    pub fn subscribe(&self) -> watch::Receiver<TypewriterFrame> {
        self.shared.frames.subscribe()
    }

    pub fn frame(&self) -> TypewriterFrame {
        self.shared.frames.borrow().clone()
    }

    /// Whether a tick is currently scheduled.
    pub fn has_pending_tick(&self) -> bool {
        self.shared
            .pending
            .lock()
            .handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.machine.lock().disposed
    }

    /// Change the cadence. The pending tick is re-armed with the delay the
    /// new timing gives for the current phase.
    pub fn set_timing(&self, timing: TypewriterTiming) {
        if !self.update(|tw| tw.set_timing(timing)) {
            return;
        }
        arm(&self.shared);
    }

    /// Restart at the first quote with empty text.
    pub fn restart(&self) {
        if !self.update(Typewriter::restart) {
            return;
        }
        self.publish();
        arm(&self.shared);
    }

    /// Swap the quote list and restart.
    pub fn replace_quotes(&self, quotes: Vec<String>) {
        if !self.update(|tw| tw.replace_quotes(quotes)) {
            return;
        }
        self.publish();
        arm(&self.shared);
    }

    /// Cancel the pending tick. Nothing is mutated or published afterwards.
    pub fn dispose(&self) {
        {
            let mut slot = self.shared.machine.lock();
            if slot.disposed {
                return;
            }
            slot.disposed = true;
        }
        if let Some(handle) = self.shared.pending.lock().handle.take() {
            handle.abort();
        }
        tracing::debug!("Typewriter driver disposed");
    }

    /// Returns false if the driver was already disposed.
    fn update(&self, f: impl FnOnce(&mut Typewriter)) -> bool {
        let mut slot = self.shared.machine.lock();
        if slot.disposed {
            return false;
        }
        f(&mut slot.typewriter);
        true
    }

    fn publish(&self) {
        let slot = self.shared.machine.lock();
        if !slot.disposed {
            self.shared.frames.send_replace(slot.typewriter.frame());
        }
    }
}

impl Drop for TypewriterDriver {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Cancel any pending tick and schedule the next one, if the machine wants one.
fn arm(shared: &Arc<Shared>) {
    let mut pending = shared.pending.lock();
    if let Some(handle) = pending.handle.take() {
        handle.abort();
    }
    pending.generation = pending.generation.wrapping_add(1);

    let delay = {
        let slot = shared.machine.lock();
        if slot.disposed {
            return;
        }
        match slot.typewriter.next_delay() {
            Some(delay) => delay,
            None => return,
        }
    };

    let generation = pending.generation;
    let weak = Arc::downgrade(shared);
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        fire(weak, generation);
    });
    pending.handle = Some(task.abort_handle());
}

fn fire(weak: Weak<Shared>, generation: u64) {
    let Some(shared) = weak.upgrade() else {
        return;
    };

    {
        let mut pending = shared.pending.lock();
        if pending.generation != generation {
            return;
        }
        // This task's own handle; forget it rather than abort it.
        pending.handle = None;

        let mut slot = shared.machine.lock();
        if slot.disposed {
            return;
        }
        slot.typewriter.tick();
        shared.frames.send_replace(slot.typewriter.frame());
    }

    arm(&shared);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn machine(list: &[&str]) -> Typewriter {
        Typewriter::new(
            list.iter().map(|q| q.to_string()).collect(),
            TypewriterTiming::uniform(Duration::from_millis(10)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn arms_first_tick_on_start() {
        let driver = TypewriterDriver::start(machine(&["AB"]));
        assert!(driver.has_pending_tick());
        assert_eq!(driver.frame().text, "");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_list_never_arms() {
        let driver = TypewriterDriver::start(machine(&[]));
        assert!(!driver.has_pending_tick());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(driver.frame().text, "");
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_is_idempotent() {
        let driver = TypewriterDriver::start(machine(&["AB"]));
        driver.dispose();
        driver.dispose();
        assert!(driver.is_disposed());
        assert!(!driver.has_pending_tick());
    }
}
