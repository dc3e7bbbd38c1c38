//! Debounced query controller: delays raw input until it has been quiet for a while.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{Duration, Instant, sleep_until},
};

/// Quiet period a query must survive before it is emitted as settled.
pub const DEBOUNCE_MS: u64 = 300;

/// What: Turn rapidly changing raw input into a delayed, stable settled value.
///
/// Inputs:
/// - Raw values via [`DebouncedQuery::update`], one per keystroke.
///
/// Output:
/// - Settled values readable through [`DebouncedQuery::current_settled`] or awaited
///   through receivers from [`DebouncedQuery::subscribe`].
///
/// Details:
/// - At most one emission task is pending at any time. Each `update` aborts the
///   previous task before spawning the next (last write wins).
/// - Teardown (explicit or on drop) aborts the pending task and retires its
///   generation, so nothing is emitted after it returns, even on a multi-thread
///   runtime where the task may already be past its sleep.
/// - `update` spawns onto the current tokio runtime and must be called from within one.
#[derive(Debug)]
pub struct DebouncedQuery {
    raw: String,
    delay: Duration,
    settled_tx: Arc<watch::Sender<String>>,
    pending: Option<JoinHandle<()>>,
    /// Bumped on every cancellation; a task only emits while its captured value is current.
    generation: Arc<AtomicU64>,
}

impl DebouncedQuery {
    /// Create a controller with the default 300 ms quiet period.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_delay(initial, Duration::from_millis(DEBOUNCE_MS))
    }

    /// What: Create a controller with a custom quiet period.
    ///
    /// Inputs:
    /// - `initial`: Starting raw value, also the initial settled value
    /// - `delay`: Quiet period before emission
    #[must_use]
    pub fn with_delay(initial: impl Into<String>, delay: Duration) -> Self {
        let initial = initial.into();
        let (settled_tx, _) = watch::channel(initial.clone());
        Self {
            raw: initial,
            delay,
            settled_tx: Arc::new(settled_tx),
            pending: None,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// What: Record a new raw value and (re)schedule its emission.
    ///
    /// Inputs:
    /// - `raw`: Latest input text
    ///
    /// Details:
    /// - Cancels any previously scheduled emission first.
    /// - The deadline is measured from this call, not from when the task first runs.
    pub fn update(&mut self, raw: impl Into<String>) {
        self.cancel_pending();
        self.raw = raw.into();

        let value = self.raw.clone();
        let tx = Arc::clone(&self.settled_tx);
        let generation = Arc::clone(&self.generation);
        let my_gen = generation.load(Ordering::SeqCst);
        let deadline = Instant::now() + self.delay;
        tracing::trace!(raw = %value, delay = ?self.delay, "[Debounce] Scheduled emission");
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            // The generation check runs under the channel lock, which teardown also takes.
            let emitted = tx.send_if_modified(|settled| {
                if generation.load(Ordering::SeqCst) == my_gen {
                    *settled = value;
                    true
                } else {
                    false
                }
            });
            if emitted {
                tracing::debug!(settled = %tx.borrow().as_str(), "[Debounce] Query settled");
            }
        }));
    }

    /// Most recently emitted settled value.
    #[must_use]
    pub fn current_settled(&self) -> String {
        self.settled_tx.borrow().clone()
    }

    /// Last raw value passed to [`DebouncedQuery::update`] (or the initial value).
    #[must_use]
    pub fn current_raw(&self) -> &str {
        &self.raw
    }

    /// What: Obtain a receiver notified on every emission.
    ///
    /// Output:
    /// - A receiver whose current value counts as already seen; `changed()` resolves on
    ///   the next emission and errors once the controller and its pending task are gone.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.settled_tx.subscribe()
    }

    /// What: Wait for the scheduled emission, if any, and return the settled value.
    ///
    /// Output:
    /// - The settled value once nothing is pending; immediate when nothing was scheduled.
    ///
    /// Details:
    /// - Awaits the pending task rather than the channel, so an emission that fired just
    ///   before the call cannot be missed.
    pub async fn settle(&mut self) -> String {
        if let Some(handle) = self.pending.take()
            && let Err(e) = handle.await
        {
            tracing::debug!(error = %e, "[Debounce] Pending emission did not complete");
        }
        self.current_settled()
    }

    /// Whether an emission is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// What: Cancel any outstanding emission.
    ///
    /// Details:
    /// - Safe to call repeatedly and when nothing is pending.
    /// - Once this returns the settled value no longer changes until the next `update`.
    /// - The raw value is kept; the settled value stays at its last emission.
    pub fn teardown(&mut self) {
        if self.cancel_pending() {
            tracing::trace!(raw = %self.raw, "[Debounce] Pending emission cancelled on teardown");
        }
    }

    fn cancel_pending(&mut self) -> bool {
        let Some(handle) = self.pending.take() else {
            return false;
        };
        let was_running = !handle.is_finished();
        self.generation.fetch_add(1, Ordering::SeqCst);
        handle.abort();
        // Taking the channel lock waits out an emission that is already in progress.
        self.settled_tx.send_if_modified(|_| false);
        was_running
    }
}

impl Drop for DebouncedQuery {
    fn drop(&mut self) {
        self.teardown();
    }
}
