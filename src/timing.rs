//! Debounce, throttle, and scoped interval timers
//!
//! Rate control for scroll and resize handlers. All three utilities lean on
//! the tokio timer, so they must be constructed (and called) inside a tokio
//! runtime; trailing edges and interval ticks run on spawned tasks, leading
//! edges run synchronously inside `call`.
//!
//! There is no external cancel for a pending debounce or trailing throttle
//! run: once scheduled it can only be preempted by a newer incoming call.
//! Intervals are the exception; [`IntervalHandle`] stops the timer when it
//! is dropped or explicitly cancelled, tying the resource to the owning
//! scope.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

type DebouncedFn<A> = Box<dyn FnMut(A) + Send>;

struct DebounceState<A> {
    generation: u64,
    pending: bool,
    latest: Option<A>,
}

/// Coalesces a burst of calls into a single run of the wrapped function.
///
/// Each [`call`](Self::call) restarts the quiet-period clock; the wrapped
/// function runs once with the newest argument after `wait` elapses with no
/// further calls. In immediate mode it instead runs with the first argument
/// of a burst, and the trailing run for that burst is suppressed.
pub struct Debouncer<A> {
    func: Arc<Mutex<DebouncedFn<A>>>,
    state: Arc<Mutex<DebounceState<A>>>,
    wait: Duration,
    immediate: bool,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Trailing-edge debouncer: `func` runs `wait` after the last call of a
    /// burst.
    pub fn new(func: impl FnMut(A) + Send + 'static, wait: Duration) -> Self {
        Self::with_mode(func, wait, false)
    }

    /// Leading-edge debouncer: `func` runs on the first call of a burst and
    /// not again until `wait` has passed without calls.
    pub fn new_immediate(func: impl FnMut(A) + Send + 'static, wait: Duration) -> Self {
        Self::with_mode(func, wait, true)
    }

    fn with_mode(func: impl FnMut(A) + Send + 'static, wait: Duration, immediate: bool) -> Self {
        Self {
            func: Arc::new(Mutex::new(Box::new(func))),
            state: Arc::new(Mutex::new(DebounceState {
                generation: 0,
                pending: false,
                latest: None,
            })),
            wait,
            immediate,
        }
    }

    /// Records `arg` and restarts the quiet-period clock.
    pub fn call(&self, arg: A) {
        let mut leading_arg = None;
        let generation = {
            let mut state = self.state.lock();
            state.generation += 1;
            if self.immediate && !state.pending {
                leading_arg = Some(arg);
                state.latest = None;
            } else {
                state.latest = Some(arg);
            }
            state.pending = true;
            state.generation
        };

        if let Some(arg) = leading_arg {
            tracing::trace!(generation, "debounce leading edge");
            (&mut *self.func.lock())(arg);
        }

        let func = Arc::clone(&self.func);
        let state = Arc::clone(&self.state);
        let wait = self.wait;
        let immediate = self.immediate;
        tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            let trailing_arg = {
                let mut state = state.lock();
                if state.generation != generation {
                    // A newer call restarted the clock.
                    return;
                }
                state.pending = false;
                if immediate { None } else { state.latest.take() }
            };
            if let Some(arg) = trailing_arg {
                tracing::trace!(generation, "debounce trailing edge");
                (&mut *func.lock())(arg);
            }
        });
    }
}

/// Edge selection for [`Throttler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleOptions {
    /// Run on the first call of a window.
    pub leading: bool,
    /// Run once more at the end of a window that saw further calls.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

type ThrottledFn<A, R> = Box<dyn FnMut(A) -> R + Send>;

struct ThrottleState<A, R> {
    window_start: Option<Instant>,
    trailing_generation: u64,
    trailing_pending: bool,
    latest: Option<A>,
    result: Option<R>,
}

enum ThrottleDecision<A> {
    RunNow(A),
    Schedule { remaining: Duration, generation: u64 },
    Coalesce,
}

/// Runs the wrapped function at most once per `wait` window.
///
/// [`call`](Self::call) returns the most recent computed result, which goes
/// stale between actual runs and is `None` until the first one.
pub struct Throttler<A, R> {
    func: Arc<Mutex<ThrottledFn<A, R>>>,
    state: Arc<Mutex<ThrottleState<A, R>>>,
    wait: Duration,
    options: ThrottleOptions,
}

impl<A, R> Throttler<A, R>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    pub fn new(
        func: impl FnMut(A) -> R + Send + 'static,
        wait: Duration,
        options: ThrottleOptions,
    ) -> Self {
        Self {
            func: Arc::new(Mutex::new(Box::new(func))),
            state: Arc::new(Mutex::new(ThrottleState {
                window_start: None,
                trailing_generation: 0,
                trailing_pending: false,
                latest: None,
                result: None,
            })),
            wait,
            options,
        }
    }

    /// Offers `arg` to the wrapped function and returns the latest result.
    ///
    /// Outside an active window (and with `leading` enabled) the function
    /// runs synchronously before this returns. Inside a window the call
    /// either schedules or refreshes the trailing run with `arg`, or is
    /// dropped entirely when `trailing` is disabled.
    pub fn call(&self, arg: A) -> Option<R> {
        let now = Instant::now();
        let decision = {
            let mut state = self.state.lock();
            if state.window_start.is_none() && !self.options.leading {
                // Without a leading edge the first call only opens the window.
                state.window_start = Some(now);
            }
            let remaining = state
                .window_start
                .map_or(Duration::ZERO, |start| self.wait.saturating_sub(now - start));

            if remaining.is_zero() {
                // Preempts any trailing run still scheduled for the old window.
                state.trailing_generation += 1;
                state.trailing_pending = false;
                state.latest = None;
                state.window_start = Some(now);
                ThrottleDecision::RunNow(arg)
            } else if self.options.trailing && !state.trailing_pending {
                state.trailing_generation += 1;
                state.trailing_pending = true;
                state.latest = Some(arg);
                ThrottleDecision::Schedule {
                    remaining,
                    generation: state.trailing_generation,
                }
            } else {
                if state.trailing_pending {
                    state.latest = Some(arg);
                }
                ThrottleDecision::Coalesce
            }
        };

        match decision {
            ThrottleDecision::RunNow(arg) => {
                let result = (&mut *self.func.lock())(arg);
                let mut state = self.state.lock();
                state.result = Some(result);
                state.result.clone()
            }
            ThrottleDecision::Schedule {
                remaining,
                generation,
            } => {
                self.schedule_trailing(remaining, generation);
                self.state.lock().result.clone()
            }
            ThrottleDecision::Coalesce => self.state.lock().result.clone(),
        }
    }

    fn schedule_trailing(&self, remaining: Duration, generation: u64) {
        let func = Arc::clone(&self.func);
        let state = Arc::clone(&self.state);
        let leading = self.options.leading;
        tokio::spawn(async move {
            tokio::time::sleep(remaining).await;
            let trailing_arg = {
                let mut state = state.lock();
                if state.trailing_generation != generation || !state.trailing_pending {
                    return;
                }
                state.trailing_pending = false;
                // With leading disabled the window closes outright, so the
                // very next call runs a fresh trailing cycle.
                state.window_start = if leading { Some(Instant::now()) } else { None };
                state.latest.take()
            };
            if let Some(arg) = trailing_arg {
                tracing::trace!(generation, "throttle trailing edge");
                let result = (&mut *func.lock())(arg);
                state.lock().result = Some(result);
            }
        });
    }
}

/// Owner of a repeating timer; dropping it stops the timer.
#[must_use = "the interval stops when the handle is dropped"]
#[derive(Debug)]
pub struct IntervalHandle {
    task: JoinHandle<()>,
}

impl IntervalHandle {
    /// Stops the timer now instead of at the end of the owning scope.
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::trace!("interval cancelled");
    }
}

/// Starts a repeating timer that runs `callback` every `period`, the first
/// time one full `period` after this call.
///
/// The returned handle owns the timer: bind it to the component scope that
/// wants the ticks and the timer is released on scope exit.
pub fn on_interval(mut callback: impl FnMut() + Send + 'static, period: Duration) -> IntervalHandle {
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; swallow it so the first
        // callback lands a full period out.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            callback();
        }
    });
    IntervalHandle { task }
}
