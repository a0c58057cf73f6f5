//! Core progress bar implementation with the update/render loop.
//!
//! A [`ProgressBar`] is a cheap, clonable handle over shared state. Clones
//! can be moved into transfer callbacks while the original keeps control of
//! the refresh timer.
//!
//! # Examples
//!
//! ## Event-Driven Redraws
//!
//! ```rust
//! use rainbar::bar::{ProgressBarBuilder, RefreshMethod};
//!
//! # fn example() -> Result<(), rainbar::Error> {
//! let bar = ProgressBarBuilder::hidden("Download", 100)
//!     .refresh_method(RefreshMethod::Event)
//!     .build();
//! bar.update(150)?;
//! assert_eq!(bar.value(), 100);
//! # Ok(())
//! # }
//! ```
//!
//! ## Timer-Driven Redraws
//!
//! ```rust,no_run
//! use rainbar::ProgressBar;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), rainbar::Error> {
//! let bar = ProgressBar::new("Download", 100);
//! bar.start(Duration::from_millis(100))?;
//! for value in 0..=100 {
//!     // Reaching the maximum stops the timer and draws the final frame.
//!     bar.update(value)?;
//!     tokio::time::sleep(Duration::from_millis(20)).await;
//! }
//! # Ok(())
//! # }
//! ```

use super::builder::ProgressBarBuilder;
use super::config::{BarConfig, RefreshMethod};
use crate::adapters::{ResponseProgress, TransferProgress};
use crate::error::{Error, Result};
use crate::output::LineWriter;
use crate::progress::{format_line, percent, LineInput, TrailStyle};

use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

/// Lifecycle of the refresh timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    /// No timer was ever started.
    Idle,
    /// A timer is redrawing the line.
    Running,
    /// The timer was cleared and the final frame drawn.
    Stopped,
}

/// Active refresh timer.
struct Ticker {
    handle: JoinHandle<()>,
    generation: u64,
}

struct BarInner {
    name: String,
    max: Option<u64>,
    value: u64,
    refresh_method: RefreshMethod,
    trail_offset: u64,
    ticker: Option<Ticker>,
    /// Incremented on every start so that stale ticks can tell they were replaced.
    generation: u64,
    stopped: bool,
    style: TrailStyle,
    writer: Box<dyn LineWriter>,
}

impl BarInner {
    fn line(&mut self) -> String {
        let line = format_line(
            &LineInput {
                name: &self.name,
                value: self.value,
                max: self.max,
                columns: self.writer.columns(),
                trail_offset: self.trail_offset,
            },
            &self.style,
        );
        self.trail_offset = self.trail_offset.wrapping_add(1);
        line
    }

    fn render(&mut self) -> io::Result<()> {
        let line = self.line();
        trace!(name = %self.name, value = self.value, "Rendering frame");
        self.writer.move_to_start()?;
        self.writer.write_line(&line)
    }

    fn apply(&mut self, value: u64) -> Result<()> {
        self.value = match self.max {
            Some(max) => value.min(max),
            None => value,
        };

        match self.refresh_method {
            RefreshMethod::Event => self.render()?,
            RefreshMethod::Interval => {
                if self.max == Some(self.value) {
                    debug!(name = %self.name, "Progress reached its maximum");
                    self.stop()?;
                }
            }
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        let Some(ticker) = self.ticker.take() else {
            return Ok(());
        };
        ticker.handle.abort();
        self.stopped = true;
        debug!(name = %self.name, generation = ticker.generation, "Stopping refresh timer");

        self.render()?;
        self.writer.terminate_line()?;
        Ok(())
    }

    fn state(&self) -> BarState {
        match (&self.ticker, self.stopped) {
            (Some(_), _) => BarState::Running,
            (None, true) => BarState::Stopped,
            (None, false) => BarState::Idle,
        }
    }
}

impl Drop for BarInner {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.handle.abort();
        }
    }
}

fn lock(inner: &Mutex<BarInner>) -> MutexGuard<'_, BarInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Draw one timer frame. Returns `false` once the timer should exit.
fn render_tick(bar: &Weak<Mutex<BarInner>>, generation: u64) -> bool {
    let Some(bar) = bar.upgrade() else {
        return false;
    };
    let mut inner = lock(&bar);
    if inner.ticker.as_ref().map(|t| t.generation) != Some(generation) {
        return false;
    }
    if let Err(e) = inner.render() {
        warn!(name = %inner.name, error = %e, "Failed to render progress frame");
    }
    true
}

async fn refresh_loop(bar: Weak<Mutex<BarInner>>, generation: u64, period: Duration) {
    let mut ticks = time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticks.tick().await;
        if !render_tick(&bar, generation) {
            break;
        }
    }
}

/// A single-line animated progress indicator.
///
/// Created with [`ProgressBar::new`] or, for more options, with a
/// [`ProgressBarBuilder`].
#[derive(Clone)]
pub struct ProgressBar {
    inner: Arc<Mutex<BarInner>>,
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ProgressBar")
            .field("name", &inner.name)
            .field("max", &inner.max)
            .field("value", &inner.value)
            .field("refresh_method", &inner.refresh_method)
            .field("trail_offset", &inner.trail_offset)
            .field("state", &inner.state())
            .finish()
    }
}

impl ProgressBar {
    /// Creates a new bar drawing on the standard output.
    pub fn new(name: impl Into<String>, max: u64) -> Self {
        ProgressBarBuilder::new(name, max).build()
    }

    pub(crate) fn with_parts(
        name: String,
        max: u64,
        config: BarConfig,
        writer: Box<dyn LineWriter>,
    ) -> Self {
        let inner = BarInner {
            name,
            max: Some(max),
            value: 0,
            refresh_method: config.refresh_method,
            trail_offset: 0,
            ticker: None,
            generation: 0,
            stopped: false,
            style: config.style,
            writer,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BarInner> {
        lock(&self.inner)
    }

    /// Gets the display label.
    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    /// Gets the target total, `None` when unknown.
    pub fn max(&self) -> Option<u64> {
        self.lock().max
    }

    /// Sets the target total.
    ///
    /// The current value is left untouched; it is clamped on the next update.
    pub fn set_max(&self, max: Option<u64>) {
        self.lock().max = max;
    }

    /// Gets the current progress.
    pub fn value(&self) -> u64 {
        self.lock().value
    }

    /// Gets the completion ratio in `[0, 1]`.
    pub fn percent(&self) -> f64 {
        let inner = self.lock();
        percent(inner.value, inner.max)
    }

    /// Gets what triggers a redraw.
    pub fn refresh_method(&self) -> RefreshMethod {
        self.lock().refresh_method
    }

    /// Sets what triggers a redraw. Takes effect on the next update or tick.
    pub fn set_refresh_method(&self, refresh_method: RefreshMethod) {
        self.lock().refresh_method = refresh_method;
    }

    /// Gets the animation offset, incremented once per rendered line.
    pub fn trail_offset(&self) -> u64 {
        self.lock().trail_offset
    }

    /// Gets the timer state.
    pub fn state(&self) -> BarState {
        self.lock().state()
    }

    /// Gets whether a refresh timer is active.
    pub fn is_running(&self) -> bool {
        self.state() == BarState::Running
    }

    /// Format the current line without drawing it.
    ///
    /// Like a real render, this advances the trail animation by one step.
    pub fn line(&self) -> String {
        self.lock().line()
    }

    /// Sets the progress, clamped to the maximum when it is known.
    ///
    /// In [`RefreshMethod::Event`] mode the line is redrawn right away. In
    /// [`RefreshMethod::Interval`] mode nothing is drawn, but reaching the
    /// maximum stops the timer, which draws the final frame.
    pub fn update(&self, value: u64) -> Result<()> {
        self.lock().apply(value)
    }

    /// Adds `delta` to the progress, with the same effects as [`ProgressBar::update`].
    pub fn advance(&self, delta: u64) -> Result<()> {
        let mut inner = self.lock();
        let value = inner.value.saturating_add(delta);
        inner.apply(value)
    }

    /// Starts redrawing the line every `refresh_interval`.
    ///
    /// A timer that is already running is stopped first, which draws its
    /// final frame. The value and the animation offset are kept.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self, refresh_interval: Duration) -> Result<()> {
        if refresh_interval.is_zero() {
            return Err(Error::InvalidInterval);
        }
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;

        let mut inner = self.lock();
        inner.stop()?;

        inner.generation += 1;
        let generation = inner.generation;
        let handle = runtime.spawn(refresh_loop(
            Arc::downgrade(&self.inner),
            generation,
            refresh_interval,
        ));
        inner.ticker = Some(Ticker { handle, generation });
        inner.stopped = false;
        debug!(
            name = %inner.name,
            generation,
            period_ms = refresh_interval.as_millis() as u64,
            "Started refresh timer"
        );
        Ok(())
    }

    /// Stops the refresh timer, draws the final frame and ends the line.
    ///
    /// Does nothing if no timer is active.
    pub fn stop(&self) -> Result<()> {
        self.lock().stop()
    }

    /// Creates an adapter for `{loaded, total}` transfer progress events.
    pub fn transfer_progress(&self) -> TransferProgress {
        TransferProgress::new(self.clone())
    }

    /// Creates an adapter for HTTP responses and their streamed body.
    pub fn response_progress(&self) -> ResponseProgress {
        ResponseProgress::new(self.clone())
    }
}
