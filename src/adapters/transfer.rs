//! Adapter for `{loaded, total}` transfer progress events.

use crate::bar::ProgressBar;
use crate::error::Result;
use tracing::debug;

/// A progress notification from a transfer client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferEvent {
    /// Bytes transferred so far.
    pub loaded: u64,
    /// Total size of the transfer, when the client knows it.
    pub total: Option<u64>,
}

impl TransferEvent {
    /// Create a new [`TransferEvent`].
    pub fn new(loaded: u64, total: Option<u64>) -> Self {
        Self { loaded, total }
    }
}

/// Feeds transfer progress events into a [`ProgressBar`].
///
/// The first event sets the bar maximum from its `total`; later events never
/// change it, even if they report a different total.
///
/// ```rust
/// use rainbar::adapters::TransferEvent;
/// use rainbar::bar::ProgressBarBuilder;
///
/// # fn example() -> Result<(), rainbar::Error> {
/// let bar = ProgressBarBuilder::hidden("Upload", 0).build();
/// let mut progress = bar.transfer_progress();
///
/// progress.on_progress(TransferEvent::new(10, Some(40)))?;
/// progress.on_progress(TransferEvent::new(20, Some(9000)))?;
/// assert_eq!(bar.max(), Some(40));
/// assert_eq!(bar.value(), 20);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TransferProgress {
    bar: ProgressBar,
    fetched_max: bool,
}

impl TransferProgress {
    /// Create a new [`TransferProgress`] driving `bar`.
    pub fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            fetched_max: false,
        }
    }

    /// Gets whether the maximum was already taken from an event.
    pub fn fetched_max(&self) -> bool {
        self.fetched_max
    }

    /// Get a reference to the driven bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Handle one progress event.
    pub fn on_progress(&mut self, event: TransferEvent) -> Result<()> {
        if !self.fetched_max {
            debug!(total = ?event.total, "Latching transfer total");
            self.bar.set_max(event.total);
            self.fetched_max = true;
        }
        self.bar.update(event.loaded)
    }

    /// Turn the adapter into a plain callback.
    pub fn into_callback(mut self) -> impl FnMut(TransferEvent) -> Result<()> {
        move |event| self.on_progress(event)
    }
}
