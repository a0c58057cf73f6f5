//! Adapter for HTTP responses and their streamed body.
//!
//! The total comes from the `Content-Length` header of the first response
//! seen. Progress then accumulates by the size of every body chunk that goes
//! through the observed stream. The stream itself is passed through
//! untouched: chunks are neither delayed nor reordered.

use crate::bar::ProgressBar;
use crate::error::Result;
use crate::utils::content_length::parse_content_length;

use futures::stream::{Stream, StreamExt};
use reqwest::header::HeaderMap;
use reqwest::Response;
use tracing::{debug, warn};

/// Feeds an HTTP response into a [`ProgressBar`].
///
/// ```rust
/// use futures::stream::{self, StreamExt};
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
/// use rainbar::bar::ProgressBarBuilder;
///
/// # async fn example() {
/// let bar = ProgressBarBuilder::hidden("Download", 0).build();
/// let mut progress = bar.response_progress();
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("200"));
/// let body = stream::iter(vec![Ok::<_, std::io::Error>(vec![0u8; 80]), Ok(vec![0u8; 120])]);
///
/// let chunks: Vec<_> = progress.observe(&headers, body).collect().await;
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(bar.value(), 200);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResponseProgress {
    bar: ProgressBar,
    fetched_max: bool,
}

impl ResponseProgress {
    /// Create a new [`ResponseProgress`] driving `bar`.
    pub fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            fetched_max: false,
        }
    }

    /// Gets whether the maximum was already taken from a response.
    pub fn fetched_max(&self) -> bool {
        self.fetched_max
    }

    /// Get a reference to the driven bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Set the bar maximum from `Content-Length`, on the first call only.
    ///
    /// A missing or malformed header leaves the total unknown, and the bar
    /// then stays at 0%.
    pub fn latch_headers(&mut self, headers: &HeaderMap) {
        if self.fetched_max {
            return;
        }
        let max = parse_content_length(headers);
        if max.is_none() {
            debug!("Response has no usable Content-Length, total is unknown");
        } else {
            debug!(total = ?max, "Latching response total");
        }
        self.bar.set_max(max);
        self.fetched_max = true;
    }

    /// Account for a body chunk of `len` bytes.
    pub fn on_chunk(&self, len: usize) -> Result<()> {
        self.bar.advance(len as u64)
    }

    /// Latch the total from `headers` and track every chunk of `chunks`.
    ///
    /// Errors from the body are passed through. Drawing failures are logged
    /// and do not interrupt the stream.
    pub fn observe<S, B, E>(
        &mut self,
        headers: &HeaderMap,
        chunks: S,
    ) -> impl Stream<Item = std::result::Result<B, E>>
    where
        S: Stream<Item = std::result::Result<B, E>>,
        B: AsRef<[u8]>,
    {
        self.latch_headers(headers);
        let progress = self.clone();
        chunks.inspect(move |item| {
            if let Ok(chunk) = item {
                if let Err(e) = progress.on_chunk(chunk.as_ref().len()) {
                    warn!(error = %e, "Failed to render progress frame");
                }
            }
        })
    }

    /// Track a [`reqwest`] response body.
    ///
    /// ```rust,no_run
    /// use futures::StreamExt;
    /// use rainbar::bar::{ProgressBarBuilder, RefreshMethod};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let bar = ProgressBarBuilder::new("bytes", 0)
    ///     .refresh_method(RefreshMethod::Event)
    ///     .build();
    /// let response = reqwest::get("https://httpbin.org/bytes/4096").await?;
    /// let mut body = std::pin::pin!(bar.response_progress().observe_response(response));
    /// while let Some(chunk) = body.next().await {
    ///     let _bytes = chunk?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn observe_response(
        &mut self,
        response: Response,
    ) -> impl Stream<Item = reqwest::Result<impl AsRef<[u8]>>> {
        let headers = response.headers().clone();
        self.observe(&headers, response.bytes_stream())
    }
}
