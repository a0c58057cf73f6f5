//! Content length extraction utilities.
//!
//! The response adapter learns the total size of a transfer from the
//! `Content-Length` header. Nothing else is consulted: a missing or malformed
//! header leaves the total unknown.

use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use reqwest::Response;

/// Parse the `Content-Length` header of `headers`.
///
/// # Returns
///
/// The content length as an u64, or `None` if the header is missing or is
/// not a decimal number.
///
/// # Example
///
/// ```rust
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
/// use rainbar::utils::parse_content_length;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2048"));
/// assert_eq!(parse_content_length(&headers), Some(2048));
/// ```
pub fn parse_content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

/// Extract the content length announced by a response.
///
/// # Example
///
/// ```rust,no_run
/// use rainbar::utils::content_length_of;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let response = reqwest::get("https://httpbin.org/bytes/1024").await?;
/// let length = content_length_of(&response);
/// # Ok(())
/// # }
/// ```
pub fn content_length_of(response: &Response) -> Option<u64> {
    parse_content_length(response.headers())
}
