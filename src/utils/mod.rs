//! Shared utility functions.
//!
//! # Overview
//!
//! The utils module currently contains:
//!
//! - [`content_length`] - Content length extraction from HTTP headers
//!
//! # Examples
//!
//! ```rust
//! use reqwest::header::HeaderMap;
//! use rainbar::utils::parse_content_length;
//!
//! // Without the header the total stays unknown.
//! assert_eq!(parse_content_length(&HeaderMap::new()), None);
//! ```

pub mod content_length;

pub use content_length::{content_length_of, parse_content_length};
