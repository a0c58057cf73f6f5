//! Bar module containing the progress bar, its builder and configuration.
//!
//! # Overview
//!
//! - `progress_bar` - The [`ProgressBar`] handle with the update/render loop
//!   and the refresh timer
//! - `builder` - [`ProgressBarBuilder`] for configuring a bar
//! - `config` - [`BarConfig`] and [`RefreshMethod`]
//!
//! # Examples
//!
//! ```rust
//! use rainbar::bar::{BarState, ProgressBarBuilder, RefreshMethod};
//!
//! # fn example() -> Result<(), rainbar::Error> {
//! let bar = ProgressBarBuilder::hidden("Download", 100).build();
//! bar.set_refresh_method(RefreshMethod::Event);
//! bar.update(42)?;
//! assert_eq!(bar.state(), BarState::Idle);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod progress_bar;

pub use builder::ProgressBarBuilder;
pub use config::{BarConfig, RefreshMethod};
pub use progress_bar::{BarState, ProgressBar};
