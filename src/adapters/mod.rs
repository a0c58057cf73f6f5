//! Adapters turning transfer notifications into bar updates.
//!
//! The transport itself is not part of this crate: a client reports byte
//! counts and these adapters translate them into
//! [`ProgressBar`](crate::ProgressBar) updates. Both learn the bar maximum
//! once, from the first notification, and keep it afterwards.
//!
//! - [`transfer`] - `{loaded, total}` progress events
//! - [`response`] - HTTP response headers plus a stream of body chunks

pub mod response;
pub mod transfer;

pub use response::ResponseProgress;
pub use transfer::{TransferEvent, TransferProgress};
