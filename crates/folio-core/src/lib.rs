#![forbid(unsafe_code)]

//! Core logic for Folio, the client runtime of a paged single-page portfolio.
//!
//! Everything here is host-agnostic and deterministic:
//! - **Host-driven I/O**: the page is reached only through [`host::PagingHost`].
//! - **Host-driven time**: handlers take the current monotonic time as a
//!   [`Duration`](core::time::Duration); nothing reads a clock.
//! - **No threads**: suitable for `wasm32-unknown-unknown`.
//!
//! `folio-web` binds these pieces to the DOM.

pub mod carousel;
pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod paging;
pub mod sim;
pub mod tabs;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};

pub use config::FolioConfig;
pub use error::FolioError;
pub use host::{Axis, PagingHost, ViewMode};
pub use input::NavInput;
pub use paging::{Dispatch, PagingController};
