#![forbid(unsafe_code)]

//! WASM frontend for Folio.
//!
//! Exposes a `wasm-bindgen` API that attaches the `folio-core` paging
//! controller, the project carousel and the skills tabs to the current
//! document:
//! - DOM events are normalized into [`folio_core::NavInput`] and routed
//!   through one dispatch point,
//! - time comes from a monotonic `web-time` clock,
//! - diagnostics go to the browser console through `tracing`.

pub mod logging;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod strip;
#[cfg(target_arch = "wasm32")]
mod tabs;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::FolioWeb;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct FolioWeb;

#[cfg(not(target_arch = "wasm32"))]
impl FolioWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
