//! Envregex WASM - JavaScript bindings
//!
//! Exposes the placeholder matcher to a JavaScript host.
//!
//! - [`helpers`] - Host-facing operations over plain Rust values, available
//!   on all targets so they can be unit tested natively.
//! - `bindings` - wasm-bindgen exports, gated behind `target_arch = "wasm32"`.

pub mod error;
pub mod helpers;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use error::{BindingError, BindingResult};
pub use helpers::HostSettings;
