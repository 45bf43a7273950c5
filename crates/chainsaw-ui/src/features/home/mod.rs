//! Landing page feature slice.
//!
//! # Design
//! - Static copy only; every string comes from the translation bundle.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
