#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `emopet` is a frameless, always-on-top desktop companion that plays the
//! animated GIFs found in an `emojis` directory.
//!
//! The library side exposes the headless animation core; the `emopet` binary
//! wraps it in a transparent window.
//!
pub use emopet_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use emopet_dylib;
