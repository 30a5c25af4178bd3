//! Forces dynamic linking of `emopet_internal` when the `dynamic_linking` feature is enabled.

pub use emopet_internal::*;
