//! This module is separated into its own crate to enable simple dynamic linking for `emopet`, and should not be used directly.

/// `use emopet::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export emopet_types for convenience
pub use emopet_types;

// Re-export commonly used types at crate root
pub use emopet_types::anim::{AnimError, AnimationSource, Loader, PlaybackState};
pub use emopet_types::settings::Settings;
