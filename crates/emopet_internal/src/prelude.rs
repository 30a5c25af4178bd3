//! Prelude module for `emopet_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```no_run
//! use emopet_internal::prelude::*;
//!
//! # fn main() -> Result<(), AnimError> {
//! let mut loader = Loader::new(AnimationSource::scan("emojis")?)?;
//! let mut playback = PlaybackState::new();
//! loader.load_current_blocking(&mut playback, |path| decode(path, TARGET_WIDTH))?;
//!
//! let mut gesture = PointerGesture::new();
//! gesture.press(PointerButton::Primary);
//! if gesture.release() == GestureEnd::Click {
//!     loader.advance_on_click();
//! }
//! # Ok(())
//! # }
//! ```

// Re-export everything from emopet_types::prelude
#[doc(inline)]
pub use emopet_types::prelude::*;

// Re-export the entire emopet_types module for advanced usage
#[doc(inline)]
pub use emopet_types;
