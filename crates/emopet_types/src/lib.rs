//! This crate provides the animation core of the `emopet` desktop companion.
//!
//! Everything that does not need a display surface lives here, so it can be
//! driven and tested headlessly:
//!
//! - **Source list**: scanning the emoji directory for `.gif` files
//! - **Decoding**: turning a GIF into width-normalised RGBA frames and one uniform delay
//! - **Playback**: the frame buffer, the frame index, and the frame timer
//! - **Loading**: round-robin selection with bounded retry and load generations
//! - **Gestures**: telling a click apart from a drag
//! - **Settings**: layered configuration and resource directory resolution
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use emopet_types::prelude::*;
//!
//! # fn main() -> Result<(), AnimError> {
//! let source = AnimationSource::scan("emojis")?;
//! let mut loader = Loader::new(source)?;
//! let mut playback = PlaybackState::new();
//!
//! loader.load_current_blocking(&mut playback, |path| decode(path, TARGET_WIDTH))?;
//! playback.tick();
//! # Ok(())
//! # }
//! ```

pub mod anim;
pub mod settings;

/// `use emopet_types::prelude::*;` to import commonly used items.
pub mod prelude;
