//! Animated emoji support for the `emopet` project.
//!
//! This module covers everything between the emoji directory on disk and the
//! frame that ends up on screen.
//!
//! # Pipeline Overview
//!
//! ```text
//! emojis/*.gif ──scan──▶ AnimationSource ──Loader──▶ LoadAttempt
//!                                                       │
//!                                        decode(path, TARGET_WIDTH)
//!                                                       │
//!                                                       ▼
//!          PlaybackState ◀──complete()── DecodedAnimation { frames, delay }
//!                │
//!          FrameTimer::poll ──▶ tick() ──▶ displayed frame
//! ```
//!
//! ## Source List
//!
//! The source list is the lexicographically sorted set of `.gif` files (the
//! extension check is case-insensitive) found in the emoji directory. It is
//! scanned once and never changes afterwards.
//!
//! ## Frame Preparation
//!
//! Every frame is resized with a Lanczos3 filter so that its width equals
//! [`TARGET_WIDTH`]. The height follows the aspect ratio:
//!
//! ```text
//! height = round(original_height * TARGET_WIDTH / original_width)
//! ```
//!
//! Frames are never cropped or letterboxed, so their heights may differ from
//! the window height. A file whose scaled frames would need more than
//! [`MAX_FRAME_BYTES`] each, or [`MAX_ANIMATION_BYTES`] together, is rejected
//! before any frame is resized.
//!
//! ## Frame Delay
//!
//! One delay is used for the whole animation. It comes from the first frame's
//! declared delay and is clamped:
//!
//! ```text
//! delay = clamp(declared ?? DEFAULT_DELAY_MS, MIN_DELAY_MS, MAX_DELAY_MS)
//! ```
//!
//! ## Loading and Retry
//!
//! Each load request gets a new generation id. A request is worked off one
//! attempt at a time; a failed attempt advances the selection and leaves the
//! request pending for the next event-loop turn. After as many failures as
//! there are sources the request ends with [`AnimError::NoPlayableSource`].
//! Results that arrive for an older generation are dropped.
//!
//! # Usage Examples
//!
//! ## Driving playback headlessly
//!
//! ```no_run
//! use std::time::Instant;
//!
//! use emopet_types::anim::{AnimationSource, Loader, PlaybackState, TARGET_WIDTH, decode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = AnimationSource::scan("emojis")?;
//! let mut loader = Loader::new(source)?;
//! let mut playback = PlaybackState::new();
//!
//! let name = loader.load_current_blocking(&mut playback, |path| decode(path, TARGET_WIDTH))?;
//! println!("{name}: {} frames every {:?}", playback.len(), playback.delay());
//!
//! if playback.poll(Instant::now()) {
//!     println!("showing frame {:?}", playback.displayed_index());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Working off a request from an event loop
//!
//! ```no_run
//! use std::time::Instant;
//!
//! use emopet_types::anim::{AnimationSource, LoadOutcome, Loader, PlaybackState, decode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut loader = Loader::new(AnimationSource::scan("emojis")?)?;
//! let mut playback = PlaybackState::new();
//!
//! loader.request_current();
//!
//! // once per event-loop turn
//! if let Some(attempt) = loader.next_attempt() {
//!     let result = decode(&attempt.path, 200);
//!     match loader.complete(attempt, result, &mut playback, Instant::now()) {
//!         LoadOutcome::Loaded { name, .. } => println!("now playing {name}"),
//!         LoadOutcome::Retrying { failed } => println!("{failed} failed, trying the next one"),
//!         LoadOutcome::Exhausted(err) => eprintln!("{err}"),
//!         LoadOutcome::Stale => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod decode;
mod error;
mod gesture;
mod loader;
mod playback;
mod source;

pub mod constants;

pub use self::constants::{
	DEFAULT_DELAY_MS, DEFAULT_EMOJI_DIR, EXTENSION, MAX_ANIMATION_BYTES, MAX_DELAY_MS,
	MAX_FRAME_BYTES, MIN_DELAY_MS, TARGET_WIDTH, WINDOW_SIZE,
};
pub use self::decode::{DecodedAnimation, decode, decode_reader, frame_delay, scaled_height};
pub use self::error::AnimError;
pub use self::gesture::{GestureEnd, PointerButton, PointerGesture};
pub use self::loader::{LoadAttempt, LoadOutcome, Loader};
pub use self::playback::{FrameTimer, PlaybackState};
pub use self::source::{AnimationSource, load_list};

#[cfg(test)]
pub(crate) mod test_support;
