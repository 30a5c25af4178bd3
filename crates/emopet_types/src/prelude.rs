//! Prelude module for `emopet_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use emopet_types::prelude::*;
//!
//! let delay = frame_delay(None);
//! assert_eq!(delay.as_millis(), DEFAULT_DELAY_MS as u128);
//! ```

// Animation types
#[doc(inline)]
pub use crate::anim::{
	// Constants
	DEFAULT_DELAY_MS,
	DEFAULT_EMOJI_DIR,
	MAX_ANIMATION_BYTES,
	MAX_DELAY_MS,
	MAX_FRAME_BYTES,
	MIN_DELAY_MS,
	TARGET_WIDTH,
	WINDOW_SIZE,

	// Errors
	AnimError,

	// Source list
	AnimationSource,

	// Decoding
	DecodedAnimation,
	decode,
	decode_reader,
	frame_delay,
	load_list,
	scaled_height,

	// Gestures
	GestureEnd,
	PointerButton,
	PointerGesture,

	// Loading
	LoadAttempt,
	LoadOutcome,
	Loader,

	// Playback
	FrameTimer,
	PlaybackState,
};

// Settings types
#[doc(inline)]
pub use crate::settings::{Settings, SettingsError, SettingsOverrides};

// Re-export the anim module for advanced usage
#[doc(inline)]
pub use crate::anim;
