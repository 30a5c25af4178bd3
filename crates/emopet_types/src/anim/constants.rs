//! Constants shared by the animation pipeline.

/// Width, in pixels, every decoded frame is resized to
pub const TARGET_WIDTH: u32 = 200;

/// Side length of the square companion window, in logical points
pub const WINDOW_SIZE: f32 = 200.0;

/// Delay used when a file does not declare one, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Lower bound of the frame delay, in milliseconds
pub const MIN_DELAY_MS: u64 = 50;

/// Upper bound of the frame delay, in milliseconds
pub const MAX_DELAY_MS: u64 = 200;

/// File extension of playable sources (compared case-insensitively)
pub const EXTENSION: &str = ".gif";

/// Emoji directory name, relative to the resource root
pub const DEFAULT_EMOJI_DIR: &str = "emojis";

/// Largest RGBA buffer a single resized frame may need, in bytes
pub const MAX_FRAME_BYTES: u64 = 128 * 1024 * 1024;

/// Largest RGBA buffer all resized frames of one animation may need together, in bytes
pub const MAX_ANIMATION_BYTES: u64 = 512 * 1024 * 1024;
