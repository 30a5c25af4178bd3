//! Error types for the animation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning, decoding, or loading animations
#[derive(Debug, Error)]
pub enum AnimError {
	/// The emoji directory does not exist
	#[error("Emoji directory not found: {}", .0.display())]
	NotFound(PathBuf),

	/// The emoji path exists but is not a directory
	#[error("{} is not a directory", .0.display())]
	NotADirectory(PathBuf),

	/// The emoji directory contains no playable files
	#[error("No {extension} files found in {}", .dir.display())]
	NoSources {
		/// Directory that was scanned
		dir: PathBuf,
		/// Extension that was looked for
		extension: &'static str,
	},

	/// The image could not be decoded
	#[error("Failed to decode {}: {source}", .path.display())]
	Image {
		/// File being decoded, empty when decoding from a reader
		path: PathBuf,
		/// Underlying decoder error
		#[source]
		source: image::ImageError,
	},

	/// The animation contains no frames
	#[error("Animation {} has no frames", .0.display())]
	EmptyAnimation(PathBuf),

	/// A frame has a zero dimension and cannot be scaled
	#[error("Invalid frame dimensions {width}x{height}")]
	InvalidDimensions {
		/// Frame width in pixels
		width: u32,
		/// Frame height in pixels
		height: u32,
	},

	/// Decoded or resized frames would need more memory than allowed
	#[error("Frames of {width}x{height} would need {bytes} bytes")]
	TooLarge {
		/// Width of the offending frame in pixels
		width: u32,
		/// Height of the offending frame in pixels
		height: u32,
		/// RGBA bytes the frame, or all frames together, would need
		bytes: u64,
	},

	/// Every source failed to decode for one load request
	#[error("No playable source: all {tried} files failed to decode")]
	NoPlayableSource {
		/// Number of sources that were tried
		tried: usize,
	},

	/// A source name that is not part of the source list
	#[error("Unknown source: {0}")]
	UnknownSource(String),

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl AnimError {
	/// Wraps an `image` error with the path it came from
	pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
		Self::Image {
			path: path.into(),
			source,
		}
	}
}
