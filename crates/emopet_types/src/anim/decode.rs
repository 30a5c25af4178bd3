//! GIF decoding and frame preparation.

use std::{
	fs::File,
	io::{BufRead, BufReader, Seek},
	path::{Path, PathBuf},
	time::Duration,
};

use image::{
	AnimationDecoder, Frame, ImageDecoder, Limits, RgbaImage,
	codecs::gif::GifDecoder,
	imageops::{self, FilterType},
};
use log::debug;

use super::{
	AnimError,
	constants::{DEFAULT_DELAY_MS, MAX_ANIMATION_BYTES, MAX_DELAY_MS, MAX_FRAME_BYTES, MIN_DELAY_MS},
};

/// A fully decoded animation, ready for display.
///
/// All frames share the same width; heights follow each frame's aspect ratio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAnimation {
	frames: Vec<RgbaImage>,
	delay: Duration,
}

impl DecodedAnimation {
	/// Creates an animation from prepared frames and a delay.
	pub fn new(frames: Vec<RgbaImage>, delay: Duration) -> Self {
		Self {
			frames,
			delay,
		}
	}

	/// Returns the prepared frames.
	pub fn frames(&self) -> &[RgbaImage] {
		&self.frames
	}

	/// Returns the delay applied to every frame.
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Returns the number of frames.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` if there are no frames.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Splits the animation into its frames and delay.
	pub fn into_parts(self) -> (Vec<RgbaImage>, Duration) {
		(self.frames, self.delay)
	}
}

/// Opens the GIF at `path` and prepares every frame for display.
///
/// Each frame is resized with a Lanczos3 filter to `target_width` pixels wide,
/// keeping its aspect ratio (see [`scaled_height`]). The delay is derived from
/// the first frame with [`frame_delay`].
///
/// # Errors
///
/// Returns [`AnimError::Image`] if the file cannot be opened or decoded,
/// [`AnimError::EmptyAnimation`] if it has no frames,
/// [`AnimError::InvalidDimensions`] if a frame cannot be scaled, and
/// [`AnimError::TooLarge`] if the decoded or scaled frames would not fit the
/// memory limits.
pub fn decode(path: impl AsRef<Path>, target_width: u32) -> Result<DecodedAnimation, AnimError> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|e| AnimError::image(path, image::ImageError::IoError(e)))?;
	decode_from(BufReader::new(file), target_width, path)
}

/// Same as [`decode`], reading the GIF from memory or any other seekable reader.
pub fn decode_reader<R: BufRead + Seek>(
	reader: R,
	target_width: u32,
) -> Result<DecodedAnimation, AnimError> {
	decode_from(reader, target_width, Path::new(""))
}

fn decode_from<R: BufRead + Seek>(
	reader: R,
	target_width: u32,
	path: &Path,
) -> Result<DecodedAnimation, AnimError> {
	let mut decoder = GifDecoder::new(reader).map_err(|e| AnimError::image(path, e))?;
	decoder.set_limits(Limits::default()).map_err(|e| AnimError::image(path, e))?;
	let mut raw_frames = Vec::new();
	let mut raw_bytes: u64 = 0;
	for frame in decoder.into_frames() {
		let frame = frame.map_err(|e| AnimError::image(path, e))?;
		let (width, height) = frame.buffer().dimensions();
		raw_bytes = raw_bytes.saturating_add(rgba_bytes(width, height));
		if raw_bytes > MAX_ANIMATION_BYTES {
			return Err(AnimError::TooLarge {
				width,
				height,
				bytes: raw_bytes,
			});
		}
		raw_frames.push(frame);
	}

	let Some(first) = raw_frames.first() else {
		return Err(AnimError::EmptyAnimation(PathBuf::from(path)));
	};
	let delay = frame_delay(declared_delay(first));

	let heights = raw_frames
		.iter()
		.map(|frame| {
			let (width, height) = frame.buffer().dimensions();
			scaled_height(width, height, target_width)
		})
		.collect::<Result<Vec<_>, _>>()?;
	check_frame_budget(target_width, &heights)?;

	let frames = raw_frames
		.into_iter()
		.zip(heights)
		.map(|(frame, height)| resize_to(frame.into_buffer(), target_width, height))
		.collect::<Vec<_>>();

	debug!(
		"Decoded {}: {} frames, {}x{} first frame, {delay:?} delay",
		path.display(),
		frames.len(),
		frames[0].width(),
		frames[0].height()
	);

	Ok(DecodedAnimation {
		frames,
		delay,
	})
}

/// Declared delay of a frame; zero means the file declares none
fn declared_delay(frame: &Frame) -> Option<Duration> {
	let delay = Duration::from(frame.delay());
	(!delay.is_zero()).then_some(delay)
}

/// Computes the uniform frame delay from a declared per-frame delay.
///
/// Falls back to [`DEFAULT_DELAY_MS`] and clamps to
/// [`MIN_DELAY_MS`]..=[`MAX_DELAY_MS`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use emopet_types::anim::frame_delay;
///
/// assert_eq!(frame_delay(None), Duration::from_millis(100));
/// assert_eq!(frame_delay(Some(Duration::from_millis(30))), Duration::from_millis(50));
/// assert_eq!(frame_delay(Some(Duration::from_millis(500))), Duration::from_millis(200));
/// ```
pub fn frame_delay(declared: Option<Duration>) -> Duration {
	declared
		.unwrap_or(Duration::from_millis(DEFAULT_DELAY_MS))
		.clamp(Duration::from_millis(MIN_DELAY_MS), Duration::from_millis(MAX_DELAY_MS))
}

/// Height of a `width`×`height` frame once scaled to `target_width`.
///
/// Computed as `round(height * target_width / width)`, never less than 1.
///
/// # Errors
///
/// Returns [`AnimError::InvalidDimensions`] if any dimension is zero.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> Result<u32, AnimError> {
	if width == 0 || height == 0 || target_width == 0 {
		return Err(AnimError::InvalidDimensions {
			width,
			height,
		});
	}
	let scaled = (f64::from(height) * f64::from(target_width) / f64::from(width)).round();
	Ok((scaled as u32).max(1))
}

/// RGBA bytes of a `width`×`height` frame
fn rgba_bytes(width: u32, height: u32) -> u64 {
	u64::from(width) * u64::from(height) * 4
}

/// Rejects frame sizes whose resized buffers would exceed [`MAX_FRAME_BYTES`]
/// each or [`MAX_ANIMATION_BYTES`] in total.
fn check_frame_budget(target_width: u32, heights: &[u32]) -> Result<(), AnimError> {
	let mut total: u64 = 0;
	for &height in heights {
		let bytes = rgba_bytes(target_width, height);
		total = total.saturating_add(bytes);
		if bytes > MAX_FRAME_BYTES || total > MAX_ANIMATION_BYTES {
			return Err(AnimError::TooLarge {
				width: target_width,
				height,
				bytes: bytes.max(total),
			});
		}
	}
	Ok(())
}

fn resize_to(frame: RgbaImage, target_width: u32, target_height: u32) -> RgbaImage {
	if frame.dimensions() == (target_width, target_height) {
		return frame;
	}
	imageops::resize(&frame, target_width, target_height, FilterType::Lanczos3)
}
