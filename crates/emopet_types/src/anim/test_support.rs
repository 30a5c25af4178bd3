//! GIF fixtures for unit tests.

use std::path::{Path, PathBuf};

use image::{Delay, Frame, Rgba, RgbaImage, codecs::gif::GifEncoder};

/// Encodes a `width`×`height` GIF with `frames` distinct frames of `delay_ms` each
pub(crate) fn gif_bytes(width: u32, height: u32, frames: usize, delay_ms: u32) -> Vec<u8> {
	let mut bytes = Vec::new();
	{
		let mut encoder = GifEncoder::new_with_speed(&mut bytes, 30);
		let frames = (0..frames).map(|i| {
			let shade = (i * 40 % 256) as u8;
			let buffer = RgbaImage::from_fn(width, height, |x, y| {
				Rgba([shade, (x % 256) as u8, (y % 256) as u8, 255])
			});
			Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
		});
		encoder.encode_frames(frames).unwrap();
	}
	bytes
}

/// Writes a GIF made by [`gif_bytes`] to `dir/name` and returns its path
pub(crate) fn write_gif(
	dir: &Path,
	name: &str,
	width: u32,
	height: u32,
	frames: usize,
	delay_ms: u32,
) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, gif_bytes(width, height, frames, delay_ms)).unwrap();
	path
}
