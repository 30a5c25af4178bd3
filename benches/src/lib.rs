//! Benchmark helper utilities for emopet
//!
//! This module provides utilities for generating synthetic GIF data for the
//! benchmark suite, so no real emoji files are needed.

use image::{Delay, Frame, Rgba, RgbaImage, codecs::gif::GifEncoder};

/// Generates an animated GIF with the specified dimensions and frame count
///
/// Every frame gets a different gradient so the encoder cannot collapse them,
/// which keeps the decoder and the resampler busy with realistic data.
pub fn generate_test_gif(width: u32, height: u32, frames: usize, delay_ms: u32) -> Vec<u8> {
	let mut data = Vec::new();
	{
		let mut encoder = GifEncoder::new_with_speed(&mut data, 30);
		let frames = (0..frames).map(|i| {
			let offset = (i * 17) as u32;
			let buffer = RgbaImage::from_fn(width, height, |x, y| {
				let r = ((x + offset) % 256) as u8;
				let g = ((y + offset) % 256) as u8;
				let b = ((x + y) % 256) as u8;
				// transparent corner, like most emoji GIFs
				let a = if x < width / 8 && y < height / 8 { 0 } else { 255 };
				Rgba([r, g, b, a])
			});
			Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
		});
		encoder
			.encode_frames(frames)
			.expect("encoding into memory cannot fail");
	}
	data
}
