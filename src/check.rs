//! Headless check of every animation in the emoji directory.

use anyhow::{Result, bail};
use emopet::prelude::*;
use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CheckReport {
	dir: String,
	frame_width: u32,
	total: usize,
	playable: usize,
	files: Vec<FileReport>,
}

#[derive(Debug, Serialize)]
struct FileReport {
	name: String,
	playable: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	frames: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	first_frame: Option<(u32, u32)>,
	#[serde(skip_serializing_if = "Option::is_none")]
	delay_ms: Option<u128>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
}

fn check_file(source: &AnimationSource, index: usize, frame_width: u32) -> Option<FileReport> {
	let name = source.name(index)?.to_string();
	let path = source.path_of(index)?;
	let report = match decode(&path, frame_width) {
		Ok(animation) => FileReport {
			name,
			playable: true,
			frames: Some(animation.len()),
			first_frame: animation.frames().first().map(|f| f.dimensions()),
			delay_ms: Some(animation.delay().as_millis()),
			error: None,
		},
		Err(err) => FileReport {
			name,
			playable: false,
			frames: None,
			first_frame: None,
			delay_ms: None,
			error: Some(err.to_string()),
		},
	};
	Some(report)
}

fn build_report(source: &AnimationSource, frame_width: u32) -> CheckReport {
	let files: Vec<FileReport> =
		(0..source.len()).filter_map(|index| check_file(source, index, frame_width)).collect();
	let playable = files.iter().filter(|f| f.playable).count();

	CheckReport {
		dir: source.dir().display().to_string(),
		frame_width,
		total: files.len(),
		playable,
		files,
	}
}

/// Decodes every source once and prints a report.
///
/// Fails when not a single source can be played.
pub fn run(source: &AnimationSource, frame_width: u32, json: bool) -> Result<()> {
	let report = build_report(source, frame_width);

	if json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		for file in &report.files {
			match (&file.error, file.frames, file.first_frame, file.delay_ms) {
				(None, Some(frames), Some((w, h)), Some(delay)) => {
					info!("✓ {} - {frames} frames, {w}x{h}, {delay} ms", file.name);
				}
				(error, ..) => {
					warn!("✗ {} - {}", file.name, error.as_deref().unwrap_or("unknown error"));
				}
			}
		}
		info!("{} of {} animations playable", report.playable, report.total);
	}

	if report.playable == 0 {
		bail!(AnimError::NoPlayableSource {
			tried: report.total,
		});
	}
	Ok(())
}
