//! `emopet` desktop companion.
//!
//! Opens a transparent, frameless, always-on-top window that plays the GIFs
//! found in the emoji directory. Left-click cycles to the next animation,
//! dragging moves the window, right-click opens the menu.
//!
//! With `--check` no window is opened; every animation is decoded once and a
//! report is printed instead.

mod app;
mod check;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use emopet::prelude::*;
use log::info;

#[derive(Parser)]
#[command(name = "emopet")]
#[command(author = "emopet project")]
#[command(version)]
#[command(about = "A frameless desktop companion that plays animated GIFs", long_about = None)]
struct Cli {
	/// Directory containing the .gif files
	#[arg(short = 'd', long, value_name = "DIR")]
	dir: Option<PathBuf>,

	/// Settings file, skipped when missing
	#[arg(short, long, value_name = "FILE", default_value = "emopet.toml")]
	config: PathBuf,

	/// Width frames are scaled to, in pixels
	#[arg(short, long, value_name = "PX")]
	width: Option<u32>,

	/// Decode every animation once and report instead of opening the window
	#[arg(long, default_value_t = false)]
	check: bool,

	/// Print the check report as JSON
	#[arg(long, default_value_t = false, requires = "check")]
	json: bool,
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let overrides = SettingsOverrides {
		emoji_dir: cli.dir,
		frame_width: cli.width,
	};
	let settings = Settings::load(Some(cli.config.as_path()), &overrides).context("Failed to load settings")?;

	let emoji_dir = settings.resolve_emoji_dir();
	info!("Emoji directory: {}", emoji_dir.display());

	let source = AnimationSource::scan(&emoji_dir)
		.with_context(|| format!("Cannot use emoji directory {}", emoji_dir.display()))?;
	info!("Found {} animations", source.len());

	if cli.check {
		return check::run(&source, settings.frame_width, cli.json);
	}

	app::run(source, &settings)
}
