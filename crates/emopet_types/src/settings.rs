//! Layered settings for the companion window.
//!
//! Values are resolved from, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file (`emopet.toml` unless told otherwise)
//! 3. Environment variables prefixed with `EMOPET_`, e.g. `EMOPET_EMOJI_DIR`
//! 4. Command-line overrides
//!
//! # Example
//!
//! ```toml
//! emoji_dir = "/home/me/emojis"
//! frame_width = 160
//! window_size = 160.0
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::anim::{DEFAULT_EMOJI_DIR, TARGET_WIDTH, WINDOW_SIZE};

/// Prefix of the environment variables read by [`Settings::load`]
pub const ENV_PREFIX: &str = "EMOPET";

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The configuration sources could not be read or merged
	#[error(transparent)]
	Config(#[from] config::ConfigError),

	/// Frames cannot be scaled to zero width
	#[error("frame_width must be greater than zero")]
	ZeroFrameWidth,

	/// The window cannot be empty
	#[error("window_size must be a positive number, got {0}")]
	InvalidWindowSize(f32),
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Directory holding the `.gif` files, relative paths are resolved by [`Settings::resolve_emoji_dir`]
	pub emoji_dir: PathBuf,
	/// Width every frame is scaled to, in pixels
	pub frame_width: u32,
	/// Side length of the square window, in logical points
	pub window_size: f32,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			emoji_dir: PathBuf::from(DEFAULT_EMOJI_DIR),
			frame_width: TARGET_WIDTH,
			window_size: WINDOW_SIZE,
		}
	}
}

/// Values given on the command line; `None` leaves the lower layers in charge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
	/// Overrides `emoji_dir`
	pub emoji_dir: Option<PathBuf>,
	/// Overrides `frame_width`
	pub frame_width: Option<u32>,
}

impl Settings {
	/// Loads settings from all layers.
	///
	/// `config_file` may point to a missing file; it is then skipped.
	pub fn load(
		config_file: Option<&Path>,
		overrides: &SettingsOverrides,
	) -> Result<Self, SettingsError> {
		Self::load_with_env(config_file, overrides, environment())
	}

	fn load_with_env(
		config_file: Option<&Path>,
		overrides: &SettingsOverrides,
		env: Environment,
	) -> Result<Self, SettingsError> {
		let defaults = Self::default();
		let mut builder = Config::builder()
			.set_default("emoji_dir", defaults.emoji_dir.to_string_lossy().into_owned())?
			.set_default("frame_width", i64::from(defaults.frame_width))?
			.set_default("window_size", f64::from(defaults.window_size))?;

		if let Some(path) = config_file {
			debug!("Reading settings from {}", path.display());
			builder = builder.add_source(File::from(path).required(false));
		}

		let settings: Self = builder
			.add_source(env)
			.set_override_option(
				"emoji_dir",
				overrides.emoji_dir.as_ref().map(|dir| dir.to_string_lossy().into_owned()),
			)?
			.set_override_option("frame_width", overrides.frame_width.map(i64::from))?
			.build()?
			.try_deserialize()?;

		settings.validate()?;
		debug!("Settings: {settings:?}");
		Ok(settings)
	}

	fn validate(&self) -> Result<(), SettingsError> {
		if self.frame_width == 0 {
			return Err(SettingsError::ZeroFrameWidth);
		}
		if !(self.window_size.is_finite() && self.window_size > 0.0) {
			return Err(SettingsError::InvalidWindowSize(self.window_size));
		}
		Ok(())
	}

	/// Resolves `emoji_dir` against the working directory, then the executable's directory.
	///
	/// The first candidate that exists wins. If none does, the path relative to
	/// the working directory is returned so the error names the expected location.
	pub fn resolve_emoji_dir(&self) -> PathBuf {
		let cwd = std::env::current_dir().ok();
		let exe_dir = std::env::current_exe()
			.ok()
			.and_then(|exe| exe.parent().map(Path::to_path_buf));
		resolve_resource_dir(&self.emoji_dir, cwd.as_deref(), exe_dir.as_deref())
	}
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

fn resolve_resource_dir(dir: &Path, cwd: Option<&Path>, exe_dir: Option<&Path>) -> PathBuf {
	if dir.is_absolute() {
		return dir.to_path_buf();
	}

	let candidates: Vec<PathBuf> = [cwd, exe_dir].into_iter().flatten().map(|base| base.join(dir)).collect();
	if let Some(found) = candidates.iter().find(|path| path.is_dir()) {
		return found.clone();
	}
	candidates.into_iter().next().unwrap_or_else(|| dir.to_path_buf())
}
