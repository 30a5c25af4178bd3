//! Emoji directory scanning.

use std::{
	fs,
	path::{Path, PathBuf},
};

use log::{debug, warn};

use super::{AnimError, constants::EXTENSION};

/// Scans `dir` for playable files and returns their names, sorted lexicographically.
///
/// Only regular files whose lower-cased name ends in [`EXTENSION`] are kept.
/// An empty result is not an error here; [`AnimationSource::scan`] treats it as one.
///
/// # Errors
///
/// Returns [`AnimError::NotFound`] if `dir` does not exist and
/// [`AnimError::NotADirectory`] if it is not a directory.
pub fn load_list(dir: impl AsRef<Path>) -> Result<Vec<String>, AnimError> {
	let dir = dir.as_ref();
	debug!("Scanning emoji directory {}", dir.display());

	if !dir.exists() {
		return Err(AnimError::NotFound(dir.to_path_buf()));
	}
	if !dir.is_dir() {
		return Err(AnimError::NotADirectory(dir.to_path_buf()));
	}

	let mut names = Vec::new();
	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let Ok(name) = entry.file_name().into_string() else {
			warn!("Skipping non UTF-8 file name {:?}", entry.file_name());
			continue;
		};
		if !is_playable_name(&name) {
			continue;
		}
		if !entry.path().is_file() {
			debug!("Skipping {name}: not a regular file");
			continue;
		}
		names.push(name);
	}

	names.sort();
	debug!("Found {} {EXTENSION} files: {names:?}", names.len());
	Ok(names)
}

fn is_playable_name(name: &str) -> bool {
	name.to_lowercase().ends_with(EXTENSION)
}

/// Immutable description of the animations available to the player.
///
/// Holds the emoji directory and the sorted list of file names found in it.
/// The list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSource {
	dir: PathBuf,
	names: Vec<String>,
}

impl AnimationSource {
	/// Scans `dir` and builds the source list.
	///
	/// # Errors
	///
	/// Everything [`load_list`] returns, plus [`AnimError::NoSources`] when the
	/// directory holds no playable files.
	pub fn scan(dir: impl AsRef<Path>) -> Result<Self, AnimError> {
		let dir = dir.as_ref();
		let names = load_list(dir)?;
		Self::from_names(dir, names)
	}

	/// Builds a source list from already known names; they are sorted here.
	///
	/// # Errors
	///
	/// Returns [`AnimError::NoSources`] if `names` is empty.
	pub fn from_names(dir: impl Into<PathBuf>, mut names: Vec<String>) -> Result<Self, AnimError> {
		let dir = dir.into();
		if names.is_empty() {
			return Err(AnimError::NoSources {
				dir,
				extension: EXTENSION,
			});
		}
		names.sort();
		Ok(Self {
			dir,
			names,
		})
	}

	/// Returns the emoji directory.
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Returns the sorted file names.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Returns the number of sources. Always at least one.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Always `false`; present for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Returns the file name at `index`.
	pub fn name(&self, index: usize) -> Option<&str> {
		self.names.get(index).map(String::as_str)
	}

	/// Returns the full path of the file at `index`.
	pub fn path_of(&self, index: usize) -> Option<PathBuf> {
		self.names.get(index).map(|name| self.dir.join(name))
	}

	/// Returns the index of `name` in the source list.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|n| n == name)
	}

	/// Returns the index that follows `index`, wrapping at the end of the list.
	pub fn next_index(&self, index: usize) -> usize {
		(index + 1) % self.names.len()
	}
}
