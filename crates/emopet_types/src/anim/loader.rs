//! Round-robin animation loading with bounded retry.

use std::{
	path::{Path, PathBuf},
	time::Instant,
};

use log::{error, info, warn};

use super::{AnimError, AnimationSource, DecodedAnimation, PlaybackState};

/// A single decode attempt handed out by [`Loader::next_attempt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAttempt {
	/// Generation of the request this attempt belongs to
	pub generation: u64,
	/// Index of the source being tried
	pub index: usize,
	/// File name of the source being tried
	pub name: String,
	/// Full path of the source being tried
	pub path: PathBuf,
}

/// Result of feeding an attempt back into [`Loader::complete`].
#[derive(Debug)]
pub enum LoadOutcome {
	/// The animation was decoded and now fills the playback state
	Loaded {
		/// File name of the loaded source
		name: String,
		/// Index of the loaded source
		index: usize,
	},
	/// The attempt failed; the request stays pending with the next source
	Retrying {
		/// File name of the source that failed
		failed: String,
	},
	/// Every source failed; the request is finished
	Exhausted(AnimError),
	/// The attempt belongs to a superseded request and was ignored
	Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingLoad {
	generation: u64,
	failures: usize,
}

/// Selects which animation to load next and tracks in-flight load requests.
///
/// A request is started with [`request_current`](Self::request_current),
/// [`select_by_name`](Self::select_by_name) or
/// [`advance_on_click`](Self::advance_on_click). It is then worked off one
/// attempt at a time: [`next_attempt`](Self::next_attempt) says which file to
/// decode, [`complete`](Self::complete) takes the result. Every attempt,
/// successful or not, moves the selection one step forward, and a request
/// gives up after one failure per source.
#[derive(Debug, Clone)]
pub struct Loader {
	source: AnimationSource,
	selection: usize,
	generation: u64,
	pending: Option<PendingLoad>,
}

impl Loader {
	/// Creates a loader positioned on the first source.
	///
	/// # Errors
	///
	/// Returns [`AnimError::NoSources`] if the source list is empty.
	pub fn new(source: AnimationSource) -> Result<Self, AnimError> {
		if source.is_empty() {
			return Err(AnimError::NoSources {
				dir: source.dir().to_path_buf(),
				extension: super::EXTENSION,
			});
		}
		Ok(Self {
			source,
			selection: 0,
			generation: 0,
			pending: None,
		})
	}

	/// The source list.
	pub fn source(&self) -> &AnimationSource {
		&self.source
	}

	/// Index of the source the next attempt will try.
	pub fn selection(&self) -> usize {
		self.selection
	}

	/// Generation of the most recent request.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Returns `true` while a request has attempts left.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Starts loading the currently selected source, superseding any pending request.
	///
	/// Returns the generation of the new request.
	pub fn request_current(&mut self) -> u64 {
		self.generation += 1;
		self.pending = Some(PendingLoad {
			generation: self.generation,
			failures: 0,
		});
		self.generation
	}

	/// Selects `name` and starts loading it.
	///
	/// # Errors
	///
	/// Returns [`AnimError::UnknownSource`] if `name` is not in the source list;
	/// the selection and any pending request are left untouched.
	pub fn select_by_name(&mut self, name: &str) -> Result<u64, AnimError> {
		let Some(index) = self.source.position(name) else {
			return Err(AnimError::UnknownSource(name.to_string()));
		};
		self.selection = index;
		Ok(self.request_current())
	}

	/// Handles a primary click that was not a drag: loads the selected source,
	/// which is the one after the animation currently playing.
	pub fn advance_on_click(&mut self) -> u64 {
		self.request_current()
	}

	/// Returns the next decode attempt of the pending request, if any.
	pub fn next_attempt(&self) -> Option<LoadAttempt> {
		let pending = self.pending?;
		let name = self.source.name(self.selection)?.to_string();
		Some(LoadAttempt {
			generation: pending.generation,
			index: self.selection,
			path: self.source.dir().join(&name),
			name,
		})
	}

	/// Feeds the result of `attempt` back into the loader.
	///
	/// On success the playback state is replaced and its timer restarted at
	/// `now`. Either way the selection moves to the source after the one that
	/// was tried. Attempts of a superseded request change nothing.
	pub fn complete(
		&mut self,
		attempt: LoadAttempt,
		result: Result<DecodedAnimation, AnimError>,
		playback: &mut PlaybackState,
		now: Instant,
	) -> LoadOutcome {
		let Some(mut pending) = self.pending.filter(|p| p.generation == attempt.generation) else {
			return LoadOutcome::Stale;
		};

		self.selection = self.source.next_index(attempt.index);

		match result {
			Ok(animation) => {
				info!(
					"Loaded {} ({} frames, {:?} delay)",
					attempt.name,
					animation.len(),
					animation.delay()
				);
				playback.replace(attempt.name.as_str(), animation, attempt.generation, now);
				self.pending = None;
				LoadOutcome::Loaded {
					name: attempt.name,
					index: attempt.index,
				}
			}
			Err(err) => {
				pending.failures += 1;
				if pending.failures >= self.source.len() {
					self.pending = None;
					let err = AnimError::NoPlayableSource {
						tried: pending.failures,
					};
					error!("{err}");
					LoadOutcome::Exhausted(err)
				} else {
					warn!("Failed to load {}, trying the next one: {err}", attempt.name);
					self.pending = Some(pending);
					LoadOutcome::Retrying {
						failed: attempt.name,
					}
				}
			}
		}
	}

	/// Starts a request for the current selection and works it off to completion.
	///
	/// Returns the name of the loaded source.
	///
	/// # Errors
	///
	/// Returns [`AnimError::NoPlayableSource`] once every source has failed.
	pub fn load_current_blocking<F>(
		&mut self,
		playback: &mut PlaybackState,
		mut decode: F,
	) -> Result<String, AnimError>
	where
		F: FnMut(&Path) -> Result<DecodedAnimation, AnimError>,
	{
		self.request_current();
		while let Some(attempt) = self.next_attempt() {
			let result = decode(&attempt.path);
			match self.complete(attempt, result, playback, Instant::now()) {
				LoadOutcome::Loaded { name, .. } => return Ok(name),
				LoadOutcome::Exhausted(err) => return Err(err),
				LoadOutcome::Retrying { .. } | LoadOutcome::Stale => {}
			}
		}
		Err(AnimError::NoPlayableSource {
			tried: 0,
		})
	}
}
