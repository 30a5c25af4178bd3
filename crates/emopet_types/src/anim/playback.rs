//! Frame buffer and frame timer.

use std::time::{Duration, Instant};

use image::RgbaImage;

use super::{DecodedAnimation, constants::DEFAULT_DELAY_MS};

/// Repeating timer that fires once per frame delay.
///
/// The timer does not own a thread or a callback; the event loop polls it.
/// When the loop falls behind, the timer fires once and re-arms one interval
/// from the poll time instead of replaying every missed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTimer {
	interval: Duration,
	next_due: Option<Instant>,
}

impl Default for FrameTimer {
	fn default() -> Self {
		Self {
			interval: Duration::from_millis(DEFAULT_DELAY_MS),
			next_due: None,
		}
	}
}

impl FrameTimer {
	/// Creates a stopped timer.
	pub fn new() -> Self {
		Self::default()
	}

	/// (Re)starts the timer; the first tick is due one `interval` after `now`.
	pub fn start(&mut self, interval: Duration, now: Instant) {
		self.interval = interval;
		self.next_due = Some(now + interval);
	}

	/// Stops the timer.
	pub fn stop(&mut self) {
		self.next_due = None;
	}

	/// Returns `true` while the timer is running.
	pub fn is_active(&self) -> bool {
		self.next_due.is_some()
	}

	/// Returns the tick interval.
	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Returns `true` if a tick is due at `now`, and re-arms the timer.
	pub fn poll(&mut self, now: Instant) -> bool {
		let Some(due) = self.next_due else {
			return false;
		};
		if now < due {
			return false;
		}

		let next = due + self.interval;
		self.next_due = Some(if next > now {
			next
		} else {
			now + self.interval
		});
		true
	}

	/// Time left until the next tick, or `None` when stopped.
	pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
		self.next_due.map(|due| due.saturating_duration_since(now))
	}
}

/// Mutable playback state of the companion window.
///
/// Holds the frame buffer of the currently loaded animation, the index of the
/// next frame to show, the frame that is currently shown, and the frame timer.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
	name: Option<String>,
	frames: Vec<RgbaImage>,
	delay: Duration,
	current: usize,
	displayed: Option<usize>,
	generation: u64,
	timer: FrameTimer,
}

impl PlaybackState {
	/// Creates an empty playback state with a stopped timer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the frame buffer with a freshly decoded animation.
	///
	/// Resets the frame index to zero and restarts the timer at the animation's delay.
	pub fn replace(
		&mut self,
		name: impl Into<String>,
		animation: DecodedAnimation,
		generation: u64,
		now: Instant,
	) {
		let (frames, delay) = animation.into_parts();
		self.name = Some(name.into());
		self.frames = frames;
		self.delay = delay;
		self.current = 0;
		self.displayed = None;
		self.generation = generation;
		self.timer.start(delay, now);
	}

	/// Shows the frame at the current index and advances the index, wrapping at the end.
	///
	/// Returns the index of the frame now shown, or `None` if the buffer is empty.
	pub fn tick(&mut self) -> Option<usize> {
		if self.frames.is_empty() {
			return None;
		}
		let shown = self.current;
		self.displayed = Some(shown);
		self.current = (self.current + 1) % self.frames.len();
		Some(shown)
	}

	/// Ticks if the frame timer is due at `now`. Returns `true` if a tick happened.
	pub fn poll(&mut self, now: Instant) -> bool {
		self.timer.poll(now) && self.tick().is_some()
	}

	/// Time left until the next frame, or `None` when nothing is playing.
	pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
		self.timer.time_until_due(now)
	}

	/// Name of the loaded animation.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// The frame buffer.
	pub fn frames(&self) -> &[RgbaImage] {
		&self.frames
	}

	/// Number of frames in the buffer.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` if no animation is loaded.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Delay between frames of the loaded animation.
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Index of the frame the next tick will show.
	pub fn current_index(&self) -> usize {
		self.current
	}

	/// Index of the frame currently shown, `None` until the first tick after a load.
	pub fn displayed_index(&self) -> Option<usize> {
		self.displayed
	}

	/// The frame currently shown.
	pub fn displayed_frame(&self) -> Option<&RgbaImage> {
		self.displayed.and_then(|i| self.frames.get(i))
	}

	/// Generation of the load that filled the buffer.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// The frame timer.
	pub fn timer(&self) -> &FrameTimer {
		&self.timer
	}
}
