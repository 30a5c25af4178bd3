//! Scanning, loading and playing animations from a real directory

use std::time::{Duration, Instant};

use emopet::prelude::*;

use crate::fixtures::{write_corrupt, write_gif};

fn decoder(width: u32) -> impl FnMut(&std::path::Path) -> Result<DecodedAnimation, AnimError> {
	move |path| decode(path, width)
}

#[test]
fn test_loads_cycle_through_sources() {
	let tmp = tempfile::tempdir().unwrap();
	write_gif(tmp.path(), "b.gif", 80, 40, 3, 120);
	write_gif(tmp.path(), "a.gif", 40, 40, 2, 0);

	let mut loader = Loader::new(AnimationSource::scan(tmp.path()).unwrap()).unwrap();
	let mut playback = PlaybackState::new();

	let name = loader.load_current_blocking(&mut playback, decoder(TARGET_WIDTH)).unwrap();
	assert_eq!(name, "a.gif");
	assert_eq!(loader.selection(), 1);
	assert_eq!(playback.len(), 2);
	assert_eq!(playback.current_index(), 0);
	assert_eq!(playback.delay(), Duration::from_millis(DEFAULT_DELAY_MS));
	assert_eq!(playback.frames()[0].dimensions(), (200, 200));

	let name = loader.load_current_blocking(&mut playback, decoder(TARGET_WIDTH)).unwrap();
	assert_eq!(name, "b.gif");
	assert_eq!(loader.selection(), 0);
	assert_eq!(playback.len(), 3);
	assert_eq!(playback.delay(), Duration::from_millis(120));
	assert_eq!(playback.frames()[2].dimensions(), (200, 100));
}

#[test_log::test]
fn test_bad_file_is_skipped() {
	let tmp = tempfile::tempdir().unwrap();
	write_corrupt(tmp.path(), "a.gif");
	write_gif(tmp.path(), "b.gif", 50, 50, 2, 80);

	let mut loader = Loader::new(AnimationSource::scan(tmp.path()).unwrap()).unwrap();
	let mut playback = PlaybackState::new();

	let name = loader.load_current_blocking(&mut playback, decoder(TARGET_WIDTH)).unwrap();
	assert_eq!(name, "b.gif");
	assert_eq!(playback.name(), Some("b.gif"));
	assert_eq!(playback.delay(), Duration::from_millis(80));
	assert_eq!(loader.selection(), 0);
}

#[test_log::test]
fn test_oversized_file_is_skipped() {
	let tmp = tempfile::tempdir().unwrap();
	write_gif(tmp.path(), "a.gif", 1, 65_535, 1, 100);
	write_gif(tmp.path(), "b.gif", 30, 30, 1, 100);

	let source = AnimationSource::scan(tmp.path()).unwrap();
	let err = decode(source.path_of(0).unwrap(), TARGET_WIDTH).unwrap_err();
	assert!(matches!(err, AnimError::TooLarge { .. }));

	let mut loader = Loader::new(source).unwrap();
	let mut playback = PlaybackState::new();
	let name = loader.load_current_blocking(&mut playback, decoder(TARGET_WIDTH)).unwrap();
	assert_eq!(name, "b.gif");
	assert_eq!(playback.frames()[0].dimensions(), (200, 200));
}

#[test_log::test]
fn test_all_bad_files_end_the_request() {
	let tmp = tempfile::tempdir().unwrap();
	write_corrupt(tmp.path(), "a.gif");
	write_corrupt(tmp.path(), "b.gif");
	write_corrupt(tmp.path(), "c.gif");

	let mut loader = Loader::new(AnimationSource::scan(tmp.path()).unwrap()).unwrap();
	let mut playback = PlaybackState::new();

	let err = loader.load_current_blocking(&mut playback, decoder(TARGET_WIDTH)).unwrap_err();
	assert!(matches!(err, AnimError::NoPlayableSource { tried: 3 }));
	assert!(playback.is_empty());
	assert!(!loader.is_pending());
}

#[test_log::test]
fn test_event_loop_retry_and_user_selection() {
	let tmp = tempfile::tempdir().unwrap();
	write_corrupt(tmp.path(), "a.gif");
	write_gif(tmp.path(), "b.gif", 20, 10, 1, 100);
	write_gif(tmp.path(), "c.gif", 20, 30, 2, 100);

	let mut loader = Loader::new(AnimationSource::scan(tmp.path()).unwrap()).unwrap();
	let mut playback = PlaybackState::new();
	let now = Instant::now();

	// turn 1: a.gif fails, the request stays pending
	loader.request_current();
	let attempt = loader.next_attempt().unwrap();
	let result = decode(&attempt.path, TARGET_WIDTH);
	assert!(matches!(
		loader.complete(attempt, result, &mut playback, now),
		LoadOutcome::Retrying { .. }
	));

	// the retry of b.gif is decoded, but the user picks c.gif before it completes
	let retry = loader.next_attempt().unwrap();
	let retry_result = decode(&retry.path, TARGET_WIDTH);
	loader.select_by_name("c.gif").unwrap();
	assert!(matches!(
		loader.complete(retry, retry_result, &mut playback, now),
		LoadOutcome::Stale
	));
	assert!(playback.is_empty());

	// turn 2: c.gif loads
	let attempt = loader.next_attempt().unwrap();
	let result = decode(&attempt.path, TARGET_WIDTH);
	assert!(matches!(
		loader.complete(attempt, result, &mut playback, now),
		LoadOutcome::Loaded { index: 2, .. }
	));
	assert_eq!(playback.name(), Some("c.gif"));
	assert_eq!(playback.frames()[0].dimensions(), (200, 300));
	assert_eq!(loader.next_attempt(), None);

	// the frame timer drives playback
	assert!(!playback.poll(now + Duration::from_millis(99)));
	assert!(playback.poll(now + Duration::from_millis(100)));
	assert_eq!(playback.displayed_index(), Some(0));
	assert!(playback.poll(now + Duration::from_millis(200)));
	assert_eq!(playback.displayed_index(), Some(1));
	assert_eq!(playback.current_index(), 0);
}

#[test]
fn test_click_after_drag_does_not_advance() {
	let tmp = tempfile::tempdir().unwrap();
	write_gif(tmp.path(), "a.gif", 10, 10, 1, 100);
	write_gif(tmp.path(), "b.gif", 10, 10, 1, 100);

	let mut loader = Loader::new(AnimationSource::scan(tmp.path()).unwrap()).unwrap();
	let mut playback = PlaybackState::new();
	loader.load_current_blocking(&mut playback, decoder(TARGET_WIDTH)).unwrap();
	let generation = loader.generation();

	let mut gesture = PointerGesture::new();
	gesture.press(PointerButton::Primary);
	gesture.moved();
	if gesture.release() == GestureEnd::Click {
		loader.advance_on_click();
	}
	assert_eq!(loader.generation(), generation);
	assert!(!loader.is_pending());

	gesture.press(PointerButton::Primary);
	if gesture.release() == GestureEnd::Click {
		loader.advance_on_click();
	}
	assert_eq!(loader.next_attempt().map(|a| a.name), Some("b.gif".to_string()));
}

#[test]
fn test_missing_directory_is_reported() {
	let tmp = tempfile::tempdir().unwrap();
	let missing = tmp.path().join("emojis");

	let err = AnimationSource::scan(&missing).unwrap_err();
	assert!(matches!(err, AnimError::NotFound(path) if path == missing));
}

#[test]
fn test_directory_without_gifs_is_rejected() {
	let tmp = tempfile::tempdir().unwrap();
	std::fs::write(tmp.path().join("cat.png"), b"").unwrap();

	let err = AnimationSource::scan(tmp.path()).unwrap_err();
	assert!(matches!(err, AnimError::NoSources { .. }));
}
