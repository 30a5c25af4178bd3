//! Settings feeding the loader

use std::fs;

use emopet::prelude::*;

use crate::fixtures::write_gif;

#[test]
fn test_configured_directory_and_width() {
	let tmp = tempfile::tempdir().unwrap();
	let emojis = tmp.path().join("faces");
	fs::create_dir(&emojis).unwrap();
	write_gif(&emojis, "smile.gif", 40, 30, 2, 60);

	let config = tmp.path().join("emopet.toml");
	fs::write(&config, format!("emoji_dir = {:?}\nframe_width = 100\n", emojis.display().to_string()))
		.unwrap();

	let settings = Settings::load(Some(config.as_path()), &SettingsOverrides::default()).unwrap();
	let dir = settings.resolve_emoji_dir();
	assert_eq!(dir, emojis);

	let mut loader = Loader::new(AnimationSource::scan(&dir).unwrap()).unwrap();
	let mut playback = PlaybackState::new();
	let width = settings.frame_width;
	loader.load_current_blocking(&mut playback, |path| decode(path, width)).unwrap();

	assert_eq!(playback.frames()[0].dimensions(), (100, 75));
}
