//! The companion window.

use std::time::Instant;

use anyhow::{Result, anyhow};
use egui::TextureHandle;
use emopet::prelude::*;
use log::{debug, error, info};

const MENU_MAX_HEIGHT: f32 = 160.0;

/// Opens the window and blocks until it is closed.
pub fn run(source: AnimationSource, settings: &Settings) -> Result<()> {
	let mut app = PetApp::new(source, settings.frame_width)?;
	app.load_initial()?;

	let size = settings.window_size;
	let options = eframe::NativeOptions {
		viewport: egui::ViewportBuilder::default()
			.with_title("emopet")
			.with_inner_size([size, size])
			.with_resizable(false)
			.with_transparent(true)
			.with_decorations(false)
			.with_always_on_top(),
		..Default::default()
	};

	eframe::run_native("emopet", options, Box::new(move |_cc| Ok(Box::new(app))))
		.map_err(|e| anyhow!("eframe error: {e}"))
}

struct PetApp {
	loader: Loader,
	playback: PlaybackState,
	frame_width: u32,
	gesture: PointerGesture,
	textures: Vec<TextureHandle>,
	texture_generation: Option<u64>,
	shown: Option<TextureHandle>,
}

impl PetApp {
	fn new(source: AnimationSource, frame_width: u32) -> Result<Self> {
		Ok(Self {
			loader: Loader::new(source)?,
			playback: PlaybackState::new(),
			frame_width,
			gesture: PointerGesture::new(),
			textures: Vec::new(),
			texture_generation: None,
			shown: None,
		})
	}

	/// Loads the first playable animation before the window opens; nothing to show is fatal.
	fn load_initial(&mut self) -> Result<()> {
		let width = self.frame_width;
		let name = self.loader.load_current_blocking(&mut self.playback, |path| decode(path, width))?;
		info!("Starting with {name}");
		Ok(())
	}

	/// Works off at most one attempt of a pending load per frame.
	fn pump_load(&mut self, now: Instant) {
		let Some(attempt) = self.loader.next_attempt() else {
			return;
		};
		let result = decode(&attempt.path, self.frame_width);
		// on exhaustion the previous animation keeps playing
		if let LoadOutcome::Stale = self.loader.complete(attempt, result, &mut self.playback, now) {
			debug!("Dropped result of a superseded load");
		}
	}

	/// Uploads the frame buffer as textures whenever a new animation was loaded.
	fn sync_textures(&mut self, ctx: &egui::Context) {
		let generation = self.playback.generation();
		if self.texture_generation == Some(generation) {
			return;
		}

		let name = self.playback.name().unwrap_or_default();
		self.textures = self
			.playback
			.frames()
			.iter()
			.enumerate()
			.map(|(i, frame)| {
				let image = egui::ColorImage::from_rgba_unmultiplied(
					[frame.width() as usize, frame.height() as usize],
					frame.as_raw(),
				);
				ctx.load_texture(format!("{name}#{i}"), image, egui::TextureOptions::LINEAR)
			})
			.collect();
		self.texture_generation = Some(generation);
		debug!("Uploaded {} textures for {name}", self.textures.len());
	}

	fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response) {
		let (primary_pressed, secondary_pressed, released, dragging) = ctx.input(|i| {
			(
				i.pointer.primary_pressed(),
				i.pointer.secondary_pressed(),
				i.pointer.any_released(),
				i.pointer.is_decidedly_dragging(),
			)
		});

		if response.hovered() && !egui::Popup::is_any_open(ctx) {
			if primary_pressed {
				self.gesture.press(PointerButton::Primary);
			} else if secondary_pressed {
				self.gesture.press(PointerButton::Secondary);
			}
		}

		if dragging && self.gesture.moved() {
			ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
		}

		if released && self.gesture.release() == GestureEnd::Click {
			self.loader.advance_on_click();
		}
	}

	fn show_context_menu(&mut self, ctx: &egui::Context, response: &egui::Response) {
		let mut selected = None;
		response.context_menu(|ui| {
			ui.menu_button("Choose emoji", |ui| {
				egui::ScrollArea::vertical().max_height(MENU_MAX_HEIGHT).show(ui, |ui| {
					for name in self.loader.source().names() {
						if ui.button(name).clicked() {
							selected = Some(name.clone());
							ui.close();
						}
					}
				});
			});
			if ui.button("Exit").clicked() {
				ctx.send_viewport_cmd(egui::ViewportCommand::Close);
			}
		});

		if let Some(name) = selected {
			info!("Loading selected emoji {name}");
			if let Err(err) = self.loader.select_by_name(&name) {
				error!("{err}");
			}
		}
	}
}

impl eframe::App for PetApp {
	fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
		egui::Rgba::TRANSPARENT.to_array()
	}

	fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
		let now = Instant::now();
		self.pump_load(now);
		self.sync_textures(ctx);

		if self.playback.poll(now)
			&& let Some(index) = self.playback.displayed_index()
		{
			self.shown = self.textures.get(index).cloned();
		}

		egui::CentralPanel::default().frame(egui::Frame::NONE).show(ctx, |ui| {
			let rect = ui.max_rect();
			let response = ui.interact(rect, ui.id().with("pet"), egui::Sense::click_and_drag());

			// frames taller than the window are centred and clipped
			if let Some(texture) = &self.shown {
				let image_rect = egui::Rect::from_center_size(rect.center(), texture.size_vec2());
				let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
				ui.painter().image(texture.id(), image_rect, uv, egui::Color32::WHITE);
			}

			self.handle_pointer(ctx, &response);
			self.show_context_menu(ctx, &response);
		});

		if self.loader.is_pending() {
			ctx.request_repaint();
		} else if let Some(wait) = self.playback.time_until_next_frame(Instant::now()) {
			ctx.request_repaint_after(wait);
		}
	}
}
