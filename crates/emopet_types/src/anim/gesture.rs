//! Click-versus-drag recognition for the companion window.

/// Pointer button that started a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
	/// Left button (or primary touch)
	Primary,
	/// Right button
	Secondary,
	/// Any other button
	Other,
}

/// How a press-release gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
	/// Primary press and release without movement in between
	Click,
	/// The pointer moved while the primary button was pressed
	Drag,
	/// No gesture was in progress, or it was not started by the primary button
	None,
}

/// Tracks one press-move-release sequence.
///
/// Moving the pointer at any point between a primary press and its release
/// turns the gesture into a drag, so the release no longer counts as a click.
/// Other buttons never click or drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerGesture {
	pressed: Option<PointerButton>,
	dragged: bool,
}

impl PointerGesture {
	/// Creates an idle gesture tracker.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a gesture, discarding any previous one.
	pub fn press(&mut self, button: PointerButton) {
		self.pressed = Some(button);
		self.dragged = false;
	}

	/// Records pointer movement. Returns `true` the first time a pressed primary gesture becomes a drag.
	pub fn moved(&mut self) -> bool {
		if self.pressed != Some(PointerButton::Primary) || self.dragged {
			return false;
		}
		self.dragged = true;
		true
	}

	/// Ends the gesture and reports what it was.
	pub fn release(&mut self) -> GestureEnd {
		let pressed = self.pressed.take();
		let dragged = std::mem::take(&mut self.dragged);
		match pressed {
			Some(_) if dragged => GestureEnd::Drag,
			Some(PointerButton::Primary) => GestureEnd::Click,
			_ => GestureEnd::None,
		}
	}

	/// Returns `true` between press and release.
	pub fn is_pressed(&self) -> bool {
		self.pressed.is_some()
	}

	/// Returns `true` if the pointer moved since the press.
	pub fn is_dragging(&self) -> bool {
		self.dragged
	}
}
