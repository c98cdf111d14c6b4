use super::config::CanvasConfig;
use super::types::Point;

/// Pan/zoom transform. Content is translated by `pan` (screen pixels) and then
/// scaled by `zoom` around the content origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	zoom: f64,
	pan: Point,
	min_zoom: f64,
	max_zoom: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self::new(&CanvasConfig::default())
	}
}

impl Viewport {
	/// Identity transform with the configured zoom bounds.
	pub fn new(config: &CanvasConfig) -> Self {
		Self {
			zoom: 1.0,
			pan: Point::default(),
			min_zoom: config.min_zoom,
			max_zoom: config.max_zoom,
		}
	}

	/// Current scale factor.
	pub fn zoom(&self) -> f64 {
		self.zoom
	}

	/// Offset in screen pixels.
	pub fn pan(&self) -> Point {
		self.pan
	}

	/// Adds `delta` and clamps.
	pub fn zoom_by(&mut self, delta: f64) {
		self.zoom_to(self.zoom + delta);
	}

	/// Set the zoom factor directly, clamped to the configured range.
	pub fn zoom_to(&mut self, zoom: f64) {
		if zoom.is_nan() {
			return;
		}
		self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
	}

	/// Panning is unbounded.
	pub fn pan_by(&mut self, delta: Point) {
		self.pan = self.pan + delta;
	}

	/// Content point to screen pixels.
	pub fn to_screen(&self, content: Point) -> Point {
		content * self.zoom + self.pan
	}

	/// Screen pixels to content point.
	pub fn to_content(&self, screen: Point) -> Point {
		(screen - self.pan) / self.zoom
	}
}
