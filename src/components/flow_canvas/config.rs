use super::types::Size;

/// Footprint of a minimized node.
pub const MINIMIZED_SIZE: Size = Size {
	width: 60.0,
	height: 60.0,
};
/// Footprint at [`SizeMode::Normal`](super::types::SizeMode::Normal).
pub const NORMAL_SIZE: Size = Size {
	width: 180.0,
	height: 60.0,
};
/// Footprint at [`SizeMode::Enlarged`](super::types::SizeMode::Enlarged).
pub const ENLARGED_SIZE: Size = Size {
	width: 240.0,
	height: 80.0,
};

/// Control buttons are square and inset from the node's top-right corner.
pub const CONTROL_SIZE: f64 = 16.0;
/// Gap between the control buttons and the node edge.
pub const CONTROL_INSET: f64 = 4.0;

/// Tunables for the flow canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
	/// Lower zoom bound.
	pub min_zoom: f64,
	/// Upper zoom bound.
	pub max_zoom: f64,
	/// Zoom change applied per wheel event.
	pub wheel_step: f64,
	/// Touch distance (px) that maps to a zoom factor of 1.
	pub pinch_reference: f64,
	/// Period of the playback timer.
	pub playback_interval_ms: u32,
	/// Padding added around the nodes when computing content bounds.
	pub bounds_margin: f64,
	/// Content extent used when there are no nodes.
	pub empty_bounds: Size,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			min_zoom: 0.5,
			max_zoom: 3.0,
			wheel_step: 0.1,
			pinch_reference: 200.0,
			playback_interval_ms: 800,
			bounds_margin: 100.0,
			empty_bounds: Size {
				width: 2000.0,
				height: 1500.0,
			},
		}
	}
}
