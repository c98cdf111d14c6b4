use std::sync::Arc;

use log::info;

use super::config::CanvasConfig;
use super::interaction::{Interaction, PointerOutcome};
use super::model::GraphModel;
use super::sequencer::Sequencer;
use super::types::{FlowDefinition, Point};
use super::viewport::Viewport;

/// Everything the canvas owns for one mount. Event closures and the frame
/// loop share it through `Rc<RefCell<_>>`.
pub struct FlowCanvasState {
	/// Node definitions and their view state.
	pub model: GraphModel,
	/// Pan and zoom.
	pub viewport: Viewport,
	/// Gesture in progress and selection.
	pub interaction: Interaction,
	/// Edge playback position.
	pub sequencer: Sequencer,
	/// Tunables given at mount.
	pub config: CanvasConfig,
	/// Canvas width in CSS pixels.
	pub width: f64,
	/// Canvas height in CSS pixels.
	pub height: f64,
	/// Seconds since mount, drives the marker on the active edge.
	pub flow_time: f64,
}

impl FlowCanvasState {
	/// Fresh state for a `width` by `height` canvas.
	pub fn new(definition: Arc<FlowDefinition>, config: CanvasConfig, width: f64, height: f64) -> Self {
		let model = GraphModel::new(definition);
		info!(
			"flow canvas mounted with {} nodes and {} edges",
			model.node_count(),
			model.edge_count()
		);
		Self {
			sequencer: Sequencer::new(model.edge_count()),
			model,
			viewport: Viewport::new(&config),
			interaction: Interaction::default(),
			config,
			width,
			height,
			flow_time: 0.0,
		}
	}

	/// Pointer down at a canvas-local position.
	pub fn press(&mut self, screen: Point) {
		self.interaction.press(screen, &self.model, &self.viewport);
	}

	/// Pointer moved to a canvas-local position.
	pub fn pointer_move(&mut self, screen: Point) {
		self.interaction
			.move_to(screen, &mut self.model, &mut self.viewport);
	}

	/// Ends the gesture; a click reports the selected node.
	pub fn release(&mut self) -> PointerOutcome {
		self.interaction.release(&mut self.model)
	}

	/// One wheel event; positive `delta_y` zooms out.
	pub fn wheel(&mut self, delta_y: f64) {
		self.interaction
			.wheel(delta_y, self.config.wheel_step, &mut self.viewport);
	}

	/// Two touches at `a` and `b`.
	pub fn pinch(&mut self, a: Point, b: Point) {
		self.interaction
			.pinch(a, b, self.config.pinch_reference, &mut self.viewport);
	}

	/// Starts or stops edge playback.
	pub fn set_playing(&mut self, playing: bool) {
		if playing {
			self.sequencer.enable();
		} else {
			self.sequencer.disable();
		}
	}

	/// Advances animation time by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}

	/// Back to the authored layout at 100% zoom with nothing selected.
	/// Playback is left to the host's `playing` input.
	pub fn reset(&mut self) {
		self.model.reset();
		self.viewport = Viewport::new(&self.config);
		self.interaction = Interaction::default();
		info!("flow canvas reset");
	}

	/// Tracks the canvas element's new size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
