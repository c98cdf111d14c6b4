use std::sync::Arc;

use proptest::prelude::*;
use system_flow_monitor::components::flow_canvas::config::{
	ENLARGED_SIZE, MINIMIZED_SIZE, NORMAL_SIZE,
};
use system_flow_monitor::components::flow_canvas::model::dimensions_of;
use system_flow_monitor::components::flow_canvas::sequencer::Sequencer;
use system_flow_monitor::components::flow_canvas::state::FlowCanvasState;
use system_flow_monitor::components::flow_canvas::types::{NodeViewState, SizeMode};
use system_flow_monitor::components::flow_canvas::viewport::Viewport;
use system_flow_monitor::components::flow_canvas::{CanvasConfig, Point};
use system_flow_monitor::data::reference_topology;

#[derive(Clone, Debug)]
enum ZoomInput {
	Wheel(f64),
	Pinch(f64),
}

fn zoom_input() -> impl Strategy<Value = ZoomInput> {
	prop_oneof![
		(-500.0..500.0f64).prop_map(ZoomInput::Wheel),
		(0.0..5000.0f64).prop_map(ZoomInput::Pinch),
	]
}

proptest! {
	#[test]
	fn zoom_stays_in_range(inputs in prop::collection::vec(zoom_input(), 0..200)) {
		let mut state = FlowCanvasState::new(
			Arc::new(reference_topology()),
			CanvasConfig::default(),
			800.0,
			600.0,
		);
		for input in inputs {
			match input {
				ZoomInput::Wheel(dy) => state.wheel(dy),
				ZoomInput::Pinch(d) => state.pinch(Point::new(0.0, 0.0), Point::new(d, 0.0)),
			}
			let zoom = state.viewport.zoom();
			prop_assert!((0.5..=3.0).contains(&zoom), "zoom {zoom}");
		}
	}

	#[test]
	fn screen_content_round_trip(
		zoom in 0.5..=3.0f64,
		pan_x in -1e6..1e6f64,
		pan_y in -1e6..1e6f64,
		x in -1e5..1e5f64,
		y in -1e5..1e5f64,
	) {
		let mut viewport = Viewport::default();
		viewport.zoom_to(zoom);
		viewport.pan_by(Point::new(pan_x, pan_y));
		let content = Point::new(x, y);
		let back = viewport.to_content(viewport.to_screen(content));
		prop_assert!((back.x - x).abs() < 1e-6, "{back:?} vs {content:?}");
		prop_assert!((back.y - y).abs() < 1e-6, "{back:?} vs {content:?}");
	}

	#[test]
	fn footprint_depends_only_on_size_flags(
		x in -1e4..1e4f64,
		y in -1e4..1e4f64,
		minimized in any::<bool>(),
		enlarged in any::<bool>(),
	) {
		let size_mode = if enlarged { SizeMode::Enlarged } else { SizeMode::Normal };
		let view = NodeViewState { position: Point::new(x, y), size_mode, minimized };
		let expected = match (minimized, size_mode) {
			(true, _) => MINIMIZED_SIZE,
			(false, SizeMode::Normal) => NORMAL_SIZE,
			(false, SizeMode::Enlarged) => ENLARGED_SIZE,
		};
		prop_assert_eq!(dimensions_of(&view), expected);
	}

	#[test]
	fn at_most_one_edge_is_active(
		edge_count in 0usize..20,
		steps in prop::collection::vec(0u8..3, 0..100),
	) {
		let mut sequencer = Sequencer::new(edge_count);
		for step in steps {
			match step {
				0 => sequencer.enable(),
				1 => sequencer.disable(),
				_ => {
					sequencer.tick();
				}
			}
			let active: Vec<_> = (0..edge_count).filter(|i| sequencer.is_active(*i)).collect();
			prop_assert!(active.len() <= 1);
			if step == 1 {
				prop_assert!(active.is_empty());
			}
		}
	}
}
