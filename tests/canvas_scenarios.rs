use std::sync::Arc;

use system_flow_monitor::components::flow_canvas::config::{ENLARGED_SIZE, MINIMIZED_SIZE};
use system_flow_monitor::components::flow_canvas::detail::NodeDetails;
use system_flow_monitor::components::flow_canvas::interaction::{Gesture, PointerOutcome};
use system_flow_monitor::components::flow_canvas::model::dimensions_of;
use system_flow_monitor::components::flow_canvas::state::FlowCanvasState;
use system_flow_monitor::components::flow_canvas::types::{NodeControl, SizeMode};
use system_flow_monitor::components::flow_canvas::{CanvasConfig, Point};
use system_flow_monitor::data::reference_topology;

fn canvas() -> FlowCanvasState {
	FlowCanvasState::new(
		Arc::new(reference_topology()),
		CanvasConfig::default(),
		1200.0,
		800.0,
	)
}

fn active_route(state: &FlowCanvasState) -> Option<(String, String)> {
	let edges = &state.model.definition().edges;
	state
		.sequencer
		.active_edge()
		.map(|i| (edges[i].from.clone(), edges[i].to.clone()))
}

#[test]
fn playback_visits_every_edge_in_order_before_repeating() {
	let mut state = canvas();
	state.set_playing(true);
	let mut seen = vec![state.sequencer.active_edge().unwrap()];
	for _ in 0..8 {
		seen.push(state.sequencer.tick().unwrap());
	}
	assert_eq!(seen, (0..9).collect::<Vec<_>>());
	assert_eq!(
		active_route(&state),
		Some(("aws-lambda".into(), "aws-cloudwatch".into()))
	);

	state.sequencer.tick();
	assert_eq!(
		active_route(&state),
		Some(("angular-frontend".into(), "nodejs-backend".into()))
	);
}

#[test]
fn stopping_playback_clears_the_active_edge() {
	let mut state = canvas();
	state.set_playing(true);
	state.sequencer.tick();
	state.sequencer.tick();
	state.set_playing(false);
	assert_eq!(state.sequencer.active_edge(), None);
	state.set_playing(true);
	assert_eq!(state.sequencer.active_edge(), Some(0));
}

#[test]
fn drag_moves_node_and_keeps_panel_closed() {
	let mut state = canvas();
	// Angular Frontend sits at (100, 200).
	state.press(Point::new(120.0, 230.0));
	state.pointer_move(Point::new(121.0, 230.0));
	assert_eq!(state.release(), PointerOutcome::Nothing);
	let view = state.model.view("angular-frontend").unwrap();
	assert_eq!(view.position, Point::new(101.0, 200.0));
	assert_eq!(state.interaction.selected(), None);
}

#[test]
fn click_opens_panel_and_leaves_position() {
	let mut state = canvas();
	state.press(Point::new(120.0, 230.0));
	assert_eq!(
		state.release(),
		PointerOutcome::Selected("angular-frontend".into())
	);
	assert_eq!(state.interaction.selected(), Some("angular-frontend"));
	assert_eq!(
		state.model.view("angular-frontend").unwrap().position,
		Point::new(100.0, 200.0)
	);
}

#[test]
fn minimize_changes_only_the_flag_and_footprint() {
	let mut state = canvas();
	// Minimize button: top-right corner of the 180-wide node at (100, 200).
	state.press(Point::new(270.0, 210.0));
	assert_eq!(
		state.release(),
		PointerOutcome::Toggled {
			node: "angular-frontend".into(),
			control: NodeControl::Minimize,
		}
	);
	let view = state.model.view("angular-frontend").unwrap();
	assert!(view.minimized);
	assert_eq!(view.position, Point::new(100.0, 200.0));
	assert_eq!(dimensions_of(view), MINIMIZED_SIZE);
	assert_eq!(state.interaction.selected(), None);
}

#[test]
fn enlarging_the_selected_node_keeps_the_panel() {
	let mut state = canvas();
	let definition = state.model.definition().clone();
	state.press(Point::new(120.0, 230.0));
	state.release();
	let before = NodeDetails::from_definition(&definition, "angular-frontend");

	// Resize button sits left of the minimize button.
	state.press(Point::new(250.0, 210.0));
	state.release();

	let view = state.model.view("angular-frontend").unwrap();
	assert_eq!(view.size_mode, SizeMode::Enlarged);
	assert_eq!(dimensions_of(view), ENLARGED_SIZE);
	assert_eq!(state.interaction.selected(), Some("angular-frontend"));
	assert_eq!(
		NodeDetails::from_definition(&definition, "angular-frontend"),
		before
	);
}

#[test]
fn second_touch_turns_a_press_into_a_pinch() {
	let mut state = canvas();
	state.press(Point::new(120.0, 230.0));
	state.interaction.cancel();
	state.pinch(Point::new(0.0, 0.0), Point::new(400.0, 0.0));
	assert_eq!(*state.interaction.gesture(), Gesture::Pinching);
	assert_eq!(state.viewport.zoom(), 2.0);
	state.pointer_move(Point::new(500.0, 500.0));
	assert_eq!(state.release(), PointerOutcome::Nothing);
	assert_eq!(state.viewport.pan(), Point::default());
	assert_eq!(state.interaction.selected(), None);
}

#[test]
fn detail_panel_lists_connected_services() {
	let details = NodeDetails::from_definition(&reference_topology(), "nodejs-backend").unwrap();
	assert_eq!(
		details.connections,
		vec!["Mysql Db", "Redis Cache", "Aws S3"]
	);
	assert_eq!(details.response_time, "85ms");
	assert!(details.payload.contains("\"Authorization\": \"Bearer token123\""));
}

#[test]
fn cancelled_touch_never_selects() {
	let mut state = canvas();
	state.press(Point::new(120.0, 230.0));
	state.interaction.cancel();
	assert_eq!(state.release(), PointerOutcome::Nothing);
	assert_eq!(state.interaction.selected(), None);
	assert_eq!(
		state.model.view("angular-frontend").unwrap().position,
		Point::new(100.0, 200.0)
	);
}

#[test]
fn reset_restores_layout_viewport_and_selection() {
	let mut state = canvas();
	state.press(Point::new(120.0, 230.0));
	state.pointer_move(Point::new(180.0, 260.0));
	state.release();
	// Minimize button of the moved node, now at (160, 230).
	state.press(Point::new(330.0, 240.0));
	assert!(matches!(state.release(), PointerOutcome::Toggled { .. }));
	state.wheel(-1.0);
	state.press(Point::new(1000.0, 700.0));
	state.pointer_move(Point::new(1010.0, 690.0));
	state.release();
	// Content (400, 180) at 110% zoom, panned by (10, -10).
	state.press(Point::new(450.0, 188.0));
	assert_eq!(
		state.release(),
		PointerOutcome::Selected("nodejs-backend".into())
	);

	state.reset();

	for node in &state.model.definition().nodes {
		let view = state.model.view(&node.id).unwrap();
		assert_eq!(view.position, node.initial_position, "{}", node.id);
		assert!(!view.minimized, "{}", node.id);
		assert_eq!(view.size_mode, SizeMode::Normal, "{}", node.id);
	}
	assert_eq!(state.viewport.zoom(), 1.0);
	assert_eq!(state.viewport.pan(), Point::default());
	assert_eq!(state.interaction.selected(), None);
	assert_eq!(*state.interaction.gesture(), Gesture::Idle);
}
