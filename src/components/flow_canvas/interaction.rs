use log::debug;

use super::model::GraphModel;
use super::types::{NodeControl, Point};
use super::viewport::Viewport;

/// What the pointer is doing between press and release. Only one variant can
/// be live, so a node drag and a background pan never overlap.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
	/// No pointer is down.
	#[default]
	Idle,
	/// A node follows the pointer; `moved` turns a click into a drag.
	Dragging {
		/// Node being dragged.
		node: String,
		/// Press point relative to the node origin, in content space.
		grab_offset: Point,
		/// Latched on the first move event; a release without it is a click.
		moved: bool,
	},
	/// The background follows the pointer.
	Panning {
		/// Screen position of the previous event.
		last: Point,
	},
	/// A node button is held down; it toggles on release.
	PressingControl {
		/// Node owning the button.
		node: String,
		/// Which button.
		control: NodeControl,
	},
	/// Two touches drive the zoom.
	Pinching,
}

/// What a finished gesture changed, for the component to act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
	/// The gesture had no lasting effect.
	Nothing,
	/// A node was clicked and should show its details.
	Selected(String),
	/// A node button was pressed and released.
	Toggled {
		/// Node whose view state changed.
		node: String,
		/// Button that was released.
		control: NodeControl,
	},
}

/// Routes pointer, touch and wheel input to node drags, background pans,
/// control toggles and click-to-select.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
	gesture: Gesture,
	hovered: Option<String>,
	selected: Option<String>,
}

impl Interaction {
	/// Gesture in progress.
	pub fn gesture(&self) -> &Gesture {
		&self.gesture
	}

	/// Node under the pointer while idle.
	pub fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	/// Node whose details are open.
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Node under an active drag.
	pub fn dragged(&self) -> Option<&str> {
		match &self.gesture {
			Gesture::Dragging { node, .. } => Some(node),
			_ => None,
		}
	}

	/// Clears the selection.
	pub fn dismiss(&mut self) {
		self.selected = None;
	}

	/// Starts a gesture at `screen`. Buttons win over node bodies, which win over the background.
	pub fn press(&mut self, screen: Point, model: &GraphModel, viewport: &Viewport) {
		let content = viewport.to_content(screen);
		self.gesture = if let Some((node, control)) = model.control_at(content, None) {
			Gesture::PressingControl {
				node: node.to_owned(),
				control,
			}
		} else if let Some(node) = model.node_at(content, None) {
			let origin = model.view(node).map(|v| v.position).unwrap_or_default();
			Gesture::Dragging {
				node: node.to_owned(),
				grab_offset: content - origin,
				moved: false,
			}
		} else {
			Gesture::Panning { last: screen }
		};
		debug!("press at {screen:?} -> {:?}", self.gesture);
	}

	/// Continues the current gesture, or updates the hover while idle.
	pub fn move_to(&mut self, screen: Point, model: &mut GraphModel, viewport: &mut Viewport) {
		match &mut self.gesture {
			Gesture::Idle => {
				let content = viewport.to_content(screen);
				self.hovered = model.node_at(content, None).map(str::to_owned);
			}
			Gesture::Dragging {
				node,
				grab_offset,
				moved,
			} => {
				*moved = true;
				let position = viewport.to_content(screen) - *grab_offset;
				if let Err(err) = model.set_position(node, position) {
					debug!("drag aborted: {err}");
					self.gesture = Gesture::Idle;
				}
			}
			Gesture::Panning { last } => {
				viewport.pan_by(screen - *last);
				*last = screen;
			}
			Gesture::PressingControl { .. } | Gesture::Pinching => {}
		}
	}

	/// End the current gesture. A drag that never moved selects its node.
	pub fn release(&mut self, model: &mut GraphModel) -> PointerOutcome {
		match std::mem::take(&mut self.gesture) {
			Gesture::Dragging {
				node, moved: false, ..
			} => {
				if model.view(&node).is_none() {
					return PointerOutcome::Nothing;
				}
				debug!("selected {node}");
				self.selected = Some(node.clone());
				PointerOutcome::Selected(node)
			}
			Gesture::PressingControl { node, control } => match model.apply_control(&node, control) {
				Ok(()) => PointerOutcome::Toggled { node, control },
				Err(err) => {
					debug!("control ignored: {err}");
					PointerOutcome::Nothing
				}
			},
			_ => PointerOutcome::Nothing,
		}
	}

	/// Drop the current gesture without selecting or toggling anything.
	pub fn cancel(&mut self) {
		self.gesture = Gesture::Idle;
		self.hovered = None;
	}

	/// Two-touch zoom: the factor follows touch distance directly.
	pub fn pinch(&mut self, a: Point, b: Point, reference: f64, viewport: &mut Viewport) {
		self.gesture = Gesture::Pinching;
		viewport.zoom_to(a.distance(b) / reference);
	}

	/// Scrolling down zooms out.
	pub fn wheel(&mut self, delta_y: f64, step: f64, viewport: &mut Viewport) {
		viewport.zoom_by(if delta_y > 0.0 { -step } else { step });
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::components::flow_canvas::types::{
		FlowDefinition, NodeCategory, NodeDefinition, NodeMetadata, NodeStatus, SizeMode,
	};

	fn model() -> GraphModel {
		let node = |id: &str, x: f64| NodeDefinition {
			id: id.into(),
			label: id.into(),
			category: NodeCategory::Api,
			status: NodeStatus::Healthy,
			initial_position: Point::new(x, 0.0),
			outbound_links: vec![],
			metadata: NodeMetadata::default(),
		};
		GraphModel::new(Arc::new(FlowDefinition {
			nodes: vec![node("a", 0.0), node("b", 400.0)],
			edges: vec![],
		}))
	}

	#[test]
	fn drag_moves_node_without_selecting() {
		let (mut m, mut v, mut i) = (model(), Viewport::default(), Interaction::default());
		i.press(Point::new(10.0, 10.0), &m, &v);
		i.move_to(Point::new(60.0, 30.0), &mut m, &mut v);
		assert_eq!(i.release(&mut m), PointerOutcome::Nothing);
		assert_eq!(m.view("a").unwrap().position, Point::new(50.0, 20.0));
		assert_eq!(i.selected(), None);
		assert_eq!(*i.gesture(), Gesture::Idle);
	}

	#[test]
	fn press_release_without_move_selects() {
		let (mut m, v, mut i) = (model(), Viewport::default(), Interaction::default());
		i.press(Point::new(410.0, 10.0), &m, &v);
		assert_eq!(i.release(&mut m), PointerOutcome::Selected("b".into()));
		assert_eq!(i.selected(), Some("b"));
		assert_eq!(m.view("b").unwrap().position, Point::new(400.0, 0.0));
	}

	#[test]
	fn drag_respects_zoom_and_pan() {
		let (mut m, mut v, mut i) = (model(), Viewport::default(), Interaction::default());
		v.zoom_to(2.0);
		v.pan_by(Point::new(100.0, 100.0));
		// Content (10, 10) is at screen (120, 120).
		i.press(Point::new(120.0, 120.0), &m, &v);
		i.move_to(Point::new(140.0, 160.0), &mut m, &mut v);
		i.release(&mut m);
		assert_eq!(m.view("a").unwrap().position, Point::new(10.0, 20.0));
	}

	#[test]
	fn background_press_pans() {
		let (mut m, mut v, mut i) = (model(), Viewport::default(), Interaction::default());
		i.press(Point::new(300.0, 300.0), &m, &v);
		i.move_to(Point::new(310.0, 290.0), &mut m, &mut v);
		i.move_to(Point::new(330.0, 280.0), &mut m, &mut v);
		assert_eq!(i.release(&mut m), PointerOutcome::Nothing);
		assert_eq!(v.pan(), Point::new(30.0, -20.0));
		assert_eq!(m.view("a").unwrap().position, Point::new(0.0, 0.0));
	}

	#[test]
	fn control_press_toggles_on_release_only() {
		let (mut m, mut v, mut i) = (model(), Viewport::default(), Interaction::default());
		i.press(Point::new(170.0, 10.0), &m, &v);
		i.move_to(Point::new(500.0, 500.0), &mut m, &mut v);
		assert_eq!(v.pan(), Point::default());
		assert!(!m.view("a").unwrap().minimized);
		assert_eq!(
			i.release(&mut m),
			PointerOutcome::Toggled {
				node: "a".into(),
				control: NodeControl::Minimize,
			}
		);
		let a = m.view("a").unwrap();
		assert!(a.minimized);
		assert_eq!(a.position, Point::new(0.0, 0.0));
		assert_eq!(i.selected(), None);
	}

	#[test]
	fn resize_keeps_selection() {
		let (mut m, v, mut i) = (model(), Viewport::default(), Interaction::default());
		i.press(Point::new(10.0, 30.0), &m, &v);
		i.release(&mut m);
		i.press(Point::new(150.0, 10.0), &m, &v);
		i.release(&mut m);
		assert_eq!(m.view("a").unwrap().size_mode, SizeMode::Enlarged);
		assert_eq!(i.selected(), Some("a"));
	}

	#[test]
	fn move_without_gesture_only_hovers() {
		let (mut m, mut v, mut i) = (model(), Viewport::default(), Interaction::default());
		i.move_to(Point::new(10.0, 10.0), &mut m, &mut v);
		assert_eq!(i.hovered(), Some("a"));
		assert_eq!(v.pan(), Point::default());
		i.move_to(Point::new(250.0, 10.0), &mut m, &mut v);
		assert_eq!(i.hovered(), None);
	}

	#[test]
	fn cancel_never_selects() {
		let (mut m, v, mut i) = (model(), Viewport::default(), Interaction::default());
		i.press(Point::new(10.0, 10.0), &m, &v);
		i.cancel();
		assert_eq!(i.release(&mut m), PointerOutcome::Nothing);
		assert_eq!(i.selected(), None);
	}

	#[test]
	fn dismiss_clears_selection() {
		let (mut m, v, mut i) = (model(), Viewport::default(), Interaction::default());
		i.press(Point::new(10.0, 10.0), &m, &v);
		i.release(&mut m);
		i.dismiss();
		assert_eq!(i.selected(), None);
	}

	#[test]
	fn pinch_sets_zoom_from_distance_and_clamps() {
		let (mut v, mut i) = (Viewport::default(), Interaction::default());
		i.pinch(Point::new(0.0, 0.0), Point::new(300.0, 400.0), 200.0, &mut v);
		assert_eq!(v.zoom(), 2.5);
		i.pinch(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 200.0, &mut v);
		assert_eq!(v.zoom(), 0.5);
		assert_eq!(*i.gesture(), Gesture::Pinching);
	}

	#[test]
	fn wheel_down_zooms_out() {
		let (mut v, mut i) = (Viewport::default(), Interaction::default());
		i.wheel(120.0, 0.1, &mut v);
		assert!((v.zoom() - 0.9).abs() < 1e-9);
		i.wheel(-120.0, 0.1, &mut v);
		assert!((v.zoom() - 1.0).abs() < 1e-9);
	}
}
