use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use super::config::{CONTROL_INSET, CONTROL_SIZE, ENLARGED_SIZE, MINIMIZED_SIZE, NORMAL_SIZE};
use super::error::CanvasError;
use super::types::{
	Bounds, EdgeDefinition, FlowDefinition, NodeControl, NodeDefinition, NodeViewState, Point,
	Size, SizeMode,
};

/// Rendered footprint of a node. Depends only on `minimized` and `size_mode`.
pub fn dimensions_of(view: &NodeViewState) -> Size {
	if view.minimized {
		return MINIMIZED_SIZE;
	}
	match view.size_mode {
		SizeMode::Normal => NORMAL_SIZE,
		SizeMode::Enlarged => ENLARGED_SIZE,
	}
}

/// Smallest rectangle covering every footprint, grown by `margin` on all
/// sides. Falls back to `empty` anchored at the origin when there are no nodes.
pub fn bounding_box_of<'a>(
	views: impl IntoIterator<Item = &'a NodeViewState>,
	margin: f64,
	empty: Size,
) -> Bounds {
	let mut bounds: Option<Bounds> = None;
	for view in views {
		let size = dimensions_of(view);
		let (x, y) = (view.position.x, view.position.y);
		let b = bounds.get_or_insert(Bounds {
			min_x: f64::INFINITY,
			min_y: f64::INFINITY,
			max_x: f64::NEG_INFINITY,
			max_y: f64::NEG_INFINITY,
		});
		b.min_x = b.min_x.min(x - margin);
		b.min_y = b.min_y.min(y - margin);
		b.max_x = b.max_x.max(x + size.width + margin);
		b.max_y = b.max_y.max(y + size.height + margin);
	}
	bounds.unwrap_or(Bounds {
		min_x: 0.0,
		min_y: 0.0,
		max_x: empty.width,
		max_y: empty.height,
	})
}

fn footprint(view: &NodeViewState) -> Bounds {
	let size = dimensions_of(view);
	Bounds {
		min_x: view.position.x,
		min_y: view.position.y,
		max_x: view.position.x + size.width,
		max_y: view.position.y + size.height,
	}
}

/// Hit area of one of a node's corner buttons. The resize button is hidden
/// while the node is minimized.
pub fn control_rect(view: &NodeViewState, control: NodeControl) -> Option<Bounds> {
	let size = dimensions_of(view);
	let slot = match control {
		NodeControl::Minimize => 0.0,
		NodeControl::Resize if view.minimized => return None,
		NodeControl::Resize => 1.0,
	};
	let max_x = view.position.x + size.width - CONTROL_INSET - slot * (CONTROL_SIZE + CONTROL_INSET);
	let min_y = view.position.y + CONTROL_INSET;
	Some(Bounds {
		min_x: max_x - CONTROL_SIZE,
		min_y,
		max_x,
		max_y: min_y + CONTROL_SIZE,
	})
}

/// A drawable edge whose endpoints both exist.
pub struct ResolvedEdge<'a> {
	/// Position in the definition's edge list.
	pub index: usize,
	/// The underlying definition.
	pub edge: &'a EdgeDefinition,
	/// Right middle of the source footprint.
	pub start: Point,
	/// Left middle of the target footprint.
	pub end: Point,
}

/// Node and edge definitions plus the mutable view state of each node.
pub struct GraphModel {
	definition: Arc<FlowDefinition>,
	views: HashMap<String, NodeViewState>,
}

impl GraphModel {
	/// View state starts from each node's authored position.
	pub fn new(definition: Arc<FlowDefinition>) -> Self {
		for edge in &definition.edges {
			if definition.node(&edge.from).is_none() || definition.node(&edge.to).is_none() {
				warn!("edge {} -> {} references a missing node, skipping", edge.from, edge.to);
			}
		}
		let views = Self::initial_views(&definition);
		Self { definition, views }
	}

	fn initial_views(definition: &FlowDefinition) -> HashMap<String, NodeViewState> {
		definition
			.nodes
			.iter()
			.map(|n| (n.id.clone(), NodeViewState::at(n.initial_position)))
			.collect()
	}

	/// Shared definition the model was built from.
	pub fn definition(&self) -> &Arc<FlowDefinition> {
		&self.definition
	}

	/// Current view state of `id`.
	pub fn view(&self, id: &str) -> Option<&NodeViewState> {
		self.views.get(id)
	}

	/// Nodes in definition order, paired with their view state.
	pub fn nodes(&self) -> impl Iterator<Item = (&NodeDefinition, &NodeViewState)> {
		self.definition
			.nodes
			.iter()
			.filter_map(|def| self.views.get(&def.id).map(|view| (def, view)))
	}

	/// Number of defined nodes.
	pub fn node_count(&self) -> usize {
		self.definition.nodes.len()
	}

	/// Number of defined edges, dangling ones included.
	pub fn edge_count(&self) -> usize {
		self.definition.edges.len()
	}

	/// Extent of all footprints plus `margin`, or `empty` with no nodes.
	pub fn bounding_box(&self, margin: f64, empty: Size) -> Bounds {
		bounding_box_of(self.views.values(), margin, empty)
	}

	fn view_mut(&mut self, id: &str) -> Result<&mut NodeViewState, CanvasError> {
		self.views
			.get_mut(id)
			.ok_or_else(|| CanvasError::UnknownNode(id.to_owned()))
	}

	/// Moves `id` so its top-left corner sits at `position`.
	pub fn set_position(&mut self, id: &str, position: Point) -> Result<(), CanvasError> {
		self.view_mut(id)?.position = position;
		Ok(())
	}

	/// Flips `id` between normal and enlarged.
	pub fn toggle_size_mode(&mut self, id: &str) -> Result<(), CanvasError> {
		let view = self.view_mut(id)?;
		view.size_mode = view.size_mode.toggled();
		Ok(())
	}

	/// Collapses or expands `id`, keeping its position and size mode.
	pub fn toggle_minimized(&mut self, id: &str) -> Result<(), CanvasError> {
		let view = self.view_mut(id)?;
		view.minimized = !view.minimized;
		Ok(())
	}

	/// Applies the toggle behind a node button.
	pub fn apply_control(&mut self, id: &str, control: NodeControl) -> Result<(), CanvasError> {
		match control {
			NodeControl::Minimize => self.toggle_minimized(id),
			NodeControl::Resize => self.toggle_size_mode(id),
		}
	}

	/// Restore every node to its mount-time view state.
	pub fn reset(&mut self) {
		self.views = Self::initial_views(&self.definition);
	}

	/// Topmost node under `p`. `on_top` is painted last, so it wins ties.
	pub fn node_at(&self, p: Point, on_top: Option<&str>) -> Option<&str> {
		let hit = |id: &str| self.views.get(id).is_some_and(|v| footprint(v).contains(p));
		if let Some(top) = on_top {
			if hit(top) {
				return self.views.get_key_value(top).map(|(k, _)| k.as_str());
			}
		}
		self.definition
			.nodes
			.iter()
			.rev()
			.map(|n| n.id.as_str())
			.find(|id| hit(*id))
	}

	/// Node button at a content point.
	pub fn control_at(&self, p: Point, on_top: Option<&str>) -> Option<(&str, NodeControl)> {
		let id = self.node_at(p, on_top)?;
		let view = self.views.get(id)?;
		[NodeControl::Minimize, NodeControl::Resize]
			.into_iter()
			.find(|c| control_rect(view, *c).is_some_and(|r| r.contains(p)))
			.map(|c| (id, c))
	}

	/// Edges whose endpoints resolve, running from the right middle of the
	/// source footprint to the left middle of the target.
	pub fn resolved_edges(&self) -> impl Iterator<Item = ResolvedEdge<'_>> {
		self.definition
			.edges
			.iter()
			.enumerate()
			.filter_map(|(index, edge)| {
				let (from, to) = (self.views.get(&edge.from)?, self.views.get(&edge.to)?);
				let (fs, ts) = (dimensions_of(from), dimensions_of(to));
				Some(ResolvedEdge {
					index,
					edge,
					start: Point::new(from.position.x + fs.width, from.position.y + fs.height / 2.0),
					end: Point::new(to.position.x, to.position.y + ts.height / 2.0),
				})
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flow_canvas::types::{NodeCategory, NodeMetadata, NodeStatus};

	fn node(id: &str, x: f64, y: f64) -> NodeDefinition {
		NodeDefinition {
			id: id.into(),
			label: id.into(),
			category: NodeCategory::Backend,
			status: NodeStatus::Healthy,
			initial_position: Point::new(x, y),
			outbound_links: vec![],
			metadata: NodeMetadata::default(),
		}
	}

	fn edge(from: &str, to: &str) -> EdgeDefinition {
		EdgeDefinition {
			from: from.into(),
			to: to.into(),
			label: format!("{from} to {to}"),
		}
	}

	fn model() -> GraphModel {
		GraphModel::new(Arc::new(FlowDefinition {
			nodes: vec![node("a", 0.0, 0.0), node("b", 300.0, 100.0)],
			edges: vec![edge("a", "b"), edge("a", "ghost")],
		}))
	}

	#[test]
	fn dimension_tiers() {
		let mut view = NodeViewState::default();
		assert_eq!(dimensions_of(&view), NORMAL_SIZE);
		view.size_mode = SizeMode::Enlarged;
		assert_eq!(dimensions_of(&view), ENLARGED_SIZE);
		view.minimized = true;
		assert_eq!(dimensions_of(&view), MINIMIZED_SIZE);
		view.size_mode = SizeMode::Normal;
		assert_eq!(dimensions_of(&view), MINIMIZED_SIZE);
	}

	#[test]
	fn bounding_box_covers_footprints_with_margin() {
		let b = model().bounding_box(100.0, Size::default());
		assert_eq!(b.min_x, -100.0);
		assert_eq!(b.min_y, -100.0);
		assert_eq!(b.max_x, 300.0 + 180.0 + 100.0);
		assert_eq!(b.max_y, 100.0 + 60.0 + 100.0);
	}

	#[test]
	fn bounding_box_of_nothing_is_default() {
		let empty = Size {
			width: 2000.0,
			height: 1500.0,
		};
		let b = bounding_box_of(std::iter::empty(), 100.0, empty);
		assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, 0.0, 2000.0, 1500.0));
	}

	#[test]
	fn mutations_touch_only_their_node() {
		let mut m = model();
		let before_b = *m.view("b").unwrap();
		m.set_position("a", Point::new(42.0, 7.0)).unwrap();
		m.toggle_size_mode("a").unwrap();
		m.toggle_minimized("a").unwrap();
		let a = m.view("a").unwrap();
		assert_eq!(a.position, Point::new(42.0, 7.0));
		assert_eq!(a.size_mode, SizeMode::Enlarged);
		assert!(a.minimized);
		assert_eq!(*m.view("b").unwrap(), before_b);
	}

	#[test]
	fn unknown_node_is_an_error_not_a_panic() {
		let mut m = model();
		assert_eq!(
			m.toggle_minimized("nope"),
			Err(CanvasError::UnknownNode("nope".into()))
		);
	}

	#[test]
	fn dangling_edges_are_skipped() {
		let m = model();
		let edges: Vec<_> = m.resolved_edges().collect();
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].index, 0);
		assert_eq!(edges[0].start, Point::new(180.0, 30.0));
		assert_eq!(edges[0].end, Point::new(300.0, 130.0));
	}

	#[test]
	fn reset_restores_mount_state() {
		let mut m = model();
		m.set_position("b", Point::new(-5.0, -5.0)).unwrap();
		m.toggle_minimized("b").unwrap();
		m.reset();
		assert_eq!(*m.view("b").unwrap(), NodeViewState::at(Point::new(300.0, 100.0)));
	}

	#[test]
	fn hit_testing_prefers_controls_and_top_node() {
		let m = model();
		assert_eq!(m.node_at(Point::new(10.0, 10.0), None), Some("a"));
		assert_eq!(m.node_at(Point::new(250.0, 10.0), None), None);
		// Minimize button sits in the top-right corner.
		assert_eq!(
			m.control_at(Point::new(170.0, 10.0), None),
			Some(("a", NodeControl::Minimize))
		);
		assert_eq!(
			m.control_at(Point::new(150.0, 10.0), None),
			Some(("a", NodeControl::Resize))
		);
		assert_eq!(m.control_at(Point::new(10.0, 40.0), None), None);
	}

	#[test]
	fn minimized_node_has_no_resize_control() {
		let mut m = model();
		m.toggle_minimized("a").unwrap();
		let view = m.view("a").unwrap();
		assert!(control_rect(view, NodeControl::Resize).is_none());
		assert_eq!(
			m.control_at(Point::new(50.0, 10.0), None),
			Some(("a", NodeControl::Minimize))
		);
	}

	#[test]
	fn overlapping_nodes_resolve_to_on_top() {
		let mut m = model();
		m.set_position("b", Point::new(0.0, 0.0)).unwrap();
		assert_eq!(m.node_at(Point::new(5.0, 40.0), None), Some("b"));
		assert_eq!(m.node_at(Point::new(5.0, 40.0), Some("a")), Some("a"));
	}
}
