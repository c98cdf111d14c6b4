//! Static flow definitions and per-node view state.

use std::ops::{Add, Div, Mul, Sub};

use serde_json::Value;

/// A 2D coordinate or vector. Used for both content and screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal, growing rightwards.
	pub x: f64,
	/// Vertical, growing downwards.
	pub y: f64,
}

impl Point {
	/// Point at (`x`, `y`).
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance.
	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, k: f64) -> Point {
		Point::new(self.x * k, self.y * k)
	}
}

impl Div<f64> for Point {
	type Output = Point;

	fn div(self, k: f64) -> Point {
		Point::new(self.x / k, self.y / k)
	}
}

/// Width and height of a footprint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

/// Axis-aligned rectangle in content space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Left edge.
	pub min_x: f64,
	/// Top edge.
	pub min_y: f64,
	/// Right edge.
	pub max_x: f64,
	/// Bottom edge.
	pub max_y: f64,
}

impl Bounds {
	/// Horizontal extent.
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	/// Vertical extent.
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	/// Inclusive on every edge.
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
	}
}

/// Kind of service a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
	/// Browser client.
	Frontend,
	/// Application server.
	Backend,
	/// Relational store.
	Database,
	/// Managed cloud offering.
	CloudService,
	/// In-memory key-value store.
	Cache,
	/// Third-party payment processor.
	Payment,
	/// External API.
	Api,
}

impl NodeCategory {
	/// Human-readable category name.
	pub fn label(self) -> &'static str {
		match self {
			Self::Frontend => "Frontend",
			Self::Backend => "Backend",
			Self::Database => "Database",
			Self::CloudService => "Cloud Service",
			Self::Cache => "Cache",
			Self::Payment => "Payment",
			Self::Api => "API",
		}
	}

	/// Short glyph painted in place of an icon.
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Frontend => "FE",
			Self::Backend => "BE",
			Self::Database => "DB",
			Self::CloudService => "AWS",
			Self::Cache => "C",
			Self::Payment => "$",
			Self::Api => "API",
		}
	}
}

/// Health reported for a service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeStatus {
	/// Serving normally.
	#[default]
	Healthy,
	/// Degraded but reachable.
	Warning,
	/// Failing requests.
	Error,
}

impl NodeStatus {
	/// Capitalised status name.
	pub fn label(self) -> &'static str {
		match self {
			Self::Healthy => "Healthy",
			Self::Warning => "Warning",
			Self::Error => "Error",
		}
	}

	/// Caption painted under the node label.
	pub fn caption(self) -> &'static str {
		match self {
			Self::Healthy => "Online",
			Self::Warning => "Warning",
			Self::Error => "Error",
		}
	}

	/// Stroke colour on the canvas.
	pub fn color(self) -> &'static str {
		match self {
			Self::Healthy => "#2dd4bf",
			Self::Warning => "#fb923c",
			Self::Error => "#f87171",
		}
	}
}

/// Footprint tier of an expanded node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeMode {
	/// Standard footprint.
	#[default]
	Normal,
	/// Larger footprint with bigger text.
	Enlarged,
}

impl SizeMode {
	/// The other size mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Normal => Self::Enlarged,
			Self::Enlarged => Self::Normal,
		}
	}
}

/// Descriptive payload shown in the detail panel. Never mutated at runtime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeMetadata {
	/// One-line summary of the service.
	pub description: String,
	/// Most recent request, as a display string.
	pub last_activity: String,
	/// Typical latency, e.g. `85ms`.
	pub response_time: String,
	/// Share of successful requests, e.g. `99.5%`.
	pub success_rate: String,
	/// Availability over the reporting window.
	pub uptime: String,
	/// Errors in the last 24 hours.
	pub error_count: u32,
	/// Routes, tables or functions the service exposes.
	pub endpoints: Vec<String>,
	/// Example request or response body.
	pub payload: Value,
}

/// Immutable identity of a service vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDefinition {
	/// Stable key used by edges and view state.
	pub id: String,
	/// Display name.
	pub label: String,
	/// Kind of service, which picks the glyph.
	pub category: NodeCategory,
	/// Current health.
	pub status: NodeStatus,
	/// Where the node sits when the canvas mounts.
	pub initial_position: Point,
	/// Ids of downstream services.
	pub outbound_links: Vec<String>,
	/// Detail panel content.
	pub metadata: NodeMetadata,
}

/// Directed, labeled data-flow link. Its index in
/// [`FlowDefinition::edges`] is its slot in the playback order.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeDefinition {
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
	/// Shown while the edge is active.
	pub label: String,
}

/// Every node and edge on the canvas. Immutable once mounted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowDefinition {
	/// In definition order, which is also paint order.
	pub nodes: Vec<NodeDefinition>,
	/// In playback order.
	pub edges: Vec<EdgeDefinition>,
}

impl FlowDefinition {
	/// Definition with the given id.
	pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

/// Mutable per-node view state, keyed by node id in the graph model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeViewState {
	/// Top-left corner in content space.
	pub position: Point,
	/// Normal or enlarged.
	pub size_mode: SizeMode,
	/// Collapsed to a small square.
	pub minimized: bool,
}

impl NodeViewState {
	/// Normal-sized and expanded at `position`.
	pub fn at(position: Point) -> Self {
		Self {
			position,
			..Self::default()
		}
	}
}

/// The per-node buttons painted in a node's top-right corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeControl {
	/// Collapse or expand.
	Minimize,
	/// Switch between normal and enlarged.
	Resize,
}
