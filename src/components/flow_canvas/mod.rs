//! Interactive service-flow canvas: graph model, viewport, gesture routing,
//! edge playback and the node detail overlay.

mod component;
/// Size constants and tunables.
pub mod config;
/// Selected-node overlay.
pub mod detail;
/// Failures of model mutations and browser setup.
pub mod error;
/// Pointer gesture routing.
pub mod interaction;
/// Graph model.
pub mod model;
mod render;
/// Edge playback.
pub mod sequencer;
/// Per-mount canvas state.
pub mod state;
mod timer;
/// Definition and view-state types.
pub mod types;
/// Pan and zoom transform.
pub mod viewport;

pub use component::FlowCanvas;
pub use config::CanvasConfig;
pub use error::CanvasError;
pub use timer::RepeatingTimer;
pub use types::{
	EdgeDefinition, FlowDefinition, NodeCategory, NodeDefinition, NodeMetadata, NodeStatus, Point,
};
