use thiserror::Error;

/// Failures surfaced by the flow canvas.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
	/// A mutation named a node that is not in the model.
	#[error("no node with id `{0}`")]
	UnknownNode(String),
	/// A browser API was unavailable or refused the call.
	#[error("browser API unavailable: {0}")]
	Dom(String),
}

impl From<wasm_bindgen::JsValue> for CanvasError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Dom(format!("{value:?}"))
	}
}
