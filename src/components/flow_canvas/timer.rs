use log::debug;
use wasm_bindgen::prelude::*;

use super::error::CanvasError;

/// An owned `setInterval` registration. Dropping it clears the interval and
/// frees the callback, so a timer never outlives whatever holds it.
pub struct RepeatingTimer {
	handle: i32,
	_callback: Closure<dyn FnMut()>,
}

impl RepeatingTimer {
	/// Registers `callback` every `interval_ms` milliseconds.
	pub fn start(interval_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, CanvasError> {
		let window = web_sys::window().ok_or_else(|| CanvasError::Dom("no window".into()))?;
		let callback = Closure::<dyn FnMut()>::new(callback);
		let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
			callback.as_ref().unchecked_ref(),
			interval_ms as i32,
		)?;
		debug!("interval {handle} started every {interval_ms}ms");
		Ok(Self {
			handle,
			_callback: callback,
		})
	}
}

impl Drop for RepeatingTimer {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			window.clear_interval_with_handle(self.handle);
			debug!("interval {} cleared", self.handle);
		}
	}
}
