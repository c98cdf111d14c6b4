use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, TouchList, WheelEvent,
	Window,
};

use super::config::CanvasConfig;
use super::detail::{NodeDetailPanel, NodeDetails};
use super::error::CanvasError;
use super::interaction::PointerOutcome;
use super::render;
use super::state::FlowCanvasState;
use super::timer::RepeatingTimer;
use super::types::{FlowDefinition, Point};

/// Browser resources tied to one canvas mount. Dropped when the component's
/// owner is disposed, which stops playback and the frame loop.
#[derive(Default)]
struct CanvasLifecycle {
	playback: Option<RepeatingTimer>,
	frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	frame_handle: Rc<Cell<i32>>,
	resize: Option<Closure<dyn FnMut()>>,
}

impl Drop for CanvasLifecycle {
	fn drop(&mut self) {
		self.playback = None;
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(self.frame_handle.get());
			if let Some(ref cb) = self.resize {
				let _ =
					window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		self.frame.borrow_mut().take();
		info!("flow canvas disposed");
	}
}

fn window() -> Result<Window, CanvasError> {
	web_sys::window().ok_or_else(|| CanvasError::Dom("no window".into()))
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, client_x: i32, client_y: i32) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		client_x as f64 - rect.left(),
		client_y as f64 - rect.top(),
	))
}

fn touch_point(canvas_ref: NodeRef<leptos::html::Canvas>, touches: &TouchList, i: u32) -> Option<Point> {
	let touch = touches.get(i)?;
	local_point(canvas_ref, touch.client_x(), touch.client_y())
}

fn start_canvas(
	canvas: HtmlCanvasElement,
	state: Rc<RefCell<FlowCanvasState>>,
	lifecycle: &mut CanvasLifecycle,
) -> Result<(), CanvasError> {
	let window = window()?;
	let (w, h) = parent_size(&canvas);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	state.borrow_mut().resize(w, h);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| CanvasError::Dom("2d context unavailable".into()))?
		.dyn_into()
		.map_err(|_| CanvasError::Dom("unexpected context type".into()))?;

	let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
	let resize = Closure::<dyn FnMut()>::new(move || {
		let (nw, nh) = parent_size(&canvas_resize);
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		state_resize.borrow_mut().resize(nw, nh);
	});
	window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
	lifecycle.resize = Some(resize);

	let (frame, frame_handle) = (lifecycle.frame.clone(), lifecycle.frame_handle.clone());
	let (frame_inner, handle_inner) = (frame.clone(), frame_handle.clone());
	*frame.borrow_mut() = Some(Closure::new(move || {
		{
			let mut s = state.borrow_mut();
			s.tick(0.016);
			render::render(&s, &ctx);
		}
		if let (Some(cb), Some(win)) = (frame_inner.borrow().as_ref(), web_sys::window()) {
			if let Ok(handle) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
				handle_inner.set(handle);
			}
		}
	}));
	if let Some(ref cb) = *frame.borrow() {
		frame_handle.set(window.request_animation_frame(cb.as_ref().unchecked_ref())?);
	}
	Ok(())
}

/// Interactive service-flow diagram. `playing` drives edge playback and each
/// `reset` notification restores the authored layout; drag, pan, zoom and
/// selection are handled internally.
#[component]
pub fn FlowCanvas(
	definition: Arc<FlowDefinition>,
	#[prop(into)] playing: Signal<bool>,
	#[prop(optional)] reset: Option<Trigger>,
	#[prop(optional)] config: Option<CanvasConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let (node_total, edge_total) = (definition.nodes.len(), definition.edges.len());
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(FlowCanvasState::new(
		definition.clone(),
		config,
		800.0,
		600.0,
	)));
	let lifecycle = StoredValue::new_local(CanvasLifecycle::default());
	let zoom = RwSignal::new(1.0_f64);
	let selected = RwSignal::new(None::<String>);

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		lifecycle.update_value(|l| {
			if let Err(err) = start_canvas(canvas, state_init.clone(), l) {
				error!("flow canvas failed to start: {err}");
			}
		});
	});

	let state_play = state.clone();
	Effect::new(move |_| {
		let on = playing.get();
		state_play.borrow_mut().set_playing(on);
		let state_tick = state_play.clone();
		lifecycle.update_value(|l| {
			l.playback = None;
			if !on {
				return;
			}
			let timer = RepeatingTimer::start(config.playback_interval_ms, move || {
				if let Some(edge) = state_tick.borrow_mut().sequencer.tick() {
					debug!("active edge {edge}");
				}
			});
			match timer {
				Ok(timer) => l.playback = Some(timer),
				Err(err) => error!("playback timer failed: {err}"),
			}
		});
		info!("playback {}", if on { "started" } else { "stopped" });
	});

	let state_dismiss = state.clone();
	Effect::new(move |_| {
		if selected.get().is_none() {
			state_dismiss.borrow_mut().interaction.dismiss();
		}
	});

	if let Some(reset) = reset {
		let state_reset = state.clone();
		Effect::new(move |prev: Option<()>| {
			reset.track();
			// The first run only subscribes.
			if prev.is_some() {
				let restored = {
					let mut s = state_reset.borrow_mut();
					s.reset();
					s.viewport.zoom()
				};
				zoom.set(restored);
				selected.set(None);
			}
		});
	}

	let handle_outcome = move |outcome: PointerOutcome| match outcome {
		PointerOutcome::Selected(id) => {
			info!("selected {id}");
			selected.set(Some(id));
		}
		PointerOutcome::Toggled { node, control } => debug!("{control:?} toggled on {node}"),
		PointerOutcome::Nothing => {}
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some(p) = local_point(canvas_ref, ev.client_x(), ev.client_y()) {
			state_md.borrow_mut().press(p);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some(p) = local_point(canvas_ref, ev.client_x(), ev.client_y()) {
			state_mm.borrow_mut().pointer_move(p);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let outcome = state_mu.borrow_mut().release();
		handle_outcome(outcome);
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		state_ml.borrow_mut().interaction.cancel();
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let mut s = state_wh.borrow_mut();
		s.wheel(ev.delta_y());
		zoom.set(s.viewport.zoom());
	};

	let state_ts = state.clone();
	let on_touchstart = move |ev: TouchEvent| {
		ev.prevent_default();
		let touches = ev.touches();
		let mut s = state_ts.borrow_mut();
		match touches.length() {
			1 => {
				if let Some(p) = touch_point(canvas_ref, &touches, 0) {
					s.press(p);
				}
			}
			2 => {
				s.interaction.cancel();
				if let (Some(a), Some(b)) = (
					touch_point(canvas_ref, &touches, 0),
					touch_point(canvas_ref, &touches, 1),
				) {
					s.pinch(a, b);
					zoom.set(s.viewport.zoom());
				}
			}
			_ => {}
		}
	};

	let state_tm = state.clone();
	let on_touchmove = move |ev: TouchEvent| {
		ev.prevent_default();
		let touches = ev.touches();
		let mut s = state_tm.borrow_mut();
		match touches.length() {
			1 => {
				if let Some(p) = touch_point(canvas_ref, &touches, 0) {
					s.pointer_move(p);
				}
			}
			2 => {
				if let (Some(a), Some(b)) = (
					touch_point(canvas_ref, &touches, 0),
					touch_point(canvas_ref, &touches, 1),
				) {
					s.pinch(a, b);
					zoom.set(s.viewport.zoom());
				}
			}
			_ => {}
		}
	};

	let state_te = state.clone();
	let on_touchend = move |ev: TouchEvent| {
		if ev.touches().length() > 0 {
			return;
		}
		let outcome = state_te.borrow_mut().release();
		handle_outcome(outcome);
	};

	let state_tc = state.clone();
	let on_touchcancel = move |_: TouchEvent| {
		state_tc.borrow_mut().interaction.cancel();
	};

	let details = Signal::derive(move || {
		selected
			.get()
			.and_then(|id| NodeDetails::from_definition(&definition, &id))
	});
	let on_close = Callback::new(move |_| selected.set(None));

	view! {
		<div class="flow-canvas">
			<canvas
				node_ref=canvas_ref
				class="flow-canvas-surface"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				on:touchstart=on_touchstart
				on:touchmove=on_touchmove
				on:touchend=on_touchend
				on:touchcancel=on_touchcancel
			/>

			<div class="canvas-overlay legend">
				<h4>"Flow Controls"</h4>
				<div class="legend-row">
					<span class="swatch active" />
					<span class="muted">"Active Data Flow"</span>
				</div>
				<div class="legend-row">
					<span class="swatch idle" />
					<span class="muted">"Available Connection"</span>
				</div>
				<ul class="hints muted">
					<li>"Scroll to zoom"</li>
					<li>"Pinch to zoom (mobile)"</li>
					<li>"Drag background to pan"</li>
					<li>"Click node for details"</li>
				</ul>
				<div class="legend-row split">
					<span class="muted">"Zoom:"</span>
					<span class="mono">{move || format!("{}%", (zoom.get() * 100.0).round())}</span>
				</div>
			</div>

			<div class="canvas-overlay stats">
				<h4>"Flow Statistics"</h4>
				<div class="legend-row split">
					<span class="muted">"Active Flows:"</span>
					<span class="accent">{move || if playing.get() { 1 } else { 0 }}</span>
				</div>
				<div class="legend-row split">
					<span class="muted">"Total Nodes:"</span>
					<span>{node_total}</span>
				</div>
				<div class="legend-row split">
					<span class="muted">"Connections:"</span>
					<span>{edge_total}</span>
				</div>
			</div>
		</div>

		<NodeDetailPanel details=details on_close=on_close />
	}
}
