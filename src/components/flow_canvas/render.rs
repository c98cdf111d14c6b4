use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::config::CONTROL_SIZE;
use super::model::{ResolvedEdge, control_rect, dimensions_of};
use super::state::FlowCanvasState;
use super::types::{Bounds, NodeControl, NodeDefinition, NodeStatus, NodeViewState, SizeMode};

const BACKGROUND: &str = "#0b1120";
const GRID_DOT: &str = "rgba(148, 163, 184, 0.12)";
const GRID_SPACING: f64 = 20.0;
const EDGE_IDLE: &str = "#475569";
const EDGE_ACTIVE: &str = "#14b8a6";
const CORNER_RADIUS: f64 = 8.0;
/// Seconds for the marker to travel the full length of the active edge.
const MARKER_PERIOD: f64 = 0.8;

fn status_tint(status: NodeStatus) -> &'static str {
	match status {
		NodeStatus::Healthy => "rgba(45, 212, 191, 0.10)",
		NodeStatus::Warning => "rgba(251, 146, 60, 0.10)",
		NodeStatus::Error => "rgba(248, 113, 113, 0.10)",
	}
}

pub fn render(state: &FlowCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let (pan, zoom) = (state.viewport.pan(), state.viewport.zoom());
	let _ = ctx.translate(pan.x, pan.y);
	let _ = ctx.scale(zoom, zoom);
	draw_grid(
		ctx,
		state
			.model
			.bounding_box(state.config.bounds_margin, state.config.empty_bounds),
	);
	for edge in state.model.resolved_edges() {
		draw_edge(ctx, &edge, state.sequencer.is_active(edge.index), state.flow_time);
	}
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_grid(ctx: &CanvasRenderingContext2d, bounds: Bounds) {
	ctx.set_fill_style_str(GRID_DOT);
	let mut y = (bounds.min_y / GRID_SPACING).floor() * GRID_SPACING;
	while y <= bounds.max_y {
		let mut x = (bounds.min_x / GRID_SPACING).floor() * GRID_SPACING;
		while x <= bounds.max_x {
			ctx.fill_rect(x, y, 1.0, 1.0);
			x += GRID_SPACING;
		}
		y += GRID_SPACING;
	}
}

fn draw_edge(ctx: &CanvasRenderingContext2d, edge: &ResolvedEdge<'_>, active: bool, flow_time: f64) {
	let (start, end) = (edge.start, edge.end);
	let color = if active { EDGE_ACTIVE } else { EDGE_IDLE };

	ctx.set_stroke_style_str(color);
	ctx.set_line_width(if active { 3.0 } else { 2.0 });
	let dash = if active {
		js_sys::Array::new()
	} else {
		js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0))
	};
	let _ = ctx.set_line_dash(&dash);
	ctx.begin_path();
	ctx.move_to(start.x, start.y);
	ctx.line_to(end.x, end.y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	ctx.set_fill_style_str(color);
	ctx.begin_path();
	ctx.move_to(end.x - 8.0, end.y - 5.0);
	ctx.line_to(end.x - 8.0, end.y + 5.0);
	ctx.line_to(end.x, end.y);
	ctx.close_path();
	ctx.fill();

	if !active {
		return;
	}

	ctx.set_font("500 12px sans-serif");
	ctx.set_text_align("center");
	let _ = ctx.fill_text(
		&edge.edge.label,
		(start.x + end.x) / 2.0,
		(start.y + end.y) / 2.0 - 10.0,
	);

	let t = (flow_time % MARKER_PERIOD) / MARKER_PERIOD;
	let marker = start + (end - start) * t;
	ctx.set_global_alpha(0.8);
	ctx.begin_path();
	let _ = ctx.arc(marker.x, marker.y, 3.0, 0.0, 2.0 * PI);
	ctx.fill();
	ctx.set_global_alpha(1.0);
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, b: Bounds, r: f64) {
	ctx.begin_path();
	ctx.move_to(b.min_x + r, b.min_y);
	let _ = ctx.arc_to(b.max_x, b.min_y, b.max_x, b.max_y, r);
	let _ = ctx.arc_to(b.max_x, b.max_y, b.min_x, b.max_y, r);
	let _ = ctx.arc_to(b.min_x, b.max_y, b.min_x, b.min_y, r);
	let _ = ctx.arc_to(b.min_x, b.min_y, b.max_x, b.min_y, r);
	ctx.close_path();
}

fn draw_nodes(state: &FlowCanvasState, ctx: &CanvasRenderingContext2d) {
	let (dragged, hovered) = (state.interaction.dragged(), state.interaction.hovered());
	for (def, view) in state.model.nodes() {
		if Some(def.id.as_str()) != dragged {
			draw_node(ctx, def, view, hovered == Some(def.id.as_str()), false);
		}
	}
	// The dragged node is painted last so it stays on top.
	if let Some(id) = dragged {
		if let (Some(def), Some(view)) = (state.model.definition().node(id), state.model.view(id)) {
			draw_node(ctx, def, view, true, true);
		}
	}
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	def: &NodeDefinition,
	view: &NodeViewState,
	hovered: bool,
	lifted: bool,
) {
	let size = dimensions_of(view);
	let (x, y) = (view.position.x, view.position.y);
	let bounds = Bounds {
		min_x: x,
		min_y: y,
		max_x: x + size.width,
		max_y: y + size.height,
	};
	let accent = def.status.color();

	ctx.save();
	if lifted {
		ctx.set_shadow_color("rgba(0, 0, 0, 0.6)");
		ctx.set_shadow_blur(24.0);
	}
	rounded_rect(ctx, bounds, CORNER_RADIUS);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill();
	ctx.restore();

	rounded_rect(ctx, bounds, CORNER_RADIUS);
	ctx.set_fill_style_str(status_tint(def.status));
	ctx.fill();
	ctx.set_stroke_style_str(accent);
	ctx.set_line_width(2.0);
	ctx.stroke();

	ctx.set_fill_style_str(accent);
	ctx.set_text_baseline("middle");
	ctx.set_font("bold 11px sans-serif");
	if view.minimized {
		ctx.set_text_align("center");
		let _ = ctx.fill_text(def.category.glyph(), x + size.width / 2.0, y + size.height / 2.0);
	} else {
		let large = view.size_mode == SizeMode::Enlarged;
		ctx.set_text_align("left");
		let _ = ctx.fill_text(def.category.glyph(), x + 16.0, y + size.height / 2.0);

		let text_x = x + 52.0;
		ctx.set_fill_style_str("#e2e8f0");
		ctx.set_font(if large { "500 16px sans-serif" } else { "500 14px sans-serif" });
		let _ = ctx.fill_text(&def.label, text_x, y + size.height / 2.0 - 9.0);
		ctx.set_fill_style_str(accent);
		ctx.set_font(if large { "14px sans-serif" } else { "12px sans-serif" });
		let _ = ctx.fill_text(def.status.caption(), text_x, y + size.height / 2.0 + 10.0);
	}
	ctx.set_text_baseline("alphabetic");

	draw_controls(ctx, view, hovered);
}

fn draw_controls(ctx: &CanvasRenderingContext2d, view: &NodeViewState, hovered: bool) {
	ctx.set_global_alpha(if hovered { 1.0 } else { 0.3 });
	for control in [NodeControl::Minimize, NodeControl::Resize] {
		let Some(r) = control_rect(view, control) else {
			continue;
		};
		rounded_rect(ctx, r, 3.0);
		ctx.set_fill_style_str("#1e293b");
		ctx.fill();

		ctx.set_stroke_style_str("#94a3b8");
		ctx.set_line_width(1.0);
		let (cx, cy) = (r.min_x + CONTROL_SIZE / 2.0, r.min_y + CONTROL_SIZE / 2.0);
		ctx.begin_path();
		match control {
			NodeControl::Minimize => {
				ctx.move_to(cx - 4.0, cy);
				ctx.line_to(cx + 4.0, cy);
				if view.minimized {
					ctx.move_to(cx, cy - 4.0);
					ctx.line_to(cx, cy + 4.0);
				}
			}
			NodeControl::Resize => {
				let half = match view.size_mode {
					SizeMode::Normal => 3.0,
					SizeMode::Enlarged => 4.5,
				};
				ctx.rect(cx - half, cy - half, half * 2.0, half * 2.0);
			}
		}
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}
