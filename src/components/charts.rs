//! Small SVG charts for literal series: trend lines, filled areas and a
//! donut. Geometry is kept in plain functions so it can be checked natively.

use std::f64::consts::PI;
use std::fmt::Write;

use leptos::prelude::*;

use crate::data::analytics::HealthSlice;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 240.0;
const PAD_LEFT: f64 = 44.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
const GRID_LINES: usize = 4;

/// Rounds `max` up to a readable axis limit (1, 2 or 5 times a power of ten).
pub fn nice_ceiling(max: f64) -> f64 {
	if !max.is_finite() || max <= 0.0 {
		return 1.0;
	}
	let magnitude = 10f64.powf(max.log10().floor());
	[1.0, 2.0, 5.0, 10.0]
		.into_iter()
		.map(|m| m * magnitude)
		.find(|limit| *limit >= max)
		.unwrap_or(10.0 * magnitude)
}

/// Maps sample index and value into the chart's drawing box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
	/// Axis limit after rounding.
	pub y_max: f64,
	/// Number of x positions.
	pub samples: usize,
}

impl Plot {
	/// `y_max` is rounded up with [`nice_ceiling`].
	pub fn new(y_max: f64, samples: usize) -> Self {
		Self {
			y_max: nice_ceiling(y_max),
			samples,
		}
	}

	/// Horizontal position of sample `i`; a lone sample is centred.
	pub fn x(&self, i: usize) -> f64 {
		let span = WIDTH - PAD_LEFT - PAD_RIGHT;
		match self.samples {
			0 | 1 => PAD_LEFT + span / 2.0,
			n => PAD_LEFT + span * i as f64 / (n - 1) as f64,
		}
	}

	/// Vertical position of `value`, clamped to the plot.
	pub fn y(&self, value: f64) -> f64 {
		let span = HEIGHT - PAD_TOP - PAD_BOTTOM;
		HEIGHT - PAD_BOTTOM - span * (value / self.y_max).clamp(0.0, 1.0)
	}

	/// Pixel row of the zero line.
	pub fn baseline(&self) -> f64 {
		HEIGHT - PAD_BOTTOM
	}
}

/// SVG `points` attribute for a polyline through `values`.
pub fn line_points(plot: &Plot, values: &[f64]) -> String {
	values
		.iter()
		.enumerate()
		.map(|(i, v)| format!("{:.1},{:.1}", plot.x(i), plot.y(*v)))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Closed SVG path filling the region between `values` and the baseline.
pub fn area_path(plot: &Plot, values: &[f64]) -> String {
	let Some(last) = values.len().checked_sub(1) else {
		return String::new();
	};
	let mut d = format!("M{:.1},{:.1}", plot.x(0), plot.baseline());
	for (i, v) in values.iter().enumerate() {
		let _ = write!(d, " L{:.1},{:.1}", plot.x(i), plot.y(*v));
	}
	let _ = write!(d, " L{:.1},{:.1} Z", plot.x(last), plot.baseline());
	d
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
	(cx + r * angle.cos(), cy + r * angle.sin())
}

/// One ring segment per value, clockwise from twelve o'clock, separated by
/// `pad` radians.
pub fn donut_arcs(values: &[f64], center: (f64, f64), inner: f64, outer: f64, pad: f64) -> Vec<String> {
	let total: f64 = values.iter().sum();
	if total <= 0.0 {
		return Vec::new();
	}
	let (cx, cy) = center;
	let mut start = -PI / 2.0;
	values
		.iter()
		.map(|v| {
			let sweep = 2.0 * PI * v / total;
			let (a0, a1) = (start + pad / 2.0, start + (sweep - pad / 2.0).max(pad / 2.0));
			start += sweep;
			let large = i32::from(a1 - a0 > PI);
			let (ox0, oy0) = polar(cx, cy, outer, a0);
			let (ox1, oy1) = polar(cx, cy, outer, a1);
			let (ix1, iy1) = polar(cx, cy, inner, a1);
			let (ix0, iy0) = polar(cx, cy, inner, a0);
			format!(
				"M{ox0:.2},{oy0:.2} A{outer},{outer} 0 {large} 1 {ox1:.2},{oy1:.2} \
				 L{ix1:.2},{iy1:.2} A{inner},{inner} 0 {large} 0 {ix0:.2},{iy0:.2} Z"
			)
		})
		.collect()
}

/// A named series drawn in one colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
	/// Legend text.
	pub name: &'static str,
	/// Stroke and fill colour.
	pub color: &'static str,
	/// One value per x label.
	pub values: Vec<f64>,
}

fn axes(plot: Plot, labels: &[&'static str]) -> impl IntoView + use<> {
	let grid = (0..=GRID_LINES)
		.map(|k| {
			let value = plot.y_max * k as f64 / GRID_LINES as f64;
			let y = plot.y(value);
			view! {
				<line
					x1=PAD_LEFT.to_string()
					x2=(WIDTH - PAD_RIGHT).to_string()
					y1=y.to_string()
					y2=y.to_string()
					class="chart-grid"
				/>
				<text
					x=(PAD_LEFT - 6.0).to_string()
					y=(y + 4.0).to_string()
					text-anchor="end"
					class="chart-tick"
				>
					{value.round().to_string()}
				</text>
			}
		})
		.collect_view();
	let ticks = labels
		.iter()
		.enumerate()
		.map(|(i, label)| {
			view! {
				<text
					x=plot.x(i).to_string()
					y=(HEIGHT - 8.0).to_string()
					text-anchor="middle"
					class="chart-tick"
				>
					{*label}
				</text>
			}
		})
		.collect_view();
	view! {
		{grid}
		{ticks}
	}
}

fn legend(series: &[Series]) -> impl IntoView + use<> {
	let items = series
		.iter()
		.map(|s| {
			view! {
				<span class="legend-row">
					<span class="dot" style:background-color=s.color />
					<span class="muted small">{s.name}</span>
				</span>
			}
		})
		.collect_view();
	view! { <div class="row chart-legend">{items}</div> }
}

/// Trend lines over shared x labels. With `filled`, each series is drawn as a
/// translucent area instead.
#[component]
pub fn TrendChart(labels: Vec<&'static str>, series: Vec<Series>, #[prop(optional)] filled: bool) -> impl IntoView {
	let peak = series
		.iter()
		.flat_map(|s| s.values.iter().copied())
		.fold(0.0, f64::max);
	let plot = Plot::new(peak, labels.len());
	let marks = series
		.iter()
		.map(|s| {
			if filled {
				view! {
					<path d=area_path(&plot, &s.values) fill=s.color fill-opacity="0.6" stroke=s.color />
				}
				.into_any()
			} else {
				view! {
					<polyline points=line_points(&plot, &s.values) fill="none" stroke=s.color stroke-width="2" />
				}
				.into_any()
			}
		})
		.collect_view();

	view! {
		<svg class="chart" viewBox=format!("0 0 {WIDTH} {HEIGHT}")>
			{axes(plot, &labels)}
			{marks}
		</svg>
		{legend(&series)}
	}
}

/// Ring chart of percentage shares.
#[component]
pub fn DonutChart(slices: &'static [HealthSlice]) -> impl IntoView {
	let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
	let arcs = donut_arcs(&values, (100.0, 100.0), 40.0, 80.0, 5f64.to_radians())
		.into_iter()
		.zip(slices)
		.map(|(d, slice)| view! { <path d=d fill=slice.color /> })
		.collect_view();
	view! { <svg class="chart donut" viewBox="0 0 200 200">{arcs}</svg> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ceilings_are_round() {
		assert_eq!(nice_ceiling(92.0), 100.0);
		assert_eq!(nice_ceiling(220.0), 500.0);
		assert_eq!(nice_ceiling(3200.0), 5000.0);
		assert_eq!(nice_ceiling(15.0), 20.0);
		assert_eq!(nice_ceiling(100.0), 100.0);
		assert_eq!(nice_ceiling(0.0), 1.0);
	}

	#[test]
	fn line_spans_the_plot() {
		let plot = Plot::new(100.0, 3);
		let points = line_points(&plot, &[0.0, 50.0, 100.0]);
		let first = format!("{:.1},{:.1}", PAD_LEFT, HEIGHT - PAD_BOTTOM);
		let last = format!("{:.1},{:.1}", WIDTH - PAD_RIGHT, PAD_TOP);
		assert!(points.starts_with(&first), "{points}");
		assert!(points.ends_with(&last), "{points}");
		assert_eq!(points.split(' ').count(), 3);
	}

	#[test]
	fn area_closes_on_the_baseline() {
		let plot = Plot::new(10.0, 2);
		let d = area_path(&plot, &[5.0, 10.0]);
		assert!(d.starts_with(&format!("M{:.1},{:.1}", PAD_LEFT, plot.baseline())));
		assert!(d.ends_with(&format!("L{:.1},{:.1} Z", WIDTH - PAD_RIGHT, plot.baseline())));
		assert_eq!(area_path(&plot, &[]), "");
	}

	#[test]
	fn donut_has_one_arc_per_share() {
		let arcs = donut_arcs(&[85.0, 12.0, 3.0], (100.0, 100.0), 40.0, 80.0, 0.05);
		assert_eq!(arcs.len(), 3);
		// Only the dominant share sweeps past half the ring.
		assert!(arcs[0].contains(" 0 1 1 "), "{}", arcs[0]);
		assert!(arcs[1].contains(" 0 0 1 "), "{}", arcs[1]);
		assert!(donut_arcs(&[0.0, 0.0], (0.0, 0.0), 1.0, 2.0, 0.0).is_empty());
	}
}
