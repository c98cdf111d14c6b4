use std::sync::Arc;

use leptos::prelude::*;
use log::{error, info};

use crate::components::flow_canvas::{FlowCanvas, RepeatingTimer};
use crate::data::{reference_topology, status_counts};

const CLOCK_INTERVAL_MS: u32 = 60_000;

fn local_time() -> String {
	js_sys::Date::new_0()
		.to_locale_time_string("en-US")
		.as_string()
		.unwrap_or_default()
}

/// Interactive flow diagram with playback controls and a status bar.
#[component]
pub fn SystemFlow() -> impl IntoView {
	let topology = Arc::new(reference_topology());
	let (healthy, warnings, errors) = status_counts(&topology);
	let playing = RwSignal::new(false);
	let last_updated = RwSignal::new(String::new());

	// Dropped with the page, which clears the interval.
	let clock = StoredValue::new_local(None::<RepeatingTimer>);
	Effect::new(move |_| {
		last_updated.set(local_time());
		match RepeatingTimer::start(CLOCK_INTERVAL_MS, move || last_updated.set(local_time())) {
			Ok(timer) => clock.set_value(Some(timer)),
			Err(err) => error!("clock timer failed: {err}"),
		}
	});

	let toggle = move |_| {
		playing.update(|p| *p = !*p);
		info!("playback toggled");
	};
	let layout_reset = Trigger::new();
	let reset = move |_| {
		playing.set(false);
		layout_reset.notify();
	};

	view! {
		<div class="page page-fill">
			<header class="page-header row spread">
				<div>
					<h1>"System Flow Diagram"</h1>
					<p class="muted">"Interactive visualization of your data flow"</p>
				</div>
				<div class="row">
					<button
						class="button"
						class:button-active=move || playing.get()
						title=move || if playing.get() { "Pause" } else { "Play" }
						on:click=toggle
					>
						{move || if playing.get() { "❚❚" } else { "▶" }}
					</button>
					<button class="button" title="Reset" on:click=reset>
						"↺"
					</button>
				</div>
			</header>

			<div class="canvas-host">
				<FlowCanvas definition=topology playing=playing reset=layout_reset />
			</div>

			<footer class="status-bar row spread">
				<div class="row">
					<span class="text-healthy">{format!("{healthy} Healthy")}</span>
					<span class="text-error">{format!("{errors} Errors")}</span>
					<span class="text-warning">{format!("{warnings} Warnings")}</span>
				</div>
				<div class="muted">"Last updated: " <span class="strong">{move || last_updated.get()}</span></div>
			</footer>
		</div>
	}
}
