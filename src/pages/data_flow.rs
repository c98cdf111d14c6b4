use leptos::prelude::*;

use crate::components::activity_log::DataFlowMonitor;

#[component]
pub fn DataFlow() -> impl IntoView {
	view! {
		<div class="page">
			<header class="page-header">
				<h1>"Data Flow Monitoring"</h1>
				<p class="muted">"Real-time tracking of data flow between system components"</p>
			</header>

			<DataFlowMonitor show_header=false />

			<div class="stat-grid">
				<div class="card stat centered">
					<p class="stat-value accent">"847"</p>
					<p class="muted">"Total Requests"</p>
				</div>
				<div class="card stat centered">
					<p class="stat-value accent">"98.5%"</p>
					<p class="muted">"Success Rate"</p>
				</div>
				<div class="card stat centered">
					<p class="stat-value accent">"125ms"</p>
					<p class="muted">"Avg Response"</p>
				</div>
				<div class="card stat centered">
					<p class="stat-value accent">"24"</p>
					<p class="muted">"Active Flows"</p>
				</div>
			</div>
		</div>
	}
}
