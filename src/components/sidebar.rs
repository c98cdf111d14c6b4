use leptos::prelude::*;
use leptos_router::components::A;

const NAVIGATION: &[(&str, &str)] = &[
	("Overview", "/overview"),
	("System Flow", "/system-flow"),
	("Data Flow", "/data-flow"),
	("Error Logs", "/error-logs"),
	("Analytics", "/analytics"),
];

/// Navigation rail with a small status summary.
#[component]
pub fn Sidebar(active_nodes: usize, total_nodes: usize) -> impl IntoView {
	view! {
		<aside class="sidebar">
			<div class="brand">
				<span class="brand-mark">"⚡"</span>
				<span>"System Flow Monitor"</span>
			</div>

			<nav>
				<h3 class="nav-section">"Monitoring"</h3>
				{NAVIGATION
					.iter()
					.map(|(name, href)| view! { <A href=*href attr:class="nav-link">{*name}</A> })
					.collect_view()}
			</nav>

			<div class="system-status">
				<h4>"System Status"</h4>
				<div class="legend-row split">
					<span class="muted small">"Uptime"</span>
					<span class="accent small">"99.9%"</span>
				</div>
				<div class="legend-row split">
					<span class="muted small">"Active Nodes"</span>
					<span class="small">{format!("{active_nodes}/{total_nodes}")}</span>
				</div>
			</div>
		</aside>
	}
}
