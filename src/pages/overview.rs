use leptos::prelude::*;

use crate::components::activity_log::DataFlowMonitor;
use crate::components::flow_canvas::NodeStatus;
use crate::data::reference_topology;

struct Metric {
	title: &'static str,
	value: &'static str,
	subtitle: &'static str,
	change: &'static str,
}

const METRICS: &[Metric] = &[
	Metric {
		title: "System Health",
		value: "12/14",
		subtitle: "Nodes Online",
		change: "+2% from yesterday",
	},
	Metric {
		title: "Success Rate",
		value: "66.7%",
		subtitle: "Requests Successful",
		change: "+0.5% from last hour",
	},
	Metric {
		title: "Response Time",
		value: "142ms",
		subtitle: "Average Response",
		change: "-15ms from last hour",
	},
	Metric {
		title: "Active Errors",
		value: "0",
		subtitle: "Critical Issues",
		change: "No active errors",
	},
];

fn status_badge(status: NodeStatus) -> &'static str {
	match status {
		NodeStatus::Healthy => "badge badge-ok",
		NodeStatus::Warning => "badge badge-high",
		NodeStatus::Error => "badge badge-critical",
	}
}

/// Landing page: headline metrics, per-service health and recent traffic.
#[component]
pub fn Overview() -> impl IntoView {
	let services = reference_topology()
		.nodes
		.into_iter()
		.map(|node| {
			view! {
				<div class="service-row">
					<div>
						<p class="strong">{node.label}</p>
						<p class="muted small">{node.category.label()}</p>
					</div>
					<span class=status_badge(node.status)>{node.status.label()}</span>
					<span class="mono">{node.metadata.response_time}</span>
					<span class="mono accent">{node.metadata.success_rate}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="page">
			<header class="page-header">
				<h1>"Overview"</h1>
				<p class="muted">"Health of every monitored service at a glance"</p>
			</header>

			<div class="stat-grid">
				{METRICS
					.iter()
					.map(|m| {
						view! {
							<div class="card stat">
								<span class="stat-label">{m.title}</span>
								<p class="stat-value accent">{m.value}</p>
								<p class="muted small">{m.subtitle}</p>
								<p class="accent small">{m.change}</p>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="two-column">
				<div class="card">
					<header class="card-header">
						<h3>"System Components"</h3>
					</header>
					<div class="card-body">{services}</div>
				</div>
				<DataFlowMonitor max_items=5 />
			</div>
		</div>
	}
}
