use leptos::prelude::*;
use serde_json::Value;

use super::types::{FlowDefinition, NodeStatus};

const PLACEHOLDER: &str = "n/a";

/// Display-ready snapshot of one node's static metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetails {
	/// Service name, or a placeholder.
	pub title: String,
	/// Category display name.
	pub category: &'static str,
	/// Short icon text for the category.
	pub glyph: &'static str,
	/// One-line summary.
	pub description: String,
	/// Current health.
	pub status: NodeStatus,
	/// Typical latency.
	pub response_time: String,
	/// Share of successful requests.
	pub success_rate: String,
	/// Availability.
	pub uptime: String,
	/// Most recent request.
	pub last_activity: String,
	/// Errors in the last 24 hours.
	pub error_count: u32,
	/// Exposed routes or resources.
	pub endpoints: Vec<String>,
	/// Pretty-printed sample payload.
	pub payload: String,
	/// Display labels of linked services that exist.
	pub connections: Vec<String>,
}

/// `nodejs-backend` -> `Nodejs Backend`.
pub fn connection_label(id: &str) -> String {
	id.split('-')
		.filter(|w| !w.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}

fn or_placeholder(s: &str) -> String {
	if s.trim().is_empty() {
		PLACEHOLDER.to_owned()
	} else {
		s.to_owned()
	}
}

/// Two-space indented JSON; a null payload shows as `{}`.
pub fn format_payload(payload: &Value) -> String {
	match payload {
		Value::Null => "{}".to_owned(),
		other => serde_json::to_string_pretty(other).unwrap_or_else(|_| "{}".to_owned()),
	}
}

impl NodeDetails {
	/// Snapshot for `id`, or `None` when the node is unknown.
	pub fn from_definition(definition: &FlowDefinition, id: &str) -> Option<Self> {
		let node = definition.node(id)?;
		let meta = &node.metadata;
		Some(Self {
			title: or_placeholder(&node.label),
			category: node.category.label(),
			glyph: node.category.glyph(),
			description: meta.description.clone(),
			status: node.status,
			response_time: or_placeholder(&meta.response_time),
			success_rate: or_placeholder(&meta.success_rate),
			uptime: or_placeholder(&meta.uptime),
			last_activity: or_placeholder(&meta.last_activity),
			error_count: meta.error_count,
			endpoints: meta.endpoints.clone(),
			payload: format_payload(&meta.payload),
			connections: node
				.outbound_links
				.iter()
				.filter(|target| definition.node(target).is_some())
				.map(|target| connection_label(target))
				.collect(),
		})
	}
}

fn status_class(status: NodeStatus) -> &'static str {
	match status {
		NodeStatus::Healthy => "text-healthy",
		NodeStatus::Warning => "text-warning",
		NodeStatus::Error => "text-error",
	}
}

/// Overlay with a node's metadata. Renders nothing while `details` is `None`.
#[component]
pub fn NodeDetailPanel(
	#[prop(into)] details: Signal<Option<NodeDetails>>,
	on_close: Callback<()>,
) -> impl IntoView {
	move || {
		details.get().map(|d| {
			let status = d.status;
			view! {
				<div class="modal-backdrop">
					<div class="modal node-details">
						<header class="modal-header">
							<div class="modal-title">
								<span class=format!("node-glyph {}", status_class(status))>{d.glyph}</span>
								<div>
									<h2>{d.title}</h2>
									<p class="muted">{d.description}</p>
								</div>
							</div>
							<button class="icon-button" title="Close" on:click=move |_| on_close.run(())>
								"✕"
							</button>
						</header>

						<div class="modal-body">
							<div class="stat-grid">
								<div class="stat">
									<span class="stat-label">"Status"</span>
									<p class=format!("stat-value {}", status_class(status))>{status.label()}</p>
								</div>
								<div class="stat">
									<span class="stat-label">"Response"</span>
									<p class="stat-value accent">{d.response_time}</p>
								</div>
								<div class="stat">
									<span class="stat-label">"Success Rate"</span>
									<p class="stat-value accent">{d.success_rate}</p>
								</div>
								<div class="stat">
									<span class="stat-label">"Uptime"</span>
									<p class="stat-value accent">{d.uptime}</p>
								</div>
							</div>

							<div class="two-column">
								<section>
									<h3>"Recent Activity"</h3>
									<div class="panel">
										<span class="muted">"Last Request:"</span>
										<p class="mono">{d.last_activity}</p>
										<span class="muted">"Error Count (24h):"</span>
										<p class="strong">{d.error_count}</p>
									</div>
								</section>
								<section>
									<h3>"Endpoints"</h3>
									<ul class="panel endpoint-list">
										{d
											.endpoints
											.into_iter()
											.map(|endpoint| view! { <li class="mono">{endpoint}</li> })
											.collect_view()}
									</ul>
								</section>
							</div>

							<section>
								<h3>"Sample Payload"</h3>
								<pre class="panel payload">{d.payload}</pre>
							</section>

							<section>
								<h3>"Connected Services"</h3>
								<div class="chips">
									{d
										.connections
										.into_iter()
										.map(|label| view! { <span class="chip">{label}</span> })
										.collect_view()}
								</div>
							</section>
						</div>
					</div>
				</div>
			}
		})
	}
}
