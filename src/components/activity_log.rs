use leptos::prelude::*;

use crate::data::{FLOW_LOG, FlowLogEntry};

/// Entries to show; `None` or a zero limit shows everything.
pub fn visible_entries(entries: &[FlowLogEntry], max_items: Option<usize>) -> &[FlowLogEntry] {
	match max_items {
		Some(n) if n > 0 => &entries[..n.min(entries.len())],
		_ => entries,
	}
}

/// Recent inter-service requests.
#[component]
pub fn DataFlowMonitor(
	#[prop(default = "Recent Data Flow".into(), into)] title: String,
	#[prop(optional)] max_items: Option<usize>,
	#[prop(default = true)] show_header: bool,
) -> impl IntoView {
	let rows = visible_entries(FLOW_LOG, max_items)
		.iter()
		.map(|log| {
			view! {
				<div class="flow-log-row">
					<span class="text-healthy">"✓"</span>
					<div class="flow-log-main">
						<div class="flow-log-route">
							<span class="strong">{log.source}</span>
							<span class="muted">"→"</span>
							<span class="strong">{log.target}</span>
						</div>
						<p class="muted">{log.description}</p>
						<span class="muted small">"Request ID: " {log.request_id}</span>
					</div>
					<div class="flow-log-meta">
						<span class="badge badge-ok">{log.response_time}</span>
						<span class="muted small">{log.timestamp}</span>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="card">
			{show_header
				.then(|| {
					view! {
						<header class="card-header">
							<h3>{title}</h3>
						</header>
					}
				})}
			<div class="card-body flow-log">{rows}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn limits_and_zero_means_all() {
		assert_eq!(visible_entries(FLOW_LOG, Some(5)).len(), 5);
		assert_eq!(visible_entries(FLOW_LOG, Some(0)).len(), FLOW_LOG.len());
		assert_eq!(visible_entries(FLOW_LOG, None).len(), FLOW_LOG.len());
		assert_eq!(visible_entries(FLOW_LOG, Some(100)).len(), FLOW_LOG.len());
		assert_eq!(visible_entries(FLOW_LOG, Some(1))[0].id, "req_010");
	}
}
