use leptos::prelude::*;

use crate::components::charts::{DonutChart, Series, TrendChart};
use crate::data::analytics::{
	ANALYTICS_METRICS, ENDPOINTS, PERFORMANCE, SYSTEM_HEALTH, TRAFFIC, group_thousands,
};

fn performance_series() -> Vec<Series> {
	vec![
		Series {
			name: "CPU %",
			color: "#3b82f6",
			values: PERFORMANCE.iter().map(|p| p.cpu).collect(),
		},
		Series {
			name: "Memory %",
			color: "#10b981",
			values: PERFORMANCE.iter().map(|p| p.memory).collect(),
		},
		Series {
			name: "Response (ms)",
			color: "#f59e0b",
			values: PERFORMANCE.iter().map(|p| p.response).collect(),
		},
	]
}

fn traffic_series() -> Vec<Series> {
	vec![
		Series {
			name: "Requests",
			color: "#8b5cf6",
			values: TRAFFIC.iter().map(|t| t.requests).collect(),
		},
		Series {
			name: "Errors",
			color: "#ef4444",
			values: TRAFFIC.iter().map(|t| t.errors).collect(),
		},
	]
}

/// Performance and traffic trends, busiest endpoints and health distribution.
#[component]
pub fn Analytics() -> impl IntoView {
	let cards = ANALYTICS_METRICS
		.iter()
		.map(|(title, value, subtitle, change)| {
			view! {
				<div class="card stat">
					<span class="stat-label">{*title}</span>
					<p class="stat-value">{*value}</p>
					<p class="muted small">{*subtitle}</p>
					<p class="accent small">{*change}</p>
				</div>
			}
		})
		.collect_view();

	let endpoints = ENDPOINTS
		.iter()
		.map(|e| {
			let requests = group_thousands(e.requests);
			view! {
				<div class="panel">
					<div class="row spread">
						<div>
							<p class="strong mono">{e.name}</p>
							<p class="muted small">{format!("{requests} requests")}</p>
						</div>
						<span class="badge badge-ok">"Active"</span>
					</div>
					<div class="two-column small">
						<div>
							<p class="muted">"Avg Response"</p>
							<p class="accent strong">{format!("{}ms", e.avg_time_ms)}</p>
						</div>
						<div>
							<p class="muted">"Requests"</p>
							<p class="strong">{requests.clone()}</p>
						</div>
					</div>
				</div>
			}
		})
		.collect_view();

	let health = SYSTEM_HEALTH
		.iter()
		.map(|slice| {
			view! {
				<div class="legend-row split">
					<span class="legend-row">
						<span class="dot" style:background-color=slice.color />
						<span>{slice.name}</span>
					</span>
					<span class="strong">{format!("{}%", slice.value)}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="page">
			<header class="page-header">
				<div>
					<h1>"System Analytics"</h1>
					<p class="muted">"Deep insights into your system performance and usage patterns"</p>
				</div>
			</header>

			<div class="stat-grid">{cards}</div>

			<div class="two-column">
				<div class="card">
					<header class="card-header">
						<h3>"System Performance"</h3>
						<p class="muted small">"CPU, Memory, and Response Time trends"</p>
					</header>
					<div class="card-body">
						<TrendChart
							labels=PERFORMANCE.iter().map(|p| p.time).collect()
							series=performance_series()
						/>
					</div>
				</div>
				<div class="card">
					<header class="card-header">
						<h3>"Traffic Analytics"</h3>
						<p class="muted small">"Requests and error rates over time"</p>
					</header>
					<div class="card-body">
						<TrendChart
							labels=TRAFFIC.iter().map(|t| t.hour).collect()
							series=traffic_series()
							filled=true
						/>
					</div>
				</div>
			</div>

			<div class="two-column">
				<div class="card">
					<header class="card-header">
						<h3>"Top API Endpoints"</h3>
						<p class="muted small">"Most requested endpoints and their performance"</p>
					</header>
					<div class="card-body flow-log">{endpoints}</div>
				</div>
				<div class="card">
					<header class="card-header">
						<h3>"System Health"</h3>
						<p class="muted small">"Overall system status distribution"</p>
					</header>
					<div class="card-body">
						<DonutChart slices=SYSTEM_HEALTH />
						{health}
					</div>
				</div>
			</div>
		</div>
	}
}
