use leptos::prelude::*;

use crate::components::error_detail::ErrorDetailModal;
use crate::data::{ERROR_LOG, ErrorRecord};

#[component]
pub fn ErrorLogs() -> impl IntoView {
	let selected = RwSignal::new(None::<ErrorRecord>);
	let is_open = RwSignal::new(false);
	let on_close = Callback::new(move |_| is_open.set(false));

	let rows = ERROR_LOG
		.iter()
		.map(|record| {
			let open = record.clone();
			view! {
				<div class="panel error-row">
					<div class="row spread">
						<div class="row">
							<span class=record.severity.badge_class()>{record.severity.label()}</span>
							<span class="badge">{record.kind}</span>
							<span class=format!("mono {}", record.status_code_class())>
								{record.status_code}
							</span>
						</div>
						<span class="muted">{record.timestamp}</span>
					</div>
					<p class="text-error strong">{record.message}</p>
					<div class="row muted">
						<span>
							<strong>"Source: "</strong>
							{record.source}
						</span>
						<span>
							<strong>"Endpoint: "</strong>
							{record.endpoint}
						</span>
						<button
							class="link-button"
							on:click=move |_| {
								selected.set(Some(open.clone()));
								is_open.set(true);
							}
						>
							"View Details"
						</button>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="page">
			<header class="page-header">
				<h1>"Error Logs"</h1>
				<p class="muted">"Track and analyze system errors"</p>
			</header>

			<div class="card">
				<header class="card-header">
					<h3>"Recent Errors"</h3>
				</header>
				<div class="card-body">{rows}</div>
			</div>

			<div class="stat-grid">
				<div class="card stat centered">
					<p class="stat-value text-error">"3"</p>
					<p class="muted">"Critical Errors"</p>
				</div>
				<div class="card stat centered">
					<p class="stat-value text-warning">"7"</p>
					<p class="muted">"High Priority"</p>
				</div>
				<div class="card stat centered">
					<p class="stat-value text-medium">"12"</p>
					<p class="muted">"Medium Priority"</p>
				</div>
				<div class="card stat centered">
					<p class="stat-value accent">"24h"</p>
					<p class="muted">"Avg Resolution"</p>
				</div>
			</div>

			<ErrorDetailModal error=selected is_open=is_open on_close=on_close />
		</div>
	}
}
