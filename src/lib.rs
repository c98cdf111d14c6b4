//! Leptos client-side dashboard for monitoring a distributed application's
//! service flow, traffic and errors.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

/// Reusable views and the flow canvas.
pub mod components;
pub mod data;
mod pages;

use crate::components::sidebar::Sidebar;
use crate::data::{reference_topology, status_counts};
use crate::pages::analytics::Analytics;
use crate::pages::data_flow::DataFlow;
use crate::pages::error_logs::ErrorLogs;
use crate::pages::not_found::NotFound;
use crate::pages::overview::Overview;
use crate::pages::system_flow::SystemFlow;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Dashboard shell: sidebar navigation plus the routed page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let topology = reference_topology();
	let (healthy, _, _) = status_counts(&topology);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		<Title text="System Flow Monitor" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="Monitor your application's data flow and system health in real-time"
		/>

		<Router>
			<div class="shell">
				<Sidebar active_nodes=healthy total_nodes=topology.nodes.len() />
				<main class="main">
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/") view=Overview />
						<Route path=path!("/overview") view=Overview />
						<Route path=path!("/system-flow") view=SystemFlow />
						<Route path=path!("/data-flow") view=DataFlow />
						<Route path=path!("/error-logs") view=ErrorLogs />
						<Route path=path!("/analytics") view=Analytics />
					</Routes>
				</main>
			</div>
		</Router>
	}
}
