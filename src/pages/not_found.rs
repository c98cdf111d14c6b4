use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page centered">
			<h1>"Page not found"</h1>
			<p class="muted">"Nothing is monitored at this address."</p>
			<A href="/overview">"Back to overview"</A>
		</div>
	}
}
