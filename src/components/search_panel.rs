//! Search form and answer card shown in front of the graph.
//!
//! Queries go to the mock resolver in [`crate::search`]; the cited sources
//! become the graph's highlight set.

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;

use crate::components::knowledge_graph::builder::DEFAULT_NODE_IDS;
use crate::search::{MOCK_LATENCY, SearchResult, mock_answer};

/// Runs `f` once after `delay`.
fn schedule(delay: Duration, f: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let callback = Closure::once_into_js(f);
	if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		callback.unchecked_ref(),
		delay.as_millis() as i32,
	) {
		warn!("baruda-graph: could not schedule search response: {:?}", e);
	}
}

/// Search box plus the latest answer.
///
/// `candidates` are the ids the mock may cite; when empty the descriptive
/// default ids are used. Highlights are cleared when a search starts and set
/// to the answer's sources when it completes.
#[component]
pub fn SearchPanel(
	#[prop(into)] candidates: Signal<Vec<String>>,
	set_highlight: WriteSignal<Vec<String>>,
) -> impl IntoView {
	let (query, set_query) = signal(String::new());
	let (loading, set_loading) = signal(false);
	let (result, set_result) = signal(None::<SearchResult>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let q = query.get_untracked();
		if q.trim().is_empty() || loading.get_untracked() {
			return;
		}
		set_loading.set(true);
		set_result.set(None);
		set_highlight.set(Vec::new());

		let mut pool = candidates.get_untracked();
		if pool.is_empty() {
			pool = DEFAULT_NODE_IDS.iter().map(|id| id.to_string()).collect();
		}
		schedule(MOCK_LATENCY, move || {
			let found = mock_answer(&q, &pool, &mut SmallRng::from_entropy());
			info!("baruda-graph: answered {:?} citing {:?}", q, found.sources);
			set_highlight.set(found.sources.clone());
			set_result.set(Some(found));
			set_loading.set(false);
		});
	};

	view! {
		<div class="search-panel">
			{move || {
				result
					.get()
					.map(|r| {
						let sources = r
							.sources
							.into_iter()
							.map(|src| view! { <span class="source-chip">"📄 " {src}</span> })
							.collect_view();
						view! {
							<div class="result-card">
								<h3>"Portfolio Insight"</h3>
								<p>{r.answer}</p>
								<div class="sources">{sources}</div>
							</div>
						}
					})
			}}
			{move || loading.get().then(|| view! { <div class="loading">"Searching..."</div> })}
			<form class="search-form" on:submit=on_submit>
				<input
					type="text"
					placeholder="What would you like to know about the portfolio?"
					prop:value=move || query.get()
					on:input=move |ev| set_query.set(event_target_value(&ev))
					disabled=move || loading.get()
				/>
			</form>
		</div>
	}
}
