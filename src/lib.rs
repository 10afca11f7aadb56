//! baruda-graph: Animated knowledge graph background for the Baruda portfolio.
//!
//! This crate provides a WASM page whose backdrop is a force-directed particle
//! graph that relaxes to rest, scatters under the pointer, and lights up the
//! nodes cited by the search panel.

// Only needed to turn on the `js` randomness backend for wasm32.
use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod search;

pub use components::header::Header;
pub use components::knowledge_graph::{
	GraphConfig, GraphData, KnowledgeGraphBackground, Link, Node, Theme, Viewport,
};
pub use components::search_panel::SearchPanel;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("baruda-graph: logging initialized");
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NodeEntry {
	Id(String),
	Node { id: String },
}

impl NodeEntry {
	fn into_id(self) -> String {
		match self {
			NodeEntry::Id(id) | NodeEntry::Node { id } => id,
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NodeIdsDocument {
	List(Vec<NodeEntry>),
	Graph { nodes: Vec<NodeEntry> },
}

/// Parse a node-id list: either a JSON array or an object with a `nodes`
/// array. Entries may be bare strings or objects carrying an `id`.
pub fn parse_node_ids(text: &str) -> serde_json::Result<Vec<String>> {
	let entries = match serde_json::from_str(text)? {
		NodeIdsDocument::List(entries) | NodeIdsDocument::Graph { nodes: entries } => entries,
	};
	Ok(entries.into_iter().map(NodeEntry::into_id).collect())
}

fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load node ids from a script element with id="graph-data".
fn load_node_ids() -> Vec<String> {
	let Some(json_text) = script_text("graph-data") else {
		return Vec::new();
	};
	match parse_node_ids(&json_text) {
		Ok(ids) => {
			info!("baruda-graph: loaded {} node ids", ids.len());
			ids
		}
		Err(e) => {
			warn!("baruda-graph: failed to parse graph data: {}", e);
			Vec::new()
		}
	}
}

/// Load overrides from a script element with id="graph-config".
fn load_config() -> GraphConfig {
	let Some(json_text) = script_text("graph-config") else {
		return GraphConfig::default();
	};
	GraphConfig::from_json(&json_text).unwrap_or_else(|e| {
		warn!("baruda-graph: failed to parse graph config: {}", e);
		GraphConfig::default()
	})
}

/// Main application component.
/// Loads ids and config from the DOM and layers the page chrome over the graph.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let node_ids = load_node_ids();
	let config = load_config();
	let ids_signal = Signal::derive(move || node_ids.clone());
	let (highlight_ids, set_highlight_ids) = signal(Vec::<String>::new());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Baruda - Personal Knowledge Navigator" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<KnowledgeGraphBackground node_ids=ids_signal highlight_ids=highlight_ids config=config />
		<div class="page-overlay">
			<Header />
			<SearchPanel candidates=ids_signal set_highlight=set_highlight_ids />
		</div>
	}
}
