//! Leptos component hosting the knowledge graph background canvas.
//!
//! Three effects wire the core to the page:
//! - viewport: sizes the canvas to the window and tracks resizes
//! - generation: rebuilds the scene whenever the node ids or viewport change,
//!   stopping the previous frame loop before the new generation is built
//! - highlight: stores the current highlight ids into the scene
//!
//! Pointer moves are forwarded through the canvas's `mousemove` handler.
//! Unmounting stops the live generation.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::config::GraphConfig;
use super::frame_loop::FrameLoop;
use super::scene::Scene;
use super::surface::CanvasSurface;
use super::viewport::{Viewport, ViewportTracker};

/// Stops `scene` when the current reactive owner is cleaned up.
fn dispose_on_cleanup(scene: &Rc<RefCell<Scene>>) {
	let scene = SendWrapper::new(scene.clone());
	on_cleanup(move || {
		(*scene).borrow_mut().dispose();
	});
}

/// Full-viewport animated graph drawn behind the page content.
///
/// `node_ids` selects what to visualize (empty falls back to a built-in set);
/// `highlight_ids` marks ids to emphasize. Changing `highlight_ids` never
/// restarts the simulation.
#[component]
pub fn KnowledgeGraphBackground(
	#[prop(into)] node_ids: Signal<Vec<String>>,
	#[prop(into)] highlight_ids: Signal<Vec<String>>,
	#[prop(optional)] config: Option<GraphConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default();
	let background = config.theme.background.to_css();
	let viewport = RwSignal::new(Viewport::default());
	let scene = Rc::new(RefCell::new(Scene::new(config, SmallRng::from_entropy())));
	dispose_on_cleanup(&scene);

	Effect::new(move |tracker: Option<Option<ViewportTracker>>| {
		if let Some(Some(tracker)) = tracker {
			return Some(tracker);
		}
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		ViewportTracker::attach(canvas, move |size| viewport.set(size))
	});

	let scene_gen = scene.clone();
	Effect::new(move |previous: Option<Option<FrameLoop>>| {
		let ids = node_ids.get();
		let size = viewport.get();
		// The old loop must be gone before the next generation exists.
		drop(previous.flatten());

		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		if !scene_gen.borrow_mut().rebuild(&ids, size) {
			return None;
		}
		let mut surface = CanvasSurface::from_canvas(&canvas)?;

		let scene_frame = scene_gen.clone();
		Some(FrameLoop::start(move || {
			scene_frame.borrow_mut().frame(&mut surface);
		}))
	});

	let scene_hl = scene.clone();
	Effect::new(move |_| {
		let ids = highlight_ids.get();
		scene_hl.borrow_mut().set_highlight(ids);
	});

	let scene_mm = scene.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		scene_mm.borrow_mut().pointer_moved(x, y);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="knowledge-graph-background"
			on:mousemove=on_mousemove
			style=format!(
				"position: fixed; top: 0; left: 0; z-index: 1; display: block; background-color: {background};",
			)
		/>
	}
}
