//! Generation lifecycle: one live engine, its highlight overlay and redraw policy.
//!
//! A [`Scene`] outlives generations. [`Scene::rebuild`] always stops the current
//! engine before building its replacement, so no step can ever run against a
//! superseded node array.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::builder::build_graph;
use super::config::GraphConfig;
use super::engine::ForceEngine;
use super::highlight::HighlightSet;
use super::interaction;
use super::render;
use super::surface::Surface;
use super::viewport::Viewport;

/// The live generation plus everything that survives a rebuild.
pub struct Scene {
	config: GraphConfig,
	engine: ForceEngine,
	highlight: HighlightSet,
	viewport: Viewport,
	generation: u64,
	dirty: bool,
	rng: SmallRng,
}

impl Scene {
	/// An empty scene; nothing runs until the first [`Scene::rebuild`].
	pub fn new(config: GraphConfig, mut rng: SmallRng) -> Self {
		let engine = ForceEngine::new(
			config.forces.clone(),
			SmallRng::seed_from_u64(rng.r#gen()),
		);
		Self {
			config,
			engine,
			highlight: HighlightSet::default(),
			viewport: Viewport::default(),
			generation: 0,
			dirty: false,
			rng,
		}
	}

	/// Tears down the current generation and starts a new one for `ids` in `viewport`.
	///
	/// Returns `false` when the viewport is not ready; the scene then idles with
	/// an uninitialized engine until the next rebuild.
	pub fn rebuild(&mut self, ids: &[String], viewport: Viewport) -> bool {
		self.engine.stop();
		self.engine = ForceEngine::new(
			self.config.forces.clone(),
			SmallRng::seed_from_u64(self.rng.r#gen()),
		);
		self.viewport = viewport;
		if !viewport.is_ready() {
			debug!("baruda-graph: viewport not measured yet, idling");
			return false;
		}

		let graph = build_graph(ids, &self.config.build, &mut self.rng);
		if !self.engine.start(graph, viewport) {
			return false;
		}
		self.generation += 1;
		self.dirty = true;
		true
	}

	/// Runs one animation frame: integrate, then draw.
	///
	/// Drawing happens only when the step moved something or the highlight or
	/// generation changed since the last frame. Returns whether a frame was drawn.
	pub fn frame(&mut self, surface: &mut impl Surface) -> bool {
		let moved = self.engine.step();
		if !(moved || self.dirty) || !self.viewport.is_ready() {
			return false;
		}
		render::render(
			surface,
			self.engine.nodes(),
			self.engine.links(),
			&self.highlight,
			self.viewport,
			&self.config.theme,
		);
		self.dirty = false;
		true
	}

	/// Stores a new highlight set for the next frame.
	pub fn set_highlight<I, S>(&mut self, ids: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		if self.highlight.replace(ids) {
			self.dirty = true;
		}
	}

	/// Forwards a pointer move to the interaction bridge.
	pub fn pointer_moved(&mut self, x: f64, y: f64) -> usize {
		interaction::pointer_moved(&mut self.engine, x, y, &self.config.pointer)
	}

	/// Stops the live generation for good.
	pub fn dispose(&mut self) {
		self.engine.stop();
	}

	/// The engine of the current generation.
	pub fn engine(&self) -> &ForceEngine {
		&self.engine
	}

	/// Highlight set drawn on the next frame.
	pub fn highlight(&self) -> &HighlightSet {
		&self.highlight
	}

	/// Count of generations started so far.
	pub fn generation(&self) -> u64 {
		self.generation
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::knowledge_graph::config::BuildConfig;
	use crate::components::knowledge_graph::engine::EngineState;
	use crate::components::knowledge_graph::surface::recording::RecordingSurface;

	fn scene(link_count: usize) -> Scene {
		let config = GraphConfig {
			build: BuildConfig {
				link_count,
				default_node_count: 20,
			},
			..GraphConfig::default()
		};
		Scene::new(config, SmallRng::seed_from_u64(21))
	}

	fn ids(n: usize) -> Vec<String> {
		(0..n).map(|i| format!("id-{i}")).collect()
	}

	#[test]
	fn idles_until_viewport_is_measured() {
		let mut scene = scene(5);
		assert!(!scene.rebuild(&ids(3), Viewport::default()));
		assert_eq!(scene.engine().state(), EngineState::Uninitialized);

		let mut surface = RecordingSurface::default();
		assert!(!scene.frame(&mut surface));
		assert!(surface.ops.is_empty());
		assert_eq!(scene.generation(), 0);
	}

	#[test]
	fn empty_ids_still_fill_the_background() {
		let mut scene = scene(5);
		assert!(scene.rebuild(&[], Viewport::new(800, 600)));
		assert_eq!(scene.engine().nodes().len(), 20);
	}

	#[test]
	fn replacing_a_generation_drops_the_old_arrays() {
		let mut scene = scene(8);
		let mut surface = RecordingSurface::default();

		scene.rebuild(&ids(12), Viewport::new(800, 600));
		for _ in 0..5 {
			scene.frame(&mut surface);
		}
		assert_eq!(scene.engine().nodes().len(), 12);

		assert!(scene.rebuild(&ids(4), Viewport::new(1024, 768)));
		assert_eq!(scene.generation(), 2);
		assert_eq!(scene.engine().state(), EngineState::Running);

		surface.ops.clear();
		assert!(scene.frame(&mut surface));
		assert_eq!(scene.engine().nodes().len(), 4);
		assert_eq!(surface.discs().len(), 4);
		assert_eq!(
			scene.engine().nodes().iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
			vec!["id-0", "id-1", "id-2", "id-3"]
		);
	}

	#[test]
	fn losing_the_viewport_stops_the_running_generation() {
		let mut scene = scene(3);
		scene.rebuild(&ids(6), Viewport::new(800, 600));
		scene.rebuild(&ids(6), Viewport::default());

		assert!(scene.engine().nodes().is_empty());
		let mut surface = RecordingSurface::default();
		assert!(!scene.frame(&mut surface));
	}

	#[test]
	fn highlight_updates_redraw_a_settled_scene() {
		let mut scene = scene(3);
		let mut surface = RecordingSurface::default();
		scene.rebuild(&ids(3), Viewport::new(800, 600));
		while scene.engine().is_active() {
			scene.frame(&mut surface);
		}
		assert!(!scene.frame(&mut surface));

		scene.set_highlight(["id-1"]);
		surface.ops.clear();
		assert!(scene.frame(&mut surface));
		assert_eq!(surface.texts(), vec!["id-1"]);
		assert_eq!(scene.engine().state(), EngineState::Running);

		// Storing the same set again is not a change.
		scene.set_highlight(["id-1"]);
		assert!(!scene.frame(&mut surface));
	}

	#[test]
	fn highlight_survives_generation_changes() {
		let mut scene = scene(3);
		scene.set_highlight(["id-0"]);
		scene.rebuild(&ids(2), Viewport::new(800, 600));
		scene.rebuild(&ids(5), Viewport::new(800, 600));
		assert!(scene.highlight().contains("id-0"));

		let mut surface = RecordingSurface::default();
		scene.frame(&mut surface);
		assert_eq!(surface.texts(), vec!["id-0"]);
	}

	#[test]
	fn pointer_reheats_a_settled_scene() {
		let mut scene = scene(3);
		let mut surface = RecordingSurface::default();
		scene.rebuild(&ids(10), Viewport::new(800, 600));
		while scene.engine().is_active() {
			scene.frame(&mut surface);
		}

		let (x, y) = scene.engine().nodes()[0].position().unwrap();
		scene.pointer_moved(x + 3.0, y);
		assert!(scene.engine().is_active());
		assert!(scene.frame(&mut surface));
	}

	#[test]
	fn dispose_stops_stepping() {
		let mut scene = scene(3);
		scene.rebuild(&ids(3), Viewport::new(800, 600));
		scene.dispose();
		assert_eq!(scene.engine().state(), EngineState::Stopped);
		assert_eq!(scene.pointer_moved(400.0, 240.0), 0);
	}
}
