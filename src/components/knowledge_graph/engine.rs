//! Force simulation for one generation of the graph.
//!
//! The engine owns the node and link arrays. It moves through
//! `Uninitialized -> Running -> Stopped`; only a running engine integrates,
//! and a stopped engine has released its arrays.
//!
//! Alpha scales every force and decays geometrically toward `alpha_target`.
//! Once it drops below `alpha_min` the engine is settled and [`ForceEngine::step`]
//! does nothing until [`ForceEngine::reheat`] raises it again.

use std::f64::consts::PI;

use log::{debug, info};
use rand::Rng;
use rand::rngs::SmallRng;

use super::config::ForceConfig;
use super::forces;
use super::types::{GraphData, Link, Node};
use super::viewport::Viewport;

/// Lifecycle of a [`ForceEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
	/// Created but never started, or start was refused.
	Uninitialized,
	/// Owns a generation and integrates while alpha is above `alpha_min`.
	Running,
	/// Terminal; arrays released.
	Stopped,
}

/// Owns one generation's nodes and links and integrates them under the
/// configured forces.
pub struct ForceEngine {
	config: ForceConfig,
	state: EngineState,
	nodes: Vec<Node>,
	links: Vec<Link>,
	degree: Vec<usize>,
	center: (f64, f64),
	alpha: f64,
	rng: SmallRng,
}

impl ForceEngine {
	/// An uninitialized engine. `rng` drives placement jitter and jiggle.
	pub fn new(config: ForceConfig, rng: SmallRng) -> Self {
		let alpha = config.alpha_start;
		Self {
			config,
			state: EngineState::Uninitialized,
			nodes: Vec::new(),
			links: Vec::new(),
			degree: Vec::new(),
			center: (0.0, 0.0),
			alpha,
			rng,
		}
	}

	/// Takes ownership of a generation and starts running.
	///
	/// Returns `false` and stays uninitialized when the viewport has no area or
	/// the graph has no nodes. Unplaced nodes are laid out on a jittered spiral
	/// around the attractor point.
	pub fn start(&mut self, graph: GraphData, viewport: Viewport) -> bool {
		if self.state != EngineState::Uninitialized {
			debug!("baruda-graph: start ignored in state {:?}", self.state);
			return false;
		}
		if !viewport.is_ready() || graph.nodes.is_empty() {
			debug!("baruda-graph: engine not ready, staying idle");
			return false;
		}

		let GraphData { mut nodes, links } = graph;
		self.center = viewport.attractor(self.config.center_y_ratio);
		self.place_unplaced(&mut nodes);
		self.degree = forces::degrees(nodes.len(), &links);
		self.nodes = nodes;
		self.links = links;
		self.alpha = self.config.alpha_start;
		self.state = EngineState::Running;

		info!(
			"baruda-graph: generation started with {} nodes, {} links in {}x{}",
			self.nodes.len(),
			self.links.len(),
			viewport.width,
			viewport.height
		);
		true
	}

	fn place_unplaced(&mut self, nodes: &mut [Node]) {
		let golden_angle = PI * (3.0 - 5f64.sqrt());
		let jitter = self.config.initial_jitter.abs();
		let (cx, cy) = self.center;
		for (i, node) in nodes.iter_mut().enumerate() {
			if node.is_placed() {
				continue;
			}
			let radius = 10.0 * (0.5 + i as f64).sqrt();
			let angle = i as f64 * golden_angle;
			let (jx, jy) = if jitter > 0.0 {
				(
					self.rng.gen_range(-jitter..=jitter),
					self.rng.gen_range(-jitter..=jitter),
				)
			} else {
				(0.0, 0.0)
			};
			node.place(
				cx + radius * angle.cos() + jx,
				cy + radius * angle.sin() + jy,
			);
			node.vx = 0.0;
			node.vy = 0.0;
		}
	}

	/// Advances the simulation by one tick.
	///
	/// Returns `true` when positions moved, `false` when stopped, not started or settled.
	pub fn step(&mut self) -> bool {
		if !self.is_active() {
			return false;
		}

		let cfg = &self.config;
		self.alpha += (cfg.alpha_target - self.alpha) * cfg.alpha_decay;
		let alpha = self.alpha;

		forces::link(
			&mut self.nodes,
			&self.links,
			&self.degree,
			cfg.link_distance,
			cfg.link_strength,
			alpha,
			&mut self.rng,
		);
		forces::many_body(
			&mut self.nodes,
			cfg.charge_strength,
			cfg.charge_distance_min,
			alpha,
			&mut self.rng,
		);
		forces::collide(
			&mut self.nodes,
			cfg.collide_radius,
			cfg.collide_strength,
			alpha,
			&mut self.rng,
		);
		forces::center(&mut self.nodes, self.center, cfg.center_strength, alpha);

		let keep = 1.0 - cfg.velocity_decay;
		for node in &mut self.nodes {
			node.vx *= keep;
			node.vy *= keep;
			node.x += node.vx;
			node.y += node.vy;
		}
		true
	}

	/// Running and not yet settled.
	pub fn is_active(&self) -> bool {
		self.state == EngineState::Running && !self.is_settled()
	}

	/// Alpha has decayed below `alpha_min`.
	pub fn is_settled(&self) -> bool {
		self.alpha < self.config.alpha_min
	}

	/// Sets alpha so a settled simulation resumes from its current positions
	/// and velocities.
	pub fn reheat(&mut self, alpha: f64) {
		if self.state != EngineState::Running {
			return;
		}
		self.alpha = alpha.clamp(0.0, 1.0);
	}

	/// Knocks nodes within `radius` of `(x, y)` away from the point.
	///
	/// Every node inside the radius gets the same `strength` along the unit
	/// vector from the point to the node. A node exactly at the point has no
	/// direction and is left alone. Reheats the engine afterwards and returns
	/// how many nodes were pushed.
	pub fn perturb(&mut self, x: f64, y: f64, radius: f64, strength: f64) -> usize {
		if self.state != EngineState::Running || radius <= 0.0 {
			return 0;
		}

		let mut touched = 0;
		for node in &mut self.nodes {
			let Some((nx, ny)) = node.position() else {
				continue;
			};
			let (dx, dy) = (nx - x, ny - y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist == 0.0 || dist >= radius {
				continue;
			}
			node.vx += dx / dist * strength;
			node.vy += dy / dist * strength;
			touched += 1;
		}

		self.reheat(self.config.reheat_alpha);
		touched
	}

	/// Halts integration for good and releases the node and link arrays.
	pub fn stop(&mut self) {
		if self.state == EngineState::Stopped {
			return;
		}
		if self.state == EngineState::Running {
			debug!(
				"baruda-graph: stopping generation of {} nodes",
				self.nodes.len()
			);
		}
		self.state = EngineState::Stopped;
		self.nodes = Vec::new();
		self.links = Vec::new();
		self.degree = Vec::new();
	}

	/// Current lifecycle state.
	pub fn state(&self) -> EngineState {
		self.state
	}

	/// Current alpha.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Nodes of the live generation; empty unless running.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Links of the live generation; empty unless running.
	pub fn links(&self) -> &[Link] {
		&self.links
	}

	/// Sum of squared node speeds.
	pub fn kinetic_energy(&self) -> f64 {
		self.nodes.iter().map(Node::speed_squared).sum()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rand::SeedableRng;

	use super::*;
	use crate::components::knowledge_graph::builder::build_graph;
	use crate::components::knowledge_graph::config::BuildConfig;

	fn engine() -> ForceEngine {
		ForceEngine::new(ForceConfig::default(), SmallRng::seed_from_u64(11))
	}

	fn graph(ids: &[&str], link_count: usize) -> GraphData {
		let ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
		let config = BuildConfig {
			link_count,
			default_node_count: 300,
		};
		build_graph(&ids, &config, &mut SmallRng::seed_from_u64(5))
	}

	fn run_until_settled(engine: &mut ForceEngine) -> usize {
		let mut steps = 0;
		while engine.step() {
			steps += 1;
			assert!(steps < 10_000, "engine never settled");
		}
		steps
	}

	#[test]
	fn stays_uninitialized_without_area() {
		let mut engine = engine();
		assert!(!engine.start(graph(&["A"], 0), Viewport::default()));
		assert_eq!(engine.state(), EngineState::Uninitialized);
		assert!(!engine.step());
	}

	#[test]
	fn start_places_every_node() {
		let mut engine = engine();
		assert!(engine.start(graph(&["A", "B", "C", "D"], 3), Viewport::new(800, 600)));
		assert_eq!(engine.state(), EngineState::Running);
		assert!(engine.nodes().iter().all(Node::is_placed));
		assert!(engine.nodes().iter().all(|n| n.speed_squared() == 0.0));
	}

	#[test]
	fn keeps_preplaced_positions() {
		let mut engine = engine();
		let data = GraphData {
			nodes: vec![Node::at("A", 10.0, 20.0), Node::new("B")],
			links: vec![],
		};
		engine.start(data, Viewport::new(800, 600));
		assert_eq!(engine.nodes()[0].position(), Some((10.0, 20.0)));
		assert!(engine.nodes()[1].is_placed());
	}

	#[test]
	fn three_node_scenario_stays_in_view() {
		let mut engine = engine();
		let data = graph(&["A", "B", "C"], 0);
		assert_eq!(data.nodes.len(), 3);
		assert!(data.links.is_empty());

		engine.start(data, Viewport::new(800, 600));
		for _ in 0..200 {
			engine.step();
		}

		let positions: Vec<(f64, f64)> = engine
			.nodes()
			.iter()
			.map(|n| n.position().unwrap())
			.collect();
		for &(x, y) in &positions {
			assert!(x.is_finite() && y.is_finite());
			assert!((0.0..=800.0).contains(&x), "x = {x}");
			assert!((0.0..=600.0).contains(&y), "y = {y}");
		}
		for i in 0..positions.len() {
			for j in (i + 1)..positions.len() {
				assert_ne!(positions[i], positions[j]);
			}
		}
	}

	#[test]
	fn settles_to_rest() {
		let mut engine = engine();
		engine.start(graph(&["A", "B", "C", "D", "E", "F", "G", "H"], 12), Viewport::new(800, 600));

		for _ in 0..20 {
			engine.step();
		}
		let early = engine.kinetic_energy();
		let steps = run_until_settled(&mut engine);

		assert!(engine.is_settled());
		assert!(steps > 200, "settled too early after {steps} steps");
		let late = engine.kinetic_energy();
		assert!(late < 1e-2, "residual energy {late}");
		assert!(late < early);
	}

	#[test]
	fn reheat_resumes_motion_without_jumps() {
		let mut engine = engine();
		engine.start(graph(&["A", "B", "C", "D", "E"], 6), Viewport::new(800, 600));
		run_until_settled(&mut engine);
		let before: Vec<_> = engine.nodes().iter().map(|n| n.position().unwrap()).collect();
		assert!(!engine.step());

		engine.reheat(0.3);
		assert!(engine.alpha() > ForceConfig::default().alpha_min);
		assert!(engine.step());

		for (node, (x, y)) in engine.nodes().iter().zip(before) {
			let (nx, ny) = node.position().unwrap();
			assert!((nx - x).abs() < 5.0 && (ny - y).abs() < 5.0);
		}
	}

	#[test]
	fn perturb_skips_coincident_node_and_pushes_neighbors_away() {
		let mut engine = engine();
		let data = GraphData {
			nodes: vec![
				Node::at("hit", 100.0, 100.0),
				Node::at("near", 130.0, 100.0),
				Node::at("diag", 80.0, 80.0),
				Node::at("far", 500.0, 500.0),
			],
			links: vec![],
		};
		engine.start(data, Viewport::new(800, 600));
		let before: Vec<(f64, f64)> = engine.nodes().iter().map(|n| (n.vx, n.vy)).collect();
		let (px, py) = (100.0, 100.0);

		let touched = engine.perturb(px, py, 80.0, 0.8);

		let after: Vec<(f64, f64)> = engine.nodes().iter().map(|n| (n.vx, n.vy)).collect();
		assert_eq!(after[0], before[0]);
		assert_eq!(after[3], before[3]);
		assert_eq!(touched, 2);

		for i in [1, 2] {
			let (nx, ny) = engine.nodes()[i].position().unwrap();
			let (dvx, dvy) = (after[i].0 - before[i].0, after[i].1 - before[i].1);
			// Impulse points from the pointer toward the node.
			assert!(dvx * (nx - px) + dvy * (ny - py) > 0.0);
		}
		assert!((engine.alpha() - 0.3).abs() < 1e-12);
	}

	#[test]
	fn perturb_pushes_equally_anywhere_inside_the_radius() {
		let mut engine = engine();
		let data = GraphData {
			nodes: vec![Node::at("near", 110.0, 100.0), Node::at("edge", 100.0, 179.0)],
			links: vec![],
		};
		engine.start(data, Viewport::new(800, 600));

		assert_eq!(engine.perturb(100.0, 100.0, 80.0, 0.8), 2);

		let near = &engine.nodes()[0];
		let edge = &engine.nodes()[1];
		assert!((near.speed_squared().sqrt() - 0.8).abs() < 1e-12);
		assert!((edge.speed_squared().sqrt() - 0.8).abs() < 1e-12);
		assert!((near.vx - 0.8).abs() < 1e-12 && near.vy.abs() < 1e-12);
		assert!(edge.vx.abs() < 1e-12 && (edge.vy - 0.8).abs() < 1e-12);
	}

	#[test]
	fn perturb_is_inert_before_start() {
		let mut engine = engine();
		assert_eq!(engine.perturb(0.0, 0.0, 100.0, 1.0), 0);
		assert_eq!(engine.state(), EngineState::Uninitialized);
	}

	#[test]
	fn stop_releases_arrays_and_halts() {
		let mut engine = engine();
		engine.start(graph(&["A", "B"], 4), Viewport::new(640, 480));
		engine.stop();

		assert_eq!(engine.state(), EngineState::Stopped);
		assert!(engine.nodes().is_empty());
		assert!(engine.links().is_empty());
		assert!(!engine.step());
		engine.reheat(1.0);
		assert!(!engine.step());
		assert!(!engine.start(graph(&["C"], 0), Viewport::new(640, 480)));
	}
}
