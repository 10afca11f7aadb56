//! Tunable presentation constants for building, simulating and perturbing the graph.
//!
//! None of these values are contractual; they shape how the background looks
//! and feels. All structs deserialize from partial JSON, falling back to the
//! defaults below for any missing field.

use serde::Deserialize;

use super::theme::Theme;

/// Graph Builder parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
	/// Number of random links sampled per generation.
	pub link_count: usize,
	/// Size of the substitute id list used when the caller supplies no ids.
	pub default_node_count: usize,
}

impl Default for BuildConfig {
	fn default() -> Self {
		Self {
			link_count: 500,
			default_node_count: 300,
		}
	}
}

/// Force Engine parameters.
///
/// The alpha schedule and the velocity decay follow the usual d3-force
/// conventions: alpha reaches `alpha_min` after roughly 300 steps.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
	/// Pull toward the attractor per unit of distance.
	pub center_strength: f64,
	/// Vertical position of the attractor as a fraction of the viewport height.
	pub center_y_ratio: f64,
	/// Negative values repel.
	pub charge_strength: f64,
	/// Distance below which repulsion stops growing.
	pub charge_distance_min: f64,
	/// Radius of the disc each node keeps clear.
	pub collide_radius: f64,
	/// Fraction of an overlap resolved per step.
	pub collide_strength: f64,
	/// Rest length of every link.
	pub link_distance: f64,
	/// Spring stiffness of every link.
	pub link_strength: f64,
	/// Alpha a new generation starts with.
	pub alpha_start: f64,
	/// Below this alpha the engine is settled and stops stepping.
	pub alpha_min: f64,
	/// Fraction of the distance to `alpha_target` covered per step.
	pub alpha_decay: f64,
	/// Value alpha decays toward.
	pub alpha_target: f64,
	/// Fraction of velocity lost per step.
	pub velocity_decay: f64,
	/// Half-width of the uniform jitter added to initial placements.
	pub initial_jitter: f64,
	/// Alpha restored after a perturbation.
	pub reheat_alpha: f64,
}

impl Default for ForceConfig {
	fn default() -> Self {
		let alpha_min: f64 = 0.001;
		Self {
			center_strength: 0.01,
			center_y_ratio: 0.4,
			charge_strength: -5.0,
			charge_distance_min: 1.0,
			collide_radius: 5.0,
			collide_strength: 1.0,
			link_distance: 20.0,
			link_strength: 0.01,
			alpha_start: 1.0,
			alpha_min,
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			alpha_target: 0.0,
			velocity_decay: 0.4,
			initial_jitter: 2.0,
			reheat_alpha: 0.3,
		}
	}
}

/// Interaction Bridge parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
	/// Nodes closer than this to the pointer are knocked away.
	pub radius: f64,
	/// Impulse magnitude for a node right next to the pointer.
	pub strength: f64,
}

impl Default for PointerConfig {
	fn default() -> Self {
		Self {
			radius: 80.0,
			strength: 0.8,
		}
	}
}

/// Everything the background needs besides its inputs.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	/// Graph Builder parameters.
	pub build: BuildConfig,
	/// Force Engine parameters.
	pub forces: ForceConfig,
	/// Pointer perturbation parameters.
	pub pointer: PointerConfig,
	/// Colors and sizes.
	pub theme: Theme,
}

impl GraphConfig {
	/// Parses overrides; fields missing from `text` keep their defaults.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}
}
