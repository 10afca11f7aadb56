//! Pointer motion as a transient knock on nearby nodes.
//!
//! Each event is handled independently: nothing is remembered between calls,
//! so bursts of events need no debouncing.

use log::trace;

use super::config::PointerConfig;
use super::engine::ForceEngine;

/// Applies one pointer-move event at surface-local `(x, y)`.
///
/// Nodes within the configured radius get a velocity impulse away from the
/// pointer and the engine is reheated. Returns the number of nodes pushed.
pub fn pointer_moved(engine: &mut ForceEngine, x: f64, y: f64, config: &PointerConfig) -> usize {
	if !(x.is_finite() && y.is_finite()) {
		return 0;
	}
	let touched = engine.perturb(x, y, config.radius, config.strength);
	trace!("baruda-graph: pointer at ({x:.0}, {y:.0}) pushed {touched} nodes");
	touched
}
