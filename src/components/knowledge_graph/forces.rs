//! The four named forces composed by the engine on every step.
//!
//! Each force adds to node velocities and is scaled by the current alpha.
//! Pairwise forces are computed directly over all pairs.

use rand::Rng;

use super::types::{Link, Node};

/// Tiny random offset used when two points coincide.
fn jiggle(rng: &mut impl Rng) -> f64 {
	(rng.r#gen::<f64>() - 0.5) * 1e-6
}

/// Pulls every node toward `(cx, cy)`.
pub fn center(nodes: &mut [Node], (cx, cy): (f64, f64), strength: f64, alpha: f64) {
	let k = strength * alpha;
	for node in nodes {
		node.vx += (cx - node.x) * k;
		node.vy += (cy - node.y) * k;
	}
}

/// Charge-like interaction between every pair; negative strength repels.
///
/// Squared distances below `distance_min²` are softened to avoid blow-ups.
pub fn many_body(
	nodes: &mut [Node],
	strength: f64,
	distance_min: f64,
	alpha: f64,
	rng: &mut impl Rng,
) {
	let min2 = distance_min * distance_min;
	let n = nodes.len();
	for i in 0..n {
		for j in (i + 1)..n {
			let (mut dx, mut dy) = (nodes[j].x - nodes[i].x, nodes[j].y - nodes[i].y);
			if dx == 0.0 {
				dx = jiggle(rng);
			}
			if dy == 0.0 {
				dy = jiggle(rng);
			}
			let mut l = dx * dx + dy * dy;
			if l < min2 {
				l = (min2 * l).sqrt();
			}
			let w = strength * alpha / l;

			nodes[i].vx += dx * w;
			nodes[i].vy += dy * w;
			nodes[j].vx -= dx * w;
			nodes[j].vy -= dy * w;
		}
	}
}

/// Separates overlapping discs of equal `radius`, looking one step ahead.
pub fn collide(nodes: &mut [Node], radius: f64, strength: f64, alpha: f64, rng: &mut impl Rng) {
	let r = radius * 2.0;
	let r2 = r * r;
	let n = nodes.len();
	for i in 0..n {
		for j in (i + 1)..n {
			let (a, b) = (&nodes[i], &nodes[j]);
			let (mut dx, mut dy) = (a.x + a.vx - b.x - b.vx, a.y + a.vy - b.y - b.vy);
			let mut l = dx * dx + dy * dy;
			if l >= r2 {
				continue;
			}
			if dx == 0.0 {
				dx = jiggle(rng);
				l += dx * dx;
			}
			if dy == 0.0 {
				dy = jiggle(rng);
				l += dy * dy;
			}
			let l = l.sqrt();
			let push = (r - l) / l * strength * alpha * 0.5;

			nodes[i].vx += dx * push;
			nodes[i].vy += dy * push;
			nodes[j].vx -= dx * push;
			nodes[j].vy -= dy * push;
		}
	}
}

/// Number of links touching each node, used to bias link corrections.
pub fn degrees(node_count: usize, links: &[Link]) -> Vec<usize> {
	let mut degree = vec![0; node_count];
	for link in links {
		if link.source < node_count && link.target < node_count {
			degree[link.source] += 1;
			degree[link.target] += 1;
		}
	}
	degree
}

/// Spring toward `distance` for every link. Heavily connected endpoints move less.
pub fn link(
	nodes: &mut [Node],
	links: &[Link],
	degree: &[usize],
	distance: f64,
	strength: f64,
	alpha: f64,
	rng: &mut impl Rng,
) {
	let n = nodes.len();
	for link in links {
		let (s, t) = (link.source, link.target);
		if link.is_self_link() || s >= n || t >= n {
			continue;
		}
		let (source, target) = (&nodes[s], &nodes[t]);
		let mut dx = target.x + target.vx - source.x - source.vx;
		let mut dy = target.y + target.vy - source.y - source.vy;
		if dx == 0.0 {
			dx = jiggle(rng);
		}
		if dy == 0.0 {
			dy = jiggle(rng);
		}
		let l = (dx * dx + dy * dy).sqrt();
		let k = (l - distance) / l * alpha * strength;
		let (fx, fy) = (dx * k, dy * k);
		let bias = degree[s] as f64 / (degree[s] + degree[t]) as f64;

		nodes[t].vx -= fx * bias;
		nodes[t].vy -= fy * bias;
		nodes[s].vx += fx * (1.0 - bias);
		nodes[s].vy += fy * (1.0 - bias);
	}
}
