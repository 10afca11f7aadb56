//! Graph data owned by the force engine for one generation.

/// A point mass in the simulation.
///
/// Position and velocity are meaningless until the engine places the node;
/// [`Node::position`] returns `None` until then.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Identifier shown as the label when the node is highlighted.
	pub id: String,
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Horizontal velocity, in pixels per step.
	pub vx: f64,
	/// Vertical velocity, in pixels per step.
	pub vy: f64,
	placed: bool,
}

impl Node {
	/// An unplaced node at rest.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			placed: false,
		}
	}

	/// A node already placed at `(x, y)`. The engine keeps this position on start.
	pub fn at(id: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			placed: true,
			x,
			y,
			..Self::new(id)
		}
	}

	/// `(x, y)` once placed.
	pub fn position(&self) -> Option<(f64, f64)> {
		self.placed.then_some((self.x, self.y))
	}

	/// Whether the node has been given a position.
	pub fn is_placed(&self) -> bool {
		self.placed
	}

	pub(super) fn place(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
		self.placed = true;
	}

	/// Squared length of the velocity.
	pub fn speed_squared(&self) -> f64 {
		self.vx * self.vx + self.vy * self.vy
	}
}

/// An undirected connection between two nodes of the same generation,
/// addressed by index into the node array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
	/// Index of one endpoint.
	pub source: usize,
	/// Index of the other endpoint.
	pub target: usize,
}

impl Link {
	/// Link between the nodes at `source` and `target`.
	pub fn new(source: usize, target: usize) -> Self {
		Self { source, target }
	}

	/// Self-links draw as zero-length segments and exert no force.
	pub fn is_self_link(&self) -> bool {
		self.source == self.target
	}
}

/// Nodes and links produced by the graph builder for one generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// One node per distinct id, in input order.
	pub nodes: Vec<Node>,
	/// Links indexing into `nodes`.
	pub links: Vec<Link>,
}

impl GraphData {
	/// Node ids in order.
	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.nodes.iter().map(|n| n.id.as_str())
	}
}
