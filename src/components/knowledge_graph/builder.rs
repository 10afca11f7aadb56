//! Turns a list of node ids into one generation's nodes and random links.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use super::config::BuildConfig;
use super::types::{GraphData, Link, Node};

/// Descriptive ids shown when the caller has nothing to visualize.
pub const DEFAULT_NODE_IDS: &[&str] = &[
	"Portfolio_Project_1",
	"Portfolio_Project_2",
	"Side_Project_A",
	"Skill_React",
	"Skill_Python",
	"Certificate_AWS",
	"Experience_B",
];

/// The substitute id list: the descriptive ids, padded with anonymous
/// `node-{i}` ids up to `count`. Never empty.
pub fn default_ids(count: usize) -> Vec<String> {
	let count = count.max(1);
	DEFAULT_NODE_IDS
		.iter()
		.map(|id| id.to_string())
		.chain((DEFAULT_NODE_IDS.len()..).map(|i| format!("node-{i}")))
		.take(count)
		.collect()
}

/// Builds the node set and a synthetic link set.
///
/// Ids are kept in input order with later duplicates dropped. Links pick both
/// endpoints uniformly at random with replacement, so self-links and repeated
/// pairs are possible.
pub fn build_graph(ids: &[String], config: &BuildConfig, rng: &mut impl Rng) -> GraphData {
	let substitute;
	let ids = if ids.is_empty() {
		substitute = default_ids(config.default_node_count);
		&substitute[..]
	} else {
		ids
	};

	let mut seen = HashSet::with_capacity(ids.len());
	let nodes: Vec<Node> = ids
		.iter()
		.filter(|id| seen.insert(id.as_str()))
		.map(|id| Node::new(id.as_str()))
		.collect();
	if nodes.len() < ids.len() {
		debug!(
			"baruda-graph: dropped {} duplicate node ids",
			ids.len() - nodes.len()
		);
	}

	let n = nodes.len();
	let links = (0..config.link_count)
		.map(|_| Link::new(rng.gen_range(0..n), rng.gen_range(0..n)))
		.collect();

	GraphData { nodes, links }
}
