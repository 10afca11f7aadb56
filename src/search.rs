//! Stand-in for the question-answering backend.
//!
//! Answers every query by picking a couple of graph ids at random and citing
//! them as sources; the page publishes those sources as the highlight set.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;

/// How long the mock backend pretends to think.
pub const MOCK_LATENCY: Duration = Duration::from_secs(2);

/// Number of sources cited per answer.
pub const SOURCES_PER_ANSWER: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Answer text plus the graph ids it cites.
pub struct SearchResult {
	/// Human-readable answer shown in the result card.
	pub answer: String,
	/// Cited ids; the page highlights these.
	pub sources: Vec<String>,
}

/// Builds a canned answer for `query` citing up to [`SOURCES_PER_ANSWER`]
/// distinct ids drawn from `candidates`.
pub fn mock_answer(query: &str, candidates: &[String], rng: &mut impl Rng) -> SearchResult {
	let sources: Vec<String> = candidates
		.choose_multiple(rng, SOURCES_PER_ANSWER)
		.cloned()
		.collect();

	let answer = match sources.first() {
		Some(first) => format!(
			"Found portfolio items related to \"{query}\". This topic builds on the core stack connected to {first}."
		),
		None => format!("Nothing in the portfolio matches \"{query}\" yet."),
	};

	SearchResult { answer, sources }
}
