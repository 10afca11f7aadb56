//! The externally supplied set of node ids drawn with emphasis.

use std::collections::HashSet;

/// Node ids to emphasize on the next frame.
///
/// Ids need not exist in the current generation; unknown ids are simply never
/// matched. Replacing the set is a plain store and never touches the frame loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightSet {
	ids: HashSet<String>,
}

impl HighlightSet {
	/// Set holding `ids`.
	pub fn new<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			ids: ids.into_iter().map(Into::into).collect(),
		}
	}

	/// Swaps in a new set. Returns `true` if the contents changed.
	pub fn replace<I, S>(&mut self, ids: I) -> bool
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let next = Self::new(ids);
		if next == *self {
			return false;
		}
		*self = next;
		true
	}

	/// Whether `id` is emphasized.
	pub fn contains(&self, id: &str) -> bool {
		self.ids.contains(id)
	}

	/// No ids to emphasize.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Number of distinct ids.
	pub fn len(&self) -> usize {
		self.ids.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn replace_reports_changes_only() {
		let mut set = HighlightSet::default();
		assert!(set.is_empty());
		assert!(set.replace(["Skill_React", "Experience_B"]));
		assert!(!set.replace(["Experience_B", "Skill_React"]));
		assert_eq!(set.len(), 2);
		assert!(set.contains("Skill_React"));
		assert!(!set.contains("Skill_Python"));
		assert!(set.replace(Vec::<String>::new()));
		assert!(set.is_empty());
	}
}
