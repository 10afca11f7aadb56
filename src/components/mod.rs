//! UI components: the graph background and the page chrome around it.

pub mod header;
pub mod knowledge_graph;
pub mod search_panel;
