//! Animated force-directed knowledge graph used as a page background.
//!
//! Renders a full-viewport canvas with:
//! - A force simulation (centering, repulsion, collision, link attraction)
//!   that relaxes to rest and can be reheated
//! - Pointer moves that knock nearby nodes away
//! - Highlighted nodes drawn larger, with a glow and their id as label
//!
//! The simulation core (`builder`, `engine`, `forces`, `render`, `scene`) is
//! plain Rust and runs on the host; only the component, frame loop, canvas
//! surface and viewport tracker touch the browser.
//!
//! # Example
//!
//! ```ignore
//! use baruda_graph::KnowledgeGraphBackground;
//!
//! let (ids, _) = signal(Vec::<String>::new());
//! let (highlights, _) = signal(vec!["Skill_Python".to_string()]);
//!
//! view! { <KnowledgeGraphBackground node_ids=ids highlight_ids=highlights /> }
//! ```

pub mod builder;
mod component;
pub mod config;
pub mod engine;
mod forces;
mod frame_loop;
pub mod highlight;
mod interaction;
mod render;
pub mod scene;
pub mod surface;
pub mod theme;
mod types;
mod viewport;

pub use component::KnowledgeGraphBackground;
pub use config::GraphConfig;
pub use theme::Theme;
pub use types::{GraphData, Link, Node};
pub use viewport::Viewport;
