//! Frame rendering for the knowledge graph background.
//!
//! Each call repaints the whole surface from the node positions as they are
//! at that moment. Passes, back to front:
//! 1. Background
//! 2. Links as one stroked path
//! 3. Plain nodes
//! 4. Highlighted nodes (glow, disc, label) on top

use super::highlight::HighlightSet;
use super::surface::{Glow, Segment, Surface};
use super::theme::Theme;
use super::types::{Link, Node};
use super::viewport::Viewport;

/// Renders one frame. Links or nodes without an assigned position are skipped.
pub fn render(
	surface: &mut impl Surface,
	nodes: &[Node],
	links: &[Link],
	highlight: &HighlightSet,
	viewport: Viewport,
	theme: &Theme,
) {
	surface.clear(
		viewport.width as f64,
		viewport.height as f64,
		theme.background,
	);
	draw_links(surface, nodes, links, theme);
	draw_nodes(surface, nodes, highlight, theme);
}

fn draw_links(surface: &mut impl Surface, nodes: &[Node], links: &[Link], theme: &Theme) {
	let segments: Vec<Segment> = links
		.iter()
		.filter_map(|link| {
			let (x1, y1) = nodes.get(link.source)?.position()?;
			let (x2, y2) = nodes.get(link.target)?.position()?;
			Some(Segment { x1, y1, x2, y2 })
		})
		.collect();
	surface.stroke_segments(&segments, theme.link.color, theme.link.width);
}

fn draw_nodes(surface: &mut impl Surface, nodes: &[Node], highlight: &HighlightSet, theme: &Theme) {
	let placed = || nodes.iter().filter_map(|n| n.position().map(|p| (n, p)));

	for (_, (x, y)) in placed().filter(|(n, _)| !highlight.contains(&n.id)) {
		surface.fill_disc(x, y, theme.node.radius, theme.node.color, None);
	}

	if highlight.is_empty() {
		return;
	}

	let style = &theme.highlight;
	let glow = Glow {
		color: style.glow_color,
		radius: style.glow_radius,
	};
	for (node, (x, y)) in placed().filter(|(n, _)| highlight.contains(&n.id)) {
		surface.fill_disc(x, y, style.radius, style.color, Some(glow));
		surface.fill_text(
			&node.id,
			x + style.radius + style.label_offset,
			y + style.label_baseline,
			&style.label_font,
			style.label_color,
		);
	}
}
