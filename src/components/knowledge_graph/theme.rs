//! Visual theming for the knowledge graph background.
//!
//! Colors and sizes for links, plain nodes and highlighted nodes. Every field
//! can be overridden from JSON; missing fields keep their defaults.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `0.0..=1.0`; defaults to opaque when omitted.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex for opaque colors, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Thin connective strokes between linked nodes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
	/// Stroke color, usually faint.
	pub color: Color,
	/// Stroke width in pixels.
	pub width: f64,
}

impl Default for LinkStyle {
	fn default() -> Self {
		Self {
			color: Color::rgba(255, 255, 255, 0.1),
			width: 1.0,
		}
	}
}

/// Plain node discs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
	/// Fill color.
	pub color: Color,
	/// Disc radius in pixels.
	pub radius: f64,
}

impl Default for NodeStyle {
	fn default() -> Self {
		Self {
			color: Color::rgba(255, 255, 255, 0.5),
			radius: 2.0,
		}
	}
}

/// Emphasized nodes: larger disc, soft glow and an id label.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
	/// Disc fill color.
	pub color: Color,
	/// Disc radius, larger than a plain node's.
	pub radius: f64,
	/// Color at the center of the glow, fading to transparent.
	pub glow_color: Color,
	/// Outer radius of the glow gradient.
	pub glow_radius: f64,
	/// Label text color.
	pub label_color: Color,
	/// CSS font shorthand for the id label.
	pub label_font: String,
	/// Gap between the disc edge and the label.
	pub label_offset: f64,
	/// Downward shift of the label baseline from the node center.
	pub label_baseline: f64,
}

impl Default for HighlightStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(96, 165, 250),
			radius: 6.0,
			glow_color: Color::rgba(96, 165, 250, 0.6),
			glow_radius: 18.0,
			label_color: Color::rgba(191, 219, 254, 0.95),
			label_font: "12px sans-serif".into(),
			label_offset: 4.0,
			label_baseline: 4.0,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
	/// Fill painted under everything on every frame.
	pub background: Color,
	/// Link strokes.
	pub link: LinkStyle,
	/// Plain nodes.
	pub node: NodeStyle,
	/// Highlighted nodes.
	pub highlight: HighlightStyle,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(26, 26, 26),
			link: LinkStyle::default(),
			node: NodeStyle::default(),
			highlight: HighlightStyle::default(),
		}
	}
}
