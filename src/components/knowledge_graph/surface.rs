//! Drawing surfaces the renderer can paint on.
//!
//! [`Surface`] covers the handful of primitives the background needs.
//! [`CanvasSurface`] implements it on an HTML canvas 2D context.

use std::f64::consts::PI;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;

/// A straight segment from `(x1, y1)` to `(x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	/// Start x.
	pub x1: f64,
	/// Start y.
	pub y1: f64,
	/// End x.
	pub x2: f64,
	/// End y.
	pub y2: f64,
}

/// Soft radial halo drawn behind a disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	/// Color at the center, fading to transparent at `radius`.
	pub color: Color,
	/// Outer radius of the halo.
	pub radius: f64,
}

/// The drawing primitives the renderer uses.
pub trait Surface {
	/// Overwrites the whole surface with `background`.
	fn clear(&mut self, width: f64, height: f64, background: Color);
	/// Strokes all segments as a single path.
	fn stroke_segments(&mut self, segments: &[Segment], color: Color, width: f64);
	/// Fills a circle, drawing `glow` behind it first when given.
	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>);
	/// Draws `text` with its baseline starting at `(x, y)`.
	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color);
}

/// Canvas 2D implementation of [`Surface`].
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquires the 2D context. `None` means the canvas cannot be drawn on yet.
	pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx,
			Ok(None) => {
				warn!("baruda-graph: canvas has no 2d context");
				return None;
			}
			Err(e) => {
				warn!("baruda-graph: failed to get 2d context: {:?}", e);
				return None;
			}
		};
		ctx.dyn_into::<CanvasRenderingContext2d>().ok().map(|ctx| Self { ctx })
	}

	fn draw_glow(&self, x: f64, y: f64, inner: f64, glow: Glow) {
		let Ok(gradient) = self
			.ctx
			.create_radial_gradient(x, y, inner * 0.5, x, y, glow.radius)
		else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, &glow.color.to_css());
		let _ = gradient.add_color_stop(0.4, &glow.color.with_alpha(glow.color.a * 0.35).to_css());
		let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)");

		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, glow.radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill();
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64, background: Color) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
		self.ctx.set_fill_style_str(&background.to_css());
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn stroke_segments(&mut self, segments: &[Segment], color: Color, width: f64) {
		if segments.is_empty() {
			return;
		}
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		for s in segments {
			self.ctx.move_to(s.x1, s.y1);
			self.ctx.line_to(s.x2, s.y2);
		}
		self.ctx.stroke();
	}

	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>) {
		if let Some(glow) = glow {
			self.draw_glow(x, y, radius, glow);
		}
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color) {
		self.ctx.set_font(font);
		self.ctx.set_fill_style_str(&color.to_css());
		let _ = self.ctx.fill_text(text, x, y);
	}
}

/// Records draw calls so rendering can be checked without a browser.
#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Clear {
			width: f64,
			height: f64,
		},
		Segments(Vec<Segment>),
		Disc {
			x: f64,
			y: f64,
			radius: f64,
			color: Color,
			glow: Option<Glow>,
		},
		Text {
			text: String,
			x: f64,
			y: f64,
		},
	}

	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: Vec<DrawOp>,
	}

	impl RecordingSurface {
		pub fn discs(&self) -> Vec<&DrawOp> {
			self.ops
				.iter()
				.filter(|op| matches!(op, DrawOp::Disc { .. }))
				.collect()
		}

		pub fn texts(&self) -> Vec<&str> {
			self.ops
				.iter()
				.filter_map(|op| match op {
					DrawOp::Text { text, .. } => Some(text.as_str()),
					_ => None,
				})
				.collect()
		}

		pub fn segments(&self) -> Vec<Segment> {
			self.ops
				.iter()
				.filter_map(|op| match op {
					DrawOp::Segments(s) => Some(s.clone()),
					_ => None,
				})
				.flatten()
				.collect()
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, width: f64, height: f64, _background: Color) {
			self.ops.push(DrawOp::Clear { width, height });
		}

		fn stroke_segments(&mut self, segments: &[Segment], _color: Color, _width: f64) {
			self.ops.push(DrawOp::Segments(segments.to_vec()));
		}

		fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>) {
			self.ops.push(DrawOp::Disc {
				x,
				y,
				radius,
				color,
				glow,
			});
		}

		fn fill_text(&mut self, text: &str, x: f64, y: f64, _font: &str, _color: Color) {
			self.ops.push(DrawOp::Text {
				text: text.to_string(),
				x,
				y,
			});
		}
	}
}
