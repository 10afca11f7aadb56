//! Viewport measurement and resize tracking.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

/// Drawable surface size in CSS pixels. `(0, 0)` means "not measured yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
}

impl Viewport {
	/// A viewport of `width` by `height` pixels.
	pub fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// Converts a raw measurement, mapping negative or non-finite values to zero.
	pub fn from_measurement(width: f64, height: f64) -> Self {
		let clamp = |v: f64| {
			if v.is_finite() && v > 0.0 {
				v.min(u32::MAX as f64) as u32
			} else {
				0
			}
		};
		Self::new(clamp(width), clamp(height))
	}

	/// A viewport with zero area cannot host a generation.
	pub fn is_ready(&self) -> bool {
		self.width > 0 && self.height > 0
	}

	/// Attractor point for the centering force, raised by `y_ratio` of the height.
	pub fn attractor(&self, y_ratio: f64) -> (f64, f64) {
		(self.width as f64 / 2.0, self.height as f64 * y_ratio)
	}
}

fn measure_window(window: &Window) -> Viewport {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport::from_measurement(dim(window.inner_width()), dim(window.inner_height()))
}

/// Keeps a full-window canvas sized to the window and reports each new size.
///
/// The `resize` listener is removed when the tracker is dropped.
pub struct ViewportTracker {
	window: Window,
	listener: Closure<dyn FnMut()>,
}

impl ViewportTracker {
	/// Measures immediately, then again on every window resize.
	pub fn attach(canvas: HtmlCanvasElement, notify: impl Fn(Viewport) + 'static) -> Option<Self> {
		let window = web_sys::window()?;

		let apply = move |canvas: &HtmlCanvasElement, size: Viewport| {
			canvas.set_width(size.width);
			canvas.set_height(size.height);
			notify(size);
		};

		let initial = measure_window(&window);
		debug!(
			"baruda-graph: viewport measured at {}x{}",
			initial.width, initial.height
		);
		apply(&canvas, initial);

		let listener: Closure<dyn FnMut()> = Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			apply(&canvas, measure_window(&win));
		});
		if let Err(e) =
			window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
		{
			warn!("baruda-graph: could not subscribe to resize: {:?}", e);
		}

		Some(Self { window, listener })
	}
}

impl Drop for ViewportTracker {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.listener.as_ref().unchecked_ref());
	}
}
