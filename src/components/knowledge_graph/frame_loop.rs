//! A cancellable `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;

#[derive(Default)]
struct Inner {
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
	pending: Cell<Option<i32>>,
}

impl Inner {
	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let callback = self.callback.borrow();
		let Some(cb) = callback.as_ref() else {
			return;
		};
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(handle) => self.pending.set(Some(handle)),
			Err(e) => warn!("baruda-graph: could not schedule frame: {:?}", e),
		}
	}
}

/// Calls `on_frame` once per display refresh until stopped or dropped.
///
/// The scheduled callback only holds a weak reference back to the loop, so
/// dropping the `FrameLoop` is enough to end it.
pub struct FrameLoop {
	inner: Rc<Inner>,
}

impl FrameLoop {
	/// Schedules the first frame immediately.
	pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
		let inner = Rc::new(Inner::default());
		let weak = Rc::downgrade(&inner);
		let callback: Closure<dyn FnMut()> = Closure::new(move || {
			let Some(inner) = weak.upgrade() else {
				return;
			};
			inner.pending.set(None);
			on_frame();
			inner.schedule();
		});
		*inner.callback.borrow_mut() = Some(callback);
		inner.schedule();
		Self { inner }
	}

	/// Cancels the pending frame and releases the callback.
	pub fn stop(&self) {
		if let Some(handle) = self.inner.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(handle);
			}
		}
		if self.inner.callback.borrow_mut().take().is_some() {
			debug!("baruda-graph: frame loop stopped");
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
