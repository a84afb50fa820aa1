//! `requestAnimationFrame` scheduler
//!
//! The frame callback is created once and reused for every request. It lives
//! in a shared slot because it captures the simulator that owns this
//! scheduler: build the scheduler, build the simulator, then fill `callback_slot`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::sim::{FrameHandle, FrameScheduler};

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct RafScheduler {
    window: web_sys::Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl RafScheduler {
    pub fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Shared slot the frame callback is stored in
    pub fn callback_slot(&self) -> Rc<RefCell<Option<FrameCallback>>> {
        self.callback.clone()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("Frame requested before callback was installed");
            return None;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}
