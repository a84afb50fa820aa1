//! Cancellable frame loop
//!
//! The loop is either `Stopped` or `Running` with exactly one pending frame.
//! Restarting goes through `stop()` first so two loops never overlap.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Id of a pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Source of display-refresh callbacks
pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Drop a pending request so its callback never runs
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running(FrameHandle),
}

/// Frame loop state machine over a scheduler
#[derive(Debug)]
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Stopped,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    /// Stopped → Running. No-op if a frame is already pending.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.request();
    }

    /// Running → Stopped, cancelling the pending frame
    pub fn stop(&mut self) {
        if let LoopState::Running(handle) = self.state {
            self.scheduler.cancel_frame(handle);
        }
        self.state = LoopState::Stopped;
    }

    /// The pending frame fired; request the next one
    pub fn reschedule(&mut self) {
        if self.is_running() {
            self.request();
        }
    }

    fn request(&mut self) {
        self.state = match self.scheduler.request_frame() {
            Some(handle) => LoopState::Running(handle),
            None => {
                log::warn!("Frame request refused, animation stopped");
                LoopState::Stopped
            }
        };
    }
}

#[derive(Debug, Default)]
struct FrameQueue {
    next_id: i32,
    pending: VecDeque<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

/// Host-driven scheduler for headless runs and tests.
///
/// Clones share one queue: keep a clone to `fire()` frames while the loop
/// owns the other.
#[derive(Debug, Clone, Default)]
pub struct QueuedScheduler {
    queue: Rc<RefCell<FrameQueue>>,
}

impl QueuedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest pending frame, as the host does before running its callback
    pub fn fire(&self) -> Option<FrameHandle> {
        self.queue.borrow_mut().pending.pop_front()
    }

    /// Frames requested and neither fired nor cancelled
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    pub fn requested(&self) -> usize {
        self.queue.borrow().requested
    }

    pub fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled
    }
}

impl FrameScheduler for QueuedScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let handle = FrameHandle(queue.next_id);
        queue.pending.push_back(handle);
        queue.requested += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|h| *h != handle);
        if queue.pending.len() < before {
            queue.cancelled += 1;
        }
    }
}
