use super::season::CalendarDate;
use super::surface::Viewport;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Shared cancellation flag for a scheduled task.
///
/// The owner keeps one clone and the scheduled callback another; the callback
/// checks the flag before re-arming itself, so cancelling takes effect at the
/// next boundary rather than pre-empting a running callback.
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Timing sources offered by the host event loop.
pub trait Scheduler {
    /// Run `task` once before the next repaint.
    fn request_frame(&self, task: Box<dyn FnOnce()>);

    /// Run `task` every `period` until `handle` is cancelled. Implementations
    /// must check the handle before each invocation and release the timer once
    /// it is cancelled.
    fn set_interval(&self, period: Duration, handle: TaskHandle, task: Box<dyn FnMut()>);
}

/// Read-only page signals plus scheduling.
pub trait Host: Scheduler {
    fn viewport(&self) -> Viewport;
    fn location(&self) -> String;
    fn today(&self) -> CalendarDate;
}
