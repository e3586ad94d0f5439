use super::constants::SCROLL_SAMPLE_INTERVAL_MS;
use super::engine::SnowEngine;
use super::error::SnowError;
use super::schedule::{Host, TaskHandle};
use super::surface::OverlaySurface;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Drives a `SnowEngine` from the host's frame and interval callbacks.
pub struct SnowRunner<S: OverlaySurface + 'static, H: Host + 'static> {
    engine: Rc<RefCell<SnowEngine<S>>>,
    host: Rc<H>,
}

impl<S: OverlaySurface + 'static, H: Host + 'static> SnowRunner<S, H> {
    pub fn new(engine: SnowEngine<S>, host: Rc<H>) -> Self {
        Self {
            engine: Rc::new(RefCell::new(engine)),
            host,
        }
    }

    pub fn setup<T: AsRef<str>>(&self, images: &[T]) -> Result<(), SnowError> {
        let viewport = self.host.viewport();
        self.engine.borrow_mut().setup(images, &viewport)
    }

    /// Start the engine and arm its frame loop and scroll sampler.
    pub fn start(&self) -> Result<(), SnowError> {
        let outcome = self.engine.borrow_mut().start()?;
        if let Some(frames) = outcome.frame_loop {
            schedule_frame(self.engine.clone(), self.host.clone(), frames);
        }

        let engine = self.engine.clone();
        let host = self.host.clone();
        self.host.set_interval(
            Duration::from_millis(SCROLL_SAMPLE_INTERVAL_MS),
            outcome.scroll_sampler,
            Box::new(move || {
                let scroll_y = host.viewport().scroll_y;
                engine.borrow_mut().update_scroll_direction(scroll_y);
            }),
        );
        Ok(())
    }

    pub fn stop(&self) {
        self.engine.borrow_mut().stop();
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.borrow().is_enabled()
    }

    pub fn engine(&self) -> Ref<'_, SnowEngine<S>> {
        self.engine.borrow()
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }
}

// The frame that observes cancellation still runs; only the re-arm is skipped.
fn schedule_frame<S, H>(engine: Rc<RefCell<SnowEngine<S>>>, host: Rc<H>, handle: TaskHandle)
where
    S: OverlaySurface + 'static,
    H: Host + 'static,
{
    let host_next = host.clone();
    host.request_frame(Box::new(move || {
        let viewport = host_next.viewport();
        let enabled = engine.borrow_mut().update(&viewport);
        if enabled && !handle.is_cancelled() {
            schedule_frame(engine, host_next, handle);
        }
    }));
}
