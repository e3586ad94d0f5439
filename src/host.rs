use crate::core::{CalendarDate, Host, Scheduler, TaskHandle, Viewport};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Host` backed by the browser window.
pub struct BrowserHost {
    window: web::Window,
}

impl BrowserHost {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserHost {
    fn request_frame(&self, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("[host] requestAnimationFrame failed: {:?}", e);
        }
    }

    fn set_interval(&self, period: Duration, handle: TaskHandle, mut task: Box<dyn FnMut()>) {
        let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let id_tick = interval_id.clone();
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if handle.is_cancelled() {
                if let Some(id) = id_tick.take() {
                    window.clear_interval_with_handle(id);
                }
                return;
            }
            task();
        }) as Box<dyn FnMut()>);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period.as_millis() as i32,
            ) {
            Ok(id) => interval_id.set(Some(id)),
            Err(e) => log::error!("[host] setInterval failed: {:?}", e),
        }
        closure.forget();
    }
}

impl Host for BrowserHost {
    fn viewport(&self) -> Viewport {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        Viewport::new(width as f32, height as f32, scroll_y as f32)
    }

    fn location(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn today(&self) -> CalendarDate {
        let now = js_sys::Date::new_0();
        CalendarDate::new(now.get_month() + 1, now.get_date())
    }
}
