// Shared host-side harness. The main crate is wasm-only, so the pure core
// modules are included directly and driven through recording doubles.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod snow {
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod controller {
        include!("../../src/core/controller.rs");
    }
    pub mod engine {
        include!("../../src/core/engine.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod flake {
        include!("../../src/core/flake.rs");
    }
    pub mod runner {
        include!("../../src/core/runner.rs");
    }
    pub mod schedule {
        include!("../../src/core/schedule.rs");
    }
    pub mod season {
        include!("../../src/core/season.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }

    pub use config::{density_from_f64, SnowConfig};
    pub use constants::*;
    pub use controller::{engage, ActivationController, ControllerState, Recheck};
    pub use engine::{move_within_viewport, respawn_y, ScrollDirection, SnowEngine, StartOutcome};
    pub use error::SnowError;
    pub use flake::{random_between, x_to_percent, Flake};
    pub use runner::SnowRunner;
    pub use schedule::{Host, Scheduler, TaskHandle};
    pub use season::{is_player_mode, is_snow_season, CalendarDate};
    pub use surface::{AssetKind, FlakeElement, OverlaySurface, Viewport};
}

use snow::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub const SCROLL_SAMPLE: Duration = Duration::from_millis(SCROLL_SAMPLE_INTERVAL_MS);
pub const RECHECK: Duration = Duration::from_millis(RECHECK_INTERVAL_MS);

pub fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0, 0.0)
}

// ---------------- Surface double ----------------

#[derive(Debug, Default)]
pub struct ElementState {
    pub image: String,
    pub radius: f32,
    pub left_percent: Option<f32>,
    pub top_px: Option<f32>,
    pub attached: bool,
}

#[derive(Clone, Debug)]
pub struct MockElement(pub Rc<RefCell<ElementState>>);

impl FlakeElement for MockElement {
    fn set_left_percent(&mut self, x_percent: f32) {
        self.0.borrow_mut().left_percent = Some(x_percent);
    }

    fn set_top_px(&mut self, y: f32) {
        self.0.borrow_mut().top_px = Some(y);
    }
}

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub created: Vec<Rc<RefCell<ElementState>>>,
    pub appended: usize,
    pub detached: usize,
    pub visible: Option<bool>,
    pub visibility_writes: usize,
    pub height: Option<f32>,
    pub height_writes: usize,
}

impl SurfaceLog {
    pub fn attached_count(&self) -> usize {
        self.created.iter().filter(|e| e.borrow().attached).count()
    }
}

/// Clones share one log, so a test can keep a copy after handing the
/// surface to an engine.
#[derive(Clone, Debug, Default)]
pub struct MockSurface {
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl OverlaySurface for MockSurface {
    type Element = MockElement;

    fn create_element(&mut self, image: &str, radius: f32) -> MockElement {
        let state = Rc::new(RefCell::new(ElementState {
            image: image.to_string(),
            radius,
            ..Default::default()
        }));
        self.log.borrow_mut().created.push(state.clone());
        MockElement(state)
    }

    fn append(&mut self, element: &MockElement) {
        element.0.borrow_mut().attached = true;
        self.log.borrow_mut().appended += 1;
    }

    fn detach(&mut self, element: &MockElement) {
        element.0.borrow_mut().attached = false;
        self.log.borrow_mut().detached += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        let mut log = self.log.borrow_mut();
        log.visible = Some(visible);
        log.visibility_writes += 1;
    }

    fn set_height(&mut self, height_px: f32) {
        let mut log = self.log.borrow_mut();
        log.height = Some(height_px);
        log.height_writes += 1;
    }
}

pub fn engine_with(density: usize, seed: u64) -> (SnowEngine<MockSurface>, MockSurface) {
    let surface = MockSurface::default();
    let engine = SnowEngine::with_seed(Some(surface.clone()), density, seed);
    (engine, surface)
}

// ---------------- Scheduler double ----------------

type IntervalTask = Rc<RefCell<Box<dyn FnMut()>>>;

struct Interval {
    period: Duration,
    handle: TaskHandle,
    task: IntervalTask,
}

/// Host whose frames and intervals only run when the test says so.
pub struct ManualHost {
    viewport: Cell<Viewport>,
    location: RefCell<String>,
    today: Cell<CalendarDate>,
    frames: RefCell<Vec<Box<dyn FnOnce()>>>,
    intervals: RefCell<Vec<Interval>>,
}

impl ManualHost {
    pub fn new(viewport: Viewport, location: &str, today: CalendarDate) -> Rc<Self> {
        Rc::new(Self {
            viewport: Cell::new(viewport),
            location: RefCell::new(location.to_string()),
            today: Cell::new(today),
            frames: RefCell::new(Vec::new()),
            intervals: RefCell::new(Vec::new()),
        })
    }

    pub fn set_scroll(&self, scroll_y: f32) {
        let mut vp = self.viewport.get();
        vp.scroll_y = scroll_y;
        self.viewport.set(vp);
    }

    pub fn set_location(&self, location: &str) {
        *self.location.borrow_mut() = location.to_string();
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Run every frame callback queued so far. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let batch: Vec<_> = self.frames.borrow_mut().drain(..).collect();
        let ran = batch.len();
        for task in batch {
            task();
        }
        ran
    }

    pub fn active_intervals(&self, period: Duration) -> usize {
        self.intervals
            .borrow()
            .iter()
            .filter(|i| i.period == period && !i.handle.is_cancelled())
            .count()
    }

    /// Fire each live interval with `period` once, then drop cancelled ones.
    pub fn fire(&self, period: Duration) {
        let due: Vec<(TaskHandle, IntervalTask)> = self
            .intervals
            .borrow()
            .iter()
            .filter(|i| i.period == period)
            .map(|i| (i.handle.clone(), i.task.clone()))
            .collect();
        for (handle, task) in due {
            if handle.is_cancelled() {
                continue;
            }
            let mut task = task.borrow_mut();
            (*task)();
        }
        self.intervals
            .borrow_mut()
            .retain(|i| !i.handle.is_cancelled());
    }
}

impl Scheduler for ManualHost {
    fn request_frame(&self, task: Box<dyn FnOnce()>) {
        self.frames.borrow_mut().push(task);
    }

    fn set_interval(&self, period: Duration, handle: TaskHandle, task: Box<dyn FnMut()>) {
        self.intervals.borrow_mut().push(Interval {
            period,
            handle,
            task: Rc::new(RefCell::new(task)),
        });
    }
}

impl Host for ManualHost {
    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn location(&self) -> String {
        self.location.borrow().clone()
    }

    fn today(&self) -> CalendarDate {
        self.today.get()
    }
}
