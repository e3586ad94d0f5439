use super::constants::{
    FLAKE_RADIUS_MAX, FLAKE_RADIUS_MIN, MAX_DENSITY, RESPAWN_OFFSET_PX, SPAWN_EDGE_OFFSET_PX,
    VIEWPORT_TOLERANCE_PX,
};
use super::error::SnowError;
use super::flake::{random_between, Flake};
use super::schedule::TaskHandle;
use super::surface::{FlakeElement, OverlaySurface, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Direction of travel between the last two scroll samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    Still,
}

impl ScrollDirection {
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            ScrollDirection::Up => -1.0,
            ScrollDirection::Down => 1.0,
            ScrollDirection::Still => 0.0,
        }
    }

    pub fn between(previous: f32, current: f32) -> Self {
        if current > previous {
            ScrollDirection::Down
        } else if current < previous {
            ScrollDirection::Up
        } else {
            ScrollDirection::Still
        }
    }
}

/// Handles the caller must arm after a successful `start`.
#[derive(Debug)]
pub struct StartOutcome {
    /// Present only when the engine went from disabled to enabled.
    pub frame_loop: Option<TaskHandle>,
    pub scroll_sampler: TaskHandle,
}

/// Edge a flake reappears at after leaving the visible window.
#[inline]
pub fn respawn_y(viewport: &Viewport, direction: ScrollDirection, offset: f32) -> f32 {
    let nudge = offset * direction.signum();
    match direction {
        ScrollDirection::Down => viewport.bottom() + nudge,
        _ => viewport.top() + nudge,
    }
}

/// Teleport `flake` to the window edge if it drifted outside; no-op otherwise.
pub fn move_within_viewport<E: FlakeElement>(
    flake: &mut Flake<E>,
    viewport: &Viewport,
    direction: ScrollDirection,
) -> bool {
    if viewport.contains_y(flake.position().y, VIEWPORT_TOLERANCE_PX) {
        return false;
    }
    flake.set_y(respawn_y(viewport, direction, RESPAWN_OFFSET_PX));
    true
}

pub struct SnowEngine<S: OverlaySurface> {
    surface: Option<S>,
    enabled: bool,
    images: Vec<String>,
    flakes: Vec<Flake<S::Element>>,
    density: usize,
    last_scroll: f32,
    scroll_direction: ScrollDirection,
    container_height: f32,
    frame_loop: Option<TaskHandle>,
    scroll_sampler: Option<TaskHandle>,
    rng: StdRng,
}

impl<S: OverlaySurface> SnowEngine<S> {
    /// `surface` is `None` when the page has no overlay container.
    /// `density` is clamped to `MAX_DENSITY`.
    pub fn new(surface: Option<S>, density: usize) -> Self {
        Self::with_rng(surface, density, StdRng::from_entropy())
    }

    pub fn with_seed(surface: Option<S>, density: usize, seed: u64) -> Self {
        Self::with_rng(surface, density, StdRng::seed_from_u64(seed))
    }

    fn with_rng(surface: Option<S>, density: usize, rng: StdRng) -> Self {
        let density = density.min(MAX_DENSITY);
        Self {
            surface,
            enabled: false,
            images: Vec::new(),
            flakes: Vec::with_capacity(density),
            density,
            last_scroll: 0.0,
            scroll_direction: ScrollDirection::Still,
            container_height: 0.0,
            frame_loop: None,
            scroll_sampler: None,
            rng,
        }
    }

    /// Replace the image pool and create `density` flakes inside `viewport`.
    ///
    /// Existing flakes are detached first so the flake count always equals
    /// the density afterwards. On error nothing changes.
    pub fn setup<T: AsRef<str>>(
        &mut self,
        images: &[T],
        viewport: &Viewport,
    ) -> Result<(), SnowError> {
        if images.is_empty() {
            log::error!("[snow] {}", SnowError::NoImages);
            return Err(SnowError::NoImages);
        }
        let Some(surface) = self.surface.as_mut() else {
            log::error!("[snow] {}", SnowError::SurfaceUnavailable);
            return Err(SnowError::SurfaceUnavailable);
        };

        self.images = images.iter().map(|i| i.as_ref().to_string()).collect();
        log::info!("[snow] setting up snow images: {}", self.images.join(", "));

        for mut old in self.flakes.drain(..) {
            old.detach_from(surface);
        }
        for _ in 0..self.density {
            let Some(image) = self.images.choose(&mut self.rng) else {
                break;
            };
            let radius = random_between(&mut self.rng, FLAKE_RADIUS_MIN, FLAKE_RADIUS_MAX);
            let at = Vec2::new(
                random_between(
                    &mut self.rng,
                    SPAWN_EDGE_OFFSET_PX,
                    viewport.width - SPAWN_EDGE_OFFSET_PX,
                ),
                random_between(&mut self.rng, viewport.top(), viewport.bottom()),
            );
            let mut flake = Flake::new(surface, radius, image, at, viewport.width, &mut self.rng);
            flake.append_to(surface);
            self.flakes.push(flake);
        }
        log::info!("[snow] created {} flakes", self.flakes.len());
        Ok(())
    }

    /// Enable the animation. Re-arms the scroll sampler on every call.
    pub fn start(&mut self) -> Result<StartOutcome, SnowError> {
        let mut frame_loop = None;
        if !self.enabled {
            if self.flakes.is_empty() {
                return Err(SnowError::Uninitialized);
            }
            log::info!("[snow] enabling snow");
            self.enabled = true;
            let handle = TaskHandle::new();
            if let Some(previous) = self.frame_loop.replace(handle.clone()) {
                previous.cancel();
            }
            frame_loop = Some(handle);
        }

        self.set_container_visible(true);
        let sampler = TaskHandle::new();
        if let Some(previous) = self.scroll_sampler.replace(sampler.clone()) {
            previous.cancel();
        }
        Ok(StartOutcome {
            frame_loop,
            scroll_sampler: sampler,
        })
    }

    pub fn stop(&mut self) {
        if !self.enabled && self.scroll_sampler.is_none() {
            return;
        }
        if self.enabled {
            log::info!("[snow] disabling snow");
            self.enabled = false;
        }
        self.set_container_visible(false);
        if let Some(sampler) = self.scroll_sampler.take() {
            sampler.cancel();
        }
        if let Some(frames) = self.frame_loop.take() {
            frames.cancel();
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Only affects flakes created by later `setup` calls.
    pub fn add_image(&mut self, image: impl Into<String>) {
        self.images.push(image.into());
    }

    /// Advance one frame. Returns whether the frame loop should re-arm.
    pub fn update(&mut self, viewport: &Viewport) -> bool {
        self.update_container_height(viewport);
        let direction = self.scroll_direction;
        for flake in &mut self.flakes {
            if !move_within_viewport(flake, viewport, direction) {
                let y = flake.position().y + flake.descending_speed();
                flake.set_y(y);
            }
        }
        self.enabled
    }

    /// Stretch the overlay from the document top to the bottom of the view.
    pub fn update_container_height(&mut self, viewport: &Viewport) {
        let height = viewport.bottom();
        if height == self.container_height {
            return;
        }
        self.container_height = height;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_height(height);
        }
    }

    pub fn update_scroll_direction(&mut self, scroll_y: f32) -> ScrollDirection {
        self.scroll_direction = ScrollDirection::between(self.last_scroll, scroll_y);
        self.last_scroll = scroll_y;
        self.scroll_direction
    }

    fn set_container_visible(&mut self, visible: bool) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_visible(visible);
        }
    }

    pub fn flakes(&self) -> &[Flake<S::Element>] {
        &self.flakes
    }

    pub fn flakes_mut(&mut self) -> &mut [Flake<S::Element>] {
        &mut self.flakes
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn density(&self) -> usize {
        self.density
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    pub fn last_scroll(&self) -> f32 {
        self.last_scroll
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }
}
