use super::constants::{DESCENDING_SPEED_MAX, DESCENDING_SPEED_MIN};
use super::surface::{FlakeElement, OverlaySurface};
use glam::Vec2;
use rand::Rng;

/// Uniform draw from `[min, max)`; collapses to `min` for an empty range.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Convert an absolute x coordinate into a percentage of `viewport_width`.
#[inline]
pub fn x_to_percent(x: f32, viewport_width: f32) -> f32 {
    if viewport_width > 0.0 {
        x / viewport_width * 100.0
    } else {
        0.0
    }
}

/// One falling snowflake and the element that renders it.
///
/// `position.x` is a percentage of the viewport width so it reflows with
/// resizes; `position.y` is an absolute document-space pixel coordinate.
pub struct Flake<E> {
    radius: f32,
    image: String,
    position: Vec2,
    descending_speed: f32,
    element: E,
    attached: bool,
}

impl<E: FlakeElement> Flake<E> {
    /// Create a flake at absolute `at` (px), drawing its speed from `rng`.
    pub fn new<S, R>(
        surface: &mut S,
        radius: f32,
        image: &str,
        at: Vec2,
        viewport_width: f32,
        rng: &mut R,
    ) -> Self
    where
        S: OverlaySurface<Element = E>,
        R: Rng + ?Sized,
    {
        let element = surface.create_element(image, radius);
        let speed = random_between(rng, DESCENDING_SPEED_MIN, DESCENDING_SPEED_MAX);
        Self::with_element(element, radius, image, at, viewport_width, speed)
    }

    pub fn with_element(
        element: E,
        radius: f32,
        image: impl Into<String>,
        at: Vec2,
        viewport_width: f32,
        descending_speed: f32,
    ) -> Self {
        let mut flake = Self {
            radius,
            image: image.into(),
            position: Vec2::ZERO,
            descending_speed,
            element,
            attached: false,
        };
        flake.set_xy(x_to_percent(at.x, viewport_width), at.y);
        flake
    }

    /// Attach the element to `surface`. Returns false if it was already attached.
    pub fn append_to<S>(&mut self, surface: &mut S) -> bool
    where
        S: OverlaySurface<Element = E>,
    {
        if self.attached {
            return false;
        }
        surface.append(&self.element);
        self.attached = true;
        true
    }

    pub fn detach_from<S>(&mut self, surface: &mut S)
    where
        S: OverlaySurface<Element = E>,
    {
        if self.attached {
            surface.detach(&self.element);
            self.attached = false;
        }
    }

    pub fn set_x(&mut self, x_percent: f32) {
        self.position.x = x_percent;
        self.element.set_left_percent(x_percent);
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
        self.element.set_top_px(y);
    }

    pub fn set_xy(&mut self, x_percent: f32, y: f32) {
        self.set_x(x_percent);
        self.set_y(y);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn descending_speed(&self) -> f32 {
        self.descending_speed
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn element(&self) -> &E {
        &self.element
    }
}
