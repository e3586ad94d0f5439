/// Snapshot of the host viewport in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, scroll_y: f32) -> Self {
        Self {
            width,
            height,
            scroll_y,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.scroll_y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }

    /// Whether `y` lies in the visible window widened by `tolerance` on both sides.
    /// Both bounds are inclusive, so a flake exactly on an edge keeps falling.
    #[inline]
    pub fn contains_y(&self, y: f32, tolerance: f32) -> bool {
        y >= self.top() - tolerance && y <= self.bottom() + tolerance
    }
}

/// How an asset is rendered, derived from its path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    /// Tinted once after load.
    Vector,
    Raster,
}

impl AssetKind {
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".svg") {
            AssetKind::Vector
        } else {
            AssetKind::Raster
        }
    }
}

/// One rendered flake. Positions are written as style properties.
pub trait FlakeElement {
    fn set_left_percent(&mut self, x_percent: f32);
    fn set_top_px(&mut self, y: f32);
}

/// The container every flake is rendered into.
pub trait OverlaySurface {
    type Element: FlakeElement;

    /// Build a detached element showing `image` at `radius` px.
    fn create_element(&mut self, image: &str, radius: f32) -> Self::Element;
    fn append(&mut self, element: &Self::Element);
    fn detach(&mut self, element: &Self::Element);
    fn set_visible(&mut self, visible: bool);
    fn set_height(&mut self, height_px: f32);
}
