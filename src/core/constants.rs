// Snowfall tuning constants shared by the engine, controller and browser host.

// Flake appearance
pub const FLAKE_RADIUS_MIN: f32 = 10.0;
pub const FLAKE_RADIUS_MAX: f32 = 15.0;
pub const DESCENDING_SPEED_MIN: f32 = 1.0; // px per frame
pub const DESCENDING_SPEED_MAX: f32 = 3.0;

// Viewport tracking
pub const VIEWPORT_TOLERANCE_PX: f32 = 30.0; // slack above/below the visible window
pub const RESPAWN_OFFSET_PX: f32 = 25.0; // nudge applied in the scroll direction
pub const SPAWN_EDGE_OFFSET_PX: f32 = 50.0; // keep initial flakes off the side edges

// Timers
pub const SCROLL_SAMPLE_INTERVAL_MS: u64 = 100;
pub const RECHECK_INTERVAL_MS: u64 = 250;

// Season window: after Dec 14th, before Jan 6th
pub const SEASON_START_MONTH: u32 = 12;
pub const SEASON_START_AFTER_DAY: u32 = 14;
pub const SEASON_END_MONTH: u32 = 1;
pub const SEASON_END_BEFORE_DAY: u32 = 6;

// Page integration
pub const DEFAULT_DENSITY: usize = 30;
pub const MAX_DENSITY: usize = 500; // upper bound on flake elements per page
pub const DEFAULT_CONTAINER_ID: &str = "snowContainer";
pub const DEFAULT_IMAGE: &str = "assets/snow/svg/snowflake1.svg";
pub const PLAYER_MODE_MARKER: &str = "/video";
pub const FLAKE_CLASS: &str = "snowFlake";
pub const VECTOR_TINT: &str = "white"; // fill + stroke applied to loaded svg flakes
