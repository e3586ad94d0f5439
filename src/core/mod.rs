pub mod config;
pub mod constants;
pub mod controller;
pub mod engine;
pub mod error;
pub mod flake;
pub mod runner;
pub mod schedule;
pub mod season;
pub mod surface;

pub use config::{density_from_f64, SnowConfig};
pub use constants::*;
pub use controller::{engage, ActivationController, ControllerState, Recheck};
pub use engine::{move_within_viewport, respawn_y, ScrollDirection, SnowEngine, StartOutcome};
pub use error::SnowError;
pub use flake::Flake;
pub use runner::SnowRunner;
pub use schedule::{Host, Scheduler, TaskHandle};
pub use season::{is_player_mode, is_snow_season, CalendarDate};
pub use surface::{AssetKind, FlakeElement, OverlaySurface, Viewport};
