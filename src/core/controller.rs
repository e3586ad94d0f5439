use super::constants::RECHECK_INTERVAL_MS;
use super::runner::SnowRunner;
use super::schedule::{Host, TaskHandle};
use super::season::{is_player_mode, is_snow_season, CalendarDate};
use super::surface::OverlaySurface;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Dormant,
    Active,
}

/// Result of one recheck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recheck {
    Continue,
    Halt,
}

/// Starts and stops the snow depending on the season and the page mode.
///
/// The season is decided once, from the date passed to `new`; later ticks
/// only look at the page location.
pub struct ActivationController<S: OverlaySurface + 'static, H: Host + 'static> {
    runner: SnowRunner<S, H>,
    in_season: bool,
    player_mode_marker: String,
    halted: bool,
}

impl<S: OverlaySurface + 'static, H: Host + 'static> ActivationController<S, H> {
    pub fn new(
        runner: SnowRunner<S, H>,
        today: CalendarDate,
        player_mode_marker: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            in_season: is_snow_season(today),
            player_mode_marker: player_mode_marker.into(),
            halted: false,
        }
    }

    pub fn in_season(&self) -> bool {
        self.in_season
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn state(&self) -> ControllerState {
        if self.runner.is_enabled() {
            ControllerState::Active
        } else {
            ControllerState::Dormant
        }
    }

    pub fn runner(&self) -> &SnowRunner<S, H> {
        &self.runner
    }

    pub fn tick(&mut self, location: &str) -> Recheck {
        if !self.in_season || self.halted {
            return Recheck::Halt;
        }
        let enabled = self.runner.is_enabled();
        if is_player_mode(location, &self.player_mode_marker) {
            if enabled {
                log::info!("[controller] player mode detected, disabling snow");
                self.runner.stop();
            }
        } else if !enabled {
            log::info!("[controller] not in player mode, enabling snow");
            if let Err(e) = self.runner.start() {
                log::error!("[controller] {}", e);
                self.runner.stop();
                self.halted = true;
                return Recheck::Halt;
            }
        }
        Recheck::Continue
    }
}

/// Run the first recheck now and keep rechecking every 250 ms.
///
/// Returns the recheck loop's handle, or `None` when nothing was scheduled
/// (out of season, or the first tick already halted).
pub fn engage<S, H>(controller: Rc<RefCell<ActivationController<S, H>>>) -> Option<TaskHandle>
where
    S: OverlaySurface + 'static,
    H: Host + 'static,
{
    let host = controller.borrow().runner().host().clone();
    if !controller.borrow().in_season() {
        log::info!("[controller] not snow time, snow runs between 15/12 and 05/01");
        return None;
    }
    log::info!("[controller] snow time (until 05/01)");

    if controller.borrow_mut().tick(&host.location()) == Recheck::Halt {
        return None;
    }
    let handle = TaskHandle::new();
    let loop_handle = handle.clone();
    let host_tick = host.clone();
    host.set_interval(
        Duration::from_millis(RECHECK_INTERVAL_MS),
        handle.clone(),
        Box::new(move || {
            let location = host_tick.location();
            if controller.borrow_mut().tick(&location) == Recheck::Halt {
                loop_handle.cancel();
            }
        }),
    );
    Some(handle)
}
