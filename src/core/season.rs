use super::constants::{
    SEASON_END_BEFORE_DAY, SEASON_END_MONTH, SEASON_START_AFTER_DAY, SEASON_START_MONTH,
};

/// Calendar day without a year; `month` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDate {
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// True from December 15th through January 5th.
#[inline]
pub fn is_snow_season(date: CalendarDate) -> bool {
    (date.month == SEASON_START_MONTH && date.day > SEASON_START_AFTER_DAY)
        || (date.month == SEASON_END_MONTH && date.day < SEASON_END_BEFORE_DAY)
}

/// Player pages carry `marker` somewhere in their URL.
#[inline]
pub fn is_player_mode(location: &str, marker: &str) -> bool {
    !marker.is_empty() && location.contains(marker)
}
