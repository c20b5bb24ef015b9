// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! The hour/minute counter pair behind the clock display.
//!
//! [`ClockState`] is a plain value: every transition returns a new state and the
//! display surface keeps the only copy that matters.

use core::fmt;
use core::str::FromStr;

const HOURS_PER_DAY: u8 = 24;
const MINUTES_PER_HOUR: u8 = 60;

/// Error returned when building a [`ClockState`] from unchecked input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ClockError {
    /// The hour is not in `0..24`
    #[error("hour {0} is out of range, expected 0 to 23")]
    HoursOutOfRange(u32),
    /// The minute is not in `0..60`
    #[error("minute {0} is out of range, expected 0 to 59")]
    MinutesOutOfRange(u32),
    /// The text is not of the form `HH:MM`
    #[error("malformed time {0:?}, expected HH:MM")]
    Malformed(String),
}

/// One of the four discrete adjustments the display forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    HoursUp,
    HoursDown,
    MinutesUp,
    MinutesDown,
}

impl ClockAction {
    /// Short name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            ClockAction::HoursUp => "hours up",
            ClockAction::HoursDown => "hours down",
            ClockAction::MinutesUp => "minutes up",
            ClockAction::MinutesDown => "minutes down",
        }
    }
}

/// Hours in `0..24` and minutes in `0..60`, wrapping independently.
///
/// The fields are private so that the range invariant only has to be checked in
/// [`ClockState::from_hm`]; all other states are produced by the wrapping
/// transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClockState {
    hours: u8,
    minutes: u8,
}

impl ClockState {
    /// The state shown when the display is first loaded: `00:00`.
    pub const fn new() -> Self {
        Self { hours: 0, minutes: 0 }
    }

    /// Builds a state from explicit values, rejecting anything out of range.
    pub fn from_hm(hours: u32, minutes: u32) -> Result<Self, ClockError> {
        if hours >= u32::from(HOURS_PER_DAY) {
            return Err(ClockError::HoursOutOfRange(hours));
        }
        if minutes >= u32::from(MINUTES_PER_HOUR) {
            return Err(ClockError::MinutesOutOfRange(minutes));
        }
        Ok(Self { hours: hours as u8, minutes: minutes as u8 })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub fn increment_hours(self) -> Self {
        Self { hours: (self.hours + 1) % HOURS_PER_DAY, ..self }
    }

    #[must_use]
    pub fn decrement_hours(self) -> Self {
        Self { hours: (self.hours + HOURS_PER_DAY - 1) % HOURS_PER_DAY, ..self }
    }

    #[must_use]
    pub fn increment_minutes(self) -> Self {
        Self { minutes: (self.minutes + 1) % MINUTES_PER_HOUR, ..self }
    }

    #[must_use]
    pub fn decrement_minutes(self) -> Self {
        Self { minutes: (self.minutes + MINUTES_PER_HOUR - 1) % MINUTES_PER_HOUR, ..self }
    }

    /// Applies a single adjustment and returns the resulting state.
    #[must_use]
    pub fn apply(self, action: ClockAction) -> Self {
        match action {
            ClockAction::HoursUp => self.increment_hours(),
            ClockAction::HoursDown => self.decrement_hours(),
            ClockAction::MinutesUp => self.increment_minutes(),
            ClockAction::MinutesDown => self.decrement_minutes(),
        }
    }
}

/// Formats as `HH:MM`, both fields zero-padded to two digits.
impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Parses exactly what [`Display`](fmt::Display) produces.
impl FromStr for ClockState {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ClockError::Malformed(s.into());
        let (hours, minutes) = s.split_once(':').ok_or_else(malformed)?;
        let field = |text: &str| -> Result<u32, ClockError> {
            if text.len() != 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            text.parse().map_err(|_| malformed())
        };
        Self::from_hm(field(hours)?, field(minutes)?)
    }
}
