// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::{ComponentHandle, Weak};
use std::cell::Cell;
use std::rc::Rc;

use crate::clock::{ClockAction, ClockState};
use crate::ui::{self, ClockUpdater};

impl From<ui::ClockAction> for ClockAction {
    fn from(action: ui::ClockAction) -> Self {
        match action {
            ui::ClockAction::HoursUp => ClockAction::HoursUp,
            ui::ClockAction::HoursDown => ClockAction::HoursDown,
            ui::ClockAction::MinutesUp => ClockAction::MinutesUp,
            ui::ClockAction::MinutesDown => ClockAction::MinutesDown,
        }
    }
}

/// Owns the clock state of one window and keeps the display in sync with it.
pub struct ClockController {
    state: Rc<Cell<ClockState>>,
}

impl ClockController {
    pub fn new(initial: ClockState) -> Self {
        Self { state: Rc::new(Cell::new(initial)) }
    }

    pub fn initialize_ui(&self, window: &ClockUpdater) {
        window.set_clock_text(self.state.get().to_string().into());

        window.on_adjust({
            let window_weak = window.as_weak();
            let state = self.state.clone();

            move |action| Self::adjust(&window_weak, &state, action.into())
        });
    }

    fn adjust(window_weak: &Weak<ClockUpdater>, state: &Cell<ClockState>, action: ClockAction) {
        let old = state.get();
        let new = old.apply(action);
        state.set(new);
        log::debug!("{}: {} -> {}", action.name(), old, new);

        if let Some(window) = window_weak.upgrade() {
            window.set_clock_text(new.to_string().into());
        }
    }
}
