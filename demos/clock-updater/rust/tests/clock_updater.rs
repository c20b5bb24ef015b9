// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use clock_updater::ui::{ClockAction, ClockUpdater};
use clock_updater::{ClockState, create_window, create_window_at};
use i_slint_backend_testing::ElementHandle;

const BUTTON_IDS: [&str; 4] = [
    "ClockUpdater::hours-up-button",
    "ClockUpdater::hours-down-button",
    "ClockUpdater::minutes-up-button",
    "ClockUpdater::minutes-down-button",
];

fn find_one(app: &ClockUpdater, id: &str) -> ElementHandle {
    let mut it = ElementHandle::find_by_element_id(app, id);
    let elem = it.next().unwrap_or_else(|| panic!("no element with id {id}"));
    assert!(it.next().is_none(), "more than one element with id {id}");
    elem
}

fn click(app: &ClockUpdater, id: &str) {
    find_one(app, id).invoke_accessible_default_action();
}

fn displayed(app: &ClockUpdater) -> String {
    let label = find_one(app, "ClockUpdater::clock").accessible_label();
    let text = app.get_clock_text();
    assert_eq!(label.as_deref(), Some(text.as_str()));
    text.into()
}

#[test]
fn has_all_four_buttons() {
    i_slint_backend_testing::init_no_event_loop();
    let app = create_window().unwrap();

    for id in BUTTON_IDS {
        assert!(find_one(&app, id).is_valid());
    }
    for label in ["hours up", "hours down", "minutes up", "minutes down"] {
        assert_eq!(ElementHandle::find_by_accessible_label(&app, label).count(), 1, "{label}");
    }
}

#[test]
fn has_the_default_state() {
    i_slint_backend_testing::init_no_event_loop();
    let app = create_window().unwrap();

    assert_eq!(displayed(&app), "00:00");
}

#[test]
fn buttons_wrap_the_display() {
    i_slint_backend_testing::init_no_event_loop();
    let app = create_window().unwrap();

    click(&app, "ClockUpdater::hours-down-button");
    assert_eq!(displayed(&app), "23:00");
    click(&app, "ClockUpdater::minutes-down-button");
    assert_eq!(displayed(&app), "23:59");
    click(&app, "ClockUpdater::hours-up-button");
    assert_eq!(displayed(&app), "00:59");
    click(&app, "ClockUpdater::minutes-up-button");
    assert_eq!(displayed(&app), "00:00");
}

#[test]
fn adjust_callback_drives_the_state() {
    i_slint_backend_testing::init_no_event_loop();
    let app = create_window_at(ClockState::from_hm(9, 58).unwrap()).unwrap();
    assert_eq!(displayed(&app), "09:58");

    app.invoke_adjust(ClockAction::MinutesUp);
    app.invoke_adjust(ClockAction::MinutesUp);
    assert_eq!(displayed(&app), "09:00");

    for _ in 0..15 {
        app.invoke_adjust(ClockAction::HoursUp);
    }
    let state: ClockState = displayed(&app).parse().unwrap();
    assert_eq!((state.hours(), state.minutes()), (0, 0));
}
