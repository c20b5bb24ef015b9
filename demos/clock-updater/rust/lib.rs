// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

pub mod clock;
mod controller;

pub mod ui {
    slint::include_modules!();
}

pub use clock::{ClockAction, ClockError, ClockState};
pub use controller::ClockController;

use ui::ClockUpdater;

/// Creates the clock window showing `00:00`, with all four buttons wired up.
pub fn create_window() -> Result<ClockUpdater, slint::PlatformError> {
    create_window_at(ClockState::new())
}

/// Like [`create_window`], but starting from `initial`.
pub fn create_window_at(initial: ClockState) -> Result<ClockUpdater, slint::PlatformError> {
    let window = ClockUpdater::new()?;
    ClockController::new(initial).initialize_ui(&window);
    log::info!("clock window created at {initial}");
    Ok(window)
}

/// Creates the window and runs the event loop until it is closed.
pub fn run() -> Result<(), slint::PlatformError> {
    use slint::ComponentHandle;

    let window = create_window()?;
    window.run()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    if let Err(e) = run() {
        log::error!("Runtime error: {}", e);
    }
}
