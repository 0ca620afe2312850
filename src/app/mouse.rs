//! Mouse capture around the TUI session
//!
//! `ratatui::init` and `ratatui::restore` handle raw mode and the alternate
//! screen but leave mouse reporting alone, so it is switched here, including
//! on panic.

use std::io::{self, Write};
use std::panic;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

pub fn enable_mouse_capture(out: &mut impl Write) -> io::Result<()> {
    execute!(out, EnableMouseCapture)
}

pub fn disable_mouse_capture(out: &mut impl Write) -> io::Result<()> {
    execute!(out, DisableMouseCapture)
}

/// Chain a panic hook that turns mouse capture off before the current hook
///
/// Call after `ratatui::init` so the terminal is also restored before the
/// panic report is printed.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_mouse_capture(&mut io::stdout());
        previous(info);
    }));
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
