// Interactive repository picker.

pub mod fuzzy;
pub mod picker;

use std::io;

use crate::{
    event,
    model::repo::DisplayItem,
    tui::{self, Tui},
    ui::picker::{render_picker, PickerState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Index into the items passed to `choose`.
    Selected(usize),
    Cancelled,
}

pub trait Picker {
    fn choose(&mut self, prompt: &str, items: &[DisplayItem]) -> io::Result<Choice>;
}

/// Full-screen picker on the controlling terminal.
pub struct TuiPicker;

impl Picker for TuiPicker {
    fn choose(&mut self, prompt: &str, items: &[DisplayItem]) -> io::Result<Choice> {
        let mut terminal = tui::init()?;
        let result = run_picker(&mut terminal, prompt, items);
        // Always restore terminal, even on error
        let _ = tui::restore(&mut terminal);
        result
    }
}

fn run_picker(terminal: &mut Tui, prompt: &str, items: &[DisplayItem]) -> io::Result<Choice> {
    let mut state = PickerState::new(prompt, items);
    loop {
        terminal.draw(|frame| render_picker(frame, &mut state))?;
        if let Some(choice) = state.apply(event::next_action()?) {
            return Ok(choice);
        }
    }
}
