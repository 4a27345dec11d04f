use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use crate::action::Action;

/// Block until the next terminal event and translate it.
pub fn next_action() -> io::Result<Action> {
    let action = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
        _ => Action::None,
    };
    Ok(action)
}

/// Chars edit the query; navigation lives on arrows and ctrl chords.
fn translate_key(key: KeyEvent) -> Action {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => Action::Select,
        (_, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Cancel,
        (_, KeyCode::Up) | (KeyModifiers::CONTROL, KeyCode::Char('p')) => Action::NavigateUp,
        (_, KeyCode::Down) | (KeyModifiers::CONTROL, KeyCode::Char('n')) => Action::NavigateDown,
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => Action::ClearQuery,
        (_, KeyCode::Backspace) => Action::InputBackspace,
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            Action::InputChar(c)
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Action {
        translate_key(KeyEvent::new(code, modifiers))
    }

    fn ctrl(c: char) -> Action {
        press(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn plain_and_shifted_chars_edit_query() {
        assert_eq!(press(KeyCode::Char('j'), KeyModifiers::NONE), Action::InputChar('j'));
        assert_eq!(press(KeyCode::Char('Q'), KeyModifiers::SHIFT), Action::InputChar('Q'));
    }

    #[test]
    fn control_chords() {
        assert_eq!(ctrl('c'), Action::Cancel);
        assert_eq!(ctrl('p'), Action::NavigateUp);
        assert_eq!(ctrl('n'), Action::NavigateDown);
        assert_eq!(ctrl('u'), Action::ClearQuery);
        assert_eq!(ctrl('x'), Action::None);
    }

    #[test]
    fn special_keys() {
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Action::Select);
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Action::Cancel);
        assert_eq!(press(KeyCode::Up, KeyModifiers::NONE), Action::NavigateUp);
        assert_eq!(press(KeyCode::Down, KeyModifiers::NONE), Action::NavigateDown);
        assert_eq!(press(KeyCode::Backspace, KeyModifiers::NONE), Action::InputBackspace);
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), Action::None);
    }
}
