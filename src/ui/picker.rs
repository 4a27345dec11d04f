// Fuzzy-filtered repository list.

use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::action::Action;
use crate::model::repo::DisplayItem;
use crate::ui::{fuzzy::fuzzy_score, Choice};

pub struct PickerState<'a> {
    pub prompt: String,
    pub items: &'a [DisplayItem],
    pub query: String,
    /// Indices into `items`, best match first.
    pub matches: Vec<usize>,
    pub list_state: ListState,
}

impl<'a> PickerState<'a> {
    pub fn new(prompt: impl Into<String>, items: &'a [DisplayItem]) -> Self {
        let mut state = Self {
            prompt: prompt.into(),
            items,
            query: String::new(),
            matches: Vec::new(),
            list_state: ListState::default(),
        };
        state.refilter();
        state
    }

    /// Recompute matches for the current query. Ties keep input order,
    /// so recently used repositories stay ahead of equally good matches.
    fn refilter(&mut self) {
        let mut scored: Vec<(i32, usize)> = self.items.iter().enumerate()
            .filter_map(|(i, item)| fuzzy_score(&self.query, &item.label).map(|s| (s, i)))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        self.matches = scored.into_iter().map(|(_, i)| i).collect();
        self.list_state.select(if self.matches.is_empty() { None } else { Some(0) });
    }

    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    pub fn navigate_up(&mut self) {
        if self.matches.is_empty() { return; }
        let i = self.list_state.selected().unwrap_or(0);
        let next = if i == 0 { self.matches.len() - 1 } else { i - 1 };
        self.list_state.select(Some(next));
    }

    pub fn navigate_down(&mut self) {
        if self.matches.is_empty() { return; }
        let i = self.list_state.selected().unwrap_or(0);
        let next = (i + 1) % self.matches.len();
        self.list_state.select(Some(next));
    }

    /// Index into `items` of the highlighted row.
    pub fn selected_index(&self) -> Option<usize> {
        let row = self.list_state.selected()?;
        self.matches.get(row).copied()
    }

    /// Apply one action; `Some` once the user has decided.
    pub fn apply(&mut self, action: Action) -> Option<Choice> {
        match action {
            Action::Select => return self.selected_index().map(Choice::Selected),
            Action::Cancel => return Some(Choice::Cancelled),
            Action::NavigateUp => self.navigate_up(),
            Action::NavigateDown => self.navigate_down(),
            Action::InputChar(c) => self.insert_char(c),
            Action::InputBackspace => self.backspace(),
            Action::ClearQuery => self.clear_query(),
            Action::None => {}
        }
        None
    }
}

pub fn render_picker(frame: &mut Frame, state: &mut PickerState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(frame.area());

    let prompt_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let prompt = Span::styled(state.prompt.as_str(), prompt_style);
    let query = Span::raw(state.query.as_str());
    let cursor_x = chunks[0].x + (prompt.width() + query.width()) as u16;
    frame.render_widget(Paragraph::new(Line::from(vec![prompt, query])), chunks[0]);
    frame.set_cursor_position((cursor_x.min(chunks[0].right().saturating_sub(1)), chunks[0].y));

    let count = format!("  {}/{}", state.matches.len(), state.items.len());
    frame.render_widget(
        Paragraph::new(count).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    let rows: Vec<ListItem> = state.matches.iter()
        .map(|&i| {
            let item = &state.items[i];
            ListItem::new(Line::from(vec![
                Span::raw(item.label.as_str()),
                Span::raw("  "),
                Span::styled(item.path.display().to_string(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    let list = List::new(rows)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[2], &mut state.list_state);
}
