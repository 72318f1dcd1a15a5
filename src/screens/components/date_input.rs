use crate::constants::DATE_FORMAT;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Free-text date field two-way bound to an optional calendar date.
///
/// Typing re-parses the whole text against `YYYY-MM-DD`; a successful
/// parse updates the bound value, while a failed one (including
/// impossible dates such as 2010-02-31) keeps the text on display and
/// leaves the last valid value bound, without surfacing an error.
/// Setting the value from outside reformats the displayed text.
#[derive(Debug)]
pub struct DateInput {
    text: String,
    value: Option<NaiveDate>,
    label: String,
    pub writing_mode: bool,
}

impl DateInput {
    pub fn new(label: String, writing_mode: bool) -> Self {
        Self {
            text: String::new(),
            value: None,
            label,
            writing_mode,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if !self.writing_mode {
            return;
        }
        if c.is_ascii_digit() || c == '-' {
            self.text.push(c);
            self.reparse();
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.writing_mode {
            self.text.pop();
            self.reparse();
        }
    }

    fn reparse(&mut self) {
        if let Ok(date) = NaiveDate::parse_from_str(&self.text, DATE_FORMAT) {
            self.value = Some(date);
        }
    }

    /// External update of the bound value (the other half of the
    /// two-way binding).
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
        match value {
            Some(date) => self.text = date.format(DATE_FORMAT).to_string(),
            None => self.text.clear(),
        }
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let text = if self.text.is_empty() {
            format!("{} (yyyy-mm-dd): ", self.label)
        } else {
            format!("{} (yyyy-mm-dd): {}", self.label, self.text)
        };
        let widget = Paragraph::new(text).style(if self.writing_mode {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        f.render_widget(widget, area);
    }
}
