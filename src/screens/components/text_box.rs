use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::fmt::{Debug, Formatter};

/// Labeled single-line input. The validator decides whether a typed
/// character is accepted given the current content.
pub struct TextBox {
    value: String,
    placeholder: Option<String>,
    pub writing_mode: bool,
    label: String,
    pub validator: Box<dyn Fn(&str, char) -> bool + Send>,
}

impl Debug for TextBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("value", &self.value)
            .field("writing_mode", &self.writing_mode)
            .field("label", &self.label)
            .finish()
    }
}

impl TextBox {
    pub fn new(label: String, writing_mode: bool) -> Self {
        Self {
            value: String::new(),
            placeholder: None,
            writing_mode,
            label,
            validator: Box::new(|_, _| true),
        }
    }

    pub fn with_validator<F>(label: String, writing_mode: bool, validator: F) -> Self
    where
        F: Fn(&str, char) -> bool + Send + 'static,
    {
        Self {
            validator: Box::new(validator),
            ..Self::new(label, writing_mode)
        }
    }

    /// Seed the box with an initial value (e.g. a derived default name).
    pub fn with_value(label: String, value: String, writing_mode: bool) -> Self {
        Self {
            value,
            ..Self::new(label, writing_mode)
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (text, style) = if self.value.is_empty() {
            match &self.placeholder {
                Some(p) => (
                    format!("{}: {}", self.label, p),
                    Style::default().fg(Color::DarkGray),
                ),
                None => (format!("{}: ", self.label), Style::default()),
            }
        } else {
            (format!("{}: {}", self.label, self.value), Style::default())
        };
        let widget = Paragraph::new(text).style(if self.writing_mode {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        });
        f.render_widget(widget, area);
    }

    pub fn handle_char(&mut self, c: char) {
        if self.writing_mode && self.validator.as_ref()(&self.value, c) {
            self.value.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.writing_mode {
            self.value.pop();
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `None` when the box holds nothing but whitespace.
    pub fn get_selected_value(&self) -> Option<String> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
