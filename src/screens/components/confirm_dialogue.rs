use crate::screens::components::notify_banner::NotifyBanner;
use ratatui::{layout::Rect, Frame};

/// Two-phase commit for destructive operations: the screen arms the
/// dialogue with a pending entry and a warning banner; only an explicit
/// confirm key consumes the entry and runs the operation, any other key
/// cancels. No entry, no side effect.
#[derive(Debug)]
pub struct ConfirmDialogue<T> {
    pub banner: NotifyBanner,
    entry: Option<T>,
}

impl<T> ConfirmDialogue<T> {
    pub fn new() -> Self {
        Self {
            banner: NotifyBanner::new(),
            entry: None,
        }
    }

    pub fn arm(&mut self, entry: T, prompt: String) {
        self.entry = Some(entry);
        self.banner.set_warning(prompt);
    }

    pub fn is_armed(&self) -> bool {
        self.entry.is_some()
    }

    /// Consume the pending entry on confirmation.
    pub fn confirm(&mut self) -> Option<T> {
        self.banner.reset();
        self.entry.take()
    }

    pub fn cancel(&mut self) {
        self.banner.reset();
        self.entry = None;
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.entry.is_some() {
            self.banner.render(f, area);
        }
    }
}
