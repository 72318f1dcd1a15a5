use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub enum AppAction {
    None,
    SwitchScreen(Box<dyn ScreenAsync + Send>),
    /// The boolean tells whether the previous screen needs a refresh;
    /// the count is how many screens to pop.
    Back(bool, Option<u8>),
    Quit(std::io::Result<()>),
}

pub trait Renderable {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect);
}

#[async_trait]
pub trait ScreenAsync: Renderable {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction;
    async fn refresh_data(&mut self);
}
