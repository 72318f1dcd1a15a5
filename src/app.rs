use crate::screens::screen::ScreenAsync;

/// Stack of screens; the top one receives keys and renders.
pub struct App {
    screens: Vec<Box<dyn ScreenAsync + Send>>,
}

impl App {
    pub fn new(home: Box<dyn ScreenAsync + Send>) -> Self {
        Self {
            screens: vec![home],
        }
    }

    pub fn current_screen(&mut self) -> Option<&mut Box<dyn ScreenAsync + Send>> {
        self.screens.last_mut()
    }

    /// Push a screen and let it fetch its data before it is shown.
    pub async fn push_screen(&mut self, mut screen: Box<dyn ScreenAsync + Send>) {
        screen.refresh_data().await;
        self.screens.push(screen);
    }

    pub async fn pop_screen(&mut self, refresh: bool, count: Option<u8>) {
        let count = count.unwrap_or(0) as usize;
        if count == 0 {
            return;
        }
        let to_pop = count.min(self.screens.len().saturating_sub(1));
        for _ in 0..to_pop {
            self.screens.pop();
        }
        if refresh {
            if let Some(prev) = self.screens.last_mut() {
                prev.refresh_data().await;
            }
        }
    }
}
