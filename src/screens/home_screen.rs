use crate::{
    providers::{
        league_client::LeagueClient, settings_reader::SettingsReader,
        settings_writer::SettingsWriter,
    },
    screens::{
        components::navigation_footer::NavigationFooter,
        create_league_screen::CreateLeagueScreen,
        players_screen::PlayersScreen,
        screen::{AppAction, Renderable, ScreenAsync},
    },
    shapes::settings::Settings,
};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use std::sync::Arc;

const MENU_ENTRIES: [&str; 2] = ["create a new league", "manage players"];

pub struct HomeScreen<
    C: LeagueClient + Send + Sync,
    SR: SettingsReader + Send + Sync,
    SW: SettingsWriter + Send + Sync,
> {
    list_state: ListState,
    settings: Settings,
    client: Arc<C>,
    settings_reader: Arc<SR>,
    settings_writer: Arc<SW>,
    footer: NavigationFooter,
}

impl<
        C: LeagueClient + Send + Sync + 'static,
        SR: SettingsReader + Send + Sync + 'static,
        SW: SettingsWriter + Send + Sync + 'static,
    > HomeScreen<C, SR, SW>
{
    pub fn new(
        settings: Settings,
        client: Arc<C>,
        settings_reader: Arc<SR>,
        settings_writer: Arc<SW>,
    ) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            settings,
            client,
            settings_reader,
            settings_writer,
            footer: NavigationFooter::new(),
        }
    }

    fn next(&mut self) {
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(Some((selected + 1) % MENU_ENTRIES.len()));
    }

    fn previous(&mut self) {
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(Some((selected + MENU_ENTRIES.len() - 1) % MENU_ENTRIES.len()));
    }

    fn select(&mut self) -> AppAction {
        match self.list_state.selected() {
            Some(0) => AppAction::SwitchScreen(Box::new(CreateLeagueScreen::new(
                self.client.clone(),
            ))),
            Some(1) => AppAction::SwitchScreen(Box::new(PlayersScreen::new(
                self.settings.clone(),
                self.client.clone(),
                self.settings_reader.clone(),
                self.settings_writer.clone(),
            ))),
            _ => AppAction::None,
        }
    }
}

#[async_trait]
impl<
        C: LeagueClient + Send + Sync + 'static,
        SR: SettingsReader + Send + Sync + 'static,
        SW: SettingsWriter + Send + Sync + 'static,
    > ScreenAsync for HomeScreen<C, SR, SW>
{
    async fn refresh_data(&mut self) {
        // pick up whatever the file picker may have persisted
        if let Ok(settings) = self.settings_reader.read().await {
            self.settings = settings;
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Down => {
                self.next();
                AppAction::None
            }
            KeyCode::Up => {
                self.previous();
                AppAction::None
            }
            KeyCode::Enter => self.select(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppAction::Quit(Ok(())),
            _ => AppAction::None,
        }
    }
}

impl<
        C: LeagueClient + Send + Sync + 'static,
        SR: SettingsReader + Send + Sync + 'static,
        SW: SettingsWriter + Send + Sync + 'static,
    > Renderable for HomeScreen<C, SR, SW>
{
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, _footer_right: Rect) {
        let items: Vec<ListItem> = MENU_ENTRIES.iter().map(|e| ListItem::new(*e)).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("leaguedesk"))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, body, &mut self.list_state);
        self.footer.render(
            f,
            footer_left,
            vec![
                ("↑↓".to_string(), "navigate".to_string()),
                ("Enter".to_string(), "select".to_string()),
                ("Q".to_string(), "quit".to_string()),
            ],
        );
    }
}
