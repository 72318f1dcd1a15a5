use crate::{
    logging::logger::{log_error, log_info},
    providers::{
        league_client::LeagueClient, settings_reader::SettingsReader,
        settings_writer::SettingsWriter,
    },
    roster::RosterController,
    screens::{
        components::{
            confirm_dialogue::ConfirmDialogue, navigation_footer::NavigationFooter,
            notify_banner::NotifyBanner,
        },
        file_system_screen::FileSystemScreen,
        screen::{AppAction, Renderable, ScreenAsync},
        upload_players::UploadPlayersAction,
    },
    shapes::{player::PlayerEntry, settings::Settings},
};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::sync::Arc;
use tokio::sync::Mutex;

struct ClearRequest;

pub struct PlayersScreen<
    C: LeagueClient + Send + Sync,
    SR: SettingsReader + Send + Sync,
    SW: SettingsWriter + Send + Sync,
> {
    roster: Arc<Mutex<RosterController<C>>>,
    players: Vec<PlayerEntry>,
    upload_errors: Vec<String>,
    list_state: ListState,
    notify: NotifyBanner,
    confirm_clear: ConfirmDialogue<ClearRequest>,
    footer: NavigationFooter,
    settings: Settings,
    settings_reader: Arc<SR>,
    settings_writer: Arc<SW>,
}

impl<
        C: LeagueClient + Send + Sync + 'static,
        SR: SettingsReader + Send + Sync + 'static,
        SW: SettingsWriter + Send + Sync + 'static,
    > PlayersScreen<C, SR, SW>
{
    pub fn new(
        settings: Settings,
        client: Arc<C>,
        settings_reader: Arc<SR>,
        settings_writer: Arc<SW>,
    ) -> Self {
        Self {
            roster: Arc::new(Mutex::new(RosterController::new(client))),
            players: Vec::new(),
            upload_errors: Vec::new(),
            list_state: ListState::default(),
            notify: NotifyBanner::new(),
            confirm_clear: ConfirmDialogue::new(),
            footer: NavigationFooter::new(),
            settings,
            settings_reader,
            settings_writer,
        }
    }

    fn sync_from_roster(&mut self, roster: &RosterController<C>) {
        self.players = roster.players().to_vec();
        self.upload_errors = roster.upload_errors().to_vec();
        if self.players.is_empty() {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= self.players.len() {
                self.list_state.select(Some(self.players.len() - 1));
            }
        } else {
            self.list_state.select(Some(0));
        }
    }

    fn next_player(&mut self) {
        if let (Some(selected), false) = (self.list_state.selected(), self.players.is_empty()) {
            self.list_state
                .select(Some((selected + 1) % self.players.len()));
        }
    }

    fn previous_player(&mut self) {
        if let (Some(selected), false) = (self.list_state.selected(), self.players.is_empty()) {
            self.list_state
                .select(Some((selected + self.players.len() - 1) % self.players.len()));
        }
    }

    fn start_upload(&mut self) -> AppAction {
        match self.settings.get_default_path() {
            Some(path) => AppAction::SwitchScreen(Box::new(FileSystemScreen::new(
                path,
                "upload players (CSV with 'name' and 'birthdate' columns)",
                UploadPlayersAction::new(self.roster.clone()),
                self.settings_reader.clone(),
                self.settings_writer.clone(),
            ))),
            None => {
                self.notify
                    .set_error("could not recognize the home directory".to_string());
                AppAction::None
            }
        }
    }

    fn request_clear(&mut self) -> AppAction {
        if self.players.is_empty() {
            return AppAction::None;
        }
        self.confirm_clear.arm(
            ClearRequest,
            format!(
                "This will permanently delete all {} player{}. Enter = confirm, any other key = cancel",
                self.players.len(),
                if self.players.len() == 1 { "" } else { "s" }
            ),
        );
        AppAction::None
    }

    async fn run_clear(&mut self) -> AppAction {
        let shared = self.roster.clone();
        let mut roster = shared.lock().await;
        match roster.clear().await {
            Ok(message) => {
                log_info("cleared all players");
                self.notify.set_info(message);
            }
            Err(e) => {
                log_error(&format!("could not clear players: {}", e));
                self.notify.set_error("Failed to clear players".to_string());
            }
        }
        self.sync_from_roster(&roster);
        AppAction::None
    }
}

#[async_trait]
impl<
        C: LeagueClient + Send + Sync + 'static,
        SR: SettingsReader + Send + Sync + 'static,
        SW: SettingsWriter + Send + Sync + 'static,
    > ScreenAsync for PlayersScreen<C, SR, SW>
{
    async fn refresh_data(&mut self) {
        if let Ok(settings) = self.settings_reader.read().await {
            self.settings = settings;
        }
        let shared = self.roster.clone();
        let mut roster = shared.lock().await;
        if let Err(e) = roster.load().await {
            log_error(&format!("could not load players: {}", e));
            self.notify.set_error("Failed to load players".to_string());
        }
        self.sync_from_roster(&roster);
    }

    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.confirm_clear.is_armed() {
            return match key.code {
                KeyCode::Enter => match self.confirm_clear.confirm() {
                    Some(ClearRequest) => self.run_clear().await,
                    None => AppAction::None,
                },
                _ => {
                    self.confirm_clear.cancel();
                    AppAction::None
                }
            };
        }
        if self.notify.has_value() {
            self.notify.reset();
            return AppAction::None;
        }
        match key.code {
            KeyCode::Down => {
                self.next_player();
                AppAction::None
            }
            KeyCode::Up => {
                self.previous_player();
                AppAction::None
            }
            KeyCode::Char('u') | KeyCode::Char('U') => self.start_upload(),
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Delete => self.request_clear(),
            KeyCode::Esc => AppAction::Back(true, Some(1)),
            KeyCode::Char('q') | KeyCode::Char('Q') => AppAction::Quit(Ok(())),
            _ => AppAction::None,
        }
    }
}

impl<
        C: LeagueClient + Send + Sync + 'static,
        SR: SettingsReader + Send + Sync + 'static,
        SW: SettingsWriter + Send + Sync + 'static,
    > Renderable for PlayersScreen<C, SR, SW>
{
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        if self.confirm_clear.is_armed() {
            self.confirm_clear.render(f, footer_right);
        } else {
            self.notify.render(f, footer_right);
        }
        let error_rows = if self.upload_errors.is_empty() {
            0
        } else {
            self.upload_errors.len().min(5) as u16 + 2
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(error_rows), Constraint::Min(1)])
            .split(body);
        if !self.upload_errors.is_empty() {
            let items: Vec<ListItem> = self
                .upload_errors
                .iter()
                .map(|e| ListItem::new(e.clone()))
                .collect();
            let list = List::new(items)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("upload errors"));
            f.render_widget(list, chunks[0]);
        }
        let title = format!(
            "current players ({})",
            self.players.len()
        );
        if self.players.is_empty() {
            let empty = Paragraph::new("No players uploaded yet")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(empty, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .players
                .iter()
                .map(|p| ListItem::new(p.to_string()))
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::REVERSED),
                )
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, chunks[1], &mut self.list_state);
        }
        let mut entries = vec![
            ("U".to_string(), "upload CSV".to_string()),
            ("Esc".to_string(), "back".to_string()),
            ("Q".to_string(), "quit".to_string()),
        ];
        if !self.players.is_empty() {
            entries.insert(1, ("C".to_string(), "clear all players".to_string()));
            entries.insert(0, ("↑↓".to_string(), "navigate".to_string()));
        }
        self.footer.render(f, footer_left, entries);
    }
}
