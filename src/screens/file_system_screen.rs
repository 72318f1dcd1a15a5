use crate::{
    errors::AppError,
    providers::{settings_reader::SettingsReader, settings_writer::SettingsWriter},
    screens::{
        components::{navigation_footer::NavigationFooter, notify_banner::NotifyBanner},
        screen::{AppAction, Renderable, ScreenAsync},
    },
};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

/// What a concrete picker does with the tree: which entries show up,
/// which can be selected, and what happens on selection.
#[async_trait]
pub trait FileSystemAction {
    async fn on_selected(&mut self, path: &Path) -> Result<AppAction, AppError>;
    fn is_selectable(&self, path: &Path) -> bool;
    fn is_visible(&self, path: &Path) -> bool;
    fn success_message_suffix(&self) -> Option<String> {
        None
    }
}

pub struct FileSystemScreen<
    A: FileSystemAction + Send + Sync,
    SR: SettingsReader + Send + Sync,
    SW: SettingsWriter + Send + Sync,
> {
    current_folder: PathBuf,
    entries: Vec<PathBuf>,
    list_state: ListState,
    title: String,
    action: A,
    notify: NotifyBanner,
    back_on_dismiss: bool,
    footer: NavigationFooter,
    settings_reader: Arc<SR>,
    settings_writer: Arc<SW>,
}

impl<
        A: FileSystemAction + Send + Sync,
        SR: SettingsReader + Send + Sync,
        SW: SettingsWriter + Send + Sync,
    > FileSystemScreen<A, SR, SW>
{
    pub fn new(
        initial_folder: PathBuf,
        title: &str,
        action: A,
        settings_reader: Arc<SR>,
        settings_writer: Arc<SW>,
    ) -> Self {
        let entries = Self::compute_entries(&initial_folder, &action);
        let mut list_state = ListState::default();
        list_state.select(if entries.is_empty() { None } else { Some(0) });
        Self {
            current_folder: initial_folder,
            entries,
            list_state,
            title: title.to_string(),
            action,
            notify: NotifyBanner::new(),
            back_on_dismiss: false,
            footer: NavigationFooter::new(),
            settings_reader,
            settings_writer,
        }
    }

    fn compute_entries(folder: &Path, action: &A) -> Vec<PathBuf> {
        let mut entries: Vec<PathBuf> = match fs::read_dir(folder) {
            Ok(dir) => dir
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| action.is_visible(p))
                .collect(),
            Err(_) => vec![],
        };
        entries.sort_by_key(|p| (!p.is_dir(), p.file_name().map(|n| n.to_os_string())));
        entries
    }

    fn is_root(&self) -> bool {
        self.current_folder.parent().is_none()
    }

    fn selected_entry(&self) -> Option<PathBuf> {
        self.list_state
            .selected()
            .and_then(|s| self.entries.get(s))
            .cloned()
    }

    fn move_selection<F>(&mut self, f: F)
    where
        F: Fn(usize, usize) -> usize,
    {
        if let Some(selected) = self.list_state.selected() {
            if self.entries.is_empty() {
                self.list_state.select(None);
            } else {
                self.list_state.select(Some(f(selected, self.entries.len())));
            }
        }
    }

    fn enter_directory(&mut self, path: &Path) {
        self.current_folder = path.to_path_buf();
        self.entries = Self::compute_entries(&self.current_folder, &self.action);
        self.list_state.select(if self.entries.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    // remember where the user picked a file from, for the next picker
    async fn save_selected_directory(&mut self, child: &Path) {
        let dir_to_save = if child.is_dir() {
            Some(child.to_path_buf())
        } else {
            child.parent().map(|p| p.to_path_buf())
        };
        if let Some(dir) = dir_to_save {
            let mut settings = self.settings_reader.read().await.unwrap_or_default();
            settings.last_used_dir = Some(dir);
            let _ = self.settings_writer.save(settings).await;
        }
    }

    async fn handle_enter(&mut self) -> AppAction {
        let Some(selected) = self.selected_entry() else {
            return AppAction::None;
        };
        if selected.is_dir() {
            self.enter_directory(&selected);
            return AppAction::None;
        }
        if !self.action.is_selectable(&selected) {
            self.notify.set_error("invalid selection".to_string());
            return AppAction::None;
        }
        match self.action.on_selected(&selected).await {
            Ok(_) => {
                self.save_selected_directory(&selected).await;
                let message = match self.action.success_message_suffix() {
                    Some(suffix) => suffix,
                    None => "operation completed successfully".to_string(),
                };
                self.notify.set_info(message);
                self.back_on_dismiss = true;
            }
            Err(e) => {
                self.notify.set_error(format!("{}", e));
            }
        }
        AppAction::None
    }

    fn get_footer_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = vec![];
        if !self.entries.is_empty() {
            entries.push(("↑↓".to_string(), "navigate".to_string()));
        }
        if self.list_state.selected().is_some() {
            entries.push(("Enter".to_string(), "select".to_string()));
        }
        if !self.is_root() {
            entries.push(("Backspace".to_string(), "up one level".to_string()));
        }
        entries.push(("Esc".to_string(), "back".to_string()));
        entries
    }
}

#[async_trait]
impl<
        A: FileSystemAction + Send + Sync,
        SR: SettingsReader + Send + Sync,
        SW: SettingsWriter + Send + Sync,
    > ScreenAsync for FileSystemScreen<A, SR, SW>
{
    async fn refresh_data(&mut self) {}

    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.notify.has_value() {
            self.notify.reset();
            return if self.back_on_dismiss {
                AppAction::Back(true, Some(1))
            } else {
                AppAction::None
            };
        }
        match key.code {
            KeyCode::Down => {
                self.move_selection(|s, len| if s < len - 1 { s + 1 } else { 0 });
                AppAction::None
            }
            KeyCode::Up => {
                self.move_selection(|s, len| if s > 0 { s - 1 } else { len - 1 });
                AppAction::None
            }
            KeyCode::Enter => self.handle_enter().await,
            KeyCode::Backspace => {
                if let Some(parent) = self.current_folder.parent().map(|p| p.to_path_buf()) {
                    self.enter_directory(&parent);
                }
                AppAction::None
            }
            KeyCode::Esc => AppAction::Back(true, Some(1)),
            _ => AppAction::None,
        }
    }
}

impl<
        A: FileSystemAction + Send + Sync,
        SR: SettingsReader + Send + Sync,
        SW: SettingsWriter + Send + Sync,
    > Renderable for FileSystemScreen<A, SR, SW>
{
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(body);
        let header = Paragraph::new(self.current_folder.to_string_lossy().to_string())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title("current directory"),
            )
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(header, chunks[0]);
        if self.entries.is_empty() {
            let paragraph = Paragraph::new("empty directory")
                .block(Block::default().borders(Borders::ALL).title(self.title.clone()))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .entries
                .iter()
                .map(|p| {
                    let name = p.file_name().unwrap_or_default().to_string_lossy();
                    let style = if p.is_dir() {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Span::styled(name.to_string(), style))
                })
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(self.title.clone()))
                .highlight_style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::REVERSED),
                )
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, chunks[1], &mut self.list_state);
        }
        self.notify.render(f, footer_right);
        self.footer.render(f, footer_left, self.get_footer_entries());
    }
}
