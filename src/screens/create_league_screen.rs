use crate::{
    draft::DraftController,
    errors::AppError,
    logging::logger::{log_error, log_info},
    providers::league_client::LeagueClient,
    screens::{
        components::{
            date_input::DateInput, navigation_footer::NavigationFooter,
            notify_banner::NotifyBanner, text_box::TextBox,
        },
        screen::{AppAction, Renderable, ScreenAsync},
    },
};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};
use std::sync::Arc;

// field order: league name, group count, then (name, start, end) per group
const FIXED_FIELDS: usize = 2;
const FIELDS_PER_GROUP: usize = 3;

#[derive(Debug)]
struct GroupFields {
    name: TextBox,
    start: DateInput,
    end: DateInput,
}

pub struct CreateLeagueScreen<C: LeagueClient + Send + Sync> {
    controller: DraftController<C>,
    league_name: TextBox,
    group_count: TextBox,
    groups: Vec<GroupFields>,
    field: usize,
    notify: NotifyBanner,
    back_on_dismiss: bool,
    footer: NavigationFooter,
}

impl<C: LeagueClient + Send + Sync + 'static> CreateLeagueScreen<C> {
    pub fn new(client: Arc<C>) -> Self {
        let league_name = TextBox::new("league name".to_string(), true)
            .with_placeholder("enter league name");
        let group_count = TextBox::with_validator(
            "number of age groups".to_string(),
            false,
            |current: &str, c: char| current.len() < 2 && c.is_ascii_digit(),
        );
        Self {
            controller: DraftController::new(client),
            league_name,
            group_count,
            groups: Vec::new(),
            field: 0,
            notify: NotifyBanner::new(),
            back_on_dismiss: false,
            footer: NavigationFooter::new(),
        }
    }

    fn field_count(&self) -> usize {
        FIXED_FIELDS + self.groups.len() * FIELDS_PER_GROUP
    }

    fn handle_tab(&mut self) -> AppAction {
        self.field = (self.field + 1) % self.field_count();
        self.update_writing_modes();
        AppAction::None
    }

    fn handle_backtab(&mut self) -> AppAction {
        self.field = (self.field + self.field_count() - 1) % self.field_count();
        self.update_writing_modes();
        AppAction::None
    }

    fn update_writing_modes(&mut self) {
        self.league_name.writing_mode = self.field == 0;
        self.group_count.writing_mode = self.field == 1;
        for (g, fields) in self.groups.iter_mut().enumerate() {
            let base = FIXED_FIELDS + g * FIELDS_PER_GROUP;
            fields.name.writing_mode = self.field == base;
            fields.start.writing_mode = self.field == base + 1;
            fields.end.writing_mode = self.field == base + 2;
        }
    }

    fn handle_char(&mut self, c: char) -> AppAction {
        match self.field {
            0 => {
                self.league_name.handle_char(c);
                self.controller.set_league_name(self.league_name.value());
            }
            1 => {
                self.group_count.handle_char(c);
                self.sync_groups();
            }
            _ => self.edit_group(|w, ctl, g| match w {
                GroupField::Name(field) => {
                    field.handle_char(c);
                    ctl.set_group_name(g, field.value());
                }
                GroupField::Start(field) => {
                    field.handle_char(c);
                    ctl.set_group_start(g, field.value());
                }
                GroupField::End(field) => {
                    field.handle_char(c);
                    ctl.set_group_end(g, field.value());
                }
            }),
        }
        AppAction::None
    }

    fn handle_backspace(&mut self) -> AppAction {
        match self.field {
            0 => {
                self.league_name.handle_backspace();
                self.controller.set_league_name(self.league_name.value());
            }
            1 => {
                self.group_count.handle_backspace();
                self.sync_groups();
            }
            _ => self.edit_group(|w, ctl, g| match w {
                GroupField::Name(field) => {
                    field.handle_backspace();
                    ctl.set_group_name(g, field.value());
                }
                GroupField::Start(field) => {
                    field.handle_backspace();
                    ctl.set_group_start(g, field.value());
                }
                GroupField::End(field) => {
                    field.handle_backspace();
                    ctl.set_group_end(g, field.value());
                }
            }),
        }
        AppAction::None
    }

    fn edit_group<F>(&mut self, apply: F)
    where
        F: FnOnce(GroupField<'_>, &mut DraftController<C>, usize),
    {
        let index = self.field - FIXED_FIELDS;
        let (g, which) = (index / FIELDS_PER_GROUP, index % FIELDS_PER_GROUP);
        if let Some(fields) = self.groups.get_mut(g) {
            let widget = match which {
                0 => GroupField::Name(&mut fields.name),
                1 => GroupField::Start(&mut fields.start),
                _ => GroupField::End(&mut fields.end),
            };
            apply(widget, &mut self.controller, g);
        }
    }

    /// Count-changed event: the controller decides whether the list was
    /// actually regenerated; only then are the per-group widgets rebuilt
    /// (and any pending edits dropped with them).
    fn sync_groups(&mut self) {
        if !self.controller.set_group_count_text(self.group_count.value()) {
            return;
        }
        self.groups = self
            .controller
            .draft()
            .age_groups
            .iter()
            .enumerate()
            .map(|(i, group)| GroupFields {
                name: TextBox::with_value(format!("group {} name", i + 1), group.name.clone(), false),
                start: DateInput::new(format!("group {} birthdate start", i + 1), false),
                end: DateInput::new(format!("group {} birthdate end", i + 1), false),
            })
            .collect();
        if self.field >= self.field_count() {
            self.field = self.field_count() - 1;
        }
        self.update_writing_modes();
    }

    async fn handle_enter(&mut self) -> AppAction {
        match self.controller.submit().await {
            Ok(league) => {
                log_info(&format!("created league '{}'", league.league_name));
                self.notify.set_info("League created successfully".to_string());
                self.back_on_dismiss = true;
            }
            Err(AppError::Validation(e)) => {
                self.notify.set_error(e.to_string());
            }
            Err(e) => {
                log_error(&format!("could not create league: {}", e));
                self.notify
                    .set_error("Failed to create league. Please try again.".to_string());
            }
        }
        AppAction::None
    }

    fn dismiss_notify(&mut self) -> AppAction {
        self.notify.reset();
        if self.back_on_dismiss {
            AppAction::Back(true, Some(1))
        } else {
            AppAction::None
        }
    }
}

enum GroupField<'a> {
    Name(&'a mut TextBox),
    Start(&'a mut DateInput),
    End(&'a mut DateInput),
}

#[async_trait]
impl<C: LeagueClient + Send + Sync + 'static> ScreenAsync for CreateLeagueScreen<C> {
    async fn refresh_data(&mut self) {}

    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.notify.has_value() {
            return self.dismiss_notify();
        }
        match key.code {
            KeyCode::Char(c) => self.handle_char(c),
            KeyCode::Backspace => self.handle_backspace(),
            KeyCode::Tab => self.handle_tab(),
            KeyCode::BackTab => self.handle_backtab(),
            KeyCode::Enter => self.handle_enter().await,
            KeyCode::Esc => AppAction::Back(true, Some(1)),
            _ => AppAction::None,
        }
    }
}

impl<C: LeagueClient + Send + Sync + 'static> Renderable for CreateLeagueScreen<C> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        self.notify.render(f, footer_right);
        let block = Block::default().borders(Borders::ALL).title("new league");
        f.render_widget(block, body);
        let mut constraints = vec![Constraint::Length(2), Constraint::Length(2)];
        for _ in &self.groups {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(2));
        }
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(body);
        self.league_name.render(f, rows[0]);
        self.group_count.render(f, rows[1]);
        for (g, fields) in self.groups.iter().enumerate() {
            let base = FIXED_FIELDS + g * FIELDS_PER_GROUP;
            fields.name.render(f, rows[base]);
            fields.start.render(f, rows[base + 1]);
            fields.end.render(f, rows[base + 2]);
        }
        self.footer.render(
            f,
            footer_left,
            vec![
                ("Tab / Shift+Tab".to_string(), "navigate".to_string()),
                ("Enter".to_string(), "create league".to_string()),
                ("Esc".to_string(), "back".to_string()),
            ],
        );
    }
}
