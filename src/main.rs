mod app;
mod constants;
mod draft;
mod errors;
mod logging;
mod providers;
mod roster;
mod screens;
mod shapes;

#[cfg(test)]
mod tests;

use crate::{
    app::App,
    constants::LOG_FILE_NAME,
    logging::logger::init_logger,
    providers::{
        fs::{
            path::get_base_path, settings_reader::FileSystemSettingsReader,
            settings_writer::FileSystemSettingsWriter,
        },
        http::league_client::HttpLeagueClient,
        settings_reader::SettingsReader,
    },
    screens::{home_screen::HomeScreen, screen::AppAction},
    shapes::settings::Settings,
};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::{error::Error, sync::Arc, time::Duration};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let base_dir = get_base_path()?;
    init_logger(base_dir.join(LOG_FILE_NAME));

    let settings_reader = FileSystemSettingsReader::new(&base_dir);
    let settings_writer = FileSystemSettingsWriter::new(&base_dir);
    let settings = settings_reader
        .read()
        .await
        .ok()
        .unwrap_or_else(Settings::default);
    let client = HttpLeagueClient::new(settings.resolve_base_url())?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let home = HomeScreen::new(
        settings,
        Arc::new(client),
        Arc::new(settings_reader),
        Arc::new(settings_writer),
    );
    let res = run_app(&mut terminal, App::new(Box::new(home))).await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(err) = res {
        println!("{:?}", err)
    }
    Ok(())
}

/// The main structure is the following one:
///
/// |----------------------------|
/// |          header            |
/// |----------------------------|
/// |                            |
/// |           body             |
/// |                            |
/// |----------------------------|
/// | footer_left | footer_right |
/// |----------------------------|
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            let container = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ])
                .split(size);
            let footer = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(container[2]);
            let header = Paragraph::new("🏆 leaguedesk")
                .style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(header, container[0]);
            if let Some(screen) = app.current_screen() {
                screen.render(f, container[1], footer[0], footer[1]);
            }
        })?;
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match (key.kind, app.current_screen()) {
                    (KeyEventKind::Release, _) => continue,
                    (_, Some(screen)) => match screen.handle_key(key).await {
                        AppAction::None => {}
                        AppAction::SwitchScreen(new_screen) => {
                            app.push_screen(new_screen).await;
                        }
                        AppAction::Back(refresh, count) => {
                            app.pop_screen(refresh, count).await;
                        }
                        AppAction::Quit(result) => return result,
                    },
                    _ => {}
                }
            }
        }
    }
}
