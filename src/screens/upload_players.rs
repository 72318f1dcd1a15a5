use crate::{
    errors::AppError,
    providers::league_client::LeagueClient,
    roster::RosterController,
    screens::{file_system_screen::FileSystemAction, screen::AppAction},
    shapes::upload::UploadReport,
};
use async_trait::async_trait;
use std::{path::Path, sync::Arc};
use tokio::sync::Mutex;

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// File-picker action that feeds the chosen CSV into the shared roster
/// controller. The controller does the actual work (extension check,
/// submission, reconciliation); the summary of the resulting report is
/// surfaced through the picker's success banner.
pub struct UploadPlayersAction<C: LeagueClient + Send + Sync> {
    roster: Arc<Mutex<RosterController<C>>>,
    last_report: Option<UploadReport>,
}

impl<C: LeagueClient + Send + Sync> UploadPlayersAction<C> {
    pub fn new(roster: Arc<Mutex<RosterController<C>>>) -> Self {
        Self {
            roster,
            last_report: None,
        }
    }
}

#[async_trait]
impl<C: LeagueClient + Send + Sync> FileSystemAction for UploadPlayersAction<C> {
    fn is_selectable(&self, path: &Path) -> bool {
        !is_hidden(path) && has_extension(path, "csv")
    }

    fn is_visible(&self, path: &Path) -> bool {
        !is_hidden(path) && (path.is_dir() || has_extension(path, "csv"))
    }

    async fn on_selected(&mut self, path: &Path) -> Result<AppAction, AppError> {
        let mut roster = self.roster.lock().await;
        let report = roster.upload(path).await?;
        self.last_report = Some(report);
        Ok(AppAction::Back(true, Some(1)))
    }

    fn success_message_suffix(&self) -> Option<String> {
        self.last_report.as_ref().map(|r| r.summary())
    }
}
