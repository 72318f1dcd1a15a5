use crate::{
    errors::{AppError, IOError, ValidationError},
    logging::logger::log_warn,
    providers::league_client::LeagueClient,
    shapes::{player::PlayerEntry, upload::UploadReport},
};
use std::{path::Path, sync::Arc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterState {
    Idle,
    Loading,
    Uploading,
}

/// Mirrors the server-side player list and drives the upload/clear
/// workflows. Every operation requires the `Idle` state and restores it
/// on all exit paths, so at most one request is in flight per controller
/// instance; sharing happens behind a tokio mutex (see the players
/// screen), which queues callers instead of racing them.
pub struct RosterController<C: LeagueClient + Send + Sync> {
    client: Arc<C>,
    state: RosterState,
    players: Vec<PlayerEntry>,
    upload_errors: Vec<String>,
}

impl<C: LeagueClient + Send + Sync> RosterController<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: RosterState::Idle,
            players: Vec::new(),
            upload_errors: Vec::new(),
        }
    }

    pub fn state(&self) -> RosterState {
        self.state
    }

    pub fn players(&self) -> &[PlayerEntry] {
        &self.players
    }

    /// Per-row errors from the last upload, empty when it fully succeeded.
    pub fn upload_errors(&self) -> &[String] {
        &self.upload_errors
    }

    fn begin(&mut self, next: RosterState) -> Result<(), AppError> {
        if self.state != RosterState::Idle {
            return Err(AppError::Validation(ValidationError::OperationInFlight));
        }
        self.state = next;
        Ok(())
    }

    /// Fetch the full player list, replacing the local cache. On failure
    /// the cache is left empty.
    pub async fn load(&mut self) -> Result<(), AppError> {
        self.begin(RosterState::Loading)?;
        let result = self.client.get_players().await;
        self.state = RosterState::Idle;
        match result {
            Ok(players) => {
                self.players = players;
                Ok(())
            }
            Err(e) => {
                self.players.clear();
                Err(e)
            }
        }
    }

    /// Upload a CSV of players. The extension check happens before any
    /// state change or network call; after a successful submission the
    /// list is reloaded (reconciliation) before the report is inspected
    /// for error display.
    pub async fn upload(&mut self, path: &Path) -> Result<UploadReport, AppError> {
        if !path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
        {
            return Err(AppError::Validation(ValidationError::NotACsvFile));
        }
        self.begin(RosterState::Uploading)?;
        self.upload_errors.clear();
        let result = self.run_upload(path).await;
        self.state = RosterState::Idle;
        if let Ok(report) = &result {
            if report.failed_uploads > 0 {
                self.upload_errors = report.errors.clone();
            }
        }
        result
    }

    async fn run_upload(&mut self, path: &Path) -> Result<UploadReport, AppError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::IO(IOError::Msg("invalid file name".to_string())))?
            .to_string();
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        let report = self.client.upload_players(&file_name, content).await?;
        self.reconcile().await;
        Ok(report)
    }

    /// Clear all players on the server. Destructive and irreversible;
    /// the screens gate this behind an explicit confirmation step. On
    /// failure no reload happens, so the cache may go stale until the
    /// next successful load.
    pub async fn clear(&mut self) -> Result<String, AppError> {
        self.begin(RosterState::Loading)?;
        let outcome = match self.client.clear_players().await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.state = RosterState::Idle;
                return Err(e);
            }
        };
        self.reconcile().await;
        self.state = RosterState::Idle;
        Ok(outcome.message)
    }

    // post-mutation reload; a failure here must not turn a completed
    // mutation into an error, so it only logs
    async fn reconcile(&mut self) {
        match self.client.get_players().await {
            Ok(players) => self.players = players,
            Err(e) => log_warn(&format!("could not reload players after mutation: {}", e)),
        }
    }
}
