use crate::{
    errors::{AppError, ClientError},
    providers::league_client::LeagueClient,
    shapes::{
        league::{CreateLeagueRequest, CreatedLeague},
        player::PlayerEntry,
        upload::{ClearOutcome, UploadReport},
    },
};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};
use std::time::Duration;

/// Programmable stand-in for the remote service: every call is recorded
/// in order, responses can be swapped per test, and an in-flight gauge
/// lets tests assert that uploads never overlap. An `Err(String)` models
/// a non-ok response whose body is the string.
pub struct MockLeagueClient {
    calls: Mutex<Vec<String>>,
    pub players_response: Mutex<Result<Vec<PlayerEntry>, String>>,
    pub upload_response: Mutex<Result<UploadReport, String>>,
    pub clear_response: Mutex<Result<String, String>>,
    pub create_failure: Mutex<Option<String>>,
    pub last_create_request: Mutex<Option<CreateLeagueRequest>>,
    pub upload_delay: Option<Duration>,
    uploads_in_flight: AtomicUsize,
    pub max_uploads_in_flight: AtomicUsize,
}

impl MockLeagueClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            players_response: Mutex::new(Ok(Vec::new())),
            upload_response: Mutex::new(Ok(UploadReport {
                total_players: 0,
                successful_uploads: 0,
                failed_uploads: 0,
                errors: Vec::new(),
            })),
            clear_response: Mutex::new(Ok("All players cleared".to_string())),
            create_failure: Mutex::new(None),
            last_create_request: Mutex::new(None),
            upload_delay: None,
            uploads_in_flight: AtomicUsize::new(0),
            max_uploads_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("expected a call log").clone()
    }

    fn record(&self, name: &str) {
        self.calls
            .lock()
            .expect("expected a call log")
            .push(name.to_string());
    }

    fn request_error(message: String) -> AppError {
        AppError::Client(ClientError::Request(message))
    }
}

#[async_trait]
impl LeagueClient for MockLeagueClient {
    async fn create_league(
        &self,
        request: &CreateLeagueRequest,
    ) -> Result<CreatedLeague, AppError> {
        self.record("create_league");
        *self
            .last_create_request
            .lock()
            .expect("expected a request slot") = Some(request.clone());
        if let Some(body) = self
            .create_failure
            .lock()
            .expect("expected a failure slot")
            .clone()
        {
            return Err(Self::request_error(body));
        }
        Ok(CreatedLeague {
            id: "1".to_string(),
            league_name: request.league_name.clone(),
            number_of_groups: request.number_of_groups,
            age_groups: request.age_groups.clone(),
        })
    }

    async fn get_players(&self) -> Result<Vec<PlayerEntry>, AppError> {
        self.record("get_players");
        self.players_response
            .lock()
            .expect("expected a players response")
            .clone()
            .map_err(Self::request_error)
    }

    async fn upload_players(
        &self,
        _file_name: &str,
        _content: Vec<u8>,
    ) -> Result<UploadReport, AppError> {
        self.record("upload_players");
        let in_flight = self.uploads_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_uploads_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);
        if let Some(delay) = self.upload_delay {
            tokio::time::sleep(delay).await;
        }
        self.uploads_in_flight.fetch_sub(1, Ordering::SeqCst);
        self.upload_response
            .lock()
            .expect("expected an upload response")
            .clone()
            .map_err(Self::request_error)
    }

    async fn clear_players(&self) -> Result<ClearOutcome, AppError> {
        self.record("clear_players");
        self.clear_response
            .lock()
            .expect("expected a clear response")
            .clone()
            .map(|message| ClearOutcome { message })
            .map_err(Self::request_error)
    }
}
