use crate::{
    constants::{
        CLEAR_PLAYERS_PATH, CREATE_LEAGUE_PATH, HTTP_TIMEOUT_SECS, PLAYERS_PATH,
        UPLOAD_PLAYERS_PATH,
    },
    errors::{AppError, ClientError},
    logging::logger::log_error,
    providers::league_client::LeagueClient,
    shapes::{
        league::{CreateLeagueRequest, CreatedLeague},
        player::PlayerEntry,
        upload::{ClearOutcome, UploadReport},
    },
};
use async_trait::async_trait;
use futures::TryFutureExt;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct HttpLeagueClient {
    base_url: String,
    client: Client,
}

impl HttpLeagueClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Client(ClientError::Transport(e.to_string())))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport(e: reqwest::Error) -> AppError {
        AppError::Client(ClientError::Transport(e.to_string()))
    }

    // the body of a non-ok response is the error message
    async fn read_error(response: Response) -> AppError {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) if !body.trim().is_empty() => body,
            _ => format!("server returned unexpected status code ({})", status),
        };
        log_error(&format!("league service request failed: {}", message));
        AppError::Client(ClientError::Request(message))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if response.status().is_success() {
            response.json::<T>().await.map_err(Self::transport)
        } else {
            Err(Self::read_error(response).await)
        }
    }
}

#[async_trait]
impl LeagueClient for HttpLeagueClient {
    async fn create_league(
        &self,
        request: &CreateLeagueRequest,
    ) -> Result<CreatedLeague, AppError> {
        let response = self
            .client
            .post(self.url(CREATE_LEAGUE_PATH))
            .json(request)
            .send()
            .map_err(Self::transport)
            .await?;
        Self::read_json(response).await
    }

    async fn get_players(&self) -> Result<Vec<PlayerEntry>, AppError> {
        let response = self
            .client
            .get(self.url(PLAYERS_PATH))
            .send()
            .map_err(Self::transport)
            .await?;
        Self::read_json(response).await
    }

    async fn upload_players(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<UploadReport, AppError> {
        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(Self::transport)?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(self.url(UPLOAD_PLAYERS_PATH))
            .multipart(form)
            .send()
            .map_err(Self::transport)
            .await?;
        Self::read_json(response).await
    }

    async fn clear_players(&self) -> Result<ClearOutcome, AppError> {
        let response = self
            .client
            .post(self.url(CLEAR_PLAYERS_PATH))
            .send()
            .map_err(Self::transport)
            .await?;
        Self::read_json(response).await
    }
}
