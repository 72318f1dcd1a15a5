use crate::{
    errors::AppError,
    shapes::{
        league::{CreateLeagueRequest, CreatedLeague},
        player::PlayerEntry,
        upload::{ClearOutcome, UploadReport},
    },
};
use async_trait::async_trait;

/// The remote league service, reduced to four opaque operations. All
/// in-repo logic is written against this trait; the HTTP implementation
/// lives in `providers::http`.
#[async_trait]
pub trait LeagueClient {
    async fn create_league(&self, request: &CreateLeagueRequest)
        -> Result<CreatedLeague, AppError>;
    async fn get_players(&self) -> Result<Vec<PlayerEntry>, AppError>;
    async fn upload_players(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<UploadReport, AppError>;
    async fn clear_players(&self) -> Result<ClearOutcome, AppError>;
}
