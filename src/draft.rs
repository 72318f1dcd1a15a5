use crate::{
    errors::AppError,
    providers::league_client::LeagueClient,
    shapes::league::{parse_group_count, CreatedLeague, LeagueDraft},
};
use chrono::NaiveDate;
use std::sync::Arc;

/// Coordinates the league-creation draft against the remote service.
///
/// The draft is the single source of truth for the form; the screen
/// pushes every edit in here and rebuilds its widgets from the draft
/// whenever a count change regenerates the age-group list. Validation
/// runs before any network call, so an invalid draft never reaches the
/// client.
pub struct DraftController<C: LeagueClient + Send + Sync> {
    client: Arc<C>,
    draft: LeagueDraft,
}

impl<C: LeagueClient + Send + Sync> DraftController<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            draft: LeagueDraft::default(),
        }
    }

    pub fn draft(&self) -> &LeagueDraft {
        &self.draft
    }

    pub fn set_league_name(&mut self, name: impl Into<String>) {
        self.draft.league_name = name.into();
    }

    /// Explicit count-changed event: parses the raw field text (invalid
    /// input degrades to 0) and regenerates the group list on an actual
    /// change. Returns whether the list was regenerated so the caller
    /// can rebuild its per-group widgets.
    pub fn set_group_count_text(&mut self, raw: &str) -> bool {
        self.draft.set_group_count(parse_group_count(raw))
    }

    pub fn set_group_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(group) = self.draft.age_groups.get_mut(index) {
            group.name = name.into();
        }
    }

    pub fn set_group_start(&mut self, index: usize, date: Option<NaiveDate>) {
        if let Some(group) = self.draft.age_groups.get_mut(index) {
            group.birthdate_start = date;
        }
    }

    pub fn set_group_end(&mut self, index: usize, date: Option<NaiveDate>) {
        if let Some(group) = self.draft.age_groups.get_mut(index) {
            group.birthdate_end = date;
        }
    }

    /// Validate and submit. The draft is kept on failure so the user can
    /// fix it and resubmit; the caller discards the controller once this
    /// returns `Ok`.
    pub async fn submit(&self) -> Result<CreatedLeague, AppError> {
        self.draft.validate()?;
        self.client.create_league(&self.draft.to_request()).await
    }
}
