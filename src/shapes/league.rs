use crate::{
    constants::DEFAULT_GROUP_NAME_PREFIX, errors::ValidationError, shapes::age_group::AgeGroup,
};
use serde::{Deserialize, Serialize};

/// Regenerate the age-group list for a given count: every entry gets a
/// default 1-based name and unset bounds. This is a full replace, never a
/// merge, so callers must only invoke it on an actual count change.
pub fn derive_age_groups(count: u32) -> Vec<AgeGroup> {
    (1..=count)
        .map(|i| AgeGroup {
            name: format!("{} {}", DEFAULT_GROUP_NAME_PREFIX, i),
            birthdate_start: None,
            birthdate_end: None,
        })
        .collect()
}

/// The count field is free text in the form; anything that does not parse
/// as a non-negative integer degrades to 0 rather than erroring.
pub fn parse_group_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// In-memory, unsaved form state for league creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueDraft {
    pub league_name: String,
    pub number_of_groups: u32,
    pub age_groups: Vec<AgeGroup>,
}

impl LeagueDraft {
    /// Apply a count-changed event. Re-setting the current value is a
    /// no-op so pending per-group edits survive; any real change
    /// regenerates the whole list and discards them.
    pub fn set_group_count(&mut self, count: u32) -> bool {
        if count == self.number_of_groups && self.age_groups.len() == count as usize {
            return false;
        }
        self.number_of_groups = count;
        self.age_groups = derive_age_groups(count);
        true
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.league_name.trim().is_empty() {
            return Err(ValidationError::EmptyLeagueName);
        }
        if self.number_of_groups < 1 {
            return Err(ValidationError::NoAgeGroups);
        }
        if let Some(i) = self.age_groups.iter().position(|g| !g.is_complete()) {
            return Err(ValidationError::IncompleteAgeGroup(i + 1));
        }
        Ok(())
    }

    pub fn to_request(&self) -> CreateLeagueRequest {
        CreateLeagueRequest {
            league_name: self.league_name.clone(),
            number_of_groups: self.number_of_groups,
            age_groups: self.age_groups.clone(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeagueRequest {
    pub league_name: String,
    pub number_of_groups: u32,
    pub age_groups: Vec<AgeGroup>,
}

/// The created league as echoed back by the service.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLeague {
    pub id: String,
    pub league_name: String,
    pub number_of_groups: u32,
    pub age_groups: Vec<AgeGroup>,
}
