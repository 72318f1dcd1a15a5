use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A birthdate bracket within a league. Players born between the two
/// bounds (inclusive) are eligible; an open bound means no limit on that
/// side. `NaiveDate` serializes as `YYYY-MM-DD`, which is exactly what
/// the service expects on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroup {
    pub name: String,
    pub birthdate_start: Option<NaiveDate>,
    pub birthdate_end: Option<NaiveDate>,
}

impl AgeGroup {
    pub fn unnamed() -> Self {
        Self {
            name: String::new(),
            birthdate_start: None,
            birthdate_end: None,
        }
    }

    /// A group is submittable once it has a name and at least one bound.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && (self.birthdate_start.is_some() || self.birthdate_end.is_some())
    }
}
