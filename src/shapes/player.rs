use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A roster entry mirrored from the service. The service owns the data;
/// this is a read-only cached copy on the client side.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub birthdate: NaiveDate,
}

impl std::fmt::Display for PlayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (born {})", self.name, self.birthdate.format("%B %e, %Y"))
    }
}
