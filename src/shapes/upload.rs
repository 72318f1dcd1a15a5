use serde::Deserialize;

/// Outcome of a CSV upload as reported by the service. A report with
/// `failed_uploads > 0` is still a success at the transport level; the
/// per-row error strings are informational detail, not an error.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub total_players: u32,
    pub successful_uploads: u32,
    pub failed_uploads: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl UploadReport {
    pub fn summary(&self) -> String {
        format!(
            "Successfully uploaded {} out of {} players",
            self.successful_uploads, self.total_players
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClearOutcome {
    pub message: String,
}
