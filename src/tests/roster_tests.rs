#[cfg(test)]
mod tests {
    use crate::{
        errors::{AppError, ValidationError},
        roster::{RosterController, RosterState},
        shapes::{player::PlayerEntry, upload::UploadReport},
        tests::mock::MockLeagueClient,
    };
    use chrono::NaiveDate;
    use std::{path::PathBuf, sync::Arc, time::Duration};

    fn player(name: &str, y: i32, m: u32, d: u32) -> PlayerEntry {
        PlayerEntry {
            name: name.to_string(),
            birthdate: NaiveDate::from_ymd_opt(y, m, d).expect("expected a valid date"),
        }
    }

    async fn write_temp_csv(stem: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.csv", stem, std::process::id()));
        tokio::fs::write(&path, b"name,birthdate\nAda,2010-05-17\n")
            .await
            .expect("expected a writable temp file");
        path
    }

    #[tokio::test]
    async fn load_replaces_the_local_cache() {
        let mock = Arc::new(MockLeagueClient::new());
        *mock
            .players_response
            .lock()
            .expect("expected a players response") =
            Ok(vec![player("Ada", 2010, 5, 17), player("Ben", 2011, 2, 3)]);
        let mut roster = RosterController::new(mock);
        roster.load().await.expect("expected a loaded roster");
        assert_eq!(roster.players().len(), 2);
        assert_eq!(roster.players()[0].name, "Ada");
        assert_eq!(roster.state(), RosterState::Idle);
    }

    #[tokio::test]
    async fn load_failure_empties_the_cache_and_returns_idle() {
        let mock = Arc::new(MockLeagueClient::new());
        *mock
            .players_response
            .lock()
            .expect("expected a players response") = Ok(vec![player("Ada", 2010, 5, 17)]);
        let mut roster = RosterController::new(mock.clone());
        roster.load().await.expect("expected a loaded roster");
        *mock
            .players_response
            .lock()
            .expect("expected a players response") = Err("service unavailable".to_string());
        assert!(roster.load().await.is_err());
        assert!(roster.players().is_empty());
        assert_eq!(roster.state(), RosterState::Idle);
    }

    #[tokio::test]
    async fn non_csv_files_are_rejected_without_a_network_call() {
        let mock = Arc::new(MockLeagueClient::new());
        let mut roster = RosterController::new(mock.clone());
        let result = roster.upload(std::path::Path::new("players.txt")).await;
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::NotACsvFile))
        ));
        assert!(mock.calls().is_empty());
        assert_eq!(roster.state(), RosterState::Idle);
    }

    #[tokio::test]
    async fn upload_reports_partial_failures_and_reloads_the_list() {
        let mock = Arc::new(MockLeagueClient::new());
        *mock
            .upload_response
            .lock()
            .expect("expected an upload response") = Ok(UploadReport {
            total_players: 10,
            successful_uploads: 8,
            failed_uploads: 2,
            errors: vec![
                "row 3 bad date".to_string(),
                "row 7 missing name".to_string(),
            ],
        });
        *mock
            .players_response
            .lock()
            .expect("expected a players response") = Ok(vec![player("Ada", 2010, 5, 17)]);
        let mut roster = RosterController::new(mock.clone());
        let path = write_temp_csv("partial-upload").await;
        let report = roster.upload(&path).await.expect("expected an upload report");
        tokio::fs::remove_file(&path)
            .await
            .expect("expected temp file cleanup");
        assert_eq!(mock.calls(), vec!["upload_players", "get_players"]);
        assert_eq!(
            report.summary(),
            "Successfully uploaded 8 out of 10 players"
        );
        assert_eq!(
            roster.upload_errors(),
            ["row 3 bad date", "row 7 missing name"]
        );
        assert_eq!(roster.players().len(), 1);
        assert_eq!(roster.state(), RosterState::Idle);
    }

    #[tokio::test]
    async fn a_clean_upload_discards_previous_row_errors() {
        let mock = Arc::new(MockLeagueClient::new());
        *mock
            .upload_response
            .lock()
            .expect("expected an upload response") = Ok(UploadReport {
            total_players: 5,
            successful_uploads: 4,
            failed_uploads: 1,
            errors: vec!["row 2 bad date".to_string()],
        });
        let mut roster = RosterController::new(mock.clone());
        let path = write_temp_csv("clean-upload").await;
        roster.upload(&path).await.expect("expected an upload report");
        assert_eq!(roster.upload_errors().len(), 1);
        *mock
            .upload_response
            .lock()
            .expect("expected an upload response") = Ok(UploadReport {
            total_players: 5,
            successful_uploads: 5,
            failed_uploads: 0,
            errors: Vec::new(),
        });
        roster.upload(&path).await.expect("expected an upload report");
        tokio::fs::remove_file(&path)
            .await
            .expect("expected temp file cleanup");
        assert!(roster.upload_errors().is_empty());
    }

    #[tokio::test]
    async fn shared_roster_queues_uploads_instead_of_overlapping_them() {
        let mut mock = MockLeagueClient::new();
        mock.upload_delay = Some(Duration::from_millis(50));
        let mock = Arc::new(mock);
        let roster = Arc::new(tokio::sync::Mutex::new(RosterController::new(mock.clone())));
        let path = write_temp_csv("concurrent-upload").await;
        let mut handles = Vec::new();
        for _ in 0..2 {
            let roster = roster.clone();
            let path = path.clone();
            handles.push(tokio::spawn(async move {
                roster.lock().await.upload(&path).await
            }));
        }
        for handle in handles {
            handle
                .await
                .expect("expected a joined task")
                .expect("expected an upload report");
        }
        tokio::fs::remove_file(&path)
            .await
            .expect("expected temp file cleanup");
        assert_eq!(
            mock.max_uploads_in_flight
                .load(std::sync::atomic::Ordering::SeqCst),
            1
        );
        assert_eq!(
            mock.calls()
                .iter()
                .filter(|c| c.as_str() == "upload_players")
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn clear_confirms_with_the_server_message_and_reloads() {
        let mock = Arc::new(MockLeagueClient::new());
        *mock
            .players_response
            .lock()
            .expect("expected a players response") = Ok(vec![player("Ada", 2010, 5, 17)]);
        let mut roster = RosterController::new(mock.clone());
        roster.load().await.expect("expected a loaded roster");
        *mock
            .players_response
            .lock()
            .expect("expected a players response") = Ok(Vec::new());
        let message = roster.clear().await.expect("expected a clear outcome");
        assert_eq!(message, "All players cleared");
        assert_eq!(
            mock.calls(),
            vec!["get_players", "clear_players", "get_players"]
        );
        assert!(roster.players().is_empty());
        assert_eq!(roster.state(), RosterState::Idle);
    }

    #[tokio::test]
    async fn clear_failure_leaves_the_cache_untouched() {
        let mock = Arc::new(MockLeagueClient::new());
        *mock
            .players_response
            .lock()
            .expect("expected a players response") =
            Ok(vec![player("Ada", 2010, 5, 17), player("Ben", 2011, 2, 3)]);
        let mut roster = RosterController::new(mock.clone());
        roster.load().await.expect("expected a loaded roster");
        *mock
            .clear_response
            .lock()
            .expect("expected a clear response") = Err("boom".to_string());
        assert!(roster.clear().await.is_err());
        assert_eq!(roster.players().len(), 2);
        assert_eq!(mock.calls(), vec!["get_players", "clear_players"]);
        assert_eq!(roster.state(), RosterState::Idle);
    }
}
