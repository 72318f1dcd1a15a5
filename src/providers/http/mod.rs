pub mod league_client;
