pub mod components;
pub mod create_league_screen;
pub mod file_system_screen;
pub mod home_screen;
pub mod players_screen;
pub mod screen;
pub mod upload_players;
