pub mod age_group;
pub mod league;
pub mod player;
pub mod settings;
pub mod upload;
