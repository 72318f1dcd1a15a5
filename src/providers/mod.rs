pub mod fs;
pub mod http;
pub mod league_client;
pub mod settings_reader;
pub mod settings_writer;
