pub mod path;
pub mod settings_reader;
pub mod settings_writer;
