pub mod data_source;
pub mod format;
pub mod list_engine;
pub mod settings;
