pub mod file_reader;
pub mod settings_reader;

pub use file_reader::FileReader;
pub use settings_reader::SettingsReader;
