pub mod parse_timing;
pub mod settings;

pub use parse_timing::ParseTiming;
pub use settings::FilterSettings;
