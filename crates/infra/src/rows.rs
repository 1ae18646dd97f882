pub mod text_source;

pub use text_source::TextRowSource;
