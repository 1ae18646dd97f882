pub mod index_string;

pub use index_string::DelimitedIndexParser;
