pub mod detector;
pub mod exporter;
pub mod loader;
pub mod normalizer;
pub mod pipeline;
pub mod scrubber;
pub mod stats;

pub use pipeline::clean_file;
