#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod clean;
pub mod extract;
pub mod pipeline;
pub mod split;

pub use clean::clean_markdown;
pub use extract::{extract_metadata, ExtractedMetadata};
pub use pipeline::IngestPipeline;
pub use split::RecursiveSplitter;
