//! Vector Index Store collaborator backed by LanceDB.
//!
//! The core pipeline hands over finalized chunk records plus embeddings;
//! this crate owns the index schema and the upsert path.

pub mod schema;
pub mod table;
pub mod writer;

pub use writer::IndexWriter;
