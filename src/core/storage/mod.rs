//! Storage layer for the persisted index and exported results.
//!
//! Both files live in the data directory and are always written whole:
//!
//! ```text
//! {data_dir}/
//! ├── file_index.json       # Serialized Index (entries + build metadata)
//! └── search_results.txt    # Last search, one normalized path per line
//! ```
//!
//! Reading the index is fail-soft: a missing or corrupt file yields an
//! empty index plus a diagnostic, never an error.

mod index_store;
mod results;

pub use index_store::IndexStore;
pub use results::ResultsWriter;
