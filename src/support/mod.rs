//! Customer support summary pipeline.
//!
//! Sequences customer lookup, windowed ticket retrieval, and report
//! rendering into a single text result.

pub mod models;
pub mod store;
pub mod summary;

pub use store::SupportStore;
pub use summary::{format_support_summary, generate_support_summary};
