//! Built-in price tables and the catalog they are loaded into.

pub mod catalog;
pub mod llm_providers;
pub mod speech_providers;
pub mod storage_providers;

pub use catalog::Catalog;
