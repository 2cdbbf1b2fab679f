// Module declarations
pub mod filter;

// Re-export public APIs
pub use filter::filter_groups;
