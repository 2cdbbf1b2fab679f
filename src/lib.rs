// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod page;
pub mod render;
pub mod search;

// Re-export public APIs
pub use config::Config;
pub use controller::{KeyEvent, SearchController, SearchSession, SearchView, ViewMode};
pub use error::{Error, Result};
pub use index::{DocIndex, Group, Method};
pub use page::patch_page;
pub use render::render_accordion;
pub use search::filter_groups;
