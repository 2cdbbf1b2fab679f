use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the generator's index file, looked up next to the
/// page being patched.
pub const DEFAULT_INDEX_FILE: &str = "searchindex.json";

/// Default id of the navigation container element in the host page.
pub const DEFAULT_CONTAINER_ID: &str = "accordion";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Path of the JSON search index emitted by the doc generator.
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// The generated HTML page whose navigation gets patched, when
    /// patching is requested.
    #[serde(default)]
    pub page_path: Option<PathBuf>,

    /// Id of the container element the rendered fragment replaces.
    #[serde(default = "default_container_id")]
    pub container_id: String,
}

impl Config {
    /// Load configuration from a JSON file; absent fields keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
            page_path: None,
            container_id: default_container_id(),
        }
    }
}

fn default_index_path() -> PathBuf {
    PathBuf::from(DEFAULT_INDEX_FILE)
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}
