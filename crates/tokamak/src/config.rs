//! Document Configuration

use serde::{Deserialize, Serialize};
use tokamak_dom::SerializeOptions;

/// Document output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Character encoding of the document
    pub encoding: String,

    /// XML version; unused by HTML output
    pub version: String,

    /// Insert newlines/indentation when serializing
    pub format_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: "UTF-8".to_string(),
            version: "1.0".to_string(),
            format_output: true,
        }
    }
}

impl From<&Config> for SerializeOptions {
    fn from(config: &Config) -> Self {
        SerializeOptions {
            format_output: config.format_output,
            encoding: config.encoding.clone(),
            version: config.version.clone(),
        }
    }
}
