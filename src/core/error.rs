//! Error types for space-plugins.

use crate::plugin::interface::PluginError;
use thiserror::Error;

/// Result type alias for plugin manager operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plugin manager operations.
#[derive(Error, Debug)]
pub enum Error {
    // Registration errors
    #[error("Invalid plugin id: {0:?}")]
    InvalidPluginId(String),

    // Lifecycle errors
    #[error("Hook failed for plugin {plugin_id}: {source}")]
    Hook {
        plugin_id: String,
        #[source]
        source: PluginError,
    },

    // Storage errors
    #[error("Store error: {0}")]
    Store(String),

    // Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a hook failure for the given plugin.
    pub fn hook(plugin_id: &str, source: PluginError) -> Self {
        Error::Hook {
            plugin_id: plugin_id.to_string(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
