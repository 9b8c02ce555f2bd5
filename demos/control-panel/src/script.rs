//! Action scripts: a JSON array of actions replayed through the dispatcher
//!
//! ```json
//! [
//!   { "type": "UPDATE_USERNAME", "value": "Alice" },
//!   { "type": "UPDATE_FONT_SIZE_PREFERENCE", "value": "large" }
//! ]
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::action::ControlPanelAction;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid action script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a script from its JSON text
///
/// Unknown action types parse as [`ControlPanelAction::Unrecognized`] and
/// are ignored by every store.
pub fn parse_script(text: &str) -> Result<Vec<ControlPanelAction>, ScriptError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Vec<ControlPanelAction>, ScriptError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}
