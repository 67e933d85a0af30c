//! Upload session types.

use serde::{Deserialize, Serialize};

/// Which surface shared components are currently rendered on. Used purely to
/// let them vary their appearance per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenTag {
    Chat,
    Upload,
}

impl ScreenTag {
    pub fn as_str(&self) -> &str {
        match self {
            ScreenTag::Chat => "chat",
            ScreenTag::Upload => "upload",
        }
    }
}
