//! Engine configuration.
//!
//! Settings are plain serde structs with defaults for every field, so a host
//! can ship a partial JSON document (or none at all).

use crate::constants::{
    DRAGGABLE_ATTR, DROPZONE_ATTR, ID_ATTR, INTERACTIVE_ATTR, ROOT_ATTR, TYPE_ATTR,
};
use crate::error::GestureResult;
use crate::types::Platform;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names of the declarative marker attributes read off rendered elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerAttributes {
    pub interactive: String,
    pub draggable: String,
    pub dropzone: String,
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub root: String,
}

impl Default for MarkerAttributes {
    fn default() -> Self {
        Self {
            interactive: INTERACTIVE_ATTR.to_string(),
            draggable: DRAGGABLE_ATTR.to_string(),
            dropzone: DROPZONE_ATTR.to_string(),
            id: ID_ATTR.to_string(),
            type_: TYPE_ATTR.to_string(),
            root: ROOT_ATTR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub markers: MarkerAttributes,
    /// Overrides the platform family reported by the surface
    pub platform: Option<Platform>,
    /// Prevent browser defaults for Backspace and mod+A
    pub suppress_default_shortcuts: bool,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            markers: MarkerAttributes::default(),
            platform: None,
            suppress_default_shortcuts: true,
        }
    }
}

impl GestureSettings {
    pub fn from_json(json: &str) -> GestureResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading gesture settings from {}", path.display()))?;
        let settings = Self::from_json(&text)
            .with_context(|| format!("parsing gesture settings from {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded gesture settings");
        Ok(settings)
    }

    /// Load settings from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
