// Binding configuration for the draggable window
use serde::Deserialize;
use web_sys::Document;

use crate::util::clog;

pub const CONFIG_ELEMENT_ID: &str = "drag-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Id of the element that gets dragged.
    pub target_id: String,
    /// Cursor hint set on the target when it is bound.
    pub cursor: String,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            target_id: "floatingWindow".to_string(),
            cursor: "move".to_string(),
        }
    }
}

impl DragConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads `<script type="application/json" id="drag-config">` if the page has one.
    pub fn load(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                clog(&format!("drag-config ignored: {}", err));
                Self::default()
            }
        }
    }
}
