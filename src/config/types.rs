use serde::{Deserialize, Serialize};

use crate::drop_filter::AcceptancePolicy;

use super::defaults::{clamp_corner_radius, default_corner_radius, default_policy, default_tint};

/// Settings for one drop zone.
///
/// Config keys: `prompt`, `policy.allowed_extensions`,
/// `policy.accept_directories`, `highlight.tint`, `highlight.corner_radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropZoneConfig {
    /// Label drawn inside the zone; derived from the policy when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default = "default_policy")]
    pub policy: AcceptancePolicy,
    #[serde(default)]
    pub highlight: HighlightSettings,
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            prompt: None,
            policy: default_policy(),
            highlight: HighlightSettings::default(),
        }
    }
}

impl DropZoneConfig {
    /// Prompt to show inside the zone, e.g. `Drag csv/xlsx over here`.
    pub fn prompt_text(&self) -> String {
        if let Some(prompt) = self.prompt.as_deref().filter(|p| !p.trim().is_empty()) {
            return prompt.to_string();
        }
        let extensions = self.policy.describe_extensions();
        match (extensions.is_empty(), self.policy.accepts_directories()) {
            (false, false) => format!("Drag {extensions} over here"),
            (false, true) => format!("Drag {extensions} files or folders over here"),
            (true, true) => "Drag folders over here".to_string(),
            (true, false) => "Nothing can be dropped here".to_string(),
        }
    }

    pub(super) fn normalized(mut self) -> Self {
        self.highlight.corner_radius = clamp_corner_radius(self.highlight.corner_radius);
        self
    }
}

/// Look of the zone while an acceptable drag hovers over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSettings {
    /// Unmultiplied RGBA fill.
    #[serde(default = "default_tint")]
    pub tint: [u8; 4],
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            tint: default_tint(),
            corner_radius: default_corner_radius(),
        }
    }
}
