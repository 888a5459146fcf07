use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::SourceType;

/// Pairwise interactions between genomic regions, drawn as arcs.
///
/// Associated file formats: bedpe, interact, bigInteract.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InteractTrack {
    pub name: String,
    pub url: String,
    #[serde(rename = "indexURL")]
    pub index_url: Option<String>,
    pub source_type: Option<SourceType>,
    pub format: Option<String>,
    pub indexed: Option<bool>,
    pub order: Option<i32>,
    pub color: Option<String>,
    pub height: Option<u32>,
    /// Adjust track height dynamically, within the min/max bounds, to fit
    /// features in view.
    pub auto_height: Option<bool>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    pub visibility_window: Option<i64>,
    pub removable: Option<bool>,
    pub headers: Option<HashMap<String, String>>,
    pub oauth_token: Option<String>,
    pub id: Option<String>,

    pub arc_type: Option<ArcType>,
    /// If true arcs curve upward, otherwise downward.
    pub arc_orientation: Option<bool>,
    /// Alpha transparency applied to arcs extending beyond the view.
    pub alpha: Option<f64>,
    /// Line thickness in pixels.
    pub thickness: Option<u32>,
    /// Draw the connected regions as blocks.
    pub show_blocks: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArcType {
    Nested,
    Proportional,
    InView,
    PartialInView,
}
