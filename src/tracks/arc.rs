use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::SourceType;

/// Base-pairing arcs for RNA secondary structure.
///
/// Associated file formats: bp (and bed, reachable only with an explicit
/// `arc` type because the annotation rule claims that format first).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArcTrack {
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

    /// If true arcs curve upward, otherwise downward.
    pub arc_orientation: Option<bool>,
}
