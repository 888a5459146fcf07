use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::SourceType;

/// Quantitative genomic data, such as ChIP peaks and alignment coverage.
///
/// Associated file formats: bigWig, bw, bg, bedGraph.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WigTrack {
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

    /// Autoscale to the maximum value in view.
    pub autoscale: Option<bool>,
    /// Tracks sharing an autoscale group identifier are scaled together.
    pub autoscale_group: Option<String>,
    /// Minimum value of the data (y-axis) scale.
    pub min: Option<f64>,
    /// Maximum value of the data scale. Ignored when autoscaling.
    pub max: Option<f64>,
    /// Color used for negative values.
    pub alt_color: Option<String>,
    /// Horizontal guide lines drawn across the track.
    pub guide_lines: Option<Vec<GuideLine>>,
    pub graph_type: Option<GraphType>,
    /// Draw the track "upside down" with zero at the top.
    pub flip_axis: Option<bool>,
    /// How data is summarized when zooming out (bigWig/tdf sources).
    pub window_function: Option<WindowFunction>,
}

/// A horizontal guide line; `y` should lie within the track's data scale.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideLine {
    pub color: String,
    pub y: f64,
    pub dotted: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    Bar,
    Points,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowFunction {
    Min,
    Max,
    Mean,
}
