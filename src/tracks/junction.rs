use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::SourceType;

/// Splice junctions from RNA-seq, drawn as arcs between donor and acceptor
/// sites.
///
/// Associated file formats: bed (reachable only with an explicit `junction`
/// type because the annotation rule claims that format first).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpliceJunctionTrack {
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

    /// Junctions with fewer uniquely mapped reads are hidden.
    pub min_uniquely_mapped_reads: Option<u32>,
    pub min_total_reads: Option<u32>,
    pub max_fraction_multi_mapped_reads: Option<f64>,
    pub min_spliced_alignment_overhang: Option<u32>,
    pub thickness_based_on: Option<JunctionMetric>,
    pub bounce_height_based_on: Option<BounceHeightBasedOn>,
    pub color_by: Option<JunctionColorBy>,
    /// Read count above which `numReads` coloring uses the saturated color.
    pub color_by_num_reads_threshold: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JunctionMetric {
    NumUniqueReads,
    NumReads,
    IsAnnotatedJunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BounceHeightBasedOn {
    Random,
    Distance,
    Thickness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JunctionColorBy {
    NumUniqueReads,
    NumReads,
    IsAnnotatedJunction,
    Strand,
    Motif,
}
