use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Direction, SourceType};

/// Sequencing read alignments.
///
/// Associated file formats: bam, cram.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlignmentTrack {
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

    /// Show the coverage depth sub-track.
    pub show_coverage: Option<bool>,
    /// Show individual alignments.
    pub show_alignments: Option<bool>,
    /// Draw paired reads connected with a line.
    pub view_as_pairs: Option<bool>,
    /// If false, mate information is ignored during downsampling.
    pub pairs_supported: Option<bool>,
    pub coverage_color: Option<String>,
    pub deletion_color: Option<String>,
    /// Color of a skipped region such as a splice junction.
    pub skipped_color: Option<String>,
    pub insertion_color: Option<String>,
    /// Used when `color_by` is `strand`.
    pub neg_strand_color: Option<String>,
    pub pos_strand_color: Option<String>,
    /// Color of the connector line in "view as pairs" mode.
    pub pair_connector_color: Option<String>,
    pub color_by: Option<AlignmentColorBy>,
    /// Specific tag to color alignments by when `color_by` is `tag`.
    pub color_by_tag: Option<String>,
    /// Tag that explicitly encodes an r,g,b color value.
    pub bam_color_tag: Option<String>,
    /// Downsampling bucket size in base pairs.
    pub sampling_window_size: Option<u32>,
    /// Number of alignments kept per bucket.
    pub sampling_depth: Option<u32>,
    /// Height in pixels of one alignment row in expanded mode.
    pub alignment_row_height: Option<u32>,
    /// Readgroup ID value (tag RG).
    pub readgroup: Option<String>,
    pub sort: Option<AlignmentSorting>,
    pub filter: Option<AlignmentFiltering>,
    pub show_soft_clips: Option<bool>,
    /// Highlight bases that do not match the reference.
    pub show_mismatches: Option<bool>,
    /// Show inserted base counts inline when zoomed in.
    pub show_insertion_text: Option<bool>,
    pub insertion_text_color: Option<String>,
    pub show_deletion_text: Option<bool>,
    pub deletion_text_color: Option<String>,
    /// Expected pair orientation: ff, fr or rf.
    pub pair_orientation: Option<String>,
    /// Minimum expected absolute TLEN value.
    pub min_tlen: Option<i64>,
    /// Maximum expected absolute TLEN value.
    pub max_tlen: Option<i64>,
    pub min_tlen_percentile: Option<f64>,
    pub max_tlen_percentile: Option<f64>,
}

/// Initial sort state of an alignment track.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignmentSorting {
    pub chr: String,
    pub position: u64,
    pub option: AlignmentSortOption,
    /// Tag name, required when `option` is TAG.
    pub tag: Option<String>,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlignmentSortOption {
    Base,
    Strand,
    InsertSize,
    MateChr,
    Mq,
    Tag,
}

/// Quality filters applied before alignments are drawn.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlignmentFiltering {
    pub vendor_failed: Option<bool>,
    pub duplicates: Option<bool>,
    pub secondary: Option<bool>,
    pub supplementary: Option<bool>,
    /// Minimum mapping quality.
    pub mq: Option<u32>,
    /// Readgroups (RG) to include; unset keeps all.
    pub readgroups: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignmentColorBy {
    None,
    Strand,
    FirstOfPairStrand,
    PairOrientation,
    Tlen,
    UnexpectedPair,
    Tag,
}
