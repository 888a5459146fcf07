use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{DisplayMode, SourceType};

/// Non-quantitative genome annotations such as genes.
///
/// Associated file formats: bed, gff, gff3, gtf, bedpe.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnnotationTrack {
    /// Display name (label). Required.
    pub name: String,
    /// URL to the track data resource, such as a file or webservice.
    pub url: String,
    /// URL to a file index, such as a tabix .tbi or tribble .idx file.
    #[serde(rename = "indexURL")]
    pub index_url: Option<String>,
    pub source_type: Option<SourceType>,
    /// Explicit format override; inferred from the file extension if unset.
    pub format: Option<String>,
    /// Set to false to load a small un-indexed file in full.
    pub indexed: Option<bool>,
    pub order: Option<i32>,
    pub color: Option<String>,
    pub height: Option<u32>,
    /// Adjust track height dynamically, within the min/max bounds, to fit
    /// features in view.
    pub auto_height: Option<bool>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum window size in base pairs for which features are displayed.
    pub visibility_window: Option<i64>,
    pub removable: Option<bool>,
    pub headers: Option<HashMap<String, String>>,
    pub oauth_token: Option<String>,
    pub id: Option<String>,

    pub display_mode: Option<DisplayMode>,
    /// Height of each feature row in EXPANDED mode.
    pub expanded_row_height: Option<u32>,
    /// Height of each feature row in SQUISHED mode.
    pub squished_row_height: Option<u32>,
    /// For GFF/GTF formats, name of the column 9 property used as label.
    pub name_field: Option<String>,
    /// Maximum number of feature rows to display.
    pub max_rows: Option<u32>,
    /// If true, feature names can be searched for. Memory intensive; does
    /// not work with indexed tracks.
    pub searchable: Option<bool>,
    /// Column 9 field names included in feature searches.
    pub searchable_fields: Option<Vec<String>>,
    /// GFF feature types filtered from display.
    pub filter_types: Option<Vec<String>>,
    /// Color used for features on the negative strand.
    pub alt_color: Option<String>,
    /// For GFF/GTF formats, name of the column 9 attribute to color by.
    pub color_by: Option<String>,
    /// Mapping from `color_by` attribute value to color.
    pub color_table: Option<HashMap<String, String>>,
}
