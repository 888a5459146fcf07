use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::SourceType;

/// Read-depth and SNP signals from CNVpytor.
///
/// Associated file formats: pytor (and vcf, reachable only with an explicit
/// `cnvpytor` type because the variant rule claims that format first).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CnvPytorTrack {
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

    /// Signal to display, e.g. "rd_snp".
    pub signal_name: Option<String>,
    /// Caller used for CNV segments, e.g. "2D".
    pub cnv_caller: Option<String>,
    /// Bin size in base pairs.
    pub bin_size: Option<u32>,
}
