use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::SourceType;

/// Genome-wide association study results (manhattan plot).
///
/// Associated file formats: bed, gwas.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GwasTrack {
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

    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Interpret values as posterior probabilities instead of -log10(p).
    pub posterior_probability: Option<bool>,
    pub dot_size: Option<u32>,
    /// Column layout for non-bed gwas files.
    pub columns: Option<GwasColumns>,
}

/// 1-based column indices locating the chromosome, position and value
/// columns in a gwas file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GwasColumns {
    pub chromosome: u32,
    pub position: u32,
    pub value: u32,
}
