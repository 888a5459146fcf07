use serde::{Deserialize, Serialize, Serializer, ser::SerializeSeq};
use serde_with::skip_serializing_none;

use super::WigTrack;

/// Several wig tracks overlaid in a single viewport.
///
/// A pure container: it is format-agnostic and carries no `url`, `format` or
/// `indexURL` of its own. Children keep their input order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MergedTrack {
    pub name: String,
    /// Child wig tracks, drawn in order. Serialized with an explicit `wig`
    /// tag so a child stays resolvable on rebuild even when its format
    /// cannot be re-derived from the URL extension.
    #[serde(serialize_with = "serialize_tagged_children")]
    pub tracks: Vec<WigTrack>,
    /// Alpha transparency applied to each child.
    pub alpha: Option<f64>,
    pub order: Option<i32>,
    pub height: Option<u32>,
    /// Adjust track height dynamically, within the min/max bounds, to fit
    /// features in view.
    pub auto_height: Option<bool>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    pub removable: Option<bool>,
    pub id: Option<String>,
}

/// Wig child carrying its discriminant tag on the wire.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedChild<'a> {
    Wig(&'a WigTrack),
}

fn serialize_tagged_children<S>(tracks: &[WigTrack], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(tracks.len()))?;
    for track in tracks {
        seq.serialize_element(&TaggedChild::Wig(track))?;
    }
    seq.end()
}
