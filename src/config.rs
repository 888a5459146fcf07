//! Browser configuration and the raw-mapping builder.
//!
//! [`Config::from_value`] turns an untyped JSON mapping into a typed
//! configuration in two phases: first each raw track's discriminant is
//! resolved from its `type` hint and/or guessed file format, then the track
//! is strict-decoded into the resolved variant. [`Config::servable`]
//! produces a copy whose local-file URLs are rewritten to provider-issued
//! URLs.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::resolver::{TrackType, guess_format, resolve_track_type};
use crate::resources::ResourceSession;
use crate::tracks::Track;
use crate::{Error, Result};

/// A genome-browser configuration.
///
/// Every field not explicitly supplied is unset and omitted from the
/// serialized form. Track order is render order unless a track carries an
/// explicit `order`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Reference genome identifier, e.g. "hg38".
    pub genome: Option<String>,
    pub locus: Option<Locus>,
    pub show_sample_names: Option<bool>,
    pub tracks: Vec<Track>,
}

/// A single locus string or a list of locus strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Locus {
    One(String),
    Many(Vec<String>),
}

/// Top-level fields with tracks left raw for per-track resolution.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    genome: Option<String>,
    locus: Option<Locus>,
    show_sample_names: Option<bool>,
    #[serde(default)]
    tracks: Vec<Value>,
}

impl Config {
    /// Build a typed configuration from a raw JSON mapping.
    ///
    /// The input is deep-copied, never mutated. Fails with
    /// [`Error::UnknownTrackType`] when a track's type cannot be resolved
    /// (fail-fast: the whole build aborts) and [`Error::SchemaViolation`]
    /// when a track does not satisfy its resolved variant's schema.
    pub fn from_value(raw: &Value) -> Result<Config> {
        let raw: RawConfig =
            serde_json::from_value(raw.clone()).map_err(Error::schema)?;
        let tracks = raw
            .tracks
            .into_iter()
            .map(build_track)
            .collect::<Result<Vec<_>>>()?;
        Ok(Config {
            genome: raw.genome,
            locus: raw.locus,
            show_sample_names: raw.show_sample_names,
            tracks,
        })
    }

    /// Build a typed configuration from a JSON-encoded string.
    pub fn from_json(json: &str) -> Result<Config> {
        let value: Value = serde_json::from_str(json).map_err(Error::schema)?;
        Config::from_value(&value)
    }

    /// Return a copy of this configuration whose tracks are servable.
    ///
    /// Local-file `url` / `indexURL` values (including inside merged track
    /// children) are replaced by URLs issued through `session`'s resource
    /// provider; remote URLs and all other fields pass through verbatim.
    /// `self` is never mutated, also not on error.
    pub fn servable(&self, session: &mut ResourceSession) -> Result<Config> {
        let mut servable = self.clone();
        for track in &mut servable.tracks {
            track.rewrite_urls(&mut |value| session.resolve_file_or_url(value))?;
        }
        Ok(servable)
    }
}

/// Resolve one raw track mapping into a typed [`Track`].
fn build_track(mut value: Value) -> Result<Track> {
    let obj = value
        .as_object_mut()
        .ok_or_else(|| Error::SchemaViolation("track entry must be a JSON object".into()))?;

    let explicit_type = obj.get("type").and_then(Value::as_str).map(String::from);
    let format_hint = obj
        .get("format")
        .and_then(Value::as_str)
        .map(String::from)
        .or_else(|| {
            obj.get("url")
                .and_then(Value::as_str)
                .and_then(guess_format)
        });

    let track_type = resolve_track_type(explicit_type.as_deref(), format_hint.as_deref())?;

    // The hint is consumed by the resolver, not persisted as a schema field.
    obj.remove("type");

    if track_type == TrackType::Merged {
        resolve_merged_children(obj)?;
    }

    let track = match track_type {
        TrackType::Annotation => Track::Annotation(decode(value)?),
        TrackType::Wig => Track::Wig(decode(value)?),
        TrackType::Alignment => Track::Alignment(decode(value)?),
        TrackType::Variant => Track::Variant(decode(value)?),
        TrackType::Mutation => Track::Mutation(decode(value)?),
        TrackType::SegmentedCopyNumber => Track::SegmentedCopyNumber(decode(value)?),
        TrackType::Gwas => Track::Gwas(decode(value)?),
        TrackType::Interact => Track::Interact(decode(value)?),
        TrackType::Qtl => Track::Qtl(decode(value)?),
        TrackType::SpliceJunction => Track::SpliceJunction(decode(value)?),
        TrackType::CnvPytor => Track::CnvPytor(decode(value)?),
        TrackType::Merged => Track::Merged(decode(value)?),
        TrackType::Arc => Track::Arc(decode(value)?),
    };
    tracing::debug!(name = track.name(), %track_type, format = ?format_hint, "resolved track");
    Ok(track)
}

/// Each merged child must independently resolve, and must resolve to wig.
fn resolve_merged_children(obj: &mut serde_json::Map<String, Value>) -> Result<()> {
    let Some(children) = obj.get_mut("tracks").and_then(Value::as_array_mut) else {
        // A missing or non-array tracks key is reported by the strict decode.
        return Ok(());
    };
    for child in children {
        let child_obj = child.as_object_mut().ok_or_else(|| {
            Error::SchemaViolation("merged track children must be JSON objects".into())
        })?;
        let explicit_type = child_obj.get("type").and_then(Value::as_str).map(String::from);
        let format_hint = child_obj
            .get("format")
            .and_then(Value::as_str)
            .map(String::from)
            .or_else(|| {
                child_obj
                    .get("url")
                    .and_then(Value::as_str)
                    .and_then(guess_format)
            });
        let child_type = resolve_track_type(explicit_type.as_deref(), format_hint.as_deref())?;
        if child_type != TrackType::Wig {
            return Err(Error::SchemaViolation(format!(
                "merged track children must resolve to wig tracks, got `{child_type}`"
            )));
        }
        child_obj.remove("type");
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(Error::schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracks::{AlignmentTrack, DisplayMode, Track, WigTrack};
    use serde_json::json;

    #[test]
    fn test_builds_alignment_track_from_cram_url() {
        let config = Config::from_value(&json!({
            "genome": "hg38",
            "locus": "chr8:127,736,588-127,739,371",
            "tracks": [
                {
                    "name": "HG00103",
                    "url": "https://s3.amazonaws.com/1000genomes/data/HG00103/alignment/NA12878.cram",
                    "indexURL": "https://s3.amazonaws.com/1000genomes/data/HG00103/alignment/NA12878.cram.crai",
                    "format": "cram",
                },
            ],
        }))
        .unwrap();

        assert_eq!(config.genome.as_deref(), Some("hg38"));
        assert_eq!(
            config.locus,
            Some(Locus::One("chr8:127,736,588-127,739,371".into()))
        );
        assert_eq!(
            config.tracks,
            vec![Track::Alignment(AlignmentTrack {
                name: "HG00103".into(),
                url: "https://s3.amazonaws.com/1000genomes/data/HG00103/alignment/NA12878.cram"
                    .into(),
                index_url: Some(
                    "https://s3.amazonaws.com/1000genomes/data/HG00103/alignment/NA12878.cram.crai"
                        .into()
                ),
                format: Some("cram".into()),
                ..Default::default()
            })]
        );
    }

    #[test]
    fn test_guesses_format_from_gzipped_url() {
        let config = Config::from_value(&json!({
            "tracks": [{"name": "cnv", "url": "foo.seg.gz"}],
        }))
        .unwrap();
        assert!(matches!(config.tracks[0], Track::SegmentedCopyNumber(_)));
    }

    #[test]
    fn test_explicit_format_takes_precedence_over_extension() {
        let config = Config::from_value(&json!({
            "tracks": [{"name": "t", "url": "data.txt", "format": "vcf"}],
        }))
        .unwrap();
        assert!(matches!(config.tracks[0], Track::Variant(_)));
    }

    #[test]
    fn test_builds_merged_track_with_wig_children_in_order() {
        let config = Config::from_value(&json!({
            "tracks": [{
                "name": "overlay",
                "type": "merged",
                "tracks": [
                    {"name": "a", "url": "https://example.com/a.data", "format": "bigwig"},
                    {"name": "b", "url": "https://example.com/b.data", "format": "bigwig"},
                ],
            }],
        }))
        .unwrap();

        let Track::Merged(merged) = &config.tracks[0] else {
            panic!("expected merged track");
        };
        assert_eq!(merged.tracks.len(), 2);
        assert_eq!(merged.tracks[0].name, "a");
        assert_eq!(merged.tracks[1].name, "b");
    }

    #[test]
    fn test_merged_child_with_non_wig_format_is_rejected() {
        let err = Config::from_value(&json!({
            "tracks": [{
                "name": "overlay",
                "type": "merged",
                "tracks": [{"name": "a", "url": "a.bam"}],
            }],
        }))
        .unwrap_err();
        assert!(matches!(err, Error::SchemaViolation(_)), "got {err:?}");
    }

    #[test]
    fn test_unresolvable_track_aborts_the_build() {
        let err = Config::from_value(&json!({
            "tracks": [
                {"name": "good", "url": "a.bam"},
                {"name": "bad", "url": "mystery.dat"},
            ],
        }))
        .unwrap_err();
        assert!(matches!(err, Error::UnknownTrackType { .. }));
    }

    #[test]
    fn test_unknown_track_field_is_a_schema_violation() {
        let err = Config::from_value(&json!({
            "tracks": [{"name": "t", "url": "a.bam", "glitter": true}],
        }))
        .unwrap_err();
        let Error::SchemaViolation(msg) = err else {
            panic!("expected schema violation");
        };
        assert!(msg.contains("glitter"), "got: {msg}");
    }

    #[test]
    fn test_missing_required_field_is_a_schema_violation() {
        let err = Config::from_value(&json!({
            "tracks": [{"url": "a.bam"}],
        }))
        .unwrap_err();
        let Error::SchemaViolation(msg) = err else {
            panic!("expected schema violation");
        };
        assert!(msg.contains("name"), "got: {msg}");
    }

    #[test]
    fn test_input_value_is_not_mutated() {
        let raw = json!({
            "tracks": [{"name": "t", "url": "a.bam"}],
        });
        let before = raw.clone();
        Config::from_value(&raw).unwrap();
        assert_eq!(raw, before);
    }

    #[test]
    fn test_locus_accepts_a_list() {
        let config = Config::from_value(&json!({
            "locus": ["chr1:1-1000", "chr2:1-1000"],
        }))
        .unwrap();
        assert_eq!(
            config.locus,
            Some(Locus::Many(vec!["chr1:1-1000".into(), "chr2:1-1000".into()]))
        );
    }

    #[test]
    fn test_unset_top_level_fields_are_omitted() {
        let config = Config::from_value(&json!({
            "tracks": [{"name": "t", "url": "https://example.com/a.bam"}],
        }))
        .unwrap();
        let value = serde_json::to_value(&config).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("genome"));
        assert!(!obj.contains_key("locus"));
        assert!(!obj.contains_key("showSampleNames"));
    }

    #[test]
    fn test_round_trip_preserves_set_fields_only() {
        let config = Config::from_value(&json!({
            "genome": "hg19",
            "showSampleNames": true,
            "tracks": [
                {
                    "name": "genes",
                    "url": "https://example.com/genes.gff3.gz",
                    "indexURL": "https://example.com/genes.gff3.gz.tbi",
                    "displayMode": "EXPANDED",
                    "maxRows": 100,
                },
                {
                    "name": "coverage",
                    "url": "https://example.com/cov.bw",
                    "graphType": "points",
                    "windowFunction": "max",
                    "guideLines": [{"color": "red", "y": 10.0, "dotted": true}],
                },
            ],
        }))
        .unwrap();

        let serialized = serde_json::to_value(&config).unwrap();
        let rebuilt = Config::from_value(&serialized).unwrap();
        assert_eq!(rebuilt, config);

        // Unset fields must not reappear on the wire after the round trip.
        let annotation = serialized["tracks"][0].as_object().unwrap();
        assert!(!annotation.contains_key("color"));
        assert!(!annotation.contains_key("height"));
        assert_eq!(annotation["displayMode"], "EXPANDED");
    }

    #[test]
    fn test_round_trip_of_merged_track() {
        let config = Config::from_value(&json!({
            "tracks": [{
                "name": "overlay",
                "type": "merged",
                "alpha": 0.5,
                "tracks": [
                    {"name": "a", "url": "https://example.com/a.bw", "format": "bigWig"},
                ],
            }],
        }))
        .unwrap();
        let serialized = serde_json::to_value(&config).unwrap();
        assert_eq!(serialized["tracks"][0]["type"], "merged");
        let rebuilt = Config::from_value(&serialized).unwrap();
        assert_eq!(rebuilt, config);
    }

    #[test]
    fn test_round_trip_of_merged_child_without_wig_format() {
        // The child's wig identity comes from the explicit hint alone: its
        // URL extension resolves to nothing. Serialization must carry the
        // child's tag or the rebuild cannot re-resolve it.
        let config = Config::from_value(&json!({
            "tracks": [{
                "name": "overlay",
                "type": "merged",
                "tracks": [
                    {"name": "a", "url": "https://example.com/signal.txt", "type": "wig"},
                ],
            }],
        }))
        .unwrap();

        let serialized = serde_json::to_value(&config).unwrap();
        assert_eq!(serialized["tracks"][0]["tracks"][0]["type"], "wig");
        let rebuilt = Config::from_value(&serialized).unwrap();
        assert_eq!(rebuilt, config);
    }

    #[test]
    fn test_variant_fields_decode_into_enums() {
        let config = Config::from_value(&json!({
            "tracks": [{
                "name": "genes",
                "url": "https://example.com/genes.bed",
                "displayMode": "SQUISHED",
            }],
        }))
        .unwrap();
        let Track::Annotation(track) = &config.tracks[0] else {
            panic!("expected annotation track");
        };
        assert_eq!(track.display_mode, Some(DisplayMode::Squished));
    }

    #[test]
    fn test_wig_track_is_constructible_directly() {
        // The typed structs are public API, not just decode targets.
        let track = Track::Wig(WigTrack {
            name: "cov".into(),
            url: "https://example.com/cov.bw".into(),
            autoscale: Some(true),
            ..Default::default()
        });
        let config = Config {
            genome: Some("hg38".into()),
            tracks: vec![track],
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["tracks"][0]["autoscale"], true);
    }
}
