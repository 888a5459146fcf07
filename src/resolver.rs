//! Track type and format resolution.
//!
//! Given an explicit `type` hint and/or a file format guessed from a URL's
//! extension, [`resolve_track_type`] deterministically selects exactly one
//! track variant. The rule chain is evaluated strictly in declaration order:
//! several formats belong to more than one variant (`bed` is claimed by
//! annotation, gwas, junction and arc; `vcf` by variant and cnvpytor; `mut`
//! by mut and seg), so the first matching rule wins and the order below must
//! not be rearranged.

use crate::{Error, Result};

/// Discriminant tag for the closed set of track variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackType {
    Annotation,
    Wig,
    Alignment,
    Variant,
    Mutation,
    SegmentedCopyNumber,
    Gwas,
    Interact,
    Qtl,
    SpliceJunction,
    CnvPytor,
    Merged,
    Arc,
}

impl TrackType {
    /// The wire tag carried in a raw track mapping's `type` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Annotation => "annotation",
            TrackType::Wig => "wig",
            TrackType::Alignment => "alignment",
            TrackType::Variant => "variant",
            TrackType::Mutation => "mut",
            TrackType::SegmentedCopyNumber => "seg",
            TrackType::Gwas => "gwas",
            TrackType::Interact => "interact",
            TrackType::Qtl => "qtl",
            TrackType::SpliceJunction => "junction",
            TrackType::CnvPytor => "cnvpytor",
            TrackType::Merged => "merged",
            TrackType::Arc => "arc",
        }
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered rule table mapping each variant tag to its associated file formats.
///
/// This is the single source of truth for format association, consulted only
/// by the resolver; variants do not store their format sets per-instance.
/// Merged is format-agnostic and selected by explicit type only.
pub const TRACK_FORMATS: &[(TrackType, &[&str])] = &[
    (TrackType::Annotation, &["bed", "gff", "gff3", "gtf", "bedpe"]),
    (TrackType::Wig, &["bigWig", "bw", "bg", "bedGraph"]),
    (TrackType::Alignment, &["bam", "cram"]),
    (TrackType::Variant, &["vcf"]),
    (TrackType::Mutation, &["mut", "maf"]),
    (TrackType::SegmentedCopyNumber, &["mut", "seg"]),
    (TrackType::Gwas, &["bed", "gwas"]),
    (TrackType::Interact, &["bedpe", "interact", "bigInteract"]),
    (TrackType::Qtl, &["qtl"]),
    (TrackType::SpliceJunction, &["bed"]),
    (TrackType::CnvPytor, &["pytor", "vcf"]),
    (TrackType::Arc, &["bp", "bed"]),
    (TrackType::Merged, &[]),
];

/// Resolve a track's variant from an explicit type hint and/or a guessed
/// file format.
///
/// Evaluates [`TRACK_FORMATS`] first-match: a rule fires when the explicit
/// type equals its tag or the format is in its set. Format comparison is
/// ASCII-case-insensitive (`bigwig` and `bigWig` both select wig); type
/// comparison is exact.
pub fn resolve_track_type(
    explicit_type: Option<&str>,
    guessed_format: Option<&str>,
) -> Result<TrackType> {
    for (tag, formats) in TRACK_FORMATS {
        let type_matches = explicit_type == Some(tag.as_str());
        let format_matches = guessed_format
            .is_some_and(|fmt| formats.iter().any(|f| f.eq_ignore_ascii_case(fmt)));
        if type_matches || format_matches {
            return Ok(*tag);
        }
    }
    Err(Error::UnknownTrackType {
        type_hint: explicit_type.map(String::from),
        format_hint: guessed_format.map(String::from),
    })
}

/// Guess a file format from a filename's extension.
///
/// Takes the last `.`-separated segment, lower-cased; a trailing `gz` is
/// stripped so compressed files report the inner extension
/// (`foo.gff3.gz` -> `gff3`).
pub fn guess_format(filename: &str) -> Option<String> {
    let parts: Vec<&str> = filename.split('.').collect();
    let last = parts.last()?.to_ascii_lowercase();
    if last == "gz" {
        if parts.len() < 2 {
            return None;
        }
        return Some(parts[parts.len() - 2].to_ascii_lowercase());
    }
    Some(last)
}
