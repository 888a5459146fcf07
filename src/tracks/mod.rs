//! The closed set of track variants and their schemas.
//!
//! Each variant is a strict record type: unknown fields, missing required
//! fields and out-of-set literal values are all rejected at decode time.
//! Wire keys are camelCase (with the one irregular rename
//! `index_url` -> `indexURL`) and unset fields are omitted from the wire
//! entirely, never emitted as `null` or a zero value.
//!
//! Serde cannot combine `flatten` with `deny_unknown_fields`, so the shared
//! base fields (name, url, indexURL, color, height, ...) are spelled out on
//! every variant struct rather than factored into a flattened base.
//!
//! [`Track`] serializes internally tagged under the `type` key;
//! deserialization goes through the config builder's two-phase
//! resolve-then-decode instead of a derived tagged deserialize (the wire-in
//! hint may be absent and is then inferred from the URL extension).

mod alignment;
mod annotation;
mod arc;
mod cnvpytor;
mod gwas;
mod interact;
mod junction;
mod merged;
mod mutation;
mod qtl;
mod seg;
mod variant;
mod wig;

pub use alignment::{
    AlignmentColorBy, AlignmentFiltering, AlignmentSortOption, AlignmentSorting, AlignmentTrack,
};
pub use annotation::AnnotationTrack;
pub use arc::ArcTrack;
pub use cnvpytor::CnvPytorTrack;
pub use gwas::{GwasColumns, GwasTrack};
pub use interact::{ArcType, InteractTrack};
pub use junction::{BounceHeightBasedOn, JunctionColorBy, JunctionMetric, SpliceJunctionTrack};
pub use merged::MergedTrack;
pub use mutation::MutationTrack;
pub use qtl::QtlTrack;
pub use seg::{SegmentDisplayMode, SegmentedCopyNumberSorting, SegmentedCopyNumberTrack};
pub use variant::VariantTrack;
pub use wig::{GraphType, GuideLine, WigTrack, WindowFunction};

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::resolver::TrackType;

/// One visual data layer in the browser.
///
/// The tag string is emitted under the `type` key when serializing so that a
/// serialized configuration re-resolves to the same variant when rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Track {
    Annotation(AnnotationTrack),
    Wig(WigTrack),
    Alignment(AlignmentTrack),
    Variant(VariantTrack),
    #[serde(rename = "mut")]
    Mutation(MutationTrack),
    #[serde(rename = "seg")]
    SegmentedCopyNumber(SegmentedCopyNumberTrack),
    Gwas(GwasTrack),
    Interact(InteractTrack),
    Qtl(QtlTrack),
    #[serde(rename = "junction")]
    SpliceJunction(SpliceJunctionTrack),
    #[serde(rename = "cnvpytor")]
    CnvPytor(CnvPytorTrack),
    Merged(MergedTrack),
    Arc(ArcTrack),
}

/// How the data behind a track URL is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    File,
    Htsget,
    Custom,
}

/// Feature row rendering mode shared by annotation, variant and mutation
/// tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayMode {
    Collapsed,
    Expanded,
    Squished,
}

/// Sort direction for track sorting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    Desc,
}

macro_rules! rewrite_base_urls {
    ($track:expr, $resolve:expr) => {{
        $track.url = $resolve(&$track.url)?;
        if let Some(index_url) = $track.index_url.as_deref() {
            $track.index_url = Some($resolve(index_url)?);
        }
        Ok(())
    }};
}

impl Track {
    /// The variant's discriminant tag.
    pub fn track_type(&self) -> TrackType {
        match self {
            Track::Annotation(_) => TrackType::Annotation,
            Track::Wig(_) => TrackType::Wig,
            Track::Alignment(_) => TrackType::Alignment,
            Track::Variant(_) => TrackType::Variant,
            Track::Mutation(_) => TrackType::Mutation,
            Track::SegmentedCopyNumber(_) => TrackType::SegmentedCopyNumber,
            Track::Gwas(_) => TrackType::Gwas,
            Track::Interact(_) => TrackType::Interact,
            Track::Qtl(_) => TrackType::Qtl,
            Track::SpliceJunction(_) => TrackType::SpliceJunction,
            Track::CnvPytor(_) => TrackType::CnvPytor,
            Track::Merged(_) => TrackType::Merged,
            Track::Arc(_) => TrackType::Arc,
        }
    }

    /// Display label of the track.
    pub fn name(&self) -> &str {
        match self {
            Track::Annotation(t) => &t.name,
            Track::Wig(t) => &t.name,
            Track::Alignment(t) => &t.name,
            Track::Variant(t) => &t.name,
            Track::Mutation(t) => &t.name,
            Track::SegmentedCopyNumber(t) => &t.name,
            Track::Gwas(t) => &t.name,
            Track::Interact(t) => &t.name,
            Track::Qtl(t) => &t.name,
            Track::SpliceJunction(t) => &t.name,
            Track::CnvPytor(t) => &t.name,
            Track::Merged(t) => &t.name,
            Track::Arc(t) => &t.name,
        }
    }

    /// Rewrite every `url` / `index_url` leaf through `resolve`, recursing
    /// into merged track children. Other fields are untouched.
    pub(crate) fn rewrite_urls<F>(&mut self, resolve: &mut F) -> Result<()>
    where
        F: FnMut(&str) -> Result<String>,
    {
        match self {
            Track::Merged(merged) => {
                for child in &mut merged.tracks {
                    child.url = resolve(&child.url)?;
                    if let Some(index_url) = child.index_url.as_deref() {
                        child.index_url = Some(resolve(index_url)?);
                    }
                }
                Ok(())
            }
            Track::Annotation(t) => rewrite_base_urls!(t, resolve),
            Track::Wig(t) => rewrite_base_urls!(t, resolve),
            Track::Alignment(t) => rewrite_base_urls!(t, resolve),
            Track::Variant(t) => rewrite_base_urls!(t, resolve),
            Track::Mutation(t) => rewrite_base_urls!(t, resolve),
            Track::SegmentedCopyNumber(t) => rewrite_base_urls!(t, resolve),
            Track::Gwas(t) => rewrite_base_urls!(t, resolve),
            Track::Interact(t) => rewrite_base_urls!(t, resolve),
            Track::Qtl(t) => rewrite_base_urls!(t, resolve),
            Track::SpliceJunction(t) => rewrite_base_urls!(t, resolve),
            Track::CnvPytor(t) => rewrite_base_urls!(t, resolve),
            Track::Arc(t) => rewrite_base_urls!(t, resolve),
        }
    }
}
