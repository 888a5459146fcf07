//! Typed configuration layer for igv.js genome-browser embeds.
//!
//! Raw track descriptors (parsed JSON mappings) are classified by file
//! extension or explicit type hint, validated into a closed set of typed
//! track records, and serialized for a rendering front end. Local file
//! references can be rewritten into servable URLs through a pluggable
//! resource provider.

pub mod config;
pub mod error;
pub mod resolver;
pub mod resources;
pub mod tracks;

pub use config::{Config, Locus};
pub use error::{Error, Result};
pub use resolver::{TrackType, guess_format, resolve_track_type};
pub use resources::{Resource, ResourceProvider, ResourceSession};
pub use tracks::Track;
