//! Data models for catalog release documents.
//!
//! This module contains the raw release structures read from the catalog,
//! the flat normalized records written for tag editors, and the sparse
//! omission rule shared by the latter.

pub mod common;
pub mod normalized;
pub mod release;
pub mod sparse;
pub mod tracklist;

// Re-exports for convenience
pub use common::{ArtistCredit, CatalogEntry, Image};
pub use normalized::{FlattenedTrack, NormalizedRelease, NormalizedTrack};
pub use release::{Company, Format, RawRelease};
pub use sparse::Omittable;
pub use tracklist::{RawTrack, TracklistNode};
