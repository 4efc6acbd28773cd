//! # discotag
//!
//! A Rust library that turns Discogs release documents into flat records for
//! bulk tag editors.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`Normalizer`] struct:
//!
//! ```rust,no_run
//! use discotag::Normalizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = std::fs::read_to_string("release.json")?;
//!
//!     let release = Normalizer::new().normalize_str(&document)?;
//!     println!("{} tracks", release.track_count());
//!     println!("{}", serde_json::to_string_pretty(&release)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## What it does
//!
//! - **Flattens tracklists**: headings and index tracks become chapters
//! - **Resolves artists**: name variations, connectors, "Various Artists",
//!   "Beatles, The" → "The Beatles"
//! - **Infers disc and track numbers** from positions like `A1`, `2-05`, `CD1-3`
//! - **Aggregates credits**, notes and company credits into one text block
//! - **Merges multi-format listings** (vinyl sides + CD) into one record per song
//!
//! Fetching documents from the catalog is left to the caller; nothing here
//! touches the network.
//!
//! ## Low-Level APIs
//!
//! - [`converters`] - JSON validation into [`RawRelease`]
//! - [`normalize`] - The engine: field, artist, position, credits,
//!   tracklist, merge and release assembly steps

pub mod converters;
mod discotag;
pub mod error;
pub mod models;
pub mod normalize;
pub mod options;

// Main interface (recommended)
pub use discotag::Normalizer;

// Low-level APIs
pub use error::{NormalizeError, Result};
pub use models::{NormalizedRelease, NormalizedTrack, RawRelease, TracklistNode};
pub use normalize::normalize_release;
pub use options::NormalizeOptions;
