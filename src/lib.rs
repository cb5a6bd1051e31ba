//! # `tiled2level`
//!
//! Converts Tiled JSON map exports into the plain-text level format read by
//! the game. One object-group layer goes in, one line per placed object comes
//! out, in map order.
//!
//! ## Architecture
//!
//! The pipeline is split across two member crates:
//! - **`tiled2level_map`**: Parses the export and selects the object layer
//! - **`tiled2level_export`**: Classifies objects and writes level lines
//!
//! This crate ties them together ([`convert_file`]) and carries the `tiled2level`
//! command-line binary.
//!
//! ## The level format
//!
//! ```text
//! p <radius> <x> <y> <mass>   planet (ellipse object)
//! o <x> <y>                   orbit point (point object)
//! s <x> <y>                   spawn point (any other object)
//! ```
//!
//! The game's level loader also skips `#` comment lines; the converter never
//! writes any.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tiled2level::convert_file;
//! use tiled2level_map::ObjectLayerPolicy;
//!
//! # fn main() -> Result<(), tiled2level::ConvertError> {
//! let stats = convert_file(
//!     "maps/level1.json".as_ref(),
//!     "levels/level1.txt".as_ref(),
//!     ObjectLayerPolicy::RequireSingle,
//! )?;
//! println!("{} records written", stats.total());
//! # Ok(())
//! # }
//! ```

pub mod convert;

pub use convert::{ConvertError, LevelStats, convert_file};

pub use tiled2level_export;
pub use tiled2level_map;
