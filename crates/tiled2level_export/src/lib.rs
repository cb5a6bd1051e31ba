//! # `tiled2level_export`
//!
//! Level-format backbone for `tiled2level`. Classifies the map objects of an
//! object-group layer into level records and writes them as plain-text lines.
//!
//! **This crate does NOT read map files** - parsing exports and selecting the
//! object layer are `tiled2level_map` concerns.
//!
//! ## The level format
//!
//! One line per object, in map order:
//!
//! ```text
//! p <radius> <x> <y> <mass>   planet (ellipse object)
//! o <x> <y>                   orbit point (point object)
//! s <x> <y>                   spawn point (any other object)
//! ```

pub mod error;
pub mod record;
pub mod writer;

pub mod prelude {
    //! Common imports for `tiled2level_export` users.

    pub use crate::error::ExportError;
    pub use crate::record::LevelRecord;
    pub use crate::writer::{LevelStats, write_level};
}

pub use error::ExportError;
pub use record::LevelRecord;
pub use writer::{LevelStats, write_level};
