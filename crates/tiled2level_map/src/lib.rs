//! # `tiled2level_map`
//!
//! Map-loading backbone for `tiled2level`. Parses Tiled JSON map exports into a
//! typed document and selects the object-group layer to convert.
//!
//! **This crate does NOT know the level format** - classifying objects and
//! writing level lines are `tiled2level_export` concerns.
//!
//! ## What this crate provides
//!
//! 1. **Document model**: [`TiledDocument`], [`TiledLayer`], [`MapObject`] with
//!    shape markers and custom properties
//! 2. **Loading**: [`load_document`] reads and parses an export from disk
//! 3. **Layer selection**: [`TiledDocument::object_layer`] with an
//!    [`ObjectLayerPolicy`] for maps with several object layers

pub mod document;
pub mod error;
pub mod loader;

pub mod prelude {
    //! Common imports for `tiled2level_map` users.

    pub use crate::document::{LayerKind, MapObject, Property, TiledDocument, TiledLayer};
    pub use crate::error::MapError;
    pub use crate::loader::{ObjectLayerPolicy, load_document};
}

pub use document::{LayerKind, MapObject, Property, TiledDocument, TiledLayer};
pub use error::MapError;
pub use loader::{ObjectLayerPolicy, load_document};
