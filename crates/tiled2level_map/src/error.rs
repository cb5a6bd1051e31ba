use thiserror::Error;

/// Errors raised while loading a map export or selecting its object layer.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The map file is not valid JSON or does not match the export schema.
    #[error("Failed to parse map JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The map has no object-group layer to convert.
    #[error("No object layer found in map")]
    MissingObjectLayer,

    /// The map has more than one object-group layer and no tie-break was requested.
    #[error("Found {count} object layers, expected exactly one")]
    MultipleObjectLayers {
        /// How many object-group layers the map has.
        count: usize,
    },
}
