use thiserror::Error;

/// Errors raised while classifying objects or writing level lines.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An ellipse object has no `width`, so its radius cannot be derived.
    #[error("object {id}: ellipse has no width")]
    MissingWidth {
        /// Id of the offending object.
        id: u32,
    },

    /// An ellipse object has no properties, so its mass cannot be read.
    #[error("object {id}: ellipse has no properties (the first property value is the planet mass)")]
    MissingMass {
        /// Id of the offending object.
        id: u32,
    },

    /// The first property of an ellipse object holds a non-numeric value.
    #[error("object {id}: mass property `{name}` is not a number")]
    NonNumericMass {
        /// Id of the offending object.
        id: u32,
        /// Name of the property that was expected to hold the mass.
        name: String,
    },

    /// The level file could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
