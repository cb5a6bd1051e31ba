//! Classification of map objects into level records.

use std::fmt;

use serde_json::Number;
use tiled2level_map::MapObject;

use crate::error::ExportError;

/// One record of the level file, corresponding to one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelRecord {
    /// A gravity body. Written as `p <radius> <x> <y> <mass>`.
    Planet {
        /// Circle radius, half the ellipse width.
        radius: f64,
        /// Center x, the ellipse anchor shifted right by the radius.
        x: f64,
        /// Center y, the ellipse anchor shifted down by the radius.
        y: f64,
        /// Mass, passed through from the object's first custom property.
        mass: Number,
    },

    /// An objective marker. Written as `o <x> <y>`.
    OrbitPoint {
        /// Marker x.
        x: f64,
        /// Marker y.
        y: f64,
    },

    /// A player start. Written as `s <x> <y>`.
    SpawnPoint {
        /// Start x.
        x: f64,
        /// Start y.
        y: f64,
    },
}

impl LevelRecord {
    /// Classify a map object by its shape markers.
    ///
    /// The ellipse marker wins over the point marker when an object carries
    /// both; objects with neither are spawn points.
    ///
    /// | Object shape | Level record |
    /// |--------------|--------------|
    /// | Ellipse | [`LevelRecord::Planet`] (radius from width, anchor moved to center) |
    /// | Point | [`LevelRecord::OrbitPoint`] |
    /// | Anything else | [`LevelRecord::SpawnPoint`] |
    pub fn classify(object: &MapObject) -> Result<Self, ExportError> {
        if object.is_ellipse() {
            let width = object.width.ok_or(ExportError::MissingWidth { id: object.id })?;
            let radius = width / 2.0;
            return Ok(Self::Planet {
                radius,
                x: object.x + radius,
                y: object.y + radius,
                mass: planet_mass(object)?,
            });
        }

        if object.is_point() {
            return Ok(Self::OrbitPoint {
                x: object.x,
                y: object.y,
            });
        }

        Ok(Self::SpawnPoint {
            x: object.x,
            y: object.y,
        })
    }

    /// The line tag this record is written under.
    pub fn tag(&self) -> char {
        match self {
            Self::Planet { .. } => 'p',
            Self::OrbitPoint { .. } => 'o',
            Self::SpawnPoint { .. } => 's',
        }
    }
}

/// Reads the planet mass from the object's first custom property.
///
/// The property name is not checked. The level format has positional fields
/// only, so whichever property the editor lists first is taken as the mass.
fn planet_mass(object: &MapObject) -> Result<Number, ExportError> {
    let property = object
        .properties
        .first()
        .ok_or(ExportError::MissingMass { id: object.id })?;

    match &property.value {
        serde_json::Value::Number(mass) => Ok(mass.clone()),
        _ => Err(ExportError::NonNumericMass {
            id: object.id,
            name: property.name.clone(),
        }),
    }
}

impl fmt::Display for LevelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planet { radius, x, y, mass } => write!(f, "p {radius} {x} {y} {mass}"),
            Self::OrbitPoint { x, y } => write!(f, "o {x} {y}"),
            Self::SpawnPoint { x, y } => write!(f, "s {x} {y}"),
        }
    }
}
