//! Writing classified objects out as level lines.

use std::io::Write;

use tiled2level_map::MapObject;
use tracing::debug;

use crate::error::ExportError;
use crate::record::LevelRecord;

/// Per-role record counts for one written level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Planets written (`p` lines).
    pub planets: usize,
    /// Orbit points written (`o` lines).
    pub orbit_points: usize,
    /// Spawn points written (`s` lines).
    pub spawn_points: usize,
}

impl LevelStats {
    /// Total records written.
    pub fn total(&self) -> usize {
        self.planets + self.orbit_points + self.spawn_points
    }

    fn count(&mut self, record: &LevelRecord) {
        match record {
            LevelRecord::Planet { .. } => self.planets += 1,
            LevelRecord::OrbitPoint { .. } => self.orbit_points += 1,
            LevelRecord::SpawnPoint { .. } => self.spawn_points += 1,
        };
    }
}

/// Classifies each object and writes its level line, in input order.
///
/// Objects are processed one at a time, so when one fails to classify the
/// lines for all earlier objects have already been written.
pub fn write_level<W: Write>(
    objects: &[MapObject],
    writer: &mut W,
) -> Result<LevelStats, ExportError> {
    let mut stats = LevelStats::default();

    for object in objects {
        let record = LevelRecord::classify(object)?;
        debug!(
            "object {} ({:?}) -> {} line",
            object.id,
            object.name,
            record.tag()
        );
        writeln!(writer, "{record}")?;
        stats.count(&record);
    }

    Ok(stats)
}
