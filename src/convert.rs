//! The end-to-end conversion pipeline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tiled2level_export::{ExportError, write_level};
use tiled2level_map::{MapError, ObjectLayerPolicy, load_document};
use tracing::debug;

pub use tiled2level_export::LevelStats;

/// Any failure of the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Loading the map or selecting its object layer failed.
    #[error(transparent)]
    Map(#[from] MapError),

    /// Classifying an object or writing the level failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Converts one map export into one level file.
///
/// Reads the map at `input`, selects its object layer under `policy`, and
/// writes one level line per object to `output`, replacing any existing file.
/// When an object fails to classify, the lines written before it are kept on
/// disk and the classification error is returned.
pub fn convert_file(
    input: &Path,
    output: &Path,
    policy: ObjectLayerPolicy,
) -> Result<LevelStats, ConvertError> {
    let document = load_document(input)?;
    let layer = document.object_layer(policy)?;
    debug!(
        "selected object layer `{}` with {} objects",
        layer.name,
        layer.objects.len()
    );

    let file = File::create(output).map_err(ExportError::from)?;
    let mut writer = BufWriter::new(file);
    let result = write_level(&layer.objects, &mut writer);

    // Flush before surfacing a classification error so the lines already
    // written reach the file.
    let flushed = writer.flush().map_err(ExportError::from);
    let stats = result?;
    flushed?;

    Ok(stats)
}
