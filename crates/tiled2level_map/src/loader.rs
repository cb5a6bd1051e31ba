//! Reading map exports from disk and picking the layer to convert.

use std::fs;
use std::path::Path;

use crate::document::{LayerKind, TiledDocument, TiledLayer};
use crate::error::MapError;

/// How to pick the object layer when the map has more than one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectLayerPolicy {
    /// Fail unless exactly one object-group layer exists.
    #[default]
    RequireSingle,

    /// Take the last object-group layer in document order, as older exporters
    /// and hand-edited maps sometimes rely on.
    LastWins,
}

/// Reads and parses a Tiled JSON map export.
pub fn load_document(path: &Path) -> Result<TiledDocument, MapError> {
    let raw = fs::read_to_string(path)?;
    let document = serde_json::from_str(&raw)?;
    Ok(document)
}

impl TiledDocument {
    /// Selects the object-group layer to convert.
    ///
    /// With [`ObjectLayerPolicy::RequireSingle`] a map with zero or several
    /// object layers is an error; with [`ObjectLayerPolicy::LastWins`] the
    /// last one in document order is taken.
    pub fn object_layer(&self, policy: ObjectLayerPolicy) -> Result<&TiledLayer, MapError> {
        let mut matches = self
            .layers
            .iter()
            .filter(|layer| layer.kind == LayerKind::ObjectGroup);

        match policy {
            ObjectLayerPolicy::RequireSingle => {
                let first = matches.next().ok_or(MapError::MissingObjectLayer)?;
                let extra = matches.count();
                if extra > 0 {
                    return Err(MapError::MultipleObjectLayers { count: extra + 1 });
                }
                Ok(first)
            }
            ObjectLayerPolicy::LastWins => matches.last().ok_or(MapError::MissingObjectLayer),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn document(json: &str) -> TiledDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn loads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"layers": [{{"type": "objectgroup", "name": "objects", "objects": []}}]}}"#
        )
        .unwrap();

        let document = load_document(file.path()).unwrap();
        assert_eq!(document.layers.len(), 1);
        assert_eq!(document.layers[0].kind, LayerKind::ObjectGroup);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_document(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(MapError::Io(_))));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let result = load_document(file.path());
        assert!(matches!(result, Err(MapError::Parse(_))));
    }

    #[test]
    fn single_object_layer_is_selected() {
        let document = document(
            r#"{"layers": [
                {"type": "tilelayer", "name": "ground"},
                {"type": "objectgroup", "name": "objects"}
            ]}"#,
        );

        let layer = document
            .object_layer(ObjectLayerPolicy::RequireSingle)
            .unwrap();
        assert_eq!(layer.name, "objects");
    }

    #[test]
    fn no_object_layer_fails_under_both_policies() {
        let document = document(r#"{"layers": [{"type": "tilelayer"}]}"#);

        for policy in [ObjectLayerPolicy::RequireSingle, ObjectLayerPolicy::LastWins] {
            let result = document.object_layer(policy);
            assert!(matches!(result, Err(MapError::MissingObjectLayer)));
        }
    }

    #[test]
    fn several_object_layers_fail_by_default() {
        let document = document(
            r#"{"layers": [
                {"type": "objectgroup", "name": "first"},
                {"type": "objectgroup", "name": "second"},
                {"type": "objectgroup", "name": "third"}
            ]}"#,
        );

        let result = document.object_layer(ObjectLayerPolicy::RequireSingle);
        assert!(matches!(
            result,
            Err(MapError::MultipleObjectLayers { count: 3 })
        ));
    }

    #[test]
    fn last_wins_takes_the_final_object_layer() {
        let document = document(
            r#"{"layers": [
                {"type": "objectgroup", "name": "first"},
                {"type": "tilelayer", "name": "ground"},
                {"type": "objectgroup", "name": "second"}
            ]}"#,
        );

        let layer = document.object_layer(ObjectLayerPolicy::LastWins).unwrap();
        assert_eq!(layer.name, "second");
    }
}
