//! Typed model of the Tiled JSON map export.
//!
//! Mirrors the subset of the export schema the converter consumes. Parsing is
//! trusting: unknown fields are ignored and optional fields default, so exports
//! from any Tiled version that keeps the core shape load unchanged.

use serde::Deserialize;

/// A parsed map export.
///
/// Holds the ordered layer list; everything else in the export is ignored.
/// A missing `layers` key behaves like an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct TiledDocument {
    /// Map layers in document order.
    #[serde(default)]
    pub layers: Vec<TiledLayer>,
}

/// One layer of the map.
#[derive(Debug, Clone, Deserialize)]
pub struct TiledLayer {
    /// Layer kind, from the JSON `type` tag.
    #[serde(rename = "type")]
    pub kind: LayerKind,

    /// Layer name as shown in the editor.
    #[serde(default)]
    pub name: String,

    /// Placed objects, in editor order. Only object-group layers have any.
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

/// Layer kind tags used by the Tiled JSON format.
///
/// Tags this model does not know deserialize to [`LayerKind::Other`] instead of
/// failing, so maps using newer layer kinds still convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Tile grid layer (`"tilelayer"`).
    Tile,
    /// Object-group layer (`"objectgroup"`) - discrete placed objects.
    ObjectGroup,
    /// Image layer (`"imagelayer"`).
    Image,
    /// Group layer (`"group"`) - container for nested layers.
    Group,
    /// Any other tag.
    Other,
}

impl<'de> Deserialize<'de> for LayerKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "tilelayer" => Self::Tile,
            "objectgroup" => Self::ObjectGroup,
            "imagelayer" => Self::Image,
            "group" => Self::Group,
            _ => Self::Other,
        })
    }
}

/// A placed object from an object-group layer.
///
/// `ellipse` and `point` are shape markers: the editor writes the key only on
/// objects of that shape, so key presence alone discriminates and the value
/// carries no information. They are kept as raw JSON values to accept `true`,
/// `{}`, or whatever else an exporter emits.
#[derive(Debug, Clone, Deserialize)]
pub struct MapObject {
    /// Object id, unique within the map. Carried into diagnostics.
    #[serde(default)]
    pub id: u32,

    /// Object name as entered in the editor.
    #[serde(default)]
    pub name: String,

    /// Horizontal position (top-left or anchor, depending on shape).
    pub x: f64,

    /// Vertical position (top-left or anchor, depending on shape).
    pub y: f64,

    /// Bounding width. Present on ellipse objects.
    #[serde(default)]
    pub width: Option<f64>,

    /// Bounding height.
    #[serde(default)]
    pub height: Option<f64>,

    /// Ellipse shape marker (presence only).
    #[serde(default)]
    pub ellipse: Option<serde_json::Value>,

    /// Point shape marker (presence only).
    #[serde(default)]
    pub point: Option<serde_json::Value>,

    /// Custom properties, in editor order.
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl MapObject {
    /// Whether the ellipse shape marker is present. The marker value is ignored.
    pub fn is_ellipse(&self) -> bool {
        self.ellipse.is_some()
    }

    /// Whether the point shape marker is present. The marker value is ignored.
    pub fn is_point(&self) -> bool {
        self.point.is_some()
    }
}

/// A custom property attached to a map object.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    /// Property name.
    pub name: String,

    /// Property type tag (`"float"`, `"int"`, ...), when the exporter wrote one.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Raw property value.
    pub value: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layer_kinds() {
        let document: TiledDocument = serde_json::from_str(
            r#"{
                "layers": [
                    {"type": "tilelayer", "name": "ground"},
                    {"type": "objectgroup", "name": "objects"},
                    {"type": "imagelayer"},
                    {"type": "group"},
                    {"type": "hexagonal-prism"}
                ]
            }"#,
        )
        .unwrap();

        let kinds: Vec<LayerKind> = document.layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LayerKind::Tile,
                LayerKind::ObjectGroup,
                LayerKind::Image,
                LayerKind::Group,
                LayerKind::Other,
            ]
        );
        assert_eq!(document.layers[0].name, "ground");
        assert!(document.layers[0].objects.is_empty());
    }

    #[test]
    fn missing_layers_key_is_empty() {
        let document: TiledDocument = serde_json::from_str("{}").unwrap();
        assert!(document.layers.is_empty());
    }

    #[test]
    fn shape_markers_discriminate_by_presence() {
        // Value type is irrelevant: `true`, `{}`, even `false` all mark the shape.
        let object: MapObject =
            serde_json::from_str(r#"{"x": 1, "y": 2, "ellipse": false}"#).unwrap();
        assert!(object.is_ellipse());
        assert!(!object.is_point());

        let object: MapObject = serde_json::from_str(r#"{"x": 1, "y": 2, "point": {}}"#).unwrap();
        assert!(object.is_point());
        assert!(!object.is_ellipse());

        let object: MapObject = serde_json::from_str(r#"{"x": 1, "y": 2}"#).unwrap();
        assert!(!object.is_ellipse());
        assert!(!object.is_point());
    }

    #[test]
    fn missing_position_is_a_parse_failure() {
        let result = serde_json::from_str::<MapObject>(r#"{"y": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn properties_keep_editor_order() {
        let object: MapObject = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "sun",
                "x": 0, "y": 0, "width": 64, "height": 64,
                "ellipse": true,
                "properties": [
                    {"name": "mass", "type": "float", "value": 3.5},
                    {"name": "label", "type": "string", "value": "sol"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(object.id, 7);
        assert_eq!(object.width, Some(64.0));
        assert_eq!(object.properties.len(), 2);
        assert_eq!(object.properties[0].name, "mass");
        assert_eq!(object.properties[0].kind.as_deref(), Some("float"));
        assert_eq!(object.properties[1].name, "label");
    }
}
