//! Typed shapes for the recognized JSON document formats.
//!
//! Documents are parsed in two steps: the raw JSON is inspected for its
//! top-level keys to pick a shape, then deserialized into the matching
//! typed struct. Unknown fields are ignored throughout; the fixtures these
//! shapes come from carry styling payloads (colors, line widths, port
//! geometry) that are the rendering surface's business, not ours.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ModelError;

/// A parsed input document in one of the recognized shapes.
#[derive(Debug, Clone)]
pub enum Document {
    SimpleGraph(SimpleGraphDoc),
    Catalog(CatalogDoc),
    Assembly(AssemblyDoc),
}

impl Document {
    /// Parses a JSON string into a typed document.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] when the text is not valid JSON or does
    /// not match its detected shape, and [`ModelError::UnrecognizedShape`]
    /// when no shape matches the top-level keys.
    pub fn from_json(src: &str) -> Result<Self, ModelError> {
        let value: serde_json::Value =
            serde_json::from_str(src).map_err(|err| ModelError::new_json_error(err, src))?;

        let Some(keys) = value.as_object() else {
            return Err(ModelError::UnrecognizedShape);
        };
        let is_catalog = keys.contains_key("objectTypes");
        let is_assembly = keys.contains_key("assemblies");
        let is_simple = keys.contains_key("branches") || keys.contains_key("nodes");

        let document = if is_catalog {
            Self::Catalog(
                serde_json::from_value(value)
                    .map_err(|err| ModelError::new_json_error(err, src))?,
            )
        } else if is_assembly {
            Self::Assembly(
                serde_json::from_value(value)
                    .map_err(|err| ModelError::new_json_error(err, src))?,
            )
        } else if is_simple {
            Self::SimpleGraph(
                serde_json::from_value(value)
                    .map_err(|err| ModelError::new_json_error(err, src))?,
            )
        } else {
            return Err(ModelError::UnrecognizedShape);
        };

        Ok(document)
    }
}

/// Branch/node/edge "simple graph" shape.
///
/// Either `branches` or a flat `nodes` list may be present; a document with
/// only `nodes` describes a branch-less set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimpleGraphDoc {
    pub branches: Vec<BranchDoc>,
    pub nodes: Vec<NodeDoc>,
    pub edges: Vec<EdgeDoc>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

/// One ordered chain of nodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BranchDoc {
    pub name: Option<String>,
    pub nodes: Vec<NodeDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeDoc {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDoc {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub length: Option<f32>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Object/connection catalog shape.
///
/// Objects carry their own coordinates; the layout stage passes them
/// through unchanged. Type tables are kept only to validate object
/// references - their styling content is opaque here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogDoc {
    pub object_types: IndexMap<String, ObjectTypeDoc>,
    pub connection_types: IndexMap<String, serde_json::Value>,
    pub link_types: IndexMap<String, serde_json::Value>,
    pub objects: Vec<ObjectDoc>,
    pub connections: Vec<ConnectionDoc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObjectTypeDoc {
    pub name: Option<String>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectDoc {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDoc {
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub from: EndpointDoc,
    pub to: EndpointDoc,
    #[serde(default)]
    pub length: Option<f32>,
    #[serde(default)]
    pub latency: Option<f32>,
    #[serde(default, rename = "linkType")]
    pub link_type: Option<String>,
}

/// One side of a catalog connection: an object and the port it attaches to.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointDoc {
    pub object: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
}

/// Assembly/component hierarchy shape.
///
/// Normalization stays at the assembly-instance level; component and port
/// definitions are parsed but not expanded into graph nodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssemblyDoc {
    pub assemblies: IndexMap<String, AssemblyDef>,
    pub components: IndexMap<String, ComponentDef>,
    pub boxes: IndexMap<String, BoxDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssemblyDef {
    pub components: IndexMap<String, u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ComponentDef {
    pub inputs: Option<CountOrNames>,
    pub outputs: Option<CountOrNames>,
    pub channels: Option<u32>,
}

/// Component port declarations appear both as counts (`"inputs": 1`) and
/// as name lists (`"inputs": ["pump_in"]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CountOrNames {
    Count(u32),
    Names(Vec<String>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoxDef {
    /// Assembly type -> instance id.
    pub assemblies: IndexMap<String, String>,
    pub connectivity: Vec<LinkDoc>,
}

/// One connectivity entry between two port paths
/// (`"flange0.ribbon_1.1"` -> `"source0.component_1.inputs.pump_in"`).
#[derive(Debug, Clone, Deserialize)]
pub struct LinkDoc {
    pub from: String,
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_simple_graph_by_branches() {
        let src = r#"{"branches": [{"nodes": [{"id": "a"}]}], "edges": []}"#;
        let doc = Document::from_json(src).expect("parse");
        assert!(matches!(doc, Document::SimpleGraph(_)));
    }

    #[test]
    fn test_detects_simple_graph_by_flat_nodes() {
        let src = r#"{"nodes": [{"id": "a"}, {"id": "b", "label": "B"}]}"#;
        let doc = Document::from_json(src).expect("parse");

        let Document::SimpleGraph(graph) = doc else {
            panic!("expected simple graph");
        };
        assert!(graph.branches.is_empty());
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[1].label.as_deref(), Some("B"));
    }

    #[test]
    fn test_detects_catalog() {
        let src = r#"{
            "objectTypes": {"laser": {"name": "Laser", "outputs": ["beam"]}},
            "objects": [{"id": "laser_1", "type": "laser", "x": 120.0, "y": 80.0}],
            "connections": []
        }"#;
        let doc = Document::from_json(src).expect("parse");

        let Document::Catalog(catalog) = doc else {
            panic!("expected catalog");
        };
        assert_eq!(catalog.objects[0].x, 120.0);
        assert_eq!(catalog.object_types["laser"].outputs, vec!["beam"]);
    }

    #[test]
    fn test_detects_assembly() {
        let src = r#"{
            "assemblies": {"source": {"components": {"source_branch": 12}}},
            "components": {
                "source_branch": {"inputs": ["pump_in"], "outputs": ["pump_out"]},
                "digitizer": {"inputs": 1}
            },
            "boxes": {
                "box_1": {
                    "assemblies": {"source": "source0"},
                    "connectivity": [{"from": "source0.out", "to": "source0.in"}]
                }
            }
        }"#;
        let doc = Document::from_json(src).expect("parse");

        let Document::Assembly(assembly) = doc else {
            panic!("expected assembly");
        };
        assert!(matches!(
            assembly.components["source_branch"].inputs,
            Some(CountOrNames::Names(_))
        ));
        assert!(matches!(
            assembly.components["digitizer"].inputs,
            Some(CountOrNames::Count(1))
        ));
        assert_eq!(assembly.boxes["box_1"].connectivity.len(), 1);
    }

    #[test]
    fn test_edge_type_field_renamed() {
        let src = r#"{
            "nodes": [{"id": "a"}, {"id": "b"}],
            "edges": [{"source": "a", "target": "b", "type": "fiber", "length": 50.0}]
        }"#;
        let Document::SimpleGraph(graph) = Document::from_json(src).expect("parse") else {
            panic!("expected simple graph");
        };
        assert_eq!(graph.edges[0].kind.as_deref(), Some("fiber"));
        assert_eq!(graph.edges[0].length, Some(50.0));
    }

    #[test]
    fn test_rejects_unrecognized_shape() {
        let err = Document::from_json(r#"{"widgets": []}"#).unwrap_err();
        assert!(matches!(err, ModelError::UnrecognizedShape));

        let err = Document::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ModelError::UnrecognizedShape));
    }

    #[test]
    fn test_malformed_json_keeps_source() {
        let src = r#"{"nodes": ["#;
        let err = Document::from_json(src).unwrap_err();
        let ModelError::Json { src: kept, .. } = err else {
            panic!("expected json error");
        };
        assert_eq!(kept, src);
    }
}
