//! Element-list construction for the rendering surface.
//!
//! The exported list pairs every node with its computed position and every
//! surviving edge with its endpoints; anything the rendering surface needs
//! beyond that (colors, widths, arrowheads) is its own configuration.

use skein_core::{
    element::{EdgeElement, ElementList, NodeElement, PortRole},
    identifier::Id,
};
use skein_model::Graph;

use crate::{error::SkeinError, layout::Layout};

/// Builds the element list for a graph and its layout.
///
/// Node labels fall back to the id; edge ids fall back to `e{index}` in
/// declaration order so repeated exports of the same document agree.
pub fn elements(graph: &Graph, layout: &Layout) -> ElementList {
    let nodes = graph
        .nodes()
        .map(|node| NodeElement {
            id: node.id,
            label: node.label.clone().unwrap_or_else(|| node.id.resolve()),
            position: layout.position(node.id).unwrap_or_default(),
            role: port_role(graph, node.id),
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .enumerate()
        .map(|(index, edge)| EdgeElement {
            id: edge.id.clone().unwrap_or_else(|| format!("e{index}")),
            source: edge.source,
            target: edge.target,
            length: edge.length,
            kind: edge.kind.clone(),
            latency: edge.latency,
        })
        .collect();

    ElementList { nodes, edges }
}

/// Serializes an element list as pretty-printed JSON.
pub fn to_json(elements: &ElementList) -> Result<String, SkeinError> {
    serde_json::to_string_pretty(elements).map_err(|err| SkeinError::Export(Box::new(err)))
}

fn port_role(graph: &Graph, id: Id) -> Option<PortRole> {
    if graph.inputs().contains(&id) {
        Some(PortRole::Input)
    } else if graph.outputs().contains(&id) {
        Some(PortRole::Output)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        layout::{EngineBuilder, LayoutStrategy},
        structure::Topology,
    };

    use super::*;

    fn pipeline(json: &str, strategy: LayoutStrategy) -> ElementList {
        let graph = Graph::from_json(json).expect("parse");
        let topology = Topology::new(&graph);
        let layout = EngineBuilder::new().build_layout(&topology, strategy);
        elements(&graph, &layout)
    }

    #[test]
    fn test_node_descriptors_carry_positions_and_roles() {
        let list = pipeline(
            r#"{
                "branches": [{"nodes": [{"id": "a", "label": "Pump"}, {"id": "b"}]}],
                "edges": [{"source": "a", "target": "b", "length": 50.0}],
                "inputs": ["a"],
                "outputs": ["b"]
            }"#,
            LayoutStrategy::Square,
        );

        assert_eq!(list.nodes.len(), 2);
        let a = &list.nodes[0];
        assert_eq!(a.label, "Pump");
        assert_eq!(a.position.x(), 0.0);
        assert_eq!(a.position.y(), 100.0);
        assert_eq!(a.role, Some(PortRole::Input));

        let b = &list.nodes[1];
        assert_eq!(b.label, "b");
        assert_eq!(b.position.x(), 50.0);
        assert_eq!(b.role, Some(PortRole::Output));
    }

    #[test]
    fn test_edge_ids_synthesized_in_declaration_order() {
        let list = pipeline(
            r#"{
                "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}],
                "edges": [
                    {"source": "a", "target": "b"},
                    {"id": "trunk", "source": "b", "target": "c"},
                    {"source": "c", "target": "a"}
                ]
            }"#,
            LayoutStrategy::Square,
        );

        let ids: Vec<&str> = list.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e0", "trunk", "e2"]);
    }

    #[test]
    fn test_dangling_edge_absent_from_element_list() {
        let list = pipeline(
            r#"{
                "nodes": [{"id": "a"}, {"id": "b"}],
                "edges": [
                    {"source": "a", "target": "b"},
                    {"source": "a", "target": "ghost"}
                ]
            }"#,
            LayoutStrategy::Square,
        );

        assert_eq!(list.nodes.len(), 2);
        assert_eq!(list.edges.len(), 1);
        assert_eq!(list.edges[0].target, Id::new("b"));
    }

    #[test]
    fn test_catalog_connection_metadata_carried_through() {
        let list = pipeline(
            r#"{
                "objectTypes": {"t": {}},
                "objects": [
                    {"id": "a", "type": "t", "x": 0.0, "y": 0.0},
                    {"id": "b", "type": "t", "x": 100.0, "y": 0.0}
                ],
                "connections": [
                    {"id": "c1", "type": "fiber", "from": {"object": "a"},
                     "to": {"object": "b"}, "length": 220.0, "latency": 1.1}
                ]
            }"#,
            LayoutStrategy::Square,
        );

        let edge = &list.edges[0];
        assert_eq!(edge.id, "c1");
        assert_eq!(edge.kind.as_deref(), Some("fiber"));
        assert_eq!(edge.length, Some(220.0));
        assert_eq!(edge.latency, Some(1.1));
    }

    #[test]
    fn test_empty_graph_exports_empty_list() {
        let graph = Graph::default();
        let topology = Topology::new(&graph);
        let layout = EngineBuilder::new().build_layout(&topology, LayoutStrategy::Square);
        let list = elements(&graph, &layout);

        assert!(list.is_empty());
        let json = to_json(&list).expect("serialize");
        assert!(json.contains("\"nodes\""));
    }

    #[test]
    fn test_json_output_shape() {
        let list = pipeline(
            r#"{"nodes": [{"id": "a"}]}"#,
            LayoutStrategy::Square,
        );
        let json = to_json(&list).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("reparse");

        assert_eq!(value["nodes"][0]["id"], "a");
        assert_eq!(value["nodes"][0]["position"]["x"], 100.0);
        assert_eq!(value["nodes"][0]["position"]["y"], 100.0);
    }
}
