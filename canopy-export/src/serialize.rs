use canopy_scenegraph::nodes::node::{NodeKind, SceneNode};
use canopy_scenegraph::selection::Selection;
use tracing::{debug, warn};

use crate::document::{ErrorPayload, SelectionSnapshot, SerializedNode, SnapshotMessage};
use crate::error::ExportError;

/// Deepest nesting the serializer will follow. The host guarantees a finite,
/// acyclic tree and real documents stay far shallower than this; past the
/// cap, children are dropped instead of exhausting the stack.
pub const MAX_DEPTH: usize = 512;

/// Serialize one node and all of its descendants, preserving child order.
///
/// Never fails: attributes the node lacks, attributes holding the mixed
/// sentinel, and unrecognized kinds all degrade to omitted fields. The input
/// is not mutated and nothing is cached across calls.
pub fn serialize_node(node: &SceneNode) -> SerializedNode {
    serialize_node_at(node, 0)
}

fn serialize_node_at(node: &SceneNode, depth: usize) -> SerializedNode {
    let mut out = SerializedNode {
        node_type: node.type_name().to_string(),
        name: node.name.clone(),
        x: node.x,
        y: node.y,
        width: node.width,
        height: node.height,
        id: node.id.clone(),
        visible: node.visible,
        ..Default::default()
    };

    // Frame-like kinds carry layout fields only while the capability is
    // actually enabled on the node
    if let Some(layout) = node.auto_layout() {
        out.layout_mode = Some(layout.layout_mode);
        out.primary_axis_sizing_mode = Some(layout.primary_axis_sizing_mode);
        out.counter_axis_sizing_mode = Some(layout.counter_axis_sizing_mode);
        out.padding_left = Some(layout.padding_left);
        out.padding_right = Some(layout.padding_right);
        out.padding_top = Some(layout.padding_top);
        out.padding_bottom = Some(layout.padding_bottom);
    }

    match &node.kind {
        NodeKind::Text(text) => {
            out.characters = Some(text.characters.clone());
            out.font_size = text.font_size.uniform().copied();
            out.font_name = text.font_name.uniform().cloned();
            out.fills = text.fills.uniform().cloned();
            out.text_align_horizontal = Some(text.text_align_horizontal);
            out.text_align_vertical = Some(text.text_align_vertical);
        }
        NodeKind::Rectangle(rect) => {
            out.corner_radius = rect.corner_radius.uniform().copied();
            out.fills = rect.fills.uniform().cloned();
            out.strokes = Some(rect.strokes.clone());
            out.stroke_weight = rect.stroke_weight.uniform().copied();
        }
        NodeKind::Component(_) | NodeKind::ComponentSet => {
            out.component_id = Some(node.id.clone());
            out.instance_name = Some(node.name.clone());
        }
        // Vector is an extension point; groups, frames, instances and
        // unrecognized kinds emit the shared fields alone
        NodeKind::Frame(_)
        | NodeKind::Instance(_)
        | NodeKind::Group
        | NodeKind::Vector
        | NodeKind::Other(_) => {}
    }

    let children = node.children();
    if !children.is_empty() {
        if depth + 1 >= MAX_DEPTH {
            warn!(
                node_id = %node.id,
                depth,
                "dropping children past the depth cap"
            );
        } else {
            out.children = Some(
                children
                    .iter()
                    .map(|child| serialize_node_at(child, depth + 1))
                    .collect(),
            );
        }
    }

    out
}

/// Build the snapshot envelope for a non-empty selection.
pub fn build_snapshot(selection: &Selection) -> Result<SelectionSnapshot, ExportError> {
    if selection.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    debug!(
        page_id = %selection.page_id,
        roots = selection.nodes.len(),
        "serializing selection"
    );

    Ok(SelectionSnapshot {
        page_name: selection.page_name.clone(),
        page_id: selection.page_id.clone(),
        selected_nodes: selection.nodes.iter().map(serialize_node).collect(),
    })
}

/// The message handed to the UI: the snapshot, or the structured error
/// payload when nothing is selected.
pub fn snapshot_message(selection: &Selection) -> SnapshotMessage {
    match build_snapshot(selection) {
        Ok(snapshot) => SnapshotMessage::Snapshot(snapshot),
        Err(err) => SnapshotMessage::Error(ErrorPayload {
            error: err.to_string(),
        }),
    }
}

/// Encode the outbound message as pretty-printed JSON (2-space indentation).
pub fn snapshot_json(selection: &Selection) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&snapshot_message(selection))?)
}
