use canopy_scenegraph::nodes::frame::{LayoutMode, SizingMode};
use canopy_scenegraph::nodes::text::{FontName, TextAlignHorizontal, TextAlignVertical};
use canopy_scenegraph::value::Paint;
use serde::Serialize;

/// One node of the snapshot document.
///
/// The shared fields are always present; everything type-specific is an
/// `Option` that stays out of the encoded document when the source node
/// lacks the attribute or holds the mixed sentinel. Struct order here is
/// the key order of the encoded object.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub id: String,
    pub visible: bool,

    // Frame-like nodes with auto-layout enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_sizing_mode: Option<SizingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_sizing_mode: Option<SizingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,

    // Text nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<FontName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<TextAlignVertical>,

    // Geometry paints (text and rectangle)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,

    // Components and component sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,

    /// Present only when the source node has one or more children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SerializedNode>>,
}

impl SerializedNode {
    /// Number of nodes in this serialized subtree, the node itself included.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(SerializedNode::subtree_len)
            .sum::<usize>()
    }
}

/// The snapshot envelope handed to the UI on a non-empty selection.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub page_name: String,
    pub page_id: String,
    pub selected_nodes: Vec<SerializedNode>,
}

impl SelectionSnapshot {
    pub fn node_count(&self) -> usize {
        self.selected_nodes
            .iter()
            .map(SerializedNode::subtree_len)
            .sum()
    }
}

/// The single outbound message: either the snapshot or a structured error
/// payload such as `{"error": "No elements selected"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SnapshotMessage {
    Snapshot(SelectionSnapshot),
    Error(ErrorPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}
