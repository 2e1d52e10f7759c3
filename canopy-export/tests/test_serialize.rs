use canopy_export::serialize::{
    build_snapshot, serialize_node, snapshot_json, snapshot_message, MAX_DEPTH,
};
use canopy_scenegraph::nodes::component::{ComponentNode, InstanceNode};
use canopy_scenegraph::nodes::frame::{AutoLayout, FrameNode, LayoutMode, SizingMode};
use canopy_scenegraph::nodes::node::{NodeKind, SceneNode};
use canopy_scenegraph::nodes::rectangle::RectangleNode;
use canopy_scenegraph::nodes::text::{TextAlignHorizontal, TextAlignVertical, TextNode};
use canopy_scenegraph::selection::Selection;
use canopy_scenegraph::value::{MaybeMixed, Paint};
use rstest::rstest;
use serde_json::{json, Value};

fn selection_of(nodes: Vec<SceneNode>) -> Selection {
    Selection {
        page_name: "Page 1".to_string(),
        page_id: "0:0".to_string(),
        nodes,
    }
}

fn as_object(node: &canopy_export::document::SerializedNode) -> serde_json::Map<String, Value> {
    match serde_json::to_value(node).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn test_empty_selection_message() {
    let selection = selection_of(vec![]);

    assert!(build_snapshot(&selection).is_err());

    let encoded = snapshot_json(&selection).unwrap();
    assert_eq!(encoded, "{\n  \"error\": \"No elements selected\"\n}");
}

#[test]
fn test_rectangle_with_mixed_fills() {
    // cornerRadius survives, mixed fills vanish, childless leaf has no
    // children key
    let rect = SceneNode {
        id: "1:2".to_string(),
        name: "Card".to_string(),
        width: 100.0,
        height: 60.0,
        kind: NodeKind::Rectangle(RectangleNode {
            corner_radius: MaybeMixed::Uniform(4.0),
            fills: MaybeMixed::Mixed,
            strokes: vec![Paint::Color([0.0, 0.0, 0.0, 1.0])],
            stroke_weight: MaybeMixed::Uniform(1.0),
        }),
        ..Default::default()
    };

    let selection = selection_of(vec![rect]);
    let snapshot = build_snapshot(&selection).unwrap();
    let fields = as_object(&snapshot.selected_nodes[0]);

    assert_eq!(fields["type"], json!("RECTANGLE"));
    assert_eq!(fields["cornerRadius"], json!(4.0));
    assert_eq!(fields["strokeWeight"], json!(1.0));
    assert_eq!(fields["strokes"], json!([[0.0, 0.0, 0.0, 1.0]]));
    assert!(!fields.contains_key("fills"));
    assert!(!fields.contains_key("children"));
}

#[test]
fn test_frame_with_two_text_children() {
    let text = |id: &str, characters: &str| SceneNode {
        id: id.to_string(),
        kind: NodeKind::Text(TextNode {
            characters: characters.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    };

    let frame = SceneNode {
        id: "2:0".to_string(),
        name: "Hero".to_string(),
        kind: NodeKind::Frame(FrameNode::default()),
        children: Some(vec![text("2:1", "Title"), text("2:2", "Subtitle")]),
        ..Default::default()
    };

    let snapshot = build_snapshot(&selection_of(vec![frame])).unwrap();
    let children = snapshot.selected_nodes[0].children.as_ref().unwrap();

    assert_eq!(children.len(), 2);
    assert_eq!(children[0].characters.as_deref(), Some("Title"));
    assert_eq!(children[1].characters.as_deref(), Some("Subtitle"));
}

#[test]
fn test_component_set_identity_fields() {
    let set = SceneNode {
        id: "123:4".to_string(),
        name: "Button".to_string(),
        kind: NodeKind::ComponentSet,
        children: Some(vec![]),
        ..Default::default()
    };

    let serialized = serialize_node(&set);
    assert_eq!(serialized.component_id.as_deref(), Some("123:4"));
    assert_eq!(serialized.instance_name.as_deref(), Some("Button"));
    // Present-but-empty child list still yields no children key
    assert!(serialized.children.is_none());
}

#[test]
fn test_text_mixed_attributes_are_absent() {
    let text = SceneNode {
        id: "3:1".to_string(),
        kind: NodeKind::Text(TextNode {
            characters: "Mixed run".to_string(),
            font_size: MaybeMixed::Mixed,
            font_name: MaybeMixed::Mixed,
            fills: MaybeMixed::Mixed,
            text_align_horizontal: TextAlignHorizontal::Center,
            text_align_vertical: TextAlignVertical::Bottom,
        }),
        ..Default::default()
    };

    let fields = as_object(&serialize_node(&text));

    // Characters and alignment are unconditional; everything mixed is gone,
    // not null
    assert_eq!(fields["characters"], json!("Mixed run"));
    assert_eq!(fields["textAlignHorizontal"], json!("CENTER"));
    assert_eq!(fields["textAlignVertical"], json!("BOTTOM"));
    assert!(!fields.contains_key("fontSize"));
    assert!(!fields.contains_key("fontName"));
    assert!(!fields.contains_key("fills"));
}

#[test]
fn test_auto_layout_fields_require_capability() {
    let bare = SceneNode {
        id: "4:1".to_string(),
        kind: NodeKind::Frame(FrameNode { auto_layout: None }),
        ..Default::default()
    };
    let fields = as_object(&serialize_node(&bare));
    assert!(!fields.contains_key("layoutMode"));
    assert!(!fields.contains_key("paddingLeft"));

    let laid_out = SceneNode {
        id: "4:2".to_string(),
        kind: NodeKind::Instance(InstanceNode {
            auto_layout: Some(AutoLayout {
                layout_mode: LayoutMode::Vertical,
                primary_axis_sizing_mode: SizingMode::Auto,
                counter_axis_sizing_mode: SizingMode::Fixed,
                padding_left: 8.0,
                padding_right: 8.0,
                padding_top: 16.0,
                padding_bottom: 16.0,
            }),
        }),
        ..Default::default()
    };
    let fields = as_object(&serialize_node(&laid_out));
    assert_eq!(fields["layoutMode"], json!("VERTICAL"));
    assert_eq!(fields["primaryAxisSizingMode"], json!("AUTO"));
    assert_eq!(fields["counterAxisSizingMode"], json!("FIXED"));
    assert_eq!(fields["paddingTop"], json!(16.0));
}

#[test]
fn test_component_gets_layout_and_identity() {
    let component = SceneNode {
        id: "5:1".to_string(),
        name: "Card/Default".to_string(),
        kind: NodeKind::Component(ComponentNode {
            auto_layout: Some(AutoLayout::default()),
        }),
        ..Default::default()
    };

    let serialized = serialize_node(&component);
    assert_eq!(serialized.layout_mode, Some(LayoutMode::None));
    assert_eq!(serialized.component_id.as_deref(), Some("5:1"));
    assert_eq!(serialized.instance_name.as_deref(), Some("Card/Default"));
}

#[test]
fn test_unknown_kind_serializes_common_fields() {
    let node = SceneNode {
        id: "6:1".to_string(),
        name: "Union".to_string(),
        x: 10.0,
        y: 20.0,
        width: 30.0,
        height: 40.0,
        visible: false,
        kind: NodeKind::Other("BOOLEAN_OPERATION".to_string()),
        children: Some(vec![SceneNode {
            id: "6:2".to_string(),
            kind: NodeKind::Vector,
            ..Default::default()
        }]),
    };

    let fields = as_object(&serialize_node(&node));
    assert_eq!(fields["type"], json!("BOOLEAN_OPERATION"));
    assert_eq!(fields["x"], json!(10.0));
    assert_eq!(fields["visible"], json!(false));
    // Unknown kinds still recurse into children they carry
    assert_eq!(fields["children"].as_array().unwrap().len(), 1);
    assert_eq!(fields["children"][0]["type"], json!("VECTOR"));
}

#[test]
fn test_output_mirrors_input_shape() {
    let leaf = |id: &str| SceneNode {
        id: id.to_string(),
        kind: NodeKind::Rectangle(RectangleNode::default()),
        ..Default::default()
    };

    let selection = selection_of(vec![
        SceneNode {
            id: "7:1".to_string(),
            children: Some(vec![
                leaf("7:2"),
                SceneNode {
                    id: "7:3".to_string(),
                    kind: NodeKind::Group,
                    children: Some(vec![leaf("7:4"), leaf("7:5")]),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        },
        leaf("7:6"),
    ]);

    let snapshot = build_snapshot(&selection).unwrap();
    assert_eq!(snapshot.node_count(), selection.node_count());

    // Same nesting, same order at every level
    let root = &snapshot.selected_nodes[0];
    let children = root.children.as_ref().unwrap();
    assert_eq!(children[0].id, "7:2");
    assert_eq!(children[1].id, "7:3");
    let grandchildren = children[1].children.as_ref().unwrap();
    assert_eq!(grandchildren[0].id, "7:4");
    assert_eq!(grandchildren[1].id, "7:5");
    assert_eq!(snapshot.selected_nodes[1].id, "7:6");
}

#[test]
fn test_snapshot_is_idempotent() {
    let selection = selection_of(vec![SceneNode {
        id: "8:1".to_string(),
        kind: NodeKind::Text(TextNode {
            characters: "same".to_string(),
            font_size: MaybeMixed::Mixed,
            ..Default::default()
        }),
        ..Default::default()
    }]);

    let first = serde_json::to_value(snapshot_message(&selection)).unwrap();
    let second = serde_json::to_value(snapshot_message(&selection)).unwrap();
    assert_eq!(first, second);

    assert_eq!(
        snapshot_json(&selection).unwrap(),
        snapshot_json(&selection).unwrap()
    );
}

#[test]
fn test_envelope_shape_and_indentation() {
    let selection = selection_of(vec![SceneNode {
        id: "9:1".to_string(),
        name: "Leaf".to_string(),
        kind: NodeKind::Vector,
        ..Default::default()
    }]);

    let encoded = snapshot_json(&selection).unwrap();
    assert!(encoded.starts_with("{\n  \"pageName\": \"Page 1\",\n  \"pageId\": \"0:0\","));

    let value: Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["selectedNodes"].as_array().unwrap().len(), 1);
    assert_eq!(value["selectedNodes"][0]["type"], json!("VECTOR"));
}

#[test]
fn test_depth_cap_truncates_hostile_trees() {
    // A chain far deeper than any real document; the serializer must neither
    // overflow nor emit nodes past the cap
    let mut node = SceneNode {
        id: "deep:leaf".to_string(),
        ..Default::default()
    };
    for i in (0..MAX_DEPTH + 50).rev() {
        node = SceneNode {
            id: format!("deep:{i}"),
            children: Some(vec![node]),
            ..Default::default()
        };
    }

    let serialized = serialize_node(&node);
    assert_eq!(serialized.subtree_len(), MAX_DEPTH);
}

#[rstest]
#[case(NodeKind::Frame(FrameNode::default()), "FRAME")]
#[case(NodeKind::Group, "GROUP")]
#[case(NodeKind::Text(TextNode::default()), "TEXT")]
#[case(NodeKind::Rectangle(RectangleNode::default()), "RECTANGLE")]
#[case(NodeKind::Vector, "VECTOR")]
#[case(NodeKind::Component(ComponentNode::default()), "COMPONENT")]
#[case(NodeKind::ComponentSet, "COMPONENT_SET")]
#[case(NodeKind::Instance(InstanceNode::default()), "INSTANCE")]
#[case(NodeKind::Other("STICKY".to_string()), "STICKY")]
fn test_type_field_spelling(#[case] kind: NodeKind, #[case] expected: &str) {
    let node = SceneNode {
        kind,
        ..Default::default()
    };
    assert_eq!(serialize_node(&node).node_type, expected);
}
