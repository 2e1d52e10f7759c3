use canopy_export::serialize::snapshot_json;
use canopy_scenegraph::nodes::frame::{AutoLayout, FrameNode, LayoutMode, SizingMode};
use canopy_scenegraph::nodes::node::{NodeKind, SceneNode};
use canopy_scenegraph::nodes::rectangle::RectangleNode;
use canopy_scenegraph::nodes::text::{TextAlignHorizontal, TextNode};
use canopy_scenegraph::selection::Selection;
use canopy_scenegraph::value::{MaybeMixed, Paint};

/// Builds the kind of selection a host would hand over and prints the
/// snapshot message, standing in for the plugin boundary.
fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let title = SceneNode {
        id: "1:2".to_string(),
        name: "Title".to_string(),
        x: 24.0,
        y: 24.0,
        width: 320.0,
        height: 32.0,
        kind: NodeKind::Text(TextNode {
            characters: "Weekly sync".to_string(),
            font_size: MaybeMixed::Uniform(24.0),
            fills: MaybeMixed::Uniform(vec![Paint::Color([0.1, 0.1, 0.1, 1.0])]),
            text_align_horizontal: TextAlignHorizontal::Center,
            ..Default::default()
        }),
        ..Default::default()
    };

    let backdrop = SceneNode {
        id: "1:3".to_string(),
        name: "Backdrop".to_string(),
        width: 368.0,
        height: 80.0,
        kind: NodeKind::Rectangle(RectangleNode {
            corner_radius: MaybeMixed::Uniform(8.0),
            // Dragged in from a multi-style paste, so the host reports the
            // fills as mixed
            fills: MaybeMixed::Mixed,
            strokes: vec![Paint::Color([0.0, 0.0, 0.0, 1.0])],
            stroke_weight: MaybeMixed::Uniform(1.0),
        }),
        ..Default::default()
    };

    let card = SceneNode {
        id: "1:1".to_string(),
        name: "Card".to_string(),
        width: 400.0,
        height: 120.0,
        kind: NodeKind::Frame(FrameNode {
            auto_layout: Some(AutoLayout {
                layout_mode: LayoutMode::Vertical,
                primary_axis_sizing_mode: SizingMode::Auto,
                counter_axis_sizing_mode: SizingMode::Fixed,
                padding_left: 16.0,
                padding_right: 16.0,
                padding_top: 16.0,
                padding_bottom: 16.0,
            }),
        }),
        children: Some(vec![backdrop, title]),
        ..Default::default()
    };

    let selection = Selection {
        page_name: "Page 1".to_string(),
        page_id: "0:1".to_string(),
        nodes: vec![card],
    };

    match snapshot_json(&selection) {
        Ok(message) => println!("{message}"),
        Err(err) => eprintln!("snapshot failed: {err}"),
    }
}
