use serde::{Deserialize, Serialize};

use crate::nodes::component::{ComponentNode, InstanceNode};
use crate::nodes::frame::{AutoLayout, FrameNode};
use crate::nodes::rectangle::RectangleNode;
use crate::nodes::text::TextNode;

/// One node of the host's scene graph, read-only for this crate's consumers.
///
/// Every kind shares the identity and geometry fields; `kind` carries the
/// discriminant plus whatever extra attributes that kind exposes. `children`
/// is a capability of its own: `None` means the node cannot hold children at
/// all, while `Some(vec![])` is a childless container. The host may attach
/// children to kinds this crate does not otherwise model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub visible: bool,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SceneNode>>,
}

impl SceneNode {
    /// The host's spelling of this node's type, e.g. `"COMPONENT_SET"`.
    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        self.kind.auto_layout()
    }

    pub fn children(&self) -> &[SceneNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(SceneNode::subtree_len)
            .sum::<usize>()
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            id: "".to_string(),
            name: "".to_string(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            visible: true,
            kind: NodeKind::Frame(FrameNode::default()),
            children: None,
        }
    }
}

/// The open set of node kinds. `Other` carries the raw type name of any kind
/// the model does not enumerate; such nodes still expose the shared fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Frame(FrameNode),
    Group,
    Text(TextNode),
    Rectangle(RectangleNode),
    Vector,
    Component(ComponentNode),
    ComponentSet,
    Instance(InstanceNode),
    Other(String),
}

impl NodeKind {
    pub fn type_name(&self) -> &str {
        match self {
            NodeKind::Frame(_) => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Text(_) => "TEXT",
            NodeKind::Rectangle(_) => "RECTANGLE",
            NodeKind::Vector => "VECTOR",
            NodeKind::Component(_) => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Instance(_) => "INSTANCE",
            NodeKind::Other(raw) => raw.as_str(),
        }
    }

    /// The auto-layout capability, for the frame-like kinds that can carry it.
    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        match self {
            NodeKind::Frame(frame) => frame.auto_layout.as_ref(),
            NodeKind::Component(component) => component.auto_layout.as_ref(),
            NodeKind::Instance(instance) => instance.auto_layout.as_ref(),
            _ => None,
        }
    }
}
