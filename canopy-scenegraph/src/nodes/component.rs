use serde::{Deserialize, Serialize};

use crate::nodes::frame::AutoLayout;
use crate::nodes::node::NodeKind;

/// A reusable component definition. Its published identity is the node's own
/// id and name; the payload only carries the container capabilities.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub auto_layout: Option<AutoLayout>,
}

/// An instance of a component placed on the canvas.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceNode {
    pub auto_layout: Option<AutoLayout>,
}

impl From<ComponentNode> for NodeKind {
    fn from(component: ComponentNode) -> Self {
        NodeKind::Component(component)
    }
}

impl From<InstanceNode> for NodeKind {
    fn from(instance: InstanceNode) -> Self {
        NodeKind::Instance(instance)
    }
}
