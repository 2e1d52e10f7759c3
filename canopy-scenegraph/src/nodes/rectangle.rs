use serde::{Deserialize, Serialize};

use crate::nodes::node::NodeKind;
use crate::value::{MaybeMixed, Paint};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleNode {
    pub corner_radius: MaybeMixed<f64>,
    pub fills: MaybeMixed<Vec<Paint>>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: MaybeMixed<f64>,
}

impl From<RectangleNode> for NodeKind {
    fn from(rect: RectangleNode) -> Self {
        NodeKind::Rectangle(rect)
    }
}
