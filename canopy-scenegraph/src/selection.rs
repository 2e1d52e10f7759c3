use serde::{Deserialize, Serialize};

use crate::nodes::node::SceneNode;

/// The host's current selection: an ordered forest of root nodes plus the
/// identity of the page that owns them.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub page_name: String,
    pub page_id: String,
    pub nodes: Vec<SceneNode>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total node count across all roots, at every depth.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(SceneNode::subtree_len).sum()
    }
}
