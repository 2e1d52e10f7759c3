use serde::{Deserialize, Serialize};
use strum::VariantNames;

use crate::nodes::node::NodeKind;
use crate::value::{MaybeMixed, Paint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub characters: String,
    pub font_size: MaybeMixed<f64>,
    pub font_name: MaybeMixed<FontName>,
    pub fills: MaybeMixed<Vec<Paint>>,
    pub text_align_horizontal: TextAlignHorizontal,
    pub text_align_vertical: TextAlignVertical,
}

impl Default for TextNode {
    fn default() -> Self {
        Self {
            characters: "".to_string(),
            font_size: MaybeMixed::Uniform(12.0),
            font_name: MaybeMixed::Uniform(FontName::default()),
            fills: MaybeMixed::Uniform(vec![]),
            text_align_horizontal: Default::default(),
            text_align_vertical: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl Default for FontName {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            style: "Regular".to_string(),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

impl From<TextNode> for NodeKind {
    fn from(text: TextNode) -> Self {
        NodeKind::Text(text)
    }
}
