use serde::{Deserialize, Serialize};

/// An attribute value that is either uniform across a node or inconsistent
/// because the host collapsed several styled ranges into one node (a text
/// run with two font sizes, a shape with per-segment strokes).
///
/// `Mixed` is the host's sentinel made explicit. It never appears in a
/// serialized document; consumers drop the field instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeMixed<T> {
    Uniform(T),
    Mixed,
}

impl<T> MaybeMixed<T> {
    pub fn uniform(&self) -> Option<&T> {
        match self {
            MaybeMixed::Uniform(value) => Some(value),
            MaybeMixed::Mixed => None,
        }
    }

    pub fn into_uniform(self) -> Option<T> {
        match self {
            MaybeMixed::Uniform(value) => Some(value),
            MaybeMixed::Mixed => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, MaybeMixed::Mixed)
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> MaybeMixed<U> {
        match self {
            MaybeMixed::Uniform(value) => MaybeMixed::Uniform(f(value)),
            MaybeMixed::Mixed => MaybeMixed::Mixed,
        }
    }
}

impl<T> From<T> for MaybeMixed<T> {
    fn from(value: T) -> Self {
        MaybeMixed::Uniform(value)
    }
}

impl<T: Default> Default for MaybeMixed<T> {
    fn default() -> Self {
        MaybeMixed::Uniform(T::default())
    }
}

/// A single fill or stroke paint. Colors are straight RGBA in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Color([f32; 4]),
    Gradient(Gradient),
}

impl Paint {
    pub fn transparent() -> Self {
        Paint::Color([0.0, 0.0, 0.0, 0.0])
    }

    pub fn color_or_transparent(&self) -> [f32; 4] {
        match self {
            Paint::Color(c) => *c,
            _ => [0.0, 0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gradient {
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Gradient {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear(grad) => grad.stops.as_slice(),
            Gradient::Radial(grad) => grad.stops.as_slice(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub r0: f32,
    pub r1: f32,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: [f32; 4],
}
