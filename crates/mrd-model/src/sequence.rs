//! Sequence timing and diffusion parameters.

use serde::{Deserialize, Serialize};

use crate::enums::DiffusionDimension;

/// Diffusion gradient direction in patient coordinates
/// (right-left, anterior-posterior, foot-head).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientDirection {
    pub rl: f32,
    pub ap: f32,
    pub fh: f32,
}

/// One diffusion weighting: b-value plus gradient direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diffusion {
    pub bvalue: f32,
    pub gradient_direction: GradientDirection,
}

/// Timing parameters of the pulse sequence.
///
/// The float sequences (TR, TE, TI, flip angle, echo spacing) are
/// independently optional; a present sequence is never empty - "no values"
/// is represented as `None`, and that convention also applies to the
/// `diffusion` list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SequenceParameters {
    pub tr: Option<Vec<f32>>,
    pub te: Option<Vec<f32>>,
    pub ti: Option<Vec<f32>>,
    pub flip_angle_deg: Option<Vec<f32>>,
    pub sequence_type: Option<String>,
    pub echo_spacing: Option<Vec<f32>>,
    pub diffusion_dimension: Option<DiffusionDimension>,
    pub diffusion: Option<Vec<Diffusion>>,
    pub diffusion_scheme: Option<String>,
}
