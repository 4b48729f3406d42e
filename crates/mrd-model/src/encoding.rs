//! Encoding spaces, limits and acceleration metadata.
//!
//! Each `encoding` element of the header describes one acquisition pass: the
//! acquired k-space grid, the reconstructed image grid, the sampled index
//! ranges per dimension, and the sampling trajectory. A header carries an
//! ordered, non-empty sequence of these.

use serde::{Deserialize, Serialize};

use crate::enums::{MultibandCalibration, Trajectory};
use crate::params::{UserParameterDouble, UserParameterLong, UserParameterString};
use crate::USER_LIMIT_COUNT;

/// Grid dimensions of an encoding space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSize {
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

/// Physical extent of an encoding space in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfViewMm {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 3D grid description, used both for the acquired k-space and the
/// reconstructed image space. Both members are mandatory whenever the space
/// itself is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodingSpace {
    pub matrix_size: MatrixSize,
    pub field_of_view_mm: FieldOfViewMm,
}

/// Sampled index range of one encoding dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub minimum: u16,
    pub maximum: u16,
    pub center: u16,
}

/// Per-dimension sampling limits of an encoding.
///
/// The container itself is mandatory inside an `encoding`; every slot is
/// independently optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncodingLimits {
    pub kspace_encoding_step_0: Option<Limit>,
    pub kspace_encoding_step_1: Option<Limit>,
    pub kspace_encoding_step_2: Option<Limit>,
    pub average: Option<Limit>,
    pub slice: Option<Limit>,
    pub contrast: Option<Limit>,
    pub phase: Option<Limit>,
    pub repetition: Option<Limit>,
    pub set: Option<Limit>,
    pub segment: Option<Limit>,
    /// User slots, serialized as `user_0` .. `user_7`.
    pub user: [Option<Limit>; USER_LIMIT_COUNT],
}

/// Free-form description of a non-standard trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryDescription {
    pub identifier: String,
    pub user_parameter_long: Vec<UserParameterLong>,
    pub user_parameter_double: Vec<UserParameterDouble>,
    pub user_parameter_string: Vec<UserParameterString>,
    pub comment: Option<String>,
}

/// Undersampling factors along the two phase-encoding dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerationFactor {
    pub kspace_encoding_step_1: u16,
    pub kspace_encoding_step_2: u16,
}

/// One group of simultaneously excited slice offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultibandSpacing {
    pub d_z: Vec<f32>,
}

/// Simultaneous multi-slice acquisition metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multiband {
    pub spacing: Vec<MultibandSpacing>,
    pub delta_kz: f32,
    pub multiband_factor: u32,
    pub calibration: MultibandCalibration,
    pub calibration_encoding: u32,
}

/// Parallel-imaging acceleration metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelImaging {
    pub acceleration_factor: AccelerationFactor,
    pub calibration_mode: Option<String>,
    pub interleaving_dimension: Option<String>,
    pub multiband: Option<Multiband>,
}

/// One acquisition pass of the measurement.
///
/// Multiple encodings correspond to multiple passes; their order in the
/// header is semantically significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    pub encoded_space: EncodingSpace,
    pub recon_space: EncodingSpace,
    pub encoding_limits: EncodingLimits,
    pub trajectory: Trajectory,
    pub trajectory_description: Option<TrajectoryDescription>,
    pub parallel_imaging: Option<ParallelImaging>,
    pub echo_train_length: Option<i64>,
}
