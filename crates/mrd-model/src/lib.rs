//! In-memory model of the ISMRMRD acquisition header.
//!
//! The header describes one MR acquisition session: experimental conditions,
//! one or more encoding spaces, and a set of optional metadata sections
//! (subject, study, measurement, acquisition system, sequence parameters,
//! user parameters, waveforms). The tree mirrors the `ismrmrdHeader` XML
//! schema one record per complex element.
//!
//! All records are plain owned data with derived structural equality, so two
//! headers compare equal exactly when every field - including the presence or
//! absence of each optional section and the order of every repeated element -
//! matches.

pub mod encoding;
pub mod enums;
pub mod header;
pub mod info;
pub mod params;
pub mod sequence;
pub mod waveform;

pub use encoding::{
    AccelerationFactor, Encoding, EncodingLimits, EncodingSpace, FieldOfViewMm, Limit, MatrixSize,
    Multiband, MultibandSpacing, ParallelImaging, TrajectoryDescription,
};
pub use enums::{DiffusionDimension, MultibandCalibration, Trajectory, WaveformType};
pub use header::{ExperimentalConditions, Header};
pub use info::{
    AcquisitionSystemInformation, CoilLabel, MeasurementDependency, MeasurementInformation,
    ReferencedImageSequence, StudyInformation, SubjectInformation, ThreeDimensionalFloat,
};
pub use params::{UserParameterDouble, UserParameterLong, UserParameterString, UserParameters};
pub use sequence::{Diffusion, GradientDirection, SequenceParameters};
pub use waveform::WaveformInformation;

/// Number of user-defined encoding-limit slots (`user_0` .. `user_7` on the
/// wire).
pub const USER_LIMIT_COUNT: usize = 8;
