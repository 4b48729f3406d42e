//! Closed token tables of the header schema.
//!
//! Every enumeration here maps one-to-one onto a fixed, case-sensitive set of
//! XML tokens. Both directions are exhaustive matches: adding a variant
//! without extending the table is a compile error, and an unknown token is a
//! parse error carrying the offending text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// k-space sampling pattern family of an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trajectory {
    Cartesian,
    Epi,
    Radial,
    GoldenAngle,
    Spiral,
    Other,
}

impl Trajectory {
    /// Returns the token used in the XML header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trajectory::Cartesian => "cartesian",
            Trajectory::Epi => "epi",
            Trajectory::Radial => "radial",
            Trajectory::GoldenAngle => "goldenangle",
            Trajectory::Spiral => "spiral",
            Trajectory::Other => "other",
        }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Trajectory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cartesian" => Ok(Trajectory::Cartesian),
            "epi" => Ok(Trajectory::Epi),
            "radial" => Ok(Trajectory::Radial),
            "goldenangle" => Ok(Trajectory::GoldenAngle),
            "spiral" => Ok(Trajectory::Spiral),
            "other" => Ok(Trajectory::Other),
            _ => Err(format!("Unknown trajectory type: {s}")),
        }
    }
}

/// Kind of physiological signal recorded alongside the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveformType {
    Ecg,
    Pulse,
    Respiratory,
    Trigger,
    GradientWaveform,
    Other,
}

impl WaveformType {
    /// Returns the token used in the XML header.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveformType::Ecg => "ecg",
            WaveformType::Pulse => "pulse",
            WaveformType::Respiratory => "respiratory",
            WaveformType::Trigger => "trigger",
            WaveformType::GradientWaveform => "gradientwaveform",
            WaveformType::Other => "other",
        }
    }
}

impl fmt::Display for WaveformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WaveformType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecg" => Ok(WaveformType::Ecg),
            "pulse" => Ok(WaveformType::Pulse),
            "respiratory" => Ok(WaveformType::Respiratory),
            "trigger" => Ok(WaveformType::Trigger),
            "gradientwaveform" => Ok(WaveformType::GradientWaveform),
            "other" => Ok(WaveformType::Other),
            _ => Err(format!("Unknown waveform type: {s}")),
        }
    }
}

/// Calibration strategy of a multiband acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultibandCalibration {
    Separable2D,
    Full3D,
    Other,
}

impl MultibandCalibration {
    /// Returns the token used in the XML header.
    pub fn as_str(&self) -> &'static str {
        match self {
            MultibandCalibration::Separable2D => "separable2D",
            MultibandCalibration::Full3D => "full3D",
            MultibandCalibration::Other => "other",
        }
    }
}

impl fmt::Display for MultibandCalibration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MultibandCalibration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "separable2D" => Ok(MultibandCalibration::Separable2D),
            "full3D" => Ok(MultibandCalibration::Full3D),
            "other" => Ok(MultibandCalibration::Other),
            _ => Err(format!("Unknown multiband calibration type: {s}")),
        }
    }
}

/// Acquisition dimension along which diffusion weighting varies.
///
/// Besides the named loop counters the schema reserves eight user slots,
/// mirroring the `user_0` .. `user_7` encoding-limit slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffusionDimension {
    Average,
    Contrast,
    Phase,
    Repetition,
    Set,
    Segment,
    User0,
    User1,
    User2,
    User3,
    User4,
    User5,
    User6,
    User7,
}

impl DiffusionDimension {
    /// Returns the token used in the XML header.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffusionDimension::Average => "average",
            DiffusionDimension::Contrast => "contrast",
            DiffusionDimension::Phase => "phase",
            DiffusionDimension::Repetition => "repetition",
            DiffusionDimension::Set => "set",
            DiffusionDimension::Segment => "segment",
            DiffusionDimension::User0 => "user_0",
            DiffusionDimension::User1 => "user_1",
            DiffusionDimension::User2 => "user_2",
            DiffusionDimension::User3 => "user_3",
            DiffusionDimension::User4 => "user_4",
            DiffusionDimension::User5 => "user_5",
            DiffusionDimension::User6 => "user_6",
            DiffusionDimension::User7 => "user_7",
        }
    }
}

impl fmt::Display for DiffusionDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiffusionDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average" => Ok(DiffusionDimension::Average),
            "contrast" => Ok(DiffusionDimension::Contrast),
            "phase" => Ok(DiffusionDimension::Phase),
            "repetition" => Ok(DiffusionDimension::Repetition),
            "set" => Ok(DiffusionDimension::Set),
            "segment" => Ok(DiffusionDimension::Segment),
            "user_0" => Ok(DiffusionDimension::User0),
            "user_1" => Ok(DiffusionDimension::User1),
            "user_2" => Ok(DiffusionDimension::User2),
            "user_3" => Ok(DiffusionDimension::User3),
            "user_4" => Ok(DiffusionDimension::User4),
            "user_5" => Ok(DiffusionDimension::User5),
            "user_6" => Ok(DiffusionDimension::User6),
            "user_7" => Ok(DiffusionDimension::User7),
            _ => Err(format!("Unknown diffusion dimension: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trajectory_tokens_round_trip() {
        for trajectory in [
            Trajectory::Cartesian,
            Trajectory::Epi,
            Trajectory::Radial,
            Trajectory::GoldenAngle,
            Trajectory::Spiral,
            Trajectory::Other,
        ] {
            assert_eq!(trajectory.as_str().parse::<Trajectory>(), Ok(trajectory));
        }
    }

    #[test]
    fn trajectory_tokens_are_case_sensitive() {
        assert!("Cartesian".parse::<Trajectory>().is_err());
        assert!("zigzag".parse::<Trajectory>().is_err());
    }

    #[test]
    fn waveform_tokens_round_trip() {
        for waveform in [
            WaveformType::Ecg,
            WaveformType::Pulse,
            WaveformType::Respiratory,
            WaveformType::Trigger,
            WaveformType::GradientWaveform,
            WaveformType::Other,
        ] {
            assert_eq!(waveform.as_str().parse::<WaveformType>(), Ok(waveform));
        }
    }

    #[test]
    fn multiband_calibration_tokens_round_trip() {
        for calibration in [
            MultibandCalibration::Separable2D,
            MultibandCalibration::Full3D,
            MultibandCalibration::Other,
        ] {
            assert_eq!(
                calibration.as_str().parse::<MultibandCalibration>(),
                Ok(calibration)
            );
        }
        assert!("separable2d".parse::<MultibandCalibration>().is_err());
    }

    #[test]
    fn diffusion_dimension_user_slots() {
        assert_eq!(
            "user_0".parse::<DiffusionDimension>(),
            Ok(DiffusionDimension::User0)
        );
        assert_eq!(
            "user_7".parse::<DiffusionDimension>(),
            Ok(DiffusionDimension::User7)
        );
        assert!("user_8".parse::<DiffusionDimension>().is_err());
    }
}
