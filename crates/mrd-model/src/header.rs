//! The top-level header record.

use serde::{Deserialize, Serialize};

use crate::encoding::Encoding;
use crate::info::{
    AcquisitionSystemInformation, MeasurementInformation, StudyInformation, SubjectInformation,
};
use crate::params::UserParameters;
use crate::sequence::SequenceParameters;
use crate::waveform::WaveformInformation;

/// Static field and frequency conditions of the experiment. The only
/// section of the header that is mandatory besides the encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentalConditions {
    pub h1_resonance_frequency_hz: i64,
}

/// The decoded metadata record for one MR acquisition session.
///
/// `experimental_conditions` and a non-empty `encoding` sequence are
/// mandatory; every other section is optional. Optional sections distinguish
/// "absent" from "present with default values", and that distinction together
/// with the order of all repeated elements survives a decode/encode round
/// trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Declared schema revision. Recorded as-is when reading; checked
    /// against the codec's own revision when writing.
    pub version: Option<i64>,
    pub subject_information: Option<SubjectInformation>,
    pub study_information: Option<StudyInformation>,
    pub measurement_information: Option<MeasurementInformation>,
    pub acquisition_system_information: Option<AcquisitionSystemInformation>,
    pub experimental_conditions: ExperimentalConditions,
    pub encoding: Vec<Encoding>,
    pub sequence_parameters: Option<SequenceParameters>,
    pub user_parameters: Option<UserParameters>,
    pub waveform_information: Vec<WaveformInformation>,
}
