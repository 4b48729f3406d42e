//! Auxiliary waveform channel descriptions.

use serde::{Deserialize, Serialize};

use crate::enums::WaveformType;
use crate::params::UserParameters;

/// Metadata for one physiological signal channel recorded alongside the
/// scan. The header keeps these in document order; any number may appear,
/// including none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformInformation {
    /// Mandatory, non-empty channel name.
    pub waveform_name: String,
    pub waveform_type: WaveformType,
    pub user_parameters: Option<UserParameters>,
}
