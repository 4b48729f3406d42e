//! Subject, study, measurement and acquisition-system sections.
//!
//! All four sections are optional at the header level. Within them almost
//! every field is optional too; the exceptions are noted on the fields.

use serde::{Deserialize, Serialize};

/// A 3D offset in millimeters, e.g. the relative table position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreeDimensionalFloat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Demographics of the scanned subject.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubjectInformation {
    pub patient_name: Option<String>,
    pub patient_weight_kg: Option<f32>,
    pub patient_height_m: Option<f32>,
    pub patient_id: Option<String>,
    pub patient_birthdate: Option<String>,
    pub patient_gender: Option<String>,
}

/// DICOM-style study metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudyInformation {
    pub study_date: Option<String>,
    pub study_time: Option<String>,
    pub study_id: Option<String>,
    pub accession_number: Option<i64>,
    pub referring_physician_name: Option<String>,
    pub study_description: Option<String>,
    pub study_instance_uid: Option<String>,
    pub body_part_examined: Option<String>,
}

/// Reference to a measurement this one depends on, e.g. a noise scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDependency {
    pub dependency_type: String,
    pub measurement_id: String,
}

/// Reference to a previously reconstructed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencedImageSequence {
    pub referenced_sop_instance_uid: String,
}

/// Metadata of the measurement itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInformation {
    pub measurement_id: Option<String>,
    pub series_date: Option<String>,
    pub series_time: Option<String>,
    /// Mandatory within a present section; must be non-empty.
    pub patient_position: String,
    pub relative_table_position: Option<ThreeDimensionalFloat>,
    pub initial_series_number: Option<i64>,
    pub protocol_name: Option<String>,
    pub sequence_name: Option<String>,
    pub series_description: Option<String>,
    pub measurement_dependency: Vec<MeasurementDependency>,
    pub series_instance_uid_root: Option<String>,
    pub frame_of_reference_uid: Option<String>,
    pub referenced_image_sequence: Vec<ReferencedImageSequence>,
}

/// Label of one receive coil element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoilLabel {
    pub coil_number: u16,
    pub coil_name: String,
}

/// Scanner hardware description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AcquisitionSystemInformation {
    pub system_vendor: Option<String>,
    pub system_model: Option<String>,
    pub system_field_strength_t: Option<f32>,
    pub relative_receiver_noise_bandwidth: Option<f32>,
    pub receiver_channels: Option<u16>,
    pub coil_label: Vec<CoilLabel>,
    pub institution_name: Option<String>,
    pub station_name: Option<String>,
    pub device_id: Option<String>,
    pub device_serial_number: Option<String>,
}
