//! XML header writer.
//!
//! Mirrors the reader's schema shape exactly: one element per present
//! optional field in fixed schema order, one sibling element per sequence
//! item in list order, nothing at all for absent optional fields. The same
//! header always produces the same document.

use std::io::Write;

use mrd_model::{
    AcquisitionSystemInformation, Encoding, EncodingLimits, EncodingSpace, ExperimentalConditions,
    Header, Limit, MeasurementInformation, Multiband, ParallelImaging, SequenceParameters,
    StudyInformation, SubjectInformation, ThreeDimensionalFloat, TrajectoryDescription,
    UserParameterDouble, UserParameterLong, UserParameterString, UserParameters,
    WaveformInformation,
};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::common::{ISMRMRD_NS, ROOT_ELEMENT, SCHEMA_LOCATION, SCHEMA_VERSION, XSI_NS, XS_NS};
use crate::error::{HeaderError, Result};
use crate::scalar::XmlScalar;

/// Serialize a [`Header`] into XML text.
///
/// Fails if the encoding sequence is empty, or if the header declares a
/// schema version other than [`SCHEMA_VERSION`].
pub fn write_header(header: &Header) -> Result<String> {
    if header.encoding.is_empty() {
        return Err(HeaderError::EmptyEncoding);
    }
    if let Some(version) = header.version {
        if version != SCHEMA_VERSION {
            return Err(HeaderError::VersionMismatch {
                found: version,
                expected: SCHEMA_VERSION,
            });
        }
    }

    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new(ROOT_ELEMENT);
    root.push_attribute(("xmlns", ISMRMRD_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    root.push_attribute(("xmlns:xs", XS_NS));
    root.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    xml.write_event(Event::Start(root))?;

    write_optional_value(&mut xml, "version", &header.version)?;

    if let Some(subject) = &header.subject_information {
        write_subject_information(&mut xml, subject)?;
    }
    if let Some(study) = &header.study_information {
        write_study_information(&mut xml, study)?;
    }
    if let Some(measurement) = &header.measurement_information {
        write_measurement_information(&mut xml, measurement)?;
    }
    if let Some(system) = &header.acquisition_system_information {
        write_acquisition_system_information(&mut xml, system)?;
    }

    write_experimental_conditions(&mut xml, &header.experimental_conditions)?;

    for encoding in &header.encoding {
        write_encoding(&mut xml, encoding)?;
    }

    if let Some(parameters) = &header.sequence_parameters {
        write_sequence_parameters(&mut xml, parameters)?;
    }
    if let Some(parameters) = &header.user_parameters {
        write_user_parameters(&mut xml, "userParameters", parameters)?;
    }
    for waveform in &header.waveform_information {
        write_waveform_information(&mut xml, waveform)?;
    }

    xml.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    Ok(String::from_utf8(xml.into_inner())?)
}

// Element helpers

fn start<W: Write>(xml: &mut Writer<W>, name: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end<W: Write>(xml: &mut Writer<W>, name: &str) -> Result<()> {
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_value<W: Write, T: XmlScalar>(xml: &mut Writer<W>, name: &str, value: &T) -> Result<()> {
    write_text_element(xml, name, &value.to_text())
}

fn write_optional_value<W: Write, T: XmlScalar>(
    xml: &mut Writer<W>,
    name: &str,
    value: &Option<T>,
) -> Result<()> {
    if let Some(value) = value {
        write_value(xml, name, value)?;
    }
    Ok(())
}

/// One sibling element per value, in list order; nothing when absent.
fn write_float_values<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    values: &Option<Vec<f32>>,
) -> Result<()> {
    if let Some(values) = values {
        for value in values {
            write_value(xml, name, value)?;
        }
    }
    Ok(())
}

// Information sections

fn write_subject_information<W: Write>(
    xml: &mut Writer<W>,
    subject: &SubjectInformation,
) -> Result<()> {
    start(xml, "subjectInformation")?;
    write_optional_value(xml, "patientName", &subject.patient_name)?;
    write_optional_value(xml, "patientWeight_kg", &subject.patient_weight_kg)?;
    write_optional_value(xml, "patientHeight_m", &subject.patient_height_m)?;
    write_optional_value(xml, "patientID", &subject.patient_id)?;
    write_optional_value(xml, "patientBirthdate", &subject.patient_birthdate)?;
    write_optional_value(xml, "patientGender", &subject.patient_gender)?;
    end(xml, "subjectInformation")
}

fn write_study_information<W: Write>(xml: &mut Writer<W>, study: &StudyInformation) -> Result<()> {
    start(xml, "studyInformation")?;
    write_optional_value(xml, "studyDate", &study.study_date)?;
    write_optional_value(xml, "studyTime", &study.study_time)?;
    write_optional_value(xml, "studyID", &study.study_id)?;
    write_optional_value(xml, "accessionNumber", &study.accession_number)?;
    write_optional_value(xml, "referringPhysicianName", &study.referring_physician_name)?;
    write_optional_value(xml, "studyDescription", &study.study_description)?;
    write_optional_value(xml, "studyInstanceUID", &study.study_instance_uid)?;
    write_optional_value(xml, "bodyPartExamined", &study.body_part_examined)?;
    end(xml, "studyInformation")
}

fn write_measurement_information<W: Write>(
    xml: &mut Writer<W>,
    measurement: &MeasurementInformation,
) -> Result<()> {
    start(xml, "measurementInformation")?;
    write_optional_value(xml, "measurementID", &measurement.measurement_id)?;
    write_optional_value(xml, "seriesDate", &measurement.series_date)?;
    write_optional_value(xml, "seriesTime", &measurement.series_time)?;
    write_text_element(xml, "patientPosition", &measurement.patient_position)?;
    write_optional_three_dimensional(
        xml,
        "relativeTablePosition",
        &measurement.relative_table_position,
    )?;
    write_optional_value(xml, "initialSeriesNumber", &measurement.initial_series_number)?;
    write_optional_value(xml, "protocolName", &measurement.protocol_name)?;
    write_optional_value(xml, "sequenceName", &measurement.sequence_name)?;
    write_optional_value(xml, "seriesDescription", &measurement.series_description)?;

    for dependency in &measurement.measurement_dependency {
        start(xml, "measurementDependency")?;
        write_text_element(xml, "dependencyType", &dependency.dependency_type)?;
        write_text_element(xml, "measurementID", &dependency.measurement_id)?;
        end(xml, "measurementDependency")?;
    }

    write_optional_value(
        xml,
        "seriesInstanceUIDRoot",
        &measurement.series_instance_uid_root,
    )?;
    write_optional_value(xml, "frameOfReferenceUID", &measurement.frame_of_reference_uid)?;

    if !measurement.referenced_image_sequence.is_empty() {
        start(xml, "referencedImageSequence")?;
        for image in &measurement.referenced_image_sequence {
            write_text_element(
                xml,
                "referencedSOPInstanceUID",
                &image.referenced_sop_instance_uid,
            )?;
        }
        end(xml, "referencedImageSequence")?;
    }

    end(xml, "measurementInformation")
}

fn write_acquisition_system_information<W: Write>(
    xml: &mut Writer<W>,
    system: &AcquisitionSystemInformation,
) -> Result<()> {
    start(xml, "acquisitionSystemInformation")?;
    write_optional_value(xml, "systemVendor", &system.system_vendor)?;
    write_optional_value(xml, "systemModel", &system.system_model)?;
    write_optional_value(xml, "systemFieldStrength_T", &system.system_field_strength_t)?;
    write_optional_value(
        xml,
        "relativeReceiverNoiseBandwidth",
        &system.relative_receiver_noise_bandwidth,
    )?;
    write_optional_value(xml, "receiverChannels", &system.receiver_channels)?;
    for label in &system.coil_label {
        start(xml, "coilLabel")?;
        write_value(xml, "coilNumber", &label.coil_number)?;
        write_text_element(xml, "coilName", &label.coil_name)?;
        end(xml, "coilLabel")?;
    }
    write_optional_value(xml, "institutionName", &system.institution_name)?;
    write_optional_value(xml, "stationName", &system.station_name)?;
    write_optional_value(xml, "deviceID", &system.device_id)?;
    write_optional_value(xml, "deviceSerialNumber", &system.device_serial_number)?;
    end(xml, "acquisitionSystemInformation")
}

fn write_experimental_conditions<W: Write>(
    xml: &mut Writer<W>,
    conditions: &ExperimentalConditions,
) -> Result<()> {
    start(xml, "experimentalConditions")?;
    write_value(
        xml,
        "H1resonanceFrequency_Hz",
        &conditions.h1_resonance_frequency_hz,
    )?;
    end(xml, "experimentalConditions")
}

fn write_optional_three_dimensional<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    value: &Option<ThreeDimensionalFloat>,
) -> Result<()> {
    if let Some(value) = value {
        start(xml, name)?;
        write_value(xml, "x", &value.x)?;
        write_value(xml, "y", &value.y)?;
        write_value(xml, "z", &value.z)?;
        end(xml, name)?;
    }
    Ok(())
}

// Encoding section

fn write_encoding<W: Write>(xml: &mut Writer<W>, encoding: &Encoding) -> Result<()> {
    start(xml, "encoding")?;
    write_encoding_space(xml, "encodedSpace", &encoding.encoded_space)?;
    write_encoding_space(xml, "reconSpace", &encoding.recon_space)?;
    write_encoding_limits(xml, &encoding.encoding_limits)?;
    write_value(xml, "trajectory", &encoding.trajectory)?;
    if let Some(description) = &encoding.trajectory_description {
        write_trajectory_description(xml, description)?;
    }
    if let Some(parallel) = &encoding.parallel_imaging {
        write_parallel_imaging(xml, parallel)?;
    }
    write_optional_value(xml, "echoTrainLength", &encoding.echo_train_length)?;
    end(xml, "encoding")
}

fn write_encoding_space<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    space: &EncodingSpace,
) -> Result<()> {
    start(xml, name)?;
    start(xml, "matrixSize")?;
    write_value(xml, "x", &space.matrix_size.x)?;
    write_value(xml, "y", &space.matrix_size.y)?;
    write_value(xml, "z", &space.matrix_size.z)?;
    end(xml, "matrixSize")?;
    start(xml, "fieldOfView_mm")?;
    write_value(xml, "x", &space.field_of_view_mm.x)?;
    write_value(xml, "y", &space.field_of_view_mm.y)?;
    write_value(xml, "z", &space.field_of_view_mm.z)?;
    end(xml, "fieldOfView_mm")?;
    end(xml, name)
}

fn write_encoding_limits<W: Write>(xml: &mut Writer<W>, limits: &EncodingLimits) -> Result<()> {
    start(xml, "encodingLimits")?;
    write_limit(xml, "kspace_encoding_step_0", &limits.kspace_encoding_step_0)?;
    write_limit(xml, "kspace_encoding_step_1", &limits.kspace_encoding_step_1)?;
    write_limit(xml, "kspace_encoding_step_2", &limits.kspace_encoding_step_2)?;
    write_limit(xml, "average", &limits.average)?;
    write_limit(xml, "slice", &limits.slice)?;
    write_limit(xml, "contrast", &limits.contrast)?;
    write_limit(xml, "phase", &limits.phase)?;
    write_limit(xml, "repetition", &limits.repetition)?;
    write_limit(xml, "set", &limits.set)?;
    write_limit(xml, "segment", &limits.segment)?;
    for (slot, limit) in limits.user.iter().enumerate() {
        write_limit(xml, &format!("user_{slot}"), limit)?;
    }
    end(xml, "encodingLimits")
}

fn write_limit<W: Write>(xml: &mut Writer<W>, name: &str, limit: &Option<Limit>) -> Result<()> {
    if let Some(limit) = limit {
        start(xml, name)?;
        write_value(xml, "minimum", &limit.minimum)?;
        write_value(xml, "maximum", &limit.maximum)?;
        write_value(xml, "center", &limit.center)?;
        end(xml, name)?;
    }
    Ok(())
}

fn write_trajectory_description<W: Write>(
    xml: &mut Writer<W>,
    description: &TrajectoryDescription,
) -> Result<()> {
    start(xml, "trajectoryDescription")?;
    write_text_element(xml, "identifier", &description.identifier)?;
    write_long_parameters(xml, "userParameterLong", &description.user_parameter_long)?;
    write_double_parameters(xml, "userParameterDouble", &description.user_parameter_double)?;
    write_string_parameters(xml, "userParameterString", &description.user_parameter_string)?;
    write_optional_value(xml, "comment", &description.comment)?;
    end(xml, "trajectoryDescription")
}

fn write_parallel_imaging<W: Write>(
    xml: &mut Writer<W>,
    parallel: &ParallelImaging,
) -> Result<()> {
    start(xml, "parallelImaging")?;
    start(xml, "accelerationFactor")?;
    write_value(
        xml,
        "kspace_encoding_step_1",
        &parallel.acceleration_factor.kspace_encoding_step_1,
    )?;
    write_value(
        xml,
        "kspace_encoding_step_2",
        &parallel.acceleration_factor.kspace_encoding_step_2,
    )?;
    end(xml, "accelerationFactor")?;
    write_optional_value(xml, "calibrationMode", &parallel.calibration_mode)?;
    write_optional_value(xml, "interleavingDimension", &parallel.interleaving_dimension)?;
    if let Some(multiband) = &parallel.multiband {
        write_multiband(xml, multiband)?;
    }
    end(xml, "parallelImaging")
}

fn write_multiband<W: Write>(xml: &mut Writer<W>, multiband: &Multiband) -> Result<()> {
    start(xml, "multiband")?;
    for spacing in &multiband.spacing {
        start(xml, "spacing")?;
        for dz in &spacing.d_z {
            write_value(xml, "dZ", dz)?;
        }
        end(xml, "spacing")?;
    }
    write_value(xml, "deltaKz", &multiband.delta_kz)?;
    write_value(xml, "multiband_factor", &multiband.multiband_factor)?;
    write_value(xml, "calibration", &multiband.calibration)?;
    write_value(xml, "calibration_encoding", &multiband.calibration_encoding)?;
    end(xml, "multiband")
}

// Sequence and user parameters

fn write_sequence_parameters<W: Write>(
    xml: &mut Writer<W>,
    parameters: &SequenceParameters,
) -> Result<()> {
    start(xml, "sequenceParameters")?;
    write_float_values(xml, "TR", &parameters.tr)?;
    write_float_values(xml, "TE", &parameters.te)?;
    write_float_values(xml, "TI", &parameters.ti)?;
    write_float_values(xml, "flipAngle_deg", &parameters.flip_angle_deg)?;
    write_optional_value(xml, "sequence_type", &parameters.sequence_type)?;
    write_float_values(xml, "echo_spacing", &parameters.echo_spacing)?;
    write_optional_value(xml, "diffusionDimension", &parameters.diffusion_dimension)?;
    if let Some(diffusion) = &parameters.diffusion {
        for diff in diffusion {
            start(xml, "diffusion")?;
            write_value(xml, "bvalue", &diff.bvalue)?;
            start(xml, "gradientDirection")?;
            write_value(xml, "rl", &diff.gradient_direction.rl)?;
            write_value(xml, "ap", &diff.gradient_direction.ap)?;
            write_value(xml, "fh", &diff.gradient_direction.fh)?;
            end(xml, "gradientDirection")?;
            end(xml, "diffusion")?;
        }
    }
    write_optional_value(xml, "diffusionScheme", &parameters.diffusion_scheme)?;
    end(xml, "sequenceParameters")
}

fn write_long_parameters<W: Write>(
    xml: &mut Writer<W>,
    element: &str,
    entries: &[UserParameterLong],
) -> Result<()> {
    for entry in entries {
        start(xml, element)?;
        write_text_element(xml, "name", &entry.name)?;
        write_value(xml, "value", &entry.value)?;
        end(xml, element)?;
    }
    Ok(())
}

fn write_double_parameters<W: Write>(
    xml: &mut Writer<W>,
    element: &str,
    entries: &[UserParameterDouble],
) -> Result<()> {
    for entry in entries {
        start(xml, element)?;
        write_text_element(xml, "name", &entry.name)?;
        write_value(xml, "value", &entry.value)?;
        end(xml, element)?;
    }
    Ok(())
}

fn write_string_parameters<W: Write>(
    xml: &mut Writer<W>,
    element: &str,
    entries: &[UserParameterString],
) -> Result<()> {
    for entry in entries {
        start(xml, element)?;
        write_text_element(xml, "name", &entry.name)?;
        write_text_element(xml, "value", &entry.value)?;
        end(xml, element)?;
    }
    Ok(())
}

fn write_user_parameters<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    parameters: &UserParameters,
) -> Result<()> {
    start(xml, name)?;
    write_long_parameters(xml, "userParameterLong", &parameters.user_parameter_long)?;
    write_double_parameters(xml, "userParameterDouble", &parameters.user_parameter_double)?;
    write_string_parameters(xml, "userParameterString", &parameters.user_parameter_string)?;
    write_string_parameters(xml, "userParameterBase64", &parameters.user_parameter_base64)?;
    end(xml, name)
}

// Waveforms

fn write_waveform_information<W: Write>(
    xml: &mut Writer<W>,
    waveform: &WaveformInformation,
) -> Result<()> {
    start(xml, "waveformInformation")?;
    write_text_element(xml, "waveformName", &waveform.waveform_name)?;
    write_value(xml, "waveformType", &waveform.waveform_type)?;
    if let Some(parameters) = &waveform.user_parameters {
        write_user_parameters(xml, "userParameters", parameters)?;
    }
    end(xml, "waveformInformation")
}
