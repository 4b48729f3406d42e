//! XML header reader.
//!
//! Walks the document top-down, guided entirely by the schema: mandatory
//! elements are looked up and enforced, optional elements are looked up and
//! skipped when absent, and repeated elements are collected by iterating
//! same-named children in document order.

use mrd_model::{
    AccelerationFactor, AcquisitionSystemInformation, CoilLabel, Diffusion, DiffusionDimension,
    Encoding, EncodingLimits, EncodingSpace, ExperimentalConditions, FieldOfViewMm,
    GradientDirection, Header, Limit, MatrixSize, MeasurementDependency, MeasurementInformation,
    Multiband, MultibandSpacing, ParallelImaging, ReferencedImageSequence, SequenceParameters,
    StudyInformation, SubjectInformation, ThreeDimensionalFloat, TrajectoryDescription,
    UserParameterDouble, UserParameterLong, UserParameterString, UserParameters,
    WaveformInformation, WaveformType, USER_LIMIT_COUNT,
};
use roxmltree::{Document, Node};

use crate::common::ROOT_ELEMENT;
use crate::error::{HeaderError, Result};
use crate::scalar::XmlScalar;

/// Parse an XML text into a typed [`Header`].
///
/// Fails with a [`HeaderError`] naming the first structural violation; see
/// the crate documentation for the mandatory/optional rules.
pub fn read_header(xml: &str) -> Result<Header> {
    let document = Document::parse(xml)?;
    let root = document.root_element();
    if root.tag_name().name() != ROOT_ELEMENT {
        return Err(HeaderError::MissingRoot);
    }

    let experimental_conditions = match child(root, "experimentalConditions") {
        Some(conditions) => ExperimentalConditions {
            h1_resonance_frequency_hz: parse_child(conditions, "H1resonanceFrequency_Hz")?,
        },
        None => return Err(HeaderError::missing("experimentalConditions", ROOT_ELEMENT)),
    };

    let encoding_nodes = children(root, "encoding");
    if encoding_nodes.is_empty() {
        return Err(HeaderError::missing("encoding", ROOT_ELEMENT));
    }
    let encoding = encoding_nodes
        .into_iter()
        .map(parse_encoding)
        .collect::<Result<Vec<_>>>()?;

    let waveform_information = children(root, "waveformInformation")
        .into_iter()
        .map(parse_waveform_information)
        .collect::<Result<Vec<_>>>()?;

    Ok(Header {
        version: parse_optional_child(root, "version")?,
        subject_information: child(root, "subjectInformation")
            .map(parse_subject_information)
            .transpose()?,
        study_information: child(root, "studyInformation")
            .map(parse_study_information)
            .transpose()?,
        measurement_information: child(root, "measurementInformation")
            .map(parse_measurement_information)
            .transpose()?,
        acquisition_system_information: child(root, "acquisitionSystemInformation")
            .map(parse_acquisition_system_information)
            .transpose()?,
        experimental_conditions,
        encoding,
        sequence_parameters: child(root, "sequenceParameters")
            .map(parse_sequence_parameters)
            .transpose()?,
        user_parameters: child(root, "userParameters")
            .map(parse_user_parameters)
            .transpose()?,
        waveform_information,
    })
}

// Node navigation

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

fn children<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Vec<Node<'a, 'input>> {
    node.children()
        .filter(|c| c.is_element() && c.tag_name().name() == name)
        .collect()
}

fn node_text<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().unwrap_or("")
}

// Scalar extraction

fn parse_node<T: XmlScalar>(node: Node<'_, '_>) -> Result<T> {
    let text = node_text(node);
    T::from_text(text)
        .ok_or_else(|| HeaderError::invalid_value(node.tag_name().name(), text, T::KIND))
}

fn parse_child<T: XmlScalar>(node: Node<'_, '_>, name: &str) -> Result<T> {
    match child(node, name) {
        Some(c) => parse_node(c),
        None => Err(HeaderError::missing(name, node.tag_name().name())),
    }
}

fn parse_optional_child<T: XmlScalar>(node: Node<'_, '_>, name: &str) -> Result<Option<T>> {
    child(node, name).map(parse_node).transpose()
}

/// Mandatory string: the element must exist and carry non-empty text.
fn parse_string(node: Node<'_, '_>, name: &str) -> Result<String> {
    match child(node, name).map(node_text) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(HeaderError::empty_string(name)),
    }
}

/// Optional string: a missing element and an element with empty text both
/// decode to `None`.
fn parse_optional_string(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name)
        .and_then(|c| c.text())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn parse_float_vec(node: Node<'_, '_>, name: &str) -> Result<Vec<f32>> {
    children(node, name).into_iter().map(parse_node).collect()
}

/// Repeated float element where "no siblings" means the sequence is absent.
fn parse_optional_float_vec(node: Node<'_, '_>, name: &str) -> Result<Option<Vec<f32>>> {
    let values = parse_float_vec(node, name)?;
    Ok(if values.is_empty() { None } else { Some(values) })
}

// Encoding section

fn parse_encoding(node: Node<'_, '_>) -> Result<Encoding> {
    let limits = child(node, "encodingLimits")
        .ok_or_else(|| HeaderError::missing("encodingLimits", "encoding"))?;
    let trajectory = child(node, "trajectory")
        .ok_or_else(|| HeaderError::missing("trajectory", "encoding"))?;

    Ok(Encoding {
        encoded_space: parse_encoding_space(node, "encodedSpace")?,
        recon_space: parse_encoding_space(node, "reconSpace")?,
        encoding_limits: parse_encoding_limits(limits)?,
        trajectory: parse_node(trajectory)?,
        trajectory_description: child(node, "trajectoryDescription")
            .map(parse_trajectory_description)
            .transpose()?,
        parallel_imaging: child(node, "parallelImaging")
            .map(parse_parallel_imaging)
            .transpose()?,
        echo_train_length: parse_optional_child(node, "echoTrainLength")?,
    })
}

fn parse_encoding_space(node: Node<'_, '_>, name: &str) -> Result<EncodingSpace> {
    let space = child(node, name).ok_or_else(|| HeaderError::missing(name, "encoding"))?;
    let matrix = child(space, "matrixSize").ok_or_else(|| HeaderError::missing("matrixSize", name))?;
    let field_of_view =
        child(space, "fieldOfView_mm").ok_or_else(|| HeaderError::missing("fieldOfView_mm", name))?;

    Ok(EncodingSpace {
        matrix_size: MatrixSize {
            x: parse_child(matrix, "x")?,
            y: parse_child(matrix, "y")?,
            z: parse_child(matrix, "z")?,
        },
        field_of_view_mm: FieldOfViewMm {
            x: parse_child(field_of_view, "x")?,
            y: parse_child(field_of_view, "y")?,
            z: parse_child(field_of_view, "z")?,
        },
    })
}

fn parse_encoding_limit(node: Node<'_, '_>, name: &str) -> Result<Option<Limit>> {
    child(node, name)
        .map(|limit| {
            Ok(Limit {
                minimum: parse_child(limit, "minimum")?,
                maximum: parse_child(limit, "maximum")?,
                center: parse_child(limit, "center")?,
            })
        })
        .transpose()
}

fn parse_encoding_limits(node: Node<'_, '_>) -> Result<EncodingLimits> {
    let mut user = [None; USER_LIMIT_COUNT];
    for (slot, entry) in user.iter_mut().enumerate() {
        *entry = parse_encoding_limit(node, &format!("user_{slot}"))?;
    }

    Ok(EncodingLimits {
        kspace_encoding_step_0: parse_encoding_limit(node, "kspace_encoding_step_0")?,
        kspace_encoding_step_1: parse_encoding_limit(node, "kspace_encoding_step_1")?,
        kspace_encoding_step_2: parse_encoding_limit(node, "kspace_encoding_step_2")?,
        average: parse_encoding_limit(node, "average")?,
        slice: parse_encoding_limit(node, "slice")?,
        contrast: parse_encoding_limit(node, "contrast")?,
        phase: parse_encoding_limit(node, "phase")?,
        repetition: parse_encoding_limit(node, "repetition")?,
        set: parse_encoding_limit(node, "set")?,
        segment: parse_encoding_limit(node, "segment")?,
        user,
    })
}

fn parse_trajectory_description(node: Node<'_, '_>) -> Result<TrajectoryDescription> {
    Ok(TrajectoryDescription {
        identifier: parse_string(node, "identifier")?,
        user_parameter_long: parse_user_parameter_long(node, "userParameterLong")?,
        user_parameter_double: parse_user_parameter_double(node, "userParameterDouble")?,
        user_parameter_string: parse_user_parameter_string(node, "userParameterString")?,
        comment: parse_optional_string(node, "comment"),
    })
}

fn parse_parallel_imaging(node: Node<'_, '_>) -> Result<ParallelImaging> {
    let acceleration = child(node, "accelerationFactor")
        .ok_or_else(|| HeaderError::missing("accelerationFactor", "parallelImaging"))?;

    Ok(ParallelImaging {
        acceleration_factor: AccelerationFactor {
            kspace_encoding_step_1: parse_child(acceleration, "kspace_encoding_step_1")?,
            kspace_encoding_step_2: parse_child(acceleration, "kspace_encoding_step_2")?,
        },
        calibration_mode: parse_optional_string(node, "calibrationMode"),
        interleaving_dimension: parse_optional_string(node, "interleavingDimension"),
        multiband: child(node, "multiband").map(parse_multiband).transpose()?,
    })
}

fn parse_multiband(node: Node<'_, '_>) -> Result<Multiband> {
    let spacing = children(node, "spacing")
        .into_iter()
        .map(|spacing| {
            Ok(MultibandSpacing {
                d_z: parse_float_vec(spacing, "dZ")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Multiband {
        spacing,
        delta_kz: parse_child(node, "deltaKz")?,
        multiband_factor: parse_child(node, "multiband_factor")?,
        calibration: parse_child(node, "calibration")?,
        calibration_encoding: parse_child(node, "calibration_encoding")?,
    })
}

// Optional information sections

fn parse_subject_information(node: Node<'_, '_>) -> Result<SubjectInformation> {
    Ok(SubjectInformation {
        patient_name: parse_optional_string(node, "patientName"),
        patient_weight_kg: parse_optional_child(node, "patientWeight_kg")?,
        patient_height_m: parse_optional_child(node, "patientHeight_m")?,
        patient_id: parse_optional_string(node, "patientID"),
        patient_birthdate: parse_optional_string(node, "patientBirthdate"),
        patient_gender: parse_optional_string(node, "patientGender"),
    })
}

fn parse_study_information(node: Node<'_, '_>) -> Result<StudyInformation> {
    Ok(StudyInformation {
        study_date: parse_optional_string(node, "studyDate"),
        study_time: parse_optional_string(node, "studyTime"),
        study_id: parse_optional_string(node, "studyID"),
        accession_number: parse_optional_child(node, "accessionNumber")?,
        referring_physician_name: parse_optional_string(node, "referringPhysicianName"),
        study_description: parse_optional_string(node, "studyDescription"),
        study_instance_uid: parse_optional_string(node, "studyInstanceUID"),
        body_part_examined: parse_optional_string(node, "bodyPartExamined"),
    })
}

fn parse_measurement_information(node: Node<'_, '_>) -> Result<MeasurementInformation> {
    let measurement_dependency = children(node, "measurementDependency")
        .into_iter()
        .map(|dependency| {
            Ok(MeasurementDependency {
                dependency_type: parse_string(dependency, "dependencyType")?,
                measurement_id: parse_string(dependency, "measurementID")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let referenced_image_sequence = match child(node, "referencedImageSequence") {
        Some(wrapper) => children(wrapper, "referencedSOPInstanceUID")
            .into_iter()
            .map(|uid| ReferencedImageSequence {
                referenced_sop_instance_uid: node_text(uid).to_string(),
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(MeasurementInformation {
        measurement_id: parse_optional_string(node, "measurementID"),
        series_date: parse_optional_string(node, "seriesDate"),
        series_time: parse_optional_string(node, "seriesTime"),
        patient_position: parse_string(node, "patientPosition")?,
        relative_table_position: parse_optional_three_dimensional(node, "relativeTablePosition")?,
        initial_series_number: parse_optional_child(node, "initialSeriesNumber")?,
        protocol_name: parse_optional_string(node, "protocolName"),
        sequence_name: parse_optional_string(node, "sequenceName"),
        series_description: parse_optional_string(node, "seriesDescription"),
        measurement_dependency,
        series_instance_uid_root: parse_optional_string(node, "seriesInstanceUIDRoot"),
        frame_of_reference_uid: parse_optional_string(node, "frameOfReferenceUID"),
        referenced_image_sequence,
    })
}

fn parse_optional_three_dimensional(
    node: Node<'_, '_>,
    name: &str,
) -> Result<Option<ThreeDimensionalFloat>> {
    child(node, name)
        .map(|c| {
            Ok(ThreeDimensionalFloat {
                x: parse_child(c, "x")?,
                y: parse_child(c, "y")?,
                z: parse_child(c, "z")?,
            })
        })
        .transpose()
}

fn parse_acquisition_system_information(
    node: Node<'_, '_>,
) -> Result<AcquisitionSystemInformation> {
    let coil_label = children(node, "coilLabel")
        .into_iter()
        .map(|label| {
            Ok(CoilLabel {
                coil_number: parse_child(label, "coilNumber")?,
                coil_name: parse_string(label, "coilName")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AcquisitionSystemInformation {
        system_vendor: parse_optional_string(node, "systemVendor"),
        system_model: parse_optional_string(node, "systemModel"),
        system_field_strength_t: parse_optional_child(node, "systemFieldStrength_T")?,
        relative_receiver_noise_bandwidth: parse_optional_child(
            node,
            "relativeReceiverNoiseBandwidth",
        )?,
        receiver_channels: parse_optional_child(node, "receiverChannels")?,
        coil_label,
        institution_name: parse_optional_string(node, "institutionName"),
        station_name: parse_optional_string(node, "stationName"),
        device_id: parse_optional_string(node, "deviceID"),
        device_serial_number: parse_optional_string(node, "deviceSerialNumber"),
    })
}

// Sequence and user parameters

fn parse_sequence_parameters(node: Node<'_, '_>) -> Result<SequenceParameters> {
    let diffusion = children(node, "diffusion")
        .into_iter()
        .map(parse_diffusion)
        .collect::<Result<Vec<_>>>()?;

    // An element that is present but empty is treated as absent, like every
    // other optional string-shaped field.
    let diffusion_dimension = parse_optional_string(node, "diffusionDimension")
        .map(|text| {
            DiffusionDimension::from_text(&text).ok_or_else(|| {
                HeaderError::invalid_value(
                    "diffusionDimension",
                    text.as_str(),
                    DiffusionDimension::KIND,
                )
            })
        })
        .transpose()?;

    Ok(SequenceParameters {
        tr: parse_optional_float_vec(node, "TR")?,
        te: parse_optional_float_vec(node, "TE")?,
        ti: parse_optional_float_vec(node, "TI")?,
        flip_angle_deg: parse_optional_float_vec(node, "flipAngle_deg")?,
        sequence_type: parse_optional_string(node, "sequence_type"),
        echo_spacing: parse_optional_float_vec(node, "echo_spacing")?,
        diffusion_dimension,
        diffusion: if diffusion.is_empty() {
            None
        } else {
            Some(diffusion)
        },
        diffusion_scheme: parse_optional_string(node, "diffusionScheme"),
    })
}

fn parse_diffusion(node: Node<'_, '_>) -> Result<Diffusion> {
    let gradient = child(node, "gradientDirection")
        .ok_or_else(|| HeaderError::missing("gradientDirection", "diffusion"))?;

    Ok(Diffusion {
        bvalue: parse_child(node, "bvalue")?,
        gradient_direction: GradientDirection {
            rl: parse_child(gradient, "rl")?,
            ap: parse_child(gradient, "ap")?,
            fh: parse_child(gradient, "fh")?,
        },
    })
}

fn parse_named_value<T: XmlScalar>(node: Node<'_, '_>) -> Result<(String, T)> {
    let name = parse_child::<String>(node, "name")?;
    let value = parse_child::<T>(node, "value")?;
    Ok((name, value))
}

fn parse_user_parameter_long(node: Node<'_, '_>, name: &str) -> Result<Vec<UserParameterLong>> {
    children(node, name)
        .into_iter()
        .map(|c| {
            let (name, value) = parse_named_value::<i64>(c)?;
            Ok(UserParameterLong { name, value })
        })
        .collect()
}

fn parse_user_parameter_double(node: Node<'_, '_>, name: &str) -> Result<Vec<UserParameterDouble>> {
    children(node, name)
        .into_iter()
        .map(|c| {
            let (name, value) = parse_named_value::<f64>(c)?;
            Ok(UserParameterDouble { name, value })
        })
        .collect()
}

fn parse_user_parameter_string(node: Node<'_, '_>, name: &str) -> Result<Vec<UserParameterString>> {
    children(node, name)
        .into_iter()
        .map(|c| {
            let (name, value) = parse_named_value::<String>(c)?;
            Ok(UserParameterString { name, value })
        })
        .collect()
}

fn parse_user_parameters(node: Node<'_, '_>) -> Result<UserParameters> {
    Ok(UserParameters {
        user_parameter_long: parse_user_parameter_long(node, "userParameterLong")?,
        user_parameter_double: parse_user_parameter_double(node, "userParameterDouble")?,
        user_parameter_string: parse_user_parameter_string(node, "userParameterString")?,
        user_parameter_base64: parse_user_parameter_string(node, "userParameterBase64")?,
    })
}

// Waveforms

fn parse_waveform_information(node: Node<'_, '_>) -> Result<WaveformInformation> {
    let type_text = parse_string(node, "waveformType")?;
    let waveform_type = WaveformType::from_text(&type_text).ok_or_else(|| {
        HeaderError::invalid_value("waveformType", type_text.as_str(), WaveformType::KIND)
    })?;

    Ok(WaveformInformation {
        waveform_name: parse_string(node, "waveformName")?,
        waveform_type,
        user_parameters: child(node, "userParameters")
            .map(parse_user_parameters)
            .transpose()?,
    })
}
