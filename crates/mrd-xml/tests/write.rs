//! Writer tests: the version gate, the non-empty encoding rule, and the
//! fixed document shape.

use mrd_model::{
    Encoding, EncodingLimits, EncodingSpace, ExperimentalConditions, FieldOfViewMm, Header,
    MatrixSize, Trajectory,
};
use mrd_xml::{read_header, write_header, HeaderError, SCHEMA_VERSION};

fn encoding_space() -> EncodingSpace {
    EncodingSpace {
        matrix_size: MatrixSize { x: 192, y: 192, z: 16 },
        field_of_view_mm: FieldOfViewMm {
            x: 230.0,
            y: 230.0,
            z: 160.0,
        },
    }
}

fn header() -> Header {
    Header {
        version: None,
        subject_information: None,
        study_information: None,
        measurement_information: None,
        acquisition_system_information: None,
        experimental_conditions: ExperimentalConditions {
            h1_resonance_frequency_hz: 128_000_000,
        },
        encoding: vec![Encoding {
            encoded_space: encoding_space(),
            recon_space: encoding_space(),
            encoding_limits: EncodingLimits::default(),
            trajectory: Trajectory::Epi,
            trajectory_description: None,
            parallel_imaging: None,
            echo_train_length: None,
        }],
        sequence_parameters: None,
        user_parameters: None,
        waveform_information: vec![],
    }
}

#[test]
fn test_write_without_version_succeeds() {
    let xml = write_header(&header()).expect("write header");
    assert!(!xml.contains("<version>"));
}

#[test]
fn test_write_with_matching_version_succeeds() {
    let mut h = header();
    h.version = Some(SCHEMA_VERSION);
    let xml = write_header(&h).expect("write header");
    assert!(xml.contains("<version>3</version>"));
    assert_eq!(read_header(&xml).expect("decode").version, Some(SCHEMA_VERSION));
}

#[test]
fn test_write_rejects_foreign_version() {
    let mut h = header();
    h.version = Some(SCHEMA_VERSION + 1);
    let err = write_header(&h).unwrap_err();
    assert!(matches!(
        err,
        HeaderError::VersionMismatch { found: 4, expected: 3 }
    ));
}

#[test]
fn test_write_rejects_empty_encoding_list() {
    let mut h = header();
    h.encoding.clear();
    let err = write_header(&h).unwrap_err();
    assert!(matches!(err, HeaderError::EmptyEncoding));
}

#[test]
fn test_root_carries_fixed_namespace_attributes() {
    let xml = write_header(&header()).expect("write header");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("xmlns=\"http://www.ismrm.org/ISMRMRD\""));
    assert!(xml.contains("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""));
    assert!(xml.contains("xmlns:xs=\"http://www.w3.org/2001/XMLSchema\""));
    assert!(xml.contains("xsi:schemaLocation=\"http://www.ismrm.org/ISMRMRD ismrmrd.xsd\""));
}

#[test]
fn test_writing_is_deterministic() {
    let h = header();
    assert_eq!(
        write_header(&h).expect("first write"),
        write_header(&h).expect("second write")
    );
}

#[test]
fn test_schema_section_order() {
    let mut h = header();
    h.version = Some(SCHEMA_VERSION);
    let xml = write_header(&h).expect("write header");

    let version = xml.find("<version>").expect("version element");
    let conditions = xml
        .find("<experimentalConditions>")
        .expect("experimentalConditions element");
    let encoding = xml.find("<encoding>").expect("encoding element");
    assert!(version < conditions);
    assert!(conditions < encoding);
}
