//! Reader tests: mandatory-element enforcement, enum rejection, and the
//! optional-string absence rules.

use mrd_model::Trajectory;
use mrd_xml::{read_header, write_header, HeaderError};

const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ismrmrdHeader xmlns="http://www.ismrm.org/ISMRMRD">
  <experimentalConditions>
    <H1resonanceFrequency_Hz>63500000</H1resonanceFrequency_Hz>
  </experimentalConditions>
  <encoding>
    <encodedSpace>
      <matrixSize><x>256</x><y>256</y><z>1</z></matrixSize>
      <fieldOfView_mm><x>240</x><y>240</y><z>5</z></fieldOfView_mm>
    </encodedSpace>
    <reconSpace>
      <matrixSize><x>256</x><y>256</y><z>1</z></matrixSize>
      <fieldOfView_mm><x>240</x><y>240</y><z>5</z></fieldOfView_mm>
    </reconSpace>
    <encodingLimits>
      <kspace_encoding_step_1>
        <minimum>0</minimum>
        <maximum>255</maximum>
        <center>128</center>
      </kspace_encoding_step_1>
    </encodingLimits>
    <trajectory>cartesian</trajectory>
  </encoding>
</ismrmrdHeader>"#;

#[test]
fn test_minimal_example_decodes() {
    let header = read_header(MINIMAL).expect("decode minimal header");

    assert_eq!(
        header.experimental_conditions.h1_resonance_frequency_hz,
        63_500_000
    );
    assert_eq!(header.encoding.len(), 1);

    let encoding = &header.encoding[0];
    assert_eq!(encoding.trajectory, Trajectory::Cartesian);
    assert_eq!(encoding.encoded_space.matrix_size.x, 256);
    assert_eq!(encoding.encoded_space.matrix_size.z, 1);
    assert_eq!(encoding.encoded_space.field_of_view_mm.z, 5.0);
    assert_eq!(
        encoding.encoding_limits.kspace_encoding_step_1.map(|l| l.maximum),
        Some(255)
    );
    assert_eq!(encoding.encoding_limits.kspace_encoding_step_0, None);

    assert!(header.version.is_none());
    assert!(header.subject_information.is_none());
    assert!(header.study_information.is_none());
    assert!(header.sequence_parameters.is_none());
    assert!(header.waveform_information.is_empty());

    // Re-encoding reproduces an equivalent tree and omits every absent
    // optional section entirely.
    let written = write_header(&header).expect("encode decoded header");
    assert_eq!(read_header(&written).expect("decode round trip"), header);
    assert!(!written.contains("subjectInformation"));
    assert!(!written.contains("sequenceParameters"));
}

#[test]
fn test_malformed_xml_is_a_parse_error() {
    let err = read_header("<ismrmrdHeader><encoding>").unwrap_err();
    assert!(matches!(err, HeaderError::Parse(_)));
}

#[test]
fn test_wrong_root_element() {
    let err = read_header("<header></header>").unwrap_err();
    assert!(matches!(err, HeaderError::MissingRoot));
}

#[test]
fn test_missing_experimental_conditions() {
    let xml = MINIMAL.replace("experimentalConditions", "otherConditions");
    let err = read_header(&xml).unwrap_err();
    assert!(err.to_string().contains("experimentalConditions"));
}

#[test]
fn test_missing_resonance_frequency() {
    let xml = MINIMAL.replace("H1resonanceFrequency_Hz", "frequency");
    let err = read_header(&xml).unwrap_err();
    assert!(err.to_string().contains("H1resonanceFrequency_Hz"));
}

#[test]
fn test_missing_encoding() {
    let xml = r#"<ismrmrdHeader>
  <experimentalConditions>
    <H1resonanceFrequency_Hz>63500000</H1resonanceFrequency_Hz>
  </experimentalConditions>
</ismrmrdHeader>"#;
    let err = read_header(xml).unwrap_err();
    assert!(matches!(
        &err,
        HeaderError::MissingElement { element, .. } if element == "encoding"
    ));
}

#[test]
fn test_missing_encoding_limits() {
    let xml = MINIMAL
        .replace("<encodingLimits>", "<limits>")
        .replace("</encodingLimits>", "</limits>");
    let err = read_header(&xml).unwrap_err();
    assert!(matches!(
        &err,
        HeaderError::MissingElement { element, .. } if element == "encodingLimits"
    ));
}

#[test]
fn test_missing_trajectory() {
    let xml = MINIMAL.replace("<trajectory>cartesian</trajectory>", "");
    let err = read_header(&xml).unwrap_err();
    assert!(matches!(
        &err,
        HeaderError::MissingElement { element, .. } if element == "trajectory"
    ));
}

#[test]
fn test_missing_matrix_size() {
    let xml = MINIMAL.replacen("matrixSize", "gridSize", 2);
    let err = read_header(&xml).unwrap_err();
    assert!(matches!(
        &err,
        HeaderError::MissingElement { element, .. } if element == "matrixSize"
    ));
}

#[test]
fn test_missing_field_of_view() {
    let xml = MINIMAL.replacen("fieldOfView_mm", "fov", 2);
    let err = read_header(&xml).unwrap_err();
    assert!(err.to_string().contains("fieldOfView_mm"));
}

#[test]
fn test_unknown_trajectory_token() {
    let xml = MINIMAL.replace(">cartesian<", ">zigzag<");
    let err = read_header(&xml).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("zigzag"));
    assert!(message.contains("trajectory"));
}

#[test]
fn test_non_numeric_matrix_size() {
    let xml = MINIMAL.replacen("<x>256</x>", "<x>big</x>", 1);
    let err = read_header(&xml).unwrap_err();
    assert!(matches!(
        &err,
        HeaderError::InvalidValue { element, value, .. }
            if element == "x" && value == "big"
    ));
}

#[test]
fn test_version_is_recorded_without_validation() {
    let xml = MINIMAL.replace(
        "<experimentalConditions>",
        "<version>42</version>\n  <experimentalConditions>",
    );
    let header = read_header(&xml).expect("decode versioned header");
    assert_eq!(header.version, Some(42));
}

#[test]
fn test_empty_optional_string_is_absent() {
    let xml = MINIMAL.replace(
        "<experimentalConditions>",
        "<subjectInformation><patientName></patientName></subjectInformation>\n  <experimentalConditions>",
    );
    let header = read_header(&xml).expect("decode header");
    let subject = header.subject_information.expect("section is present");
    assert_eq!(subject.patient_name, None);
}

#[test]
fn test_empty_mandatory_string_is_an_error() {
    let xml = MINIMAL.replace(
        "<experimentalConditions>",
        "<measurementInformation><patientPosition></patientPosition></measurementInformation>\n  <experimentalConditions>",
    );
    let err = read_header(&xml).unwrap_err();
    assert!(matches!(
        &err,
        HeaderError::EmptyString { element } if element == "patientPosition"
    ));
}

#[test]
fn test_user_parameter_without_value_is_an_error() {
    let xml = MINIMAL.replace(
        "</ismrmrdHeader>",
        "<userParameters><userParameterLong><name>lines</name></userParameterLong></userParameters>\n</ismrmrdHeader>",
    );
    let err = read_header(&xml).unwrap_err();
    assert!(matches!(
        &err,
        HeaderError::MissingElement { element, parent }
            if element == "value" && parent == "userParameterLong"
    ));
}

#[test]
fn test_user_parameters_preserve_document_order() {
    let xml = MINIMAL.replace(
        "</ismrmrdHeader>",
        "<userParameters>\
           <userParameterLong><name>b</name><value>2</value></userParameterLong>\
           <userParameterLong><name>a</name><value>1</value></userParameterLong>\
         </userParameters>\n</ismrmrdHeader>",
    );
    let header = read_header(&xml).expect("decode header");
    let names: Vec<String> = header
        .user_parameters
        .expect("user parameters present")
        .user_parameter_long
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn test_sibling_encodings_decode_in_document_order() {
    let second = r#"  <encoding>
    <encodedSpace>
      <matrixSize><x>64</x><y>64</y><z>1</z></matrixSize>
      <fieldOfView_mm><x>300</x><y>300</y><z>8</z></fieldOfView_mm>
    </encodedSpace>
    <reconSpace>
      <matrixSize><x>64</x><y>64</y><z>1</z></matrixSize>
      <fieldOfView_mm><x>300</x><y>300</y><z>8</z></fieldOfView_mm>
    </reconSpace>
    <encodingLimits/>
    <trajectory>radial</trajectory>
  </encoding>
</ismrmrdHeader>"#;
    let xml = MINIMAL.replace("</ismrmrdHeader>", second);
    let header = read_header(&xml).expect("decode header");
    assert_eq!(header.encoding.len(), 2);
    assert_eq!(header.encoding[0].trajectory, Trajectory::Cartesian);
    assert_eq!(header.encoding[1].trajectory, Trajectory::Radial);
    assert_eq!(header.encoding[1].encoded_space.matrix_size.x, 64);
}
