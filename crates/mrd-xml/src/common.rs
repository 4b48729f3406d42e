//! Fixed names and constants of the header schema.

/// Root element name.
pub const ROOT_ELEMENT: &str = "ismrmrdHeader";

/// ISMRMRD namespace, declared as the default namespace on the root.
pub const ISMRMRD_NS: &str = "http://www.ismrm.org/ISMRMRD";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XML Schema namespace.
pub const XS_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Schema location hint written on the root element.
pub const SCHEMA_LOCATION: &str = "http://www.ismrm.org/ISMRMRD ismrmrd.xsd";

/// XML header schema revision this codec implements.
///
/// Reading records whatever revision the document declares; writing refuses
/// a header whose declared revision differs from this constant.
pub const SCHEMA_VERSION: i64 = 3;
