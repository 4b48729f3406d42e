//! ISMRMRD XML header reader and writer.
//!
//! This crate converts between the `ismrmrdHeader` XML document and the typed
//! [`mrd_model::Header`] record, in both directions:
//!
//! - [`read_header`] parses XML text and enforces the structural rules of the
//!   schema (mandatory elements, closed enum tables, numeric convertibility).
//! - [`write_header`] produces an equivalent document from a header,
//!   emitting elements only for present optional fields.
//!
//! Both are pure, single-pass transformations; a decoded header re-encodes to
//! an equivalent tree, and optional fields keep their exact presence or
//! absence through the round trip.
//!
//! # Example
//!
//! ```
//! use mrd_xml::{read_header, write_header};
//!
//! let xml = r#"
//! <ismrmrdHeader>
//!   <experimentalConditions>
//!     <H1resonanceFrequency_Hz>63500000</H1resonanceFrequency_Hz>
//!   </experimentalConditions>
//!   <encoding>
//!     <encodedSpace>
//!       <matrixSize><x>256</x><y>256</y><z>1</z></matrixSize>
//!       <fieldOfView_mm><x>240</x><y>240</y><z>5</z></fieldOfView_mm>
//!     </encodedSpace>
//!     <reconSpace>
//!       <matrixSize><x>256</x><y>256</y><z>1</z></matrixSize>
//!       <fieldOfView_mm><x>240</x><y>240</y><z>5</z></fieldOfView_mm>
//!     </reconSpace>
//!     <encodingLimits/>
//!     <trajectory>cartesian</trajectory>
//!   </encoding>
//! </ismrmrdHeader>"#;
//!
//! let header = read_header(xml).unwrap();
//! assert_eq!(header.encoding.len(), 1);
//! assert!(header.subject_information.is_none());
//!
//! let document = write_header(&header).unwrap();
//! let round = read_header(&document).unwrap();
//! assert_eq!(round, header);
//! ```

mod common;
mod de;
mod error;
mod scalar;
mod ser;

pub use common::{ISMRMRD_NS, ROOT_ELEMENT, SCHEMA_VERSION};
pub use de::read_header;
pub use error::{HeaderError, Result};
pub use ser::write_header;
