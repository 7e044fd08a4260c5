//! # kml-core
//!
//! Typed object model and bidirectional codec for KML 2.2.
//!
//! The crate reads KML text into an owned object model and writes the model
//! back as KML text. Besides the core `kml` namespace it covers the Google
//! extension namespace (`gx`), Atom author and link elements (`atom`) and
//! opaque xAL address details (`xal`).
//!
//! ## Namespaces
//!
//! | Key | URI |
//! |-----|-----|
//! | `kml` | `http://www.opengis.net/kml/2.2` |
//! | `gx` | `http://www.google.com/kml/ext/2.2` |
//! | `atom` | `http://www.w3.org/2005/Atom` |
//! | `xal` | `urn:oasis:names:tc:ciq:xsdschema:xAL:2.0` |
//!
//! Elements without namespace and elements in the legacy
//! `http://earth.google.com/kml/2.x` namespaces are read as `kml`.
//!
//! ## Quick Start
//!
//! ### Decode a document
//!
//! ```
//! use kml_core::{decode_str, Feature, Geometry};
//!
//! let text = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
//!   <Document>
//!     <Placemark>
//!       <name>Sydney Opera House</name>
//!       <Point><coordinates>151.21037,-33.8526,0</coordinates></Point>
//!     </Placemark>
//!   </Document>
//! </kml>"#;
//!
//! let kml = decode_str(text)?.expect("kml root");
//! let feature = kml.feature.expect("document");
//! for placemark in feature.placemarks() {
//!     if let Some(Geometry::Point(point)) = &placemark.geometry {
//!         println!("{:?} at {:?}", placemark.common.name, point.coordinates);
//!     }
//! }
//! # Ok::<(), kml_core::KmlError>(())
//! ```
//!
//! ### Build and encode a document
//!
//! ```
//! use kml_core::{to_string, Coordinate, Document, EncodeOptions, Kml, LineString, Placemark};
//!
//! let route = Placemark::default()
//!     .with_name("Harbour walk")
//!     .with_geometry(LineString::new(vec![
//!         Coordinate::new(151.2153, -33.8568),
//!         Coordinate::new(151.2108, -33.8523),
//!     ]));
//! let kml = Kml::new(Document::default().with_feature(route));
//! let text = to_string(&kml, &EncodeOptions::default())?;
//! assert!(text.contains("151.2153,-33.8568 151.2108,-33.8523"));
//! # Ok::<(), kml_core::KmlError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`xml`] | Generic markup tree, parsing and formatting |
//! | [`registry`] | Element kinds, namespaces and schema-ordered layouts |
//! | [`model`] | Object model and builders |
//! | [`decode`] | Markup tree to object model |
//! | [`encode`] | Object model to markup tree |
//!
//! ## Tolerance
//!
//! Decoding only fails on markup that is not well-formed. Unknown elements
//! are kept verbatim in the owning node's `extensions` and written back on
//! encode, as is markup found inside a text field such as `description`.
//! Unknown attributes on the root and on `Object` elements are kept too.
//! Enumeration literals outside the vocabulary decode as
//! `Unrecognized(text)`. Unparseable numbers and booleans decode as absent
//! and are logged through the `log` facade at `warn`.
//!
//! ## Error Handling
//!
//! ```
//! use kml_core::{decode_str, KmlError};
//!
//! match decode_str("<kml><Placemark></kml>") {
//!     Ok(_) => unreachable!("unbalanced tags"),
//!     Err(KmlError::Xml(e)) => println!("Parse error: {e}"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod model;
pub mod registry;
pub mod xml;

pub use decode::{
    decode, decode_bytes, decode_feature, decode_geometry, decode_str, decode_style_selector,
    decode_time_primitive, decode_tour_primitive, decode_view,
};
pub use encode::{
    encode, encode_feature, encode_geometry, encode_style_selector, encode_time_primitive,
    encode_tour_primitive, encode_view, fragment_to_string, to_string, write_to, Encode,
    EncodeOptions,
};
pub use error::{KmlError, Result};
pub use model::*;
pub use registry::{resolve, resolve_node, Capability, ElementKind, Namespace, QualifiedTag};
pub use xml::{NamespaceDecl, XmlAttribute, XmlNode};
