//! Object model to markup tree
//!
//! Every model node implements [`Encode`]. Fields are written in the order of
//! the kind's layout in the [tag registry](crate::registry); absent values
//! write nothing and extension content follows the known fields. Rendering
//! the tree as text is delegated to [`crate::xml`].

mod builder;
mod common;
mod feature;
mod geometry;
mod style;
mod tour;
mod view;

use crate::error::Result;
use crate::model::{AbstractView, Feature, Geometry, Kml, StyleSelector, TimePrimitive, TourPrimitive};
use crate::registry::{ElementKind, Namespace, ATOM_NS, GX_NS, KML_NS, XAL_NS};
use crate::xml::{self, NamespaceDecl, XmlNode};
use builder::NodeBuilder;
use std::io::Write;

/// Conversion of a model node into its markup element
pub trait Encode {
    /// Build the element for this node
    fn to_node(&self) -> XmlNode;
}

/// Options for rendering KML text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    /// Indentation width; `None` writes everything on one line (default: 2)
    pub indent: Option<usize>,
    /// Write the `<?xml ...?>` declaration (default: true)
    pub xml_declaration: bool,
}

impl Default for EncodeOptions {
    #[inline]
    fn default() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
        }
    }
}

impl EncodeOptions {
    /// Single-line output without declaration
    #[inline]
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
        }
    }

    /// Set the indentation width
    #[inline]
    #[must_use]
    pub const fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Enable or disable the markup declaration
    #[inline]
    #[must_use]
    pub const fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }
}

impl Encode for Kml {
    fn to_node(&self) -> XmlNode {
        let mut builder = NodeBuilder::new(ElementKind::Kml)
            .attribute("hint", self.hint.as_deref())
            .attributes(&self.attributes)
            .encoded(self.network_link_control.as_ref())
            .encoded(self.feature.as_ref())
            .extensions(&self.extensions)
            .build();
        builder.namespaces = root_declarations(&self.namespaces);
        builder
    }
}

/// The four standard namespaces followed by the document's own declarations
fn root_declarations(extra: &[NamespaceDecl]) -> Vec<NamespaceDecl> {
    let mut declarations = vec![NamespaceDecl::new(None, KML_NS)];
    for (namespace, uri) in [
        (Namespace::Gx, GX_NS),
        (Namespace::Atom, ATOM_NS),
        (Namespace::Xal, XAL_NS),
    ] {
        declarations.push(NamespaceDecl::new(namespace.prefix(), uri));
    }
    declarations.extend(extra.iter().cloned());
    declarations
}

/// Encode a document into a markup tree
#[must_use]
pub fn encode(kml: &Kml) -> XmlNode {
    kml.to_node()
}

/// Encode a feature element
#[must_use]
pub fn encode_feature(feature: &Feature) -> XmlNode {
    feature.to_node()
}

/// Encode a geometry element
#[must_use]
pub fn encode_geometry(geometry: &Geometry) -> XmlNode {
    geometry.to_node()
}

/// Encode a `LookAt` or `Camera`
#[must_use]
pub fn encode_view(view: &AbstractView) -> XmlNode {
    view.to_node()
}

/// Encode a `TimeSpan` or `TimeStamp`
#[must_use]
pub fn encode_time_primitive(time: &TimePrimitive) -> XmlNode {
    time.to_node()
}

/// Encode a `Style` or `StyleMap`
#[must_use]
pub fn encode_style_selector(style: &StyleSelector) -> XmlNode {
    style.to_node()
}

/// Encode a tour primitive
#[must_use]
pub fn encode_tour_primitive(primitive: &TourPrimitive) -> XmlNode {
    primitive.to_node()
}

/// Render a document as KML text
///
/// # Errors
///
/// Returns [`KmlError::Format`](crate::KmlError::Format) if the text cannot
/// be produced.
///
/// # Examples
///
/// ```
/// use kml_core::{to_string, Coordinate, EncodeOptions, Kml, Placemark, Point};
///
/// let kml = Kml::new(
///     Placemark::default()
///         .with_name("Sydney")
///         .with_geometry(Point::new(Coordinate::new(151.21037, -33.8526))),
/// );
/// let text = to_string(&kml, &EncodeOptions::default())?;
/// assert!(text.contains("<coordinates>151.21037,-33.8526</coordinates>"));
/// # Ok::<(), kml_core::KmlError>(())
/// ```
#[must_use = "this function returns the rendered text that should be used"]
pub fn to_string(kml: &Kml, options: &EncodeOptions) -> Result<String> {
    xml::to_string(&encode(kml), options.indent, options.xml_declaration)
}

/// Render a document as KML text into a sink
///
/// # Errors
///
/// Returns [`KmlError::Format`](crate::KmlError::Format) if the sink fails.
pub fn write_to<W: Write>(kml: &Kml, sink: W, options: &EncodeOptions) -> Result<()> {
    xml::write_tree(&encode(kml), sink, options.indent, options.xml_declaration)
}

/// Render a single model node, without markup declaration
///
/// Namespace declarations are added on the fragment root as needed.
///
/// # Errors
///
/// Returns [`KmlError::Format`](crate::KmlError::Format) if the text cannot
/// be produced.
#[must_use = "this function returns the rendered text that should be used"]
pub fn fragment_to_string<T: Encode>(value: &T, indent: Option<usize>) -> Result<String> {
    xml::to_string(&value.to_node(), indent, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinate, LookAt, Placemark, Point};

    #[test]
    fn test_root_declares_standard_namespaces() {
        let kml = Kml::default()
            .with_hint("target=sky")
            .with_namespace(NamespaceDecl::new(Some("ext"), "urn:example:ext"));
        let node = encode(&kml);
        assert_eq!(node.attribute("hint"), Some("target=sky"));
        let prefixes: Vec<_> = node.namespaces.iter().map(|d| d.prefix.as_deref()).collect();
        assert_eq!(prefixes, [None, Some("gx"), Some("atom"), Some("xal"), Some("ext")]);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_compact_rendering() {
        let kml = Kml::new(Placemark::default().with_name("a"));
        let text = to_string(&kml, &EncodeOptions::compact()).unwrap();
        assert!(text.starts_with("<kml xmlns=\"http://www.opengis.net/kml/2.2\""));
        assert!(text.contains("<Placemark><name>a</name></Placemark>"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_default_rendering_has_declaration() {
        let kml = Kml::new(Placemark::default());
        let text = to_string(&kml, &EncodeOptions::default()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("\n  <Placemark/>"));
    }

    #[test]
    fn test_write_to_matches_to_string() {
        let kml = Kml::new(
            Placemark::default().with_geometry(Point::new(Coordinate::new(1.5, 2.0))),
        );
        let options = EncodeOptions::default().with_indent(Some(4));
        let mut buffer = Vec::new();
        write_to(&kml, &mut buffer, &options).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&kml, &options).unwrap());
    }

    #[test]
    fn test_fragment_declares_namespace() {
        let view = AbstractView::from(LookAt::default().with_tilt(45.0));
        let text = fragment_to_string(&view, None).unwrap();
        assert_eq!(
            text,
            "<LookAt xmlns=\"http://www.opengis.net/kml/2.2\"><tilt>45.0</tilt></LookAt>"
        );
    }
}
