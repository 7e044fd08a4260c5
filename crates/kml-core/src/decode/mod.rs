//! Markup tree to object model
//!
//! Every element is resolved through the [tag registry](crate::registry) and
//! its children are sorted into the fields of the kind's layout. Abstract
//! fields dispatch on the concrete tag of the child. Anything that fits no
//! field (unknown tags, foreign namespaces, surplus occurrences) is kept in
//! the owning node's `extensions`, so nothing the encoder can write back is
//! lost.
//!
//! Decoding never fails once the markup is well-formed: unparseable leaf
//! values become absent fields and are logged at `warn`.

mod common;
mod feature;
mod fields;
mod geometry;
mod style;
mod tour;
mod view;

use crate::error::Result;
use crate::model::{AbstractView, Feature, Geometry, Kml, StyleSelector, TimePrimitive, TourPrimitive};
use crate::registry::{resolve_node, ElementKind};
use crate::xml::{self, XmlNode};
use log::debug;

/// Decode a parsed document
///
/// Returns `None` when the root element is not `kml`.
#[must_use = "decoding produces a model that should be used"]
pub fn decode(root: &XmlNode) -> Option<Kml> {
    if resolve_node(root) != Some(ElementKind::Kml) {
        debug!("Root element <{}> is not kml", root.qualified_name());
        return None;
    }
    Some(feature::root(root))
}

/// Parse and decode KML text
///
/// # Errors
///
/// Returns an error only if the text is not well-formed markup.
///
/// # Examples
///
/// ```
/// use kml_core::decode_str;
///
/// let kml = decode_str(r#"<kml xmlns="http://www.opengis.net/kml/2.2">
///   <Placemark><name>Sydney</name></Placemark>
/// </kml>"#)?
/// .expect("kml root");
/// assert_eq!(kml.feature.and_then(|f| f.name().map(str::to_string)).as_deref(), Some("Sydney"));
/// # Ok::<(), kml_core::KmlError>(())
/// ```
pub fn decode_str(text: &str) -> Result<Option<Kml>> {
    Ok(decode(&xml::parse_str(text)?))
}

/// Parse and decode KML bytes (UTF-8, optional byte order mark)
///
/// # Errors
///
/// Returns an error if the bytes are not UTF-8 or not well-formed markup.
pub fn decode_bytes(bytes: &[u8]) -> Result<Option<Kml>> {
    Ok(decode(&xml::parse_bytes(bytes)?))
}

/// Decode a feature element (`Placemark`, `Document`, `gx:Tour`, ...)
#[must_use]
pub fn decode_feature(node: &XmlNode) -> Option<Feature> {
    feature::feature(node)
}

/// Decode a geometry element
#[must_use]
pub fn decode_geometry(node: &XmlNode) -> Option<Geometry> {
    geometry::geometry(node)
}

/// Decode a `LookAt` or `Camera`
#[must_use]
pub fn decode_view(node: &XmlNode) -> Option<AbstractView> {
    view::abstract_view(node)
}

/// Decode a `TimeSpan` or `TimeStamp`
#[must_use]
pub fn decode_time_primitive(node: &XmlNode) -> Option<TimePrimitive> {
    view::time_primitive(node)
}

/// Decode a `Style` or `StyleMap`
#[must_use]
pub fn decode_style_selector(node: &XmlNode) -> Option<StyleSelector> {
    style::style_selector(node)
}

/// Decode a tour primitive (`gx:FlyTo`, `gx:Wait`, ...)
#[must_use]
pub fn decode_tour_primitive(node: &XmlNode) -> Option<TourPrimitive> {
    tour::tour_primitive(node)
}
