//! Incremental construction of an element in schema order

use super::Encode;
use crate::model::values::{format_coordinates, format_double};
use crate::model::{AltitudeMode, Color, Coordinate, ObjectInfo, Snippet, Vec2, Vocabulary};
use crate::registry::{gx, kml, ElementKind, QualifiedTag};
use crate::xml::{XmlAttribute, XmlNode};
use std::fmt::Display;

/// Appends fields to an element; absent values write nothing
pub(crate) struct NodeBuilder {
    node: XmlNode,
}

impl NodeBuilder {
    pub(crate) fn new(kind: ElementKind) -> Self {
        Self::tag(kind.tag())
    }

    pub(crate) fn tag(tag: QualifiedTag) -> Self {
        Self { node: tag.node() }
    }

    /// `id` and `targetId` attributes
    pub(crate) fn object(self, object: &ObjectInfo) -> Self {
        self.attribute("id", object.id.as_deref())
            .attribute("targetId", object.target_id.as_deref())
            .attributes(&object.attributes)
    }

    /// Attributes carried over verbatim
    pub(crate) fn attributes(mut self, attributes: &[XmlAttribute]) -> Self {
        self.node.attributes.extend(attributes.iter().cloned());
        self
    }

    pub(crate) fn attribute(mut self, name: &str, value: Option<impl Display>) -> Self {
        if let Some(value) = value {
            self.node = self.node.with_attribute(name, value.to_string());
        }
        self
    }

    pub(crate) fn attribute_double(self, name: &str, value: Option<f64>) -> Self {
        self.attribute(name, value.map(format_double))
    }

    pub(crate) fn text(mut self, tag: QualifiedTag, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.node.children.push(tag.node().with_text(value));
        }
        self
    }

    pub(crate) fn double(self, tag: QualifiedTag, value: Option<f64>) -> Self {
        self.text(tag, value.map(format_double).as_deref())
    }

    pub(crate) fn number(self, tag: QualifiedTag, value: Option<impl Display>) -> Self {
        self.text(tag, value.map(|v| v.to_string()).as_deref())
    }

    pub(crate) fn boolean(self, tag: QualifiedTag, value: Option<bool>) -> Self {
        self.text(tag, value.map(|v| if v { "1" } else { "0" }))
    }

    pub(crate) fn vocabulary<V: Vocabulary>(self, tag: QualifiedTag, value: Option<&V>) -> Self {
        self.text(tag, value.map(Vocabulary::as_str))
    }

    pub(crate) fn color(self, tag: QualifiedTag, value: Option<Color>) -> Self {
        self.text(tag, value.map(|c| c.to_hex()).as_deref())
    }

    /// `altitudeMode`, or `gx:altitudeMode` for the sea-floor modes
    pub(crate) fn altitude_mode(self, value: Option<&AltitudeMode>) -> Self {
        match value {
            Some(mode) if mode.is_extension() => {
                self.vocabulary(gx("altitudeMode"), Some(mode))
            }
            other => self.vocabulary(kml("altitudeMode"), other),
        }
    }

    /// `coordinates`, omitted when empty
    pub(crate) fn coordinates(self, coordinates: &[Coordinate]) -> Self {
        if coordinates.is_empty() {
            return self;
        }
        self.text(kml("coordinates"), Some(format_coordinates(coordinates).as_str()))
    }

    pub(crate) fn snippet(mut self, tag: QualifiedTag, value: Option<&Snippet>) -> Self {
        if let Some(snippet) = value {
            let node = NodeBuilder::tag(tag)
                .attribute("maxLines", snippet.max_lines)
                .build()
                .with_text(snippet.text.as_str());
            self.node.children.push(node);
        }
        self
    }

    pub(crate) fn vec2(mut self, tag: QualifiedTag, value: Option<&Vec2>) -> Self {
        if let Some(vec) = value {
            let node = NodeBuilder::tag(tag)
                .attribute_double("x", vec.x)
                .attribute_double("y", vec.y)
                .attribute("xunits", vec.x_units.as_ref().map(Vocabulary::as_str))
                .attribute("yunits", vec.y_units.as_ref().map(Vocabulary::as_str))
                .build();
            self.node.children.push(node);
        }
        self
    }

    pub(crate) fn child(mut self, child: Option<XmlNode>) -> Self {
        self.node.children.extend(child);
        self
    }

    pub(crate) fn extend(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.node.children.extend(children);
        self
    }

    pub(crate) fn encoded<T: Encode>(self, value: Option<&T>) -> Self {
        self.child(value.map(Encode::to_node))
    }

    pub(crate) fn all<'a, T>(self, values: impl IntoIterator<Item = &'a T>) -> Self
    where
        T: Encode + 'a,
    {
        self.extend(values.into_iter().map(Encode::to_node))
    }

    /// Extension content, written verbatim after the known fields
    pub(crate) fn extensions(mut self, extensions: &[XmlNode]) -> Self {
        self.node.children.extend(extensions.iter().cloned());
        self
    }

    pub(crate) fn build(self) -> XmlNode {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{GX_NS, KML_NS};

    #[test]
    fn test_absent_values_write_nothing() {
        let node = NodeBuilder::new(ElementKind::LookAt)
            .object(&ObjectInfo::default())
            .double(kml("longitude"), None)
            .boolean(kml("extrude"), None)
            .altitude_mode(None)
            .coordinates(&[])
            .build();
        assert!(node.children.is_empty());
        assert!(node.attributes.is_empty());
    }

    #[test]
    fn test_leaf_rendering() {
        let node = NodeBuilder::new(ElementKind::Point)
            .object(&ObjectInfo::with_id("p"))
            .boolean(kml("extrude"), Some(true))
            .altitude_mode(Some(&AltitudeMode::RelativeToSeaFloor))
            .coordinates(&[Coordinate::with_altitude(151.21037, -33.8526, 12345.0)])
            .build();
        assert_eq!(node.attribute("id"), Some("p"));
        assert_eq!(node.children[0].text_content(), "1");
        assert!(node.children[1].is(Some(GX_NS), "altitudeMode"));
        assert!(node.children[2].is(Some(KML_NS), "coordinates"));
        assert_eq!(node.children[2].text_content(), "151.21037,-33.8526,12345.0");
    }
}
