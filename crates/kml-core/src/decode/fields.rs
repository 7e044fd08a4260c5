//! Layout-driven partitioning of an element's children

use crate::model::values::{parse_boolean, parse_double};
use crate::model::{AltitudeMode, Color, ObjectInfo, Vocabulary};
use crate::registry::{
    gx, kml, resolve_node, xal, Capability, ElementKind, Layout, Occurs, QualifiedTag, Slot,
};
use crate::xml::{XmlAttribute, XmlNode};
use log::{debug, warn};
use std::str::FromStr;

/// Children of one element, sorted into the fields of its layout
///
/// Children keep document order. Anything that fits no field goes to the
/// extension list; so do repeats of a single-valued field and markup nested
/// inside a text field.
pub(crate) struct Fields<'a> {
    node: &'a XmlNode,
    layout: Layout,
    placed: Vec<(usize, &'a XmlNode)>,
    extensions: Vec<XmlNode>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(kind: ElementKind, node: &'a XmlNode) -> Self {
        let layout = kind.layout();
        let mut placed: Vec<(usize, &XmlNode)> = Vec::new();
        let mut extensions = Vec::new();

        for child in &node.children {
            let position = layout.position_of(child).filter(|&position| {
                let single = layout
                    .field(position)
                    .is_some_and(|field| field.occurs == Occurs::Optional);
                !(single && placed.iter().any(|(p, _)| *p == position))
            });
            match position {
                Some(position) => {
                    if holds_text(child) && !child.children.is_empty() {
                        warn!(
                            "Moving markup out of <{}> inside <{}> into extension content",
                            child.qualified_name(),
                            node.qualified_name()
                        );
                        extensions.extend(
                            child
                                .children
                                .iter()
                                .map(|markup| markup.clone().without_declarations()),
                        );
                    }
                    placed.push((position, child));
                }
                None => {
                    debug!(
                        "Keeping <{}> inside <{}> as extension content",
                        child.qualified_name(),
                        node.qualified_name()
                    );
                    extensions.push(child.clone().without_declarations());
                }
            }
        }

        let keeps_attributes = kind == ElementKind::Kml || layout.has_attribute("targetId");
        if !keeps_attributes {
            for attr in &node.attributes {
                if attr.prefix.is_some() || !layout.has_attribute(&attr.name) {
                    debug!(
                        "Ignoring attribute {} on <{}>",
                        attr.qualified_name(),
                        node.qualified_name()
                    );
                }
            }
        }

        Self {
            node,
            layout,
            placed,
            extensions,
        }
    }

    /// Children placed in a known field, in document order
    pub(crate) fn children(&self) -> impl Iterator<Item = &'a XmlNode> + '_ {
        self.placed.iter().map(|(_, child)| *child)
    }

    /// All occurrences of an element field
    pub(crate) fn all(&self, tag: QualifiedTag) -> impl Iterator<Item = &'a XmlNode> + '_ {
        let position = self.layout.element_position(tag);
        self.at(position)
    }

    /// The occurrence of a single-valued element field
    pub(crate) fn one(&self, tag: QualifiedTag) -> Option<&'a XmlNode> {
        self.all(tag).next()
    }

    /// All members of a group field
    pub(crate) fn groups(&self, capability: Capability) -> impl Iterator<Item = &'a XmlNode> + '_ {
        let position = self.layout.group_position(capability);
        self.at(position)
    }

    /// The member of a single-valued group field
    pub(crate) fn group(&self, capability: Capability) -> Option<&'a XmlNode> {
        self.groups(capability).next()
    }

    fn at(&self, position: Option<usize>) -> impl Iterator<Item = &'a XmlNode> + '_ {
        self.placed
            .iter()
            .filter(move |(p, _)| Some(*p) == position)
            .map(|(_, child)| *child)
    }

    /// Text of a leaf field, as written
    pub(crate) fn text(&self, tag: QualifiedTag) -> Option<String> {
        self.one(tag).map(|child| child.text_content().to_string())
    }

    pub(crate) fn double(&self, tag: QualifiedTag) -> Option<f64> {
        let text = self.one(tag)?.text_content();
        let value = parse_double(text);
        if value.is_none() {
            warn!("Dropping <{}>: {text:?} is not a number", tag.local);
        }
        value
    }

    pub(crate) fn number<T: FromStr>(&self, tag: QualifiedTag) -> Option<T> {
        let text = self.one(tag)?.text_content();
        let value = text.trim().parse().ok();
        if value.is_none() {
            warn!("Dropping <{}>: {text:?} is not an integer", tag.local);
        }
        value
    }

    pub(crate) fn boolean(&self, tag: QualifiedTag) -> Option<bool> {
        let text = self.one(tag)?.text_content();
        let value = parse_boolean(text);
        if value.is_none() {
            warn!("Dropping <{}>: {text:?} is not a boolean", tag.local);
        }
        value
    }

    pub(crate) fn vocabulary<V: Vocabulary>(&self, tag: QualifiedTag) -> Option<V> {
        let value = V::from_literal(self.one(tag)?.text_content());
        if !value.is_recognized() {
            debug!("Keeping unrecognized <{}> literal {:?}", tag.local, value.as_str());
        }
        Some(value)
    }

    pub(crate) fn color(&self, tag: QualifiedTag) -> Option<Color> {
        let text = self.one(tag)?.text_content();
        let value = Color::from_hex(text);
        if value.is_none() {
            warn!("Dropping <{}>: {text:?} is not an aabbggrr color", tag.local);
        }
        value
    }

    /// `altitudeMode`, from either the kml or the gx element
    pub(crate) fn altitude_mode(&self) -> Option<AltitudeMode> {
        let standard = self.vocabulary(kml("altitudeMode"));
        let extension = self.vocabulary(gx("altitudeMode"));
        if standard.is_some() && extension.is_some() {
            warn!(
                "<{}> has both altitudeMode and gx:altitudeMode, keeping gx:altitudeMode",
                self.node.qualified_name()
            );
        }
        extension.or(standard)
    }

    /// Value of an unprefixed attribute
    pub(crate) fn attribute(&self, name: &str) -> Option<String> {
        self.node.attribute(name).map(str::to_string)
    }

    pub(crate) fn attribute_number<T: FromStr>(&self, name: &str) -> Option<T> {
        let text = self.node.attribute(name)?;
        let value = text.trim().parse().ok();
        if value.is_none() {
            warn!(
                "Dropping attribute {name}={text:?} on <{}>",
                self.node.qualified_name()
            );
        }
        value
    }

    pub(crate) fn attribute_double(&self, name: &str) -> Option<f64> {
        let text = self.node.attribute(name)?;
        let value = parse_double(text);
        if value.is_none() {
            warn!(
                "Dropping attribute {name}={text:?} on <{}>",
                self.node.qualified_name()
            );
        }
        value
    }

    /// `id`, `targetId` and any attribute the layout does not declare
    pub(crate) fn object(&self) -> ObjectInfo {
        ObjectInfo {
            id: self.attribute("id"),
            target_id: self.attribute("targetId"),
            attributes: self.unrecognized_attributes(),
        }
    }

    /// Attributes outside the layout, in document order
    pub(crate) fn unrecognized_attributes(&self) -> Vec<XmlAttribute> {
        self.node
            .attributes
            .iter()
            .filter(|attr| attr.prefix.is_some() || !self.layout.has_attribute(&attr.name))
            .inspect(|attr| {
                debug!(
                    "Keeping attribute {} on <{}>",
                    attr.qualified_name(),
                    self.node.qualified_name()
                );
            })
            .cloned()
            .collect()
    }

    /// Unplaced children, ready for the extension slot
    pub(crate) fn into_extensions(self) -> Vec<XmlNode> {
        self.extensions
    }
}

/// Whether a field element carries only text and attributes
///
/// `xal:AddressDetails` is kept as a whole subtree and `atom:link` keeps its
/// own extension content.
fn holds_text(child: &XmlNode) -> bool {
    match resolve_node(child) {
        Some(ElementKind::AtomLink) => false,
        Some(kind) => kind
            .layout()
            .fields()
            .all(|field| matches!(field.slot, Slot::Attribute(_))),
        None => !xal("AddressDetails").matches(child),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_str;

    #[test]
    fn test_duplicate_single_field_goes_to_extensions() {
        let node = parse_str("<Point><extrude>1</extrude><extrude>0</extrude></Point>").unwrap();
        let fields = Fields::new(ElementKind::Point, &node);
        assert_eq!(fields.boolean(kml("extrude")), Some(true));
        let extensions = fields.into_extensions();
        assert_eq!(extensions.len(), 1);
        assert_eq!(extensions[0].text_content(), "0");
    }

    #[test]
    fn test_repeated_field_keeps_order() {
        let node = parse_str(
            "<StyleMap><Pair><key>normal</key></Pair><foo/><Pair><key>highlight</key></Pair></StyleMap>",
        )
        .unwrap();
        let fields = Fields::new(ElementKind::StyleMap, &node);
        let keys: Vec<_> = fields
            .all(kml("Pair"))
            .filter_map(|pair| pair.children.first())
            .map(XmlNode::text_content)
            .collect();
        assert_eq!(keys, vec!["normal", "highlight"]);
        assert_eq!(fields.into_extensions()[0].name, "foo");
    }

    #[test]
    fn test_markup_in_text_field_goes_to_extensions() {
        let node = parse_str(
            "<Placemark><description>Hi <b>there</b></description><Snippet>s<i>x</i></Snippet></Placemark>",
        )
        .unwrap();
        let fields = Fields::new(ElementKind::Placemark, &node);
        assert_eq!(fields.text(kml("description")).as_deref(), Some("Hi "));
        let names: Vec<_> = fields
            .into_extensions()
            .into_iter()
            .map(|markup| (markup.name.clone(), markup.text_content().to_string()))
            .collect();
        assert_eq!(
            names,
            [
                ("b".to_string(), "there".to_string()),
                ("i".to_string(), "x".to_string())
            ]
        );
    }

    #[test]
    fn test_address_details_stay_whole() {
        let node = parse_str(
            r#"<Placemark xmlns:xal="urn:oasis:names:tc:ciq:xsdschema:xAL:2.0"><xal:AddressDetails><xal:Country/></xal:AddressDetails></Placemark>"#,
        )
        .unwrap();
        let fields = Fields::new(ElementKind::Placemark, &node);
        assert!(fields.into_extensions().is_empty());
    }

    #[test]
    fn test_unparseable_leaves_are_absent() {
        let node =
            parse_str("<LookAt><longitude>east</longitude><tilt> 45 </tilt></LookAt>").unwrap();
        let fields = Fields::new(ElementKind::LookAt, &node);
        assert_eq!(fields.double(kml("longitude")), None);
        assert_eq!(fields.double(kml("tilt")), Some(45.0));
        assert_eq!(fields.double(kml("range")), None);
    }
}
