//! Shared elements: links, regions, extended data, atom

use super::builder::NodeBuilder;
use super::Encode;
use crate::model::{
    AtomAuthor, AtomLink, Data, ExtendedData, LatLonAltBox, LatLonBox, LatLonQuad, Link, Lod,
    Region, Schema, SchemaData, SimpleData, SimpleField,
};
use crate::registry::{atom, kml, ElementKind};
use crate::xml::XmlNode;

/// `Link` fields under the given element (`Link` or `Icon`)
pub(crate) fn link_node(kind: ElementKind, link: &Link) -> XmlNode {
    NodeBuilder::new(kind)
        .object(&link.object)
        .text(kml("href"), link.href.as_deref())
        .vocabulary(kml("refreshMode"), link.refresh_mode.as_ref())
        .double(kml("refreshInterval"), link.refresh_interval)
        .vocabulary(kml("viewRefreshMode"), link.view_refresh_mode.as_ref())
        .double(kml("viewRefreshTime"), link.view_refresh_time)
        .double(kml("viewBoundScale"), link.view_bound_scale)
        .text(kml("viewFormat"), link.view_format.as_deref())
        .text(kml("httpQuery"), link.http_query.as_deref())
        .extensions(&link.extensions)
        .build()
}

impl Encode for Link {
    fn to_node(&self) -> XmlNode {
        link_node(ElementKind::Link, self)
    }
}

impl Encode for Region {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Region)
            .object(&self.object)
            .encoded(self.lat_lon_alt_box.as_ref())
            .encoded(self.lod.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for LatLonAltBox {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::LatLonAltBox)
            .object(&self.object)
            .double(kml("north"), self.north)
            .double(kml("south"), self.south)
            .double(kml("east"), self.east)
            .double(kml("west"), self.west)
            .double(kml("minAltitude"), self.min_altitude)
            .double(kml("maxAltitude"), self.max_altitude)
            .altitude_mode(self.altitude_mode.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Lod {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Lod)
            .object(&self.object)
            .double(kml("minLodPixels"), self.min_lod_pixels)
            .double(kml("maxLodPixels"), self.max_lod_pixels)
            .double(kml("minFadeExtent"), self.min_fade_extent)
            .double(kml("maxFadeExtent"), self.max_fade_extent)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for LatLonBox {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::LatLonBox)
            .object(&self.object)
            .double(kml("north"), self.north)
            .double(kml("south"), self.south)
            .double(kml("east"), self.east)
            .double(kml("west"), self.west)
            .double(kml("rotation"), self.rotation)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for LatLonQuad {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::LatLonQuad)
            .object(&self.object)
            .coordinates(&self.coordinates)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for ExtendedData {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::ExtendedData)
            .all(&self.data)
            .all(&self.schema_data)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Data {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Data)
            .object(&self.object)
            .attribute("name", self.name.as_deref())
            .text(kml("displayName"), self.display_name.as_deref())
            .text(kml("value"), Some(self.value.as_str()))
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for SchemaData {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::SchemaData)
            .object(&self.object)
            .attribute("schemaUrl", self.schema_url.as_deref())
            .all(&self.simple_data)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for SimpleData {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::SimpleData)
            .attribute("name", Some(self.name.as_str()))
            .build()
            .with_text(self.value.as_str())
    }
}

impl Encode for Schema {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Schema)
            .attribute("id", self.id.as_deref())
            .attribute("name", self.name.as_deref())
            .all(&self.simple_fields)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for SimpleField {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::SimpleField)
            .attribute("type", self.field_type.as_deref())
            .attribute("name", self.name.as_deref())
            .text(kml("displayName"), self.display_name.as_deref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for AtomAuthor {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::AtomAuthor)
            .text(atom("name"), self.name.as_deref())
            .text(atom("uri"), self.uri.as_deref())
            .text(atom("email"), self.email.as_deref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for AtomLink {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::AtomLink)
            .attribute("href", Some(self.href.as_str()))
            .attribute("rel", self.rel.as_deref())
            .attribute("type", self.mime_type.as_deref())
            .attribute("hreflang", self.hreflang.as_deref())
            .attribute("title", self.title.as_deref())
            .attribute("length", self.length)
            .extensions(&self.extensions)
            .build()
    }
}
