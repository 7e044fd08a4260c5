//! Geometry substitution group

use super::builder::NodeBuilder;
use super::Encode;
use crate::model::{
    Alias, Geometry, LineString, LinearRing, Model, ModelLocation, MultiGeometry, Orientation,
    Point, Polygon, ResourceMap, Scale,
};
use crate::registry::{kml, ElementKind};
use crate::xml::XmlNode;

impl Encode for Geometry {
    fn to_node(&self) -> XmlNode {
        match self {
            Self::Point(geometry) => geometry.to_node(),
            Self::LineString(geometry) => geometry.to_node(),
            Self::LinearRing(geometry) => geometry.to_node(),
            Self::Polygon(geometry) => geometry.to_node(),
            Self::MultiGeometry(geometry) => geometry.to_node(),
            Self::Model(geometry) => geometry.to_node(),
        }
    }
}

impl Encode for Point {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Point)
            .object(&self.object)
            .boolean(kml("extrude"), self.extrude)
            .altitude_mode(self.altitude_mode.as_ref())
            .coordinates(self.coordinates.as_slice())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for LineString {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::LineString)
            .object(&self.object)
            .boolean(kml("extrude"), self.extrude)
            .boolean(kml("tessellate"), self.tessellate)
            .altitude_mode(self.altitude_mode.as_ref())
            .coordinates(&self.coordinates)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for LinearRing {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::LinearRing)
            .object(&self.object)
            .boolean(kml("extrude"), self.extrude)
            .boolean(kml("tessellate"), self.tessellate)
            .altitude_mode(self.altitude_mode.as_ref())
            .coordinates(&self.coordinates)
            .extensions(&self.extensions)
            .build()
    }
}

fn boundary(kind: ElementKind, ring: &LinearRing) -> XmlNode {
    NodeBuilder::new(kind).encoded(Some(ring)).build()
}

impl Encode for Polygon {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Polygon)
            .object(&self.object)
            .boolean(kml("extrude"), self.extrude)
            .boolean(kml("tessellate"), self.tessellate)
            .altitude_mode(self.altitude_mode.as_ref())
            .child(
                self.outer_boundary
                    .as_ref()
                    .map(|ring| boundary(ElementKind::OuterBoundary, ring)),
            )
            .extend(
                self.inner_boundaries
                    .iter()
                    .map(|ring| boundary(ElementKind::InnerBoundary, ring)),
            )
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for MultiGeometry {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::MultiGeometry)
            .object(&self.object)
            .all(&self.geometries)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Model {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Model)
            .object(&self.object)
            .altitude_mode(self.altitude_mode.as_ref())
            .encoded(self.location.as_ref())
            .encoded(self.orientation.as_ref())
            .encoded(self.scale.as_ref())
            .encoded(self.link.as_ref())
            .encoded(self.resource_map.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for ModelLocation {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Location)
            .object(&self.object)
            .double(kml("longitude"), self.longitude)
            .double(kml("latitude"), self.latitude)
            .double(kml("altitude"), self.altitude)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Orientation {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Orientation)
            .object(&self.object)
            .double(kml("heading"), self.heading)
            .double(kml("tilt"), self.tilt)
            .double(kml("roll"), self.roll)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Scale {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Scale)
            .object(&self.object)
            .double(kml("x"), self.x)
            .double(kml("y"), self.y)
            .double(kml("z"), self.z)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for ResourceMap {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::ResourceMap)
            .object(&self.object)
            .all(&self.aliases)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Alias {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Alias)
            .object(&self.object)
            .text(kml("targetHref"), self.target_href.as_deref())
            .text(kml("sourceHref"), self.source_href.as_deref())
            .extensions(&self.extensions)
            .build()
    }
}
