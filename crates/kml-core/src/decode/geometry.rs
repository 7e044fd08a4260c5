//! Geometry substitution group

use super::common::link;
use super::fields::Fields;
use crate::model::values::parse_coordinates;
use crate::model::{
    Alias, Coordinate, Geometry, LineString, LinearRing, Model, ModelLocation, MultiGeometry,
    Orientation, Point, Polygon, ResourceMap, Scale,
};
use crate::registry::{kml, resolve_node, Capability, ElementKind};
use crate::xml::XmlNode;
use log::warn;

pub(crate) fn geometry(node: &XmlNode) -> Option<Geometry> {
    let geometry = match resolve_node(node)? {
        ElementKind::Point => Geometry::Point(point(node)),
        ElementKind::LineString => Geometry::LineString(line_string(node)),
        ElementKind::LinearRing => Geometry::LinearRing(linear_ring(node)),
        ElementKind::Polygon => Geometry::Polygon(polygon(node)),
        ElementKind::MultiGeometry => Geometry::MultiGeometry(multi_geometry(node)),
        ElementKind::Model => Geometry::Model(model(node)),
        _ => return None,
    };
    Some(geometry)
}

fn coordinates(fields: &Fields<'_>) -> Vec<Coordinate> {
    fields
        .one(kml("coordinates"))
        .map(|c| parse_coordinates(c.text_content()))
        .unwrap_or_default()
}

pub(crate) fn point(node: &XmlNode) -> Point {
    let fields = Fields::new(ElementKind::Point, node);
    let coordinates = coordinates(&fields);
    if coordinates.len() > 1 {
        warn!(
            "Point has {} coordinate tuples, keeping the first",
            coordinates.len()
        );
    }
    Point {
        object: fields.object(),
        extrude: fields.boolean(kml("extrude")),
        altitude_mode: fields.altitude_mode(),
        coordinates: coordinates.first().copied(),
        extensions: fields.into_extensions(),
    }
}

fn line_string(node: &XmlNode) -> LineString {
    let fields = Fields::new(ElementKind::LineString, node);
    LineString {
        object: fields.object(),
        extrude: fields.boolean(kml("extrude")),
        tessellate: fields.boolean(kml("tessellate")),
        altitude_mode: fields.altitude_mode(),
        coordinates: coordinates(&fields),
        extensions: fields.into_extensions(),
    }
}

fn linear_ring(node: &XmlNode) -> LinearRing {
    let fields = Fields::new(ElementKind::LinearRing, node);
    LinearRing {
        object: fields.object(),
        extrude: fields.boolean(kml("extrude")),
        tessellate: fields.boolean(kml("tessellate")),
        altitude_mode: fields.altitude_mode(),
        coordinates: coordinates(&fields),
        extensions: fields.into_extensions(),
    }
}

/// Ring inside an `outerBoundaryIs` / `innerBoundaryIs` wrapper
fn boundary(kind: ElementKind, node: &XmlNode) -> Option<LinearRing> {
    let fields = Fields::new(kind, node);
    let ring = fields.one(kml("LinearRing")).map(linear_ring);
    if ring.is_none() {
        warn!("<{}> without a LinearRing", node.qualified_name());
    }
    ring
}

fn polygon(node: &XmlNode) -> Polygon {
    let fields = Fields::new(ElementKind::Polygon, node);
    Polygon {
        object: fields.object(),
        extrude: fields.boolean(kml("extrude")),
        tessellate: fields.boolean(kml("tessellate")),
        altitude_mode: fields.altitude_mode(),
        outer_boundary: fields
            .one(kml("outerBoundaryIs"))
            .and_then(|b| boundary(ElementKind::OuterBoundary, b)),
        inner_boundaries: fields
            .all(kml("innerBoundaryIs"))
            .filter_map(|b| boundary(ElementKind::InnerBoundary, b))
            .collect(),
        extensions: fields.into_extensions(),
    }
}

fn multi_geometry(node: &XmlNode) -> MultiGeometry {
    let fields = Fields::new(ElementKind::MultiGeometry, node);
    MultiGeometry {
        object: fields.object(),
        geometries: fields.groups(Capability::Geometry).filter_map(geometry).collect(),
        extensions: fields.into_extensions(),
    }
}

fn model(node: &XmlNode) -> Model {
    let fields = Fields::new(ElementKind::Model, node);
    Model {
        object: fields.object(),
        altitude_mode: fields.altitude_mode(),
        location: fields.one(kml("Location")).map(location),
        orientation: fields.one(kml("Orientation")).map(orientation),
        scale: fields.one(kml("Scale")).map(scale),
        link: fields.one(kml("Link")).map(link),
        resource_map: fields.one(kml("ResourceMap")).map(resource_map),
        extensions: fields.into_extensions(),
    }
}

fn location(node: &XmlNode) -> ModelLocation {
    let fields = Fields::new(ElementKind::Location, node);
    ModelLocation {
        object: fields.object(),
        longitude: fields.double(kml("longitude")),
        latitude: fields.double(kml("latitude")),
        altitude: fields.double(kml("altitude")),
        extensions: fields.into_extensions(),
    }
}

fn orientation(node: &XmlNode) -> Orientation {
    let fields = Fields::new(ElementKind::Orientation, node);
    Orientation {
        object: fields.object(),
        heading: fields.double(kml("heading")),
        tilt: fields.double(kml("tilt")),
        roll: fields.double(kml("roll")),
        extensions: fields.into_extensions(),
    }
}

fn scale(node: &XmlNode) -> Scale {
    let fields = Fields::new(ElementKind::Scale, node);
    Scale {
        object: fields.object(),
        x: fields.double(kml("x")),
        y: fields.double(kml("y")),
        z: fields.double(kml("z")),
        extensions: fields.into_extensions(),
    }
}

fn resource_map(node: &XmlNode) -> ResourceMap {
    let fields = Fields::new(ElementKind::ResourceMap, node);
    ResourceMap {
        object: fields.object(),
        aliases: fields.all(kml("Alias")).map(alias).collect(),
        extensions: fields.into_extensions(),
    }
}

fn alias(node: &XmlNode) -> Alias {
    let fields = Fields::new(ElementKind::Alias, node);
    Alias {
        object: fields.object(),
        target_href: fields.text(kml("targetHref")),
        source_href: fields.text(kml("sourceHref")),
        extensions: fields.into_extensions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AltitudeMode;
    use crate::xml::parse_str;

    #[test]
    fn test_polygon_with_holes() {
        let node = parse_str(
            "<Polygon><extrude>1</extrude><altitudeMode>relativeToGround</altitudeMode>
               <outerBoundaryIs><LinearRing><coordinates>0,0 1,0 1,1 0,0</coordinates></LinearRing></outerBoundaryIs>
               <innerBoundaryIs><LinearRing><coordinates>0.2,0.2 0.4,0.2 0.2,0.2</coordinates></LinearRing></innerBoundaryIs>
               <innerBoundaryIs><LinearRing><coordinates>0.6,0.6 0.8,0.6 0.6,0.6</coordinates></LinearRing></innerBoundaryIs>
             </Polygon>",
        )
        .unwrap();
        let Some(Geometry::Polygon(polygon)) = geometry(&node) else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.extrude, Some(true));
        assert_eq!(polygon.altitude_mode, Some(AltitudeMode::RelativeToGround));
        assert_eq!(polygon.outer_boundary.map(|r| r.coordinates.len()), Some(4));
        assert_eq!(polygon.inner_boundaries.len(), 2);
        assert_eq!(polygon.inner_boundaries[1].coordinates[0], Coordinate::new(0.6, 0.6));
    }

    #[test]
    fn test_gx_altitude_mode() {
        let node = parse_str(
            r#"<Point xmlns:gx="http://www.google.com/kml/ext/2.2"><gx:altitudeMode>clampToSeaFloor</gx:altitudeMode><coordinates>1,2</coordinates></Point>"#,
        )
        .unwrap();
        let point = point(&node);
        assert_eq!(point.altitude_mode, Some(AltitudeMode::ClampToSeaFloor));
        assert!(point.extensions.is_empty());
    }

    #[test]
    fn test_unknown_geometry_is_none() {
        let node = parse_str("<Triangle/>").unwrap();
        assert!(geometry(&node).is_none());
    }
}
