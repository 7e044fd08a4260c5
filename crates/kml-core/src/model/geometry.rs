//! Geometry substitution group

use super::common::Link;
use super::values::{AltitudeMode, Coordinate};
use super::ObjectInfo;
use crate::registry::ElementKind;
use crate::xml::XmlNode;
use serde::{Deserialize, Serialize};

/// Shape payload of a placemark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Single position
    Point(Point),
    /// Open path
    LineString(LineString),
    /// Closed ring
    LinearRing(LinearRing),
    /// Area with optional holes
    Polygon(Polygon),
    /// Ordered collection of geometries
    MultiGeometry(MultiGeometry),
    /// 3D model reference
    Model(Model),
}

impl Geometry {
    /// Concrete element kind
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Point(_) => ElementKind::Point,
            Self::LineString(_) => ElementKind::LineString,
            Self::LinearRing(_) => ElementKind::LinearRing,
            Self::Polygon(_) => ElementKind::Polygon,
            Self::MultiGeometry(_) => ElementKind::MultiGeometry,
            Self::Model(_) => ElementKind::Model,
        }
    }

    /// All coordinates in document order, descending into multi-geometries
    ///
    /// Models contribute their location, polygons their outer then inner rings.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        match self {
            Self::Point(point) => point.coordinates.into_iter().collect(),
            Self::LineString(line) => line.coordinates.clone(),
            Self::LinearRing(ring) => ring.coordinates.clone(),
            Self::Polygon(polygon) => polygon
                .outer_boundary
                .iter()
                .chain(&polygon.inner_boundaries)
                .flat_map(|ring| ring.coordinates.iter().copied())
                .collect(),
            Self::MultiGeometry(multi) => multi
                .geometries
                .iter()
                .flat_map(Geometry::coordinates)
                .collect(),
            Self::Model(model) => model
                .location
                .as_ref()
                .and_then(|loc| Some(Coordinate {
                    longitude: loc.longitude?,
                    latitude: loc.latitude?,
                    altitude: loc.altitude,
                }))
                .into_iter()
                .collect(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(geometry: Point) -> Self {
        Self::Point(geometry)
    }
}

impl From<LineString> for Geometry {
    fn from(geometry: LineString) -> Self {
        Self::LineString(geometry)
    }
}

impl From<LinearRing> for Geometry {
    fn from(geometry: LinearRing) -> Self {
        Self::LinearRing(geometry)
    }
}

impl From<Polygon> for Geometry {
    fn from(geometry: Polygon) -> Self {
        Self::Polygon(geometry)
    }
}

impl From<MultiGeometry> for Geometry {
    fn from(geometry: MultiGeometry) -> Self {
        Self::MultiGeometry(geometry)
    }
}

impl From<Model> for Geometry {
    fn from(geometry: Model) -> Self {
        Self::Model(geometry)
    }
}

/// `Point`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Connect to the ground with a line
    pub extrude: Option<bool>,
    /// Interpretation of the altitude
    pub altitude_mode: Option<AltitudeMode>,
    /// Position
    pub coordinates: Option<Coordinate>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

impl Point {
    /// Point at a position
    #[must_use]
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinates: Some(coordinate),
            ..Self::default()
        }
    }
}

/// `LineString`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Connect to the ground
    pub extrude: Option<bool>,
    /// Follow the terrain
    pub tessellate: Option<bool>,
    /// Interpretation of altitudes
    pub altitude_mode: Option<AltitudeMode>,
    /// Vertices in order
    pub coordinates: Vec<Coordinate>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

impl LineString {
    /// Path through the given vertices
    #[must_use]
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }
}

/// `LinearRing`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearRing {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Connect to the ground
    pub extrude: Option<bool>,
    /// Follow the terrain
    pub tessellate: Option<bool>,
    /// Interpretation of altitudes
    pub altitude_mode: Option<AltitudeMode>,
    /// Vertices in order, first repeated last
    pub coordinates: Vec<Coordinate>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

impl LinearRing {
    /// Ring through the given vertices
    #[must_use]
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }
}

/// `Polygon`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Connect to the ground
    pub extrude: Option<bool>,
    /// Follow the terrain
    pub tessellate: Option<bool>,
    /// Interpretation of altitudes
    pub altitude_mode: Option<AltitudeMode>,
    /// `outerBoundaryIs` ring
    pub outer_boundary: Option<LinearRing>,
    /// `innerBoundaryIs` rings in order
    pub inner_boundaries: Vec<LinearRing>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `MultiGeometry`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiGeometry {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Members in document order
    pub geometries: Vec<Geometry>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

impl MultiGeometry {
    /// Collection of geometries, order preserved
    #[must_use]
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            ..Self::default()
        }
    }
}

/// `Model`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Interpretation of the location altitude
    pub altitude_mode: Option<AltitudeMode>,
    /// Origin of the model
    pub location: Option<ModelLocation>,
    /// Rotation of the model
    pub orientation: Option<Orientation>,
    /// Scaling along each axis
    pub scale: Option<Scale>,
    /// Model file (COLLADA)
    pub link: Option<Link>,
    /// Texture path remapping
    pub resource_map: Option<ResourceMap>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Location` of a model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelLocation {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Longitude
    pub longitude: Option<f64>,
    /// Latitude
    pub latitude: Option<f64>,
    /// Altitude
    pub altitude: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Orientation` of a model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Rotation about the z axis
    pub heading: Option<f64>,
    /// Rotation about the x axis
    pub tilt: Option<f64>,
    /// Rotation about the y axis
    pub roll: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Scale` of a model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// X factor
    pub x: Option<f64>,
    /// Y factor
    pub y: Option<f64>,
    /// Z factor
    pub z: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `ResourceMap`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceMap {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Path mappings
    pub aliases: Vec<Alias>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Alias`: maps a texture path inside the model file to an archive path
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alias {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Path in the archive
    pub target_href: Option<String>,
    /// Path referenced by the model
    pub source_href: Option<String>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

object_setters!(
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiGeometry,
    Model,
    ModelLocation,
    Orientation,
    Scale,
    ResourceMap,
    Alias,
);

setters!(Point {
    with_extrude(extrude): opt bool,
    with_altitude_mode(altitude_mode): opt AltitudeMode,
    with_coordinates(coordinates): opt Coordinate,
});

setters!(LineString {
    with_extrude(extrude): opt bool,
    with_tessellate(tessellate): opt bool,
    with_altitude_mode(altitude_mode): opt AltitudeMode,
    with_coordinate(coordinates): push Coordinate,
});

setters!(LinearRing {
    with_extrude(extrude): opt bool,
    with_tessellate(tessellate): opt bool,
    with_altitude_mode(altitude_mode): opt AltitudeMode,
    with_coordinate(coordinates): push Coordinate,
});

setters!(Polygon {
    with_extrude(extrude): opt bool,
    with_tessellate(tessellate): opt bool,
    with_altitude_mode(altitude_mode): opt AltitudeMode,
    with_outer_boundary(outer_boundary): opt LinearRing,
    with_inner_boundary(inner_boundaries): push LinearRing,
});

setters!(MultiGeometry {
    with_geometry(geometries): push Geometry,
});

setters!(Model {
    with_altitude_mode(altitude_mode): opt AltitudeMode,
    with_location(location): opt ModelLocation,
    with_orientation(orientation): opt Orientation,
    with_scale(scale): opt Scale,
    with_link(link): opt Link,
    with_resource_map(resource_map): opt ResourceMap,
});

setters!(ModelLocation {
    with_longitude(longitude): opt f64,
    with_latitude(latitude): opt f64,
    with_altitude(altitude): opt f64,
});

setters!(Orientation {
    with_heading(heading): opt f64,
    with_tilt(tilt): opt f64,
    with_roll(roll): opt f64,
});

setters!(Scale {
    with_x(x): opt f64,
    with_y(y): opt f64,
    with_z(z): opt f64,
});

setters!(ResourceMap {
    with_alias(aliases): push Alias,
});

setters!(Alias {
    with_target_href(target_href): opt String,
    with_source_href(source_href): opt String,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multigeometry_coordinates_in_order() {
        let multi = Geometry::from(MultiGeometry::new(vec![
            Point::new(Coordinate::new(1.0, 1.0)).into(),
            MultiGeometry::new(vec![
                Point::new(Coordinate::new(2.0, 2.0)).into(),
                LineString::new(vec![Coordinate::new(3.0, 3.0), Coordinate::new(4.0, 4.0)]).into(),
            ])
            .into(),
        ]));
        let longitudes: Vec<f64> = multi.coordinates().iter().map(|c| c.longitude).collect();
        assert_eq!(longitudes, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_polygon_coordinates_outer_then_inner() {
        let polygon = Polygon::default()
            .with_outer_boundary(LinearRing::new(vec![Coordinate::new(0.0, 0.0)]))
            .with_inner_boundary(LinearRing::new(vec![Coordinate::new(5.0, 5.0)]));
        let coords = Geometry::from(polygon).coordinates();
        assert_eq!(coords, vec![Coordinate::new(0.0, 0.0), Coordinate::new(5.0, 5.0)]);
    }

    #[test]
    fn test_builders_do_not_touch_other_fields() {
        let point = Point::new(Coordinate::new(1.0, 2.0)).with_id("p1");
        let raised = point.clone().with_extrude(true);
        assert_eq!(raised.object.id.as_deref(), Some("p1"));
        assert_eq!(raised.coordinates, point.coordinates);
        assert_eq!(point.extrude, None);
        assert_eq!(raised.extrude, Some(true));
    }
}
