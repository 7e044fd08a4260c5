//! Elements shared by several features: links, regions, extended data, atom

use super::values::{AltitudeMode, Coordinate, RefreshMode, ViewRefreshMode};
use super::ObjectInfo;
use crate::xml::XmlNode;
use serde::{Deserialize, Serialize};

/// `atom:author`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomAuthor {
    /// `atom:name`
    pub name: Option<String>,
    /// `atom:uri`
    pub uri: Option<String>,
    /// `atom:email`
    pub email: Option<String>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `atom:link`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomLink {
    /// `href` attribute (required by the schema, empty when missing)
    pub href: String,
    /// `rel` attribute
    pub rel: Option<String>,
    /// `type` attribute
    pub mime_type: Option<String>,
    /// `hreflang` attribute
    pub hreflang: Option<String>,
    /// `title` attribute
    pub title: Option<String>,
    /// `length` attribute
    pub length: Option<u64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Snippet` / `linkSnippet`: short description text with a line limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snippet {
    /// `maxLines` attribute
    pub max_lines: Option<u32>,
    /// Text content
    pub text: String,
}

impl Snippet {
    /// Snippet without a line limit
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            max_lines: None,
            text: text.into(),
        }
    }
}

/// `Link` / `Icon` (and the legacy `Url`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Resource location (not resolved by the codec)
    pub href: Option<String>,
    /// Time-based refresh
    pub refresh_mode: Option<RefreshMode>,
    /// Seconds between refreshes
    pub refresh_interval: Option<f64>,
    /// View-based refresh
    pub view_refresh_mode: Option<ViewRefreshMode>,
    /// Seconds after camera stop before refreshing
    pub view_refresh_time: Option<f64>,
    /// Scaling of the view bounding box sent to the server
    pub view_bound_scale: Option<f64>,
    /// Query string template for view parameters
    pub view_format: Option<String>,
    /// Query string template for client parameters
    pub http_query: Option<String>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

impl Link {
    /// Link to a resource
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }
}

/// `Region`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Bounding volume
    pub lat_lon_alt_box: Option<LatLonAltBox>,
    /// Level of detail
    pub lod: Option<Lod>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `LatLonAltBox`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLonAltBox {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Northern latitude
    pub north: Option<f64>,
    /// Southern latitude
    pub south: Option<f64>,
    /// Eastern longitude
    pub east: Option<f64>,
    /// Western longitude
    pub west: Option<f64>,
    /// Lower altitude bound
    pub min_altitude: Option<f64>,
    /// Upper altitude bound
    pub max_altitude: Option<f64>,
    /// Interpretation of the altitude bounds
    pub altitude_mode: Option<AltitudeMode>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Lod`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lod {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Minimum projected size in pixels
    pub min_lod_pixels: Option<f64>,
    /// Maximum projected size in pixels
    pub max_lod_pixels: Option<f64>,
    /// Fade-in distance in pixels
    pub min_fade_extent: Option<f64>,
    /// Fade-out distance in pixels
    pub max_fade_extent: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `LatLonBox` of a ground overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLonBox {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Northern latitude
    pub north: Option<f64>,
    /// Southern latitude
    pub south: Option<f64>,
    /// Eastern longitude
    pub east: Option<f64>,
    /// Western longitude
    pub west: Option<f64>,
    /// Rotation in degrees
    pub rotation: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `gx:LatLonQuad`: four corners of a non-rectangular ground overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLonQuad {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Corners, counter-clockwise from the lower left
    pub coordinates: Vec<Coordinate>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `ExtendedData`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendedData {
    /// Untyped name/value pairs
    pub data: Vec<Data>,
    /// Typed data bound to a `Schema`
    pub schema_data: Vec<SchemaData>,
    /// Arbitrary namespaced content
    pub extensions: Vec<XmlNode>,
}

/// `Data`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Data {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// `name` attribute
    pub name: Option<String>,
    /// Display label
    pub display_name: Option<String>,
    /// Value text (empty when missing)
    pub value: String,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

impl Data {
    /// Named value
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
            ..Self::default()
        }
    }
}

/// `SchemaData`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaData {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// `schemaUrl` attribute
    pub schema_url: Option<String>,
    /// Field values
    pub simple_data: Vec<SimpleData>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `SimpleData`: one typed field value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleData {
    /// `name` attribute
    pub name: String,
    /// Value text
    pub value: String,
}

impl SimpleData {
    /// Field value
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// `Schema`: declaration of typed `SimpleData` fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schema {
    /// `id` attribute
    pub id: Option<String>,
    /// `name` attribute
    pub name: Option<String>,
    /// Declared fields
    pub simple_fields: Vec<SimpleField>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `SimpleField`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleField {
    /// `type` attribute (`string`, `int`, `double`, ...)
    pub field_type: Option<String>,
    /// `name` attribute
    pub name: Option<String>,
    /// Display label
    pub display_name: Option<String>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

object_setters!(Link, Region, LatLonAltBox, Lod, LatLonBox, LatLonQuad, Data, SchemaData);

setters!(AtomAuthor {
    with_name(name): opt String,
    with_uri(uri): opt String,
    with_email(email): opt String,
});

setters!(AtomLink {
    with_href(href): set String,
    with_rel(rel): opt String,
    with_mime_type(mime_type): opt String,
    with_title(title): opt String,
});

setters!(Link {
    with_href(href): opt String,
    with_refresh_mode(refresh_mode): opt RefreshMode,
    with_refresh_interval(refresh_interval): opt f64,
    with_view_refresh_mode(view_refresh_mode): opt ViewRefreshMode,
    with_view_refresh_time(view_refresh_time): opt f64,
    with_view_bound_scale(view_bound_scale): opt f64,
    with_view_format(view_format): opt String,
    with_http_query(http_query): opt String,
});

setters!(Region {
    with_lat_lon_alt_box(lat_lon_alt_box): opt LatLonAltBox,
    with_lod(lod): opt Lod,
});

setters!(LatLonAltBox {
    with_north(north): opt f64,
    with_south(south): opt f64,
    with_east(east): opt f64,
    with_west(west): opt f64,
    with_min_altitude(min_altitude): opt f64,
    with_max_altitude(max_altitude): opt f64,
    with_altitude_mode(altitude_mode): opt AltitudeMode,
});

setters!(Lod {
    with_min_lod_pixels(min_lod_pixels): opt f64,
    with_max_lod_pixels(max_lod_pixels): opt f64,
    with_min_fade_extent(min_fade_extent): opt f64,
    with_max_fade_extent(max_fade_extent): opt f64,
});

setters!(LatLonBox {
    with_north(north): opt f64,
    with_south(south): opt f64,
    with_east(east): opt f64,
    with_west(west): opt f64,
    with_rotation(rotation): opt f64,
});

setters!(LatLonQuad {
    with_coordinate(coordinates): push Coordinate,
});

setters!(ExtendedData {
    with_data(data): push Data,
    with_schema_data(schema_data): push SchemaData,
});

setters!(Data {
    with_display_name(display_name): opt String,
});

setters!(SchemaData {
    with_schema_url(schema_url): opt String,
    with_simple_data(simple_data): push SimpleData,
});

setters!(Schema {
    with_id(id): opt String,
    with_name(name): opt String,
    with_simple_field(simple_fields): push SimpleField,
});

setters!(SimpleField {
    with_field_type(field_type): opt String,
    with_name(name): opt String,
    with_display_name(display_name): opt String,
});
