//! Root element, features and partial updates

use super::common::{
    AtomAuthor, AtomLink, ExtendedData, LatLonBox, LatLonQuad, Link, Region, Schema, Snippet,
};
use super::geometry::{Geometry, Point};
use super::style::StyleSelector;
use super::tour::Playlist;
use super::values::{AltitudeMode, Color, GridOrigin, Shape, Vec2};
use super::view::{AbstractView, TimePrimitive};
use super::ObjectInfo;
use crate::registry::ElementKind;
use crate::xml::{NamespaceDecl, XmlAttribute, XmlNode};
use serde::{Deserialize, Serialize};

/// Root `kml` element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kml {
    /// Root namespace declarations other than kml, gx, atom and xal
    ///
    /// Extension content in foreign namespaces keeps its prefixes when these
    /// are written back on the root.
    pub namespaces: Vec<NamespaceDecl>,
    /// `hint` attribute (e.g. `target=sky`)
    pub hint: Option<String>,
    /// Unrecognized root attributes such as `xsi:schemaLocation`
    #[serde(default)]
    pub attributes: Vec<XmlAttribute>,
    /// Server control for network-linked documents
    pub network_link_control: Option<NetworkLinkControl>,
    /// Top-level feature
    pub feature: Option<Feature>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

impl Kml {
    /// Document holding a single feature
    #[must_use]
    pub fn new(feature: impl Into<Feature>) -> Self {
        Self {
            feature: Some(feature.into()),
            ..Self::default()
        }
    }
}

setters!(Kml {
    with_hint(hint): opt String,
    with_attribute(attributes): push XmlAttribute,
    with_network_link_control(network_link_control): opt NetworkLinkControl,
    with_feature(feature): opt Feature,
    with_namespace(namespaces): push NamespaceDecl,
    with_extension(extensions): push XmlNode,
});

/// Feature substitution group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    /// Container with shared styles and schemas
    Document(Document),
    /// Container
    Folder(Folder),
    /// Feature with a geometry
    Placemark(Placemark),
    /// Reference to remote KML
    NetworkLink(NetworkLink),
    /// Image draped on terrain
    GroundOverlay(GroundOverlay),
    /// Image fixed to the screen
    ScreenOverlay(ScreenOverlay),
    /// Photo placed in the scene
    PhotoOverlay(PhotoOverlay),
    /// `gx:Tour`
    Tour(Tour),
}

impl Feature {
    /// Concrete element kind
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Document(_) => ElementKind::Document,
            Self::Folder(_) => ElementKind::Folder,
            Self::Placemark(_) => ElementKind::Placemark,
            Self::NetworkLink(_) => ElementKind::NetworkLink,
            Self::GroundOverlay(_) => ElementKind::GroundOverlay,
            Self::ScreenOverlay(_) => ElementKind::ScreenOverlay,
            Self::PhotoOverlay(_) => ElementKind::PhotoOverlay,
            Self::Tour(_) => ElementKind::Tour,
        }
    }

    /// Fields every feature carries
    #[must_use]
    pub fn common(&self) -> &FeatureCommon {
        match self {
            Self::Document(f) => &f.common,
            Self::Folder(f) => &f.common,
            Self::Placemark(f) => &f.common,
            Self::NetworkLink(f) => &f.common,
            Self::GroundOverlay(f) => &f.common,
            Self::ScreenOverlay(f) => &f.common,
            Self::PhotoOverlay(f) => &f.common,
            Self::Tour(f) => &f.common,
        }
    }

    /// Feature name
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.common().name.as_deref()
    }

    /// Child features of a container; empty for leaf features
    #[must_use]
    pub fn children(&self) -> &[Feature] {
        match self {
            Self::Document(f) => &f.features,
            Self::Folder(f) => &f.features,
            _ => &[],
        }
    }

    /// Placemarks in document order, descending into containers
    #[must_use]
    pub fn placemarks(&self) -> Vec<&Placemark> {
        match self {
            Self::Placemark(placemark) => vec![placemark],
            other => other.children().iter().flat_map(Feature::placemarks).collect(),
        }
    }
}

macro_rules! feature_from {
    ($($variant:ident),+) => {
        $(impl From<$variant> for Feature {
            fn from(feature: $variant) -> Self {
                Self::$variant(feature)
            }
        })+
    };
}

feature_from!(
    Document,
    Folder,
    Placemark,
    NetworkLink,
    GroundOverlay,
    ScreenOverlay,
    PhotoOverlay,
    Tour
);

/// Fields shared by every feature, in schema order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCommon {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Label
    pub name: Option<String>,
    /// Drawn when loaded
    pub visibility: Option<bool>,
    /// Expanded in the list view
    pub open: Option<bool>,
    /// `atom:author`
    pub atom_author: Option<AtomAuthor>,
    /// `atom:link`
    pub atom_link: Option<AtomLink>,
    /// Unstructured address
    pub address: Option<String>,
    /// `xal:AddressDetails`, kept as markup
    pub address_details: Option<XmlNode>,
    /// Phone number
    pub phone_number: Option<String>,
    /// Short description
    pub snippet: Option<Snippet>,
    /// Balloon text (may hold HTML)
    pub description: Option<String>,
    /// Initial viewpoint
    pub view: Option<AbstractView>,
    /// Time association
    pub time_primitive: Option<TimePrimitive>,
    /// Reference to a shared style
    pub style_url: Option<String>,
    /// Inline styles
    pub style_selectors: Vec<StyleSelector>,
    /// Visibility region
    pub region: Option<Region>,
    /// Custom data
    pub extended_data: Option<ExtendedData>,
    /// `gx:balloonVisibility`
    pub balloon_visibility: Option<bool>,
}

/// Builders for the [`FeatureCommon`] fields, generated on each feature struct
macro_rules! feature_setters {
    ($($ty:ty),+ $(,)?) => {
        $(setters!($ty {
            with_id(common.object.id): opt String,
            with_target_id(common.object.target_id): opt String,
            with_name(common.name): opt String,
            with_visibility(common.visibility): opt bool,
            with_open(common.open): opt bool,
            with_atom_author(common.atom_author): opt AtomAuthor,
            with_atom_link(common.atom_link): opt AtomLink,
            with_address(common.address): opt String,
            with_address_details(common.address_details): opt XmlNode,
            with_phone_number(common.phone_number): opt String,
            with_snippet(common.snippet): opt Snippet,
            with_description(common.description): opt String,
            with_view(common.view): opt AbstractView,
            with_time_primitive(common.time_primitive): opt TimePrimitive,
            with_style_url(common.style_url): opt String,
            with_style_selector(common.style_selectors): push StyleSelector,
            with_region(common.region): opt Region,
            with_extended_data(common.extended_data): opt ExtendedData,
            with_balloon_visibility(common.balloon_visibility): opt bool,
            with_extension(extensions): push XmlNode,
        });)+
    };
}

/// `Document`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Shared feature fields
    pub common: FeatureCommon,
    /// Custom data schemas
    pub schemas: Vec<Schema>,
    /// Children in document order
    pub features: Vec<Feature>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Folder`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Shared feature fields
    pub common: FeatureCommon,
    /// Children in document order
    pub features: Vec<Feature>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Placemark`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    /// Shared feature fields
    pub common: FeatureCommon,
    /// Shape
    pub geometry: Option<Geometry>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `NetworkLink`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkLink {
    /// Shared feature fields
    pub common: FeatureCommon,
    /// Apply the linked visibility on refresh
    pub refresh_visibility: Option<bool>,
    /// Fly to the linked view on refresh
    pub fly_to_view: Option<bool>,
    /// Remote document (read from `Link` or legacy `Url`)
    pub link: Option<Link>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// Fields shared by the three overlays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Tint
    pub color: Option<Color>,
    /// Stacking order
    pub draw_order: Option<i32>,
    /// Image
    pub icon: Option<Link>,
}

/// `GroundOverlay`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundOverlay {
    /// Shared feature fields
    pub common: FeatureCommon,
    /// Shared overlay fields
    pub overlay: Overlay,
    /// Height above the ground
    pub altitude: Option<f64>,
    /// Interpretation of `altitude`
    pub altitude_mode: Option<AltitudeMode>,
    /// Rectangular placement
    pub lat_lon_box: Option<LatLonBox>,
    /// Four-corner placement
    pub lat_lon_quad: Option<LatLonQuad>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `ScreenOverlay`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenOverlay {
    /// Shared feature fields
    pub common: FeatureCommon,
    /// Shared overlay fields
    pub overlay: Overlay,
    /// Point of the image mapped to `screen_xy`
    pub overlay_xy: Option<Vec2>,
    /// Point of the screen
    pub screen_xy: Option<Vec2>,
    /// Rotation center
    pub rotation_xy: Option<Vec2>,
    /// Image size
    pub size: Option<Vec2>,
    /// Rotation in degrees
    pub rotation: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `PhotoOverlay`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoOverlay {
    /// Shared feature fields
    pub common: FeatureCommon,
    /// Shared overlay fields
    pub overlay: Overlay,
    /// Rotation in degrees
    pub rotation: Option<f64>,
    /// Field of view
    pub view_volume: Option<ViewVolume>,
    /// Tiling of large images
    pub image_pyramid: Option<ImagePyramid>,
    /// Camera position
    pub point: Option<Point>,
    /// Projection
    pub shape: Option<Shape>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `ViewVolume` of a photo overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewVolume {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Left field of view in degrees
    pub left_fov: Option<f64>,
    /// Right field of view in degrees
    pub right_fov: Option<f64>,
    /// Bottom field of view in degrees
    pub bottom_fov: Option<f64>,
    /// Top field of view in degrees
    pub top_fov: Option<f64>,
    /// Distance to the image plane
    pub near: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `ImagePyramid` of a photo overlay
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImagePyramid {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Tile edge in pixels
    pub tile_size: Option<i32>,
    /// Full image width
    pub max_width: Option<i32>,
    /// Full image height
    pub max_height: Option<i32>,
    /// Tile numbering origin
    pub grid_origin: Option<GridOrigin>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `gx:Tour`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Shared feature fields
    pub common: FeatureCommon,
    /// Steps
    pub playlist: Option<Playlist>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

feature_setters!(
    Document,
    Folder,
    Placemark,
    NetworkLink,
    GroundOverlay,
    ScreenOverlay,
    PhotoOverlay,
    Tour,
);

setters!(Document {
    with_schema(schemas): push Schema,
    with_feature(features): push Feature,
});

setters!(Folder {
    with_feature(features): push Feature,
});

setters!(Placemark {
    with_geometry(geometry): opt Geometry,
});

setters!(NetworkLink {
    with_refresh_visibility(refresh_visibility): opt bool,
    with_fly_to_view(fly_to_view): opt bool,
    with_link(link): opt Link,
});

macro_rules! overlay_setters {
    ($($ty:ty),+) => {
        $(setters!($ty {
            with_color(overlay.color): opt Color,
            with_draw_order(overlay.draw_order): opt i32,
            with_icon(overlay.icon): opt Link,
        });)+
    };
}

overlay_setters!(GroundOverlay, ScreenOverlay, PhotoOverlay);

setters!(GroundOverlay {
    with_altitude(altitude): opt f64,
    with_altitude_mode(altitude_mode): opt AltitudeMode,
    with_lat_lon_box(lat_lon_box): opt LatLonBox,
    with_lat_lon_quad(lat_lon_quad): opt LatLonQuad,
});

setters!(ScreenOverlay {
    with_overlay_xy(overlay_xy): opt Vec2,
    with_screen_xy(screen_xy): opt Vec2,
    with_rotation_xy(rotation_xy): opt Vec2,
    with_size(size): opt Vec2,
    with_rotation(rotation): opt f64,
});

setters!(PhotoOverlay {
    with_rotation(rotation): opt f64,
    with_view_volume(view_volume): opt ViewVolume,
    with_image_pyramid(image_pyramid): opt ImagePyramid,
    with_point(point): opt Point,
    with_shape(shape): opt Shape,
});

setters!(Tour {
    with_playlist(playlist): opt Playlist,
});

object_setters!(ViewVolume, ImagePyramid);

setters!(ViewVolume {
    with_left_fov(left_fov): opt f64,
    with_right_fov(right_fov): opt f64,
    with_bottom_fov(bottom_fov): opt f64,
    with_top_fov(top_fov): opt f64,
    with_near(near): opt f64,
});

setters!(ImagePyramid {
    with_tile_size(tile_size): opt i32,
    with_max_width(max_width): opt i32,
    with_max_height(max_height): opt i32,
    with_grid_origin(grid_origin): opt GridOrigin,
});

/// `NetworkLinkControl`: server-side control of a network-linked document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkLinkControl {
    /// Minimum seconds between fetches
    pub min_refresh_period: Option<f64>,
    /// Maximum seconds the link stays active
    pub max_session_length: Option<f64>,
    /// Appended to the next request
    pub cookie: Option<String>,
    /// One-off message to show
    pub message: Option<String>,
    /// Replacement link name
    pub link_name: Option<String>,
    /// Replacement link description
    pub link_description: Option<String>,
    /// Replacement link snippet
    pub link_snippet: Option<Snippet>,
    /// Expiry date-time, as written
    pub expires: Option<String>,
    /// Changes to previously loaded content
    pub update: Option<Update>,
    /// Viewpoint to fly to
    pub view: Option<AbstractView>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

setters!(NetworkLinkControl {
    with_min_refresh_period(min_refresh_period): opt f64,
    with_max_session_length(max_session_length): opt f64,
    with_cookie(cookie): opt String,
    with_message(message): opt String,
    with_link_name(link_name): opt String,
    with_link_description(link_description): opt String,
    with_link_snippet(link_snippet): opt Snippet,
    with_expires(expires): opt String,
    with_update(update): opt Update,
    with_view(view): opt AbstractView,
    with_extension(extensions): push XmlNode,
});

/// `Update`: ordered create/delete/change operations against `target_href`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Document the operations apply to
    pub target_href: Option<String>,
    /// Operations in document order
    pub operations: Vec<UpdateOperation>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

setters!(Update {
    with_target_href(target_href): opt String,
    with_operation(operations): push UpdateOperation,
    with_extension(extensions): push XmlNode,
});

/// One operation of an [`Update`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UpdateOperation {
    /// `Create`: add features to containers named by `targetId`
    Create(Vec<Feature>),
    /// `Delete`: remove features named by `targetId`
    Delete(Vec<Feature>),
    /// `Change`: replace fields of objects named by `targetId`
    Change(Vec<ChangeItem>),
}

impl UpdateOperation {
    /// Concrete element kind
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Create(_) => ElementKind::Create,
            Self::Delete(_) => ElementKind::Delete,
            Self::Change(_) => ElementKind::Change,
        }
    }
}

/// Object changed by a `Change` operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChangeItem {
    /// Changed feature
    Feature(Feature),
    /// Changed geometry
    Geometry(Geometry),
    /// Changed style
    StyleSelector(StyleSelector),
    /// Changed view
    AbstractView(AbstractView),
    /// Changed time
    TimePrimitive(TimePrimitive),
}

impl ChangeItem {
    /// Concrete element kind of the changed object
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Feature(item) => item.kind(),
            Self::Geometry(item) => item.kind(),
            Self::StyleSelector(item) => item.kind(),
            Self::AbstractView(item) => item.kind(),
            Self::TimePrimitive(item) => item.kind(),
        }
    }
}
