//! Typed KML object model
//!
//! Each abstract schema group is a closed enum ([`Feature`], [`Geometry`],
//! [`AbstractView`], [`TimePrimitive`], [`StyleSelector`], [`TourPrimitive`])
//! whose variants wrap one struct per concrete element. Values are plain
//! owned data: build them with `Default` plus the `with_*` builders, which
//! consume the value and return the updated one.
//!
//! Every element struct carries `extensions`, the ordered list of child
//! elements the decoder could not place in a known field. They are written
//! back verbatim after the known fields.

use crate::xml::XmlAttribute;
use serde::{Deserialize, Serialize};

/// Generates consuming `with_*` / `add_*` builders for struct fields
///
/// `opt` sets an `Option` field, `push` appends to a `Vec` field and `set`
/// assigns a plain field.
macro_rules! setters {
    (@one $method:ident ($($field:ident).+) opt $fty:ty) => {
        #[doc = concat!("Set `", stringify!($($field).+), "`")]
        #[must_use]
        pub fn $method(mut self, value: impl Into<$fty>) -> Self {
            self.$($field).+ = Some(value.into());
            self
        }
    };
    (@one $method:ident ($($field:ident).+) push $fty:ty) => {
        #[doc = concat!("Append to `", stringify!($($field).+), "`")]
        #[must_use]
        pub fn $method(mut self, value: impl Into<$fty>) -> Self {
            self.$($field).+.push(value.into());
            self
        }
    };
    (@one $method:ident ($($field:ident).+) set $fty:ty) => {
        #[doc = concat!("Set `", stringify!($($field).+), "`")]
        #[must_use]
        pub fn $method(mut self, value: impl Into<$fty>) -> Self {
            self.$($field).+ = value.into();
            self
        }
    };
    ($ty:ty { $($method:ident($($field:ident).+): $kind:tt $fty:ty),* $(,)? }) => {
        impl $ty {
            $(setters!(@one $method ($($field).+) $kind $fty);)*
        }
    };
}

/// Generates the object identity builders shared by every `Object` element
macro_rules! object_setters {
    ($($ty:ty),+ $(,)?) => {
        $(setters!($ty {
            with_id(object.id): opt String,
            with_target_id(object.target_id): opt String,
            with_extension(extensions): push crate::xml::XmlNode,
        });)+
    };
}

pub mod common;
pub mod feature;
pub mod geometry;
pub mod style;
pub mod tour;
pub mod values;
pub mod view;

pub use common::{
    AtomAuthor, AtomLink, Data, ExtendedData, LatLonAltBox, LatLonBox, LatLonQuad, Link, Lod,
    Region, Schema, SchemaData, SimpleData, SimpleField, Snippet,
};
pub use feature::{
    ChangeItem, Document, Feature, FeatureCommon, Folder, GroundOverlay, ImagePyramid, Kml,
    NetworkLink, NetworkLinkControl, Overlay, PhotoOverlay, Placemark, ScreenOverlay, Tour,
    Update, UpdateOperation, ViewVolume,
};
pub use geometry::{
    Alias, Geometry, LineString, LinearRing, Model, ModelLocation, MultiGeometry, Orientation,
    Point, Polygon, ResourceMap, Scale,
};
pub use style::{
    BalloonStyle, IconStyle, ItemIcon, LabelStyle, LineStyle, ListStyle, Pair, PolyStyle, Style,
    StyleMap, StyleSelector,
};
pub use tour::{AnimatedUpdate, FlyTo, Playlist, SoundCue, TourControl, TourPrimitive, Wait};
pub use values::{
    AltitudeMode, Color, ColorMode, Coordinate, DisplayMode, FlyToMode, GridOrigin,
    ItemIconState, ListItemType, PlayMode, RefreshMode, Shape, StyleState, Units, Vec2,
    ViewRefreshMode, Vocabulary,
};
pub use view::{AbstractView, Camera, LookAt, TimePrimitive, TimeSpan, TimeStamp};

/// Identity attributes carried by every `Object` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// `id` attribute
    pub id: Option<String>,
    /// `targetId` attribute, referencing the object a partial update changes
    pub target_id: Option<String>,
    /// Unrecognized attributes, written back after `id` and `targetId`
    #[serde(default)]
    pub attributes: Vec<XmlAttribute>,
}

impl ObjectInfo {
    /// Identity with only an `id`
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}
