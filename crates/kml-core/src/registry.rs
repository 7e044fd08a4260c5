//! Static tag registry
//!
//! Every concrete element the codec understands has an [`ElementKind`]. The
//! kind's [`Descriptor`] names its canonical tag, the abstract capability it
//! substitutes for (if any) and its [`Layout`]: the schema-ordered list of
//! fields, each classified as a single element, a repeated element, an
//! attribute, or an abstract group satisfied by any kind of that capability.
//!
//! The decoder uses layouts to partition an element's children into fields
//! (children that fit no field land in the extension slot). The encoder uses
//! the same descriptors for tag names, so both directions agree.

use crate::xml::XmlNode;

/// KML 2.2 namespace
pub const KML_NS: &str = "http://www.opengis.net/kml/2.2";
/// Google extension namespace
pub const GX_NS: &str = "http://www.google.com/kml/ext/2.2";
/// Atom namespace (author and link)
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
/// OASIS xAL address namespace
pub const XAL_NS: &str = "urn:oasis:names:tc:ciq:xsdschema:xAL:2.0";

/// Older namespaces read as KML 2.2
const LEGACY_KML_NS: &[&str] = &[
    "http://earth.google.com/kml/2.0",
    "http://earth.google.com/kml/2.1",
    "http://earth.google.com/kml/2.2",
];

/// The four namespaces of the covered schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Default KML namespace
    Kml,
    /// `gx` extensions
    Gx,
    /// `atom` author/link
    Atom,
    /// `xal` address details
    Xal,
}

impl Namespace {
    /// All namespaces, in the order they are declared on output
    pub const ALL: [Namespace; 4] = [Self::Kml, Self::Gx, Self::Atom, Self::Xal];

    /// Namespace URI
    #[inline]
    #[must_use]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Kml => KML_NS,
            Self::Gx => GX_NS,
            Self::Atom => ATOM_NS,
            Self::Xal => XAL_NS,
        }
    }

    /// Conventional prefix; KML is the default namespace
    #[inline]
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Kml => None,
            Self::Gx => Some("gx"),
            Self::Atom => Some("atom"),
            Self::Xal => Some("xal"),
        }
    }

    /// Map a namespace URI to a known namespace
    ///
    /// Elements without namespace are read as KML.
    #[must_use]
    pub fn from_uri(uri: Option<&str>) -> Option<Self> {
        match uri {
            None => Some(Self::Kml),
            Some(KML_NS) => Some(Self::Kml),
            Some(GX_NS) => Some(Self::Gx),
            Some(ATOM_NS) => Some(Self::Atom),
            Some(XAL_NS) => Some(Self::Xal),
            Some(uri) if LEGACY_KML_NS.contains(&uri) => Some(Self::Kml),
            Some(_) => None,
        }
    }

    /// Namespace of a parsed element
    ///
    /// An undeclared but conventional prefix (`gx:Tour` in a file that never
    /// declares `gx`) is read as the namespace the prefix conventionally names.
    #[must_use]
    pub fn of(node: &XmlNode) -> Option<Self> {
        if node.namespace.is_none() {
            match node.prefix.as_deref() {
                None | Some("kml") => return Some(Self::Kml),
                Some("gx") => return Some(Self::Gx),
                Some("atom") => return Some(Self::Atom),
                Some("xal") => return Some(Self::Xal),
                Some(_) => return None,
            }
        }
        Self::from_uri(node.namespace.as_deref())
    }

    /// Whether `uri` is one of the namespaces declared on every output root
    #[must_use]
    pub fn is_standard_uri(uri: &str) -> bool {
        Self::ALL.iter().any(|ns| ns.uri() == uri)
    }
}

/// A (namespace, local-name) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualifiedTag {
    /// Namespace
    pub namespace: Namespace,
    /// Local name
    pub local: &'static str,
}

impl QualifiedTag {
    /// Whether a parsed element carries this tag
    #[inline]
    #[must_use]
    pub fn matches(&self, node: &XmlNode) -> bool {
        node.name == self.local && Namespace::of(node) == Some(self.namespace)
    }

    /// Empty element with this tag
    #[must_use]
    pub fn node(&self) -> XmlNode {
        XmlNode::new(self.local).in_namespace(self.namespace.uri(), self.namespace.prefix())
    }
}

/// Abstract element groups resolved by concrete tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Document, Folder, Placemark, NetworkLink, overlays, gx:Tour
    Feature,
    /// Point, LineString, LinearRing, Polygon, MultiGeometry, Model
    Geometry,
    /// LookAt, Camera
    AbstractView,
    /// TimeSpan, TimeStamp
    TimePrimitive,
    /// Style, StyleMap
    StyleSelector,
    /// gx:AnimatedUpdate, gx:FlyTo, gx:SoundCue, gx:Wait, gx:TourControl
    TourPrimitive,
    /// Create, Delete, Change
    UpdateOperation,
}

/// How many times a field may occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurs {
    /// 0..1
    Optional,
    /// 0..n, order preserved
    Repeated,
}

/// Where a field lives in markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Child element with a fixed tag
    Element(QualifiedTag),
    /// Unprefixed attribute
    Attribute(&'static str),
    /// Child element of any kind with this capability
    Group(Capability),
}

/// One entry of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    /// Markup position
    pub slot: Slot,
    /// Cardinality
    pub occurs: Occurs,
}

/// Schema-ordered field list, stored as shared segments
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    segments: &'static [&'static [Field]],
}

impl Layout {
    /// Fields in schema order
    pub fn fields(&self) -> impl Iterator<Item = &'static Field> + '_ {
        self.segments.iter().flat_map(|segment| segment.iter())
    }

    /// Position of the element field with this tag
    #[must_use]
    pub fn element_position(&self, tag: QualifiedTag) -> Option<usize> {
        self.fields()
            .position(|f| matches!(f.slot, Slot::Element(t) if t == tag))
    }

    /// Position of the group field for this capability
    #[must_use]
    pub fn group_position(&self, capability: Capability) -> Option<usize> {
        self.fields()
            .position(|f| matches!(f.slot, Slot::Group(c) if c == capability))
    }

    /// Field at a position
    #[must_use]
    pub fn field(&self, position: usize) -> Option<&'static Field> {
        self.fields().nth(position)
    }

    /// Whether the layout declares this attribute
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.fields()
            .any(|f| matches!(f.slot, Slot::Attribute(a) if a == name))
    }

    /// Layout position a parsed child belongs to, if any
    ///
    /// Fixed element fields win over groups, so `Point` inside a
    /// `PhotoOverlay` is the overlay's point, not a geometry.
    #[must_use]
    pub fn position_of(&self, child: &XmlNode) -> Option<usize> {
        let namespace = Namespace::of(child)?;
        let tag = self.fields().position(|f| match f.slot {
            Slot::Element(t) => t.namespace == namespace && t.local == child.name,
            _ => false,
        });
        tag.or_else(|| {
            let capability = resolve_node(child)?.capability()?;
            self.group_position(capability)
        })
    }
}

/// Static description of one element kind
#[derive(Debug)]
pub struct Descriptor {
    /// Canonical tag
    pub tag: QualifiedTag,
    /// Abstract group the kind substitutes for
    pub capability: Option<Capability>,
    /// Schema-ordered fields
    pub layout: Layout,
}

// =============================================================================
// Layout building blocks
// =============================================================================

/// Tag in the kml namespace
pub(crate) const fn kml(local: &'static str) -> QualifiedTag {
    QualifiedTag {
        namespace: Namespace::Kml,
        local,
    }
}

/// Tag in the gx namespace
pub(crate) const fn gx(local: &'static str) -> QualifiedTag {
    QualifiedTag {
        namespace: Namespace::Gx,
        local,
    }
}

/// Tag in the atom namespace
pub(crate) const fn atom(local: &'static str) -> QualifiedTag {
    QualifiedTag {
        namespace: Namespace::Atom,
        local,
    }
}

/// Tag in the xal namespace
pub(crate) const fn xal(local: &'static str) -> QualifiedTag {
    QualifiedTag {
        namespace: Namespace::Xal,
        local,
    }
}

const fn one(tag: QualifiedTag) -> Field {
    Field {
        slot: Slot::Element(tag),
        occurs: Occurs::Optional,
    }
}

const fn many(tag: QualifiedTag) -> Field {
    Field {
        slot: Slot::Element(tag),
        occurs: Occurs::Repeated,
    }
}

const fn attr(name: &'static str) -> Field {
    Field {
        slot: Slot::Attribute(name),
        occurs: Occurs::Optional,
    }
}

const fn group(capability: Capability) -> Field {
    Field {
        slot: Slot::Group(capability),
        occurs: Occurs::Optional,
    }
}

const fn groups(capability: Capability) -> Field {
    Field {
        slot: Slot::Group(capability),
        occurs: Occurs::Repeated,
    }
}

const OBJECT: &[Field] = &[attr("id"), attr("targetId")];

const FEATURE: &[Field] = &[
    one(kml("name")),
    one(kml("visibility")),
    one(kml("open")),
    one(atom("author")),
    one(atom("link")),
    one(kml("address")),
    one(xal("AddressDetails")),
    one(kml("phoneNumber")),
    one(kml("Snippet")),
    one(kml("description")),
    group(Capability::AbstractView),
    group(Capability::TimePrimitive),
    one(kml("styleUrl")),
    groups(Capability::StyleSelector),
    one(kml("Region")),
    one(kml("ExtendedData")),
    one(gx("balloonVisibility")),
];

const OVERLAY: &[Field] = &[one(kml("color")), one(kml("drawOrder")), one(kml("Icon"))];

const ALTITUDE_MODE: &[Field] = &[one(kml("altitudeMode")), one(gx("altitudeMode"))];

const COLOR_STYLE: &[Field] = &[one(kml("color")), one(kml("colorMode"))];

const LINK: &[Field] = &[
    one(kml("href")),
    one(kml("refreshMode")),
    one(kml("refreshInterval")),
    one(kml("viewRefreshMode")),
    one(kml("viewRefreshTime")),
    one(kml("viewBoundScale")),
    one(kml("viewFormat")),
    one(kml("httpQuery")),
];

const VEC2: &[Field] = &[attr("x"), attr("y"), attr("xunits"), attr("yunits")];

const BOX: &[Field] = &[
    one(kml("north")),
    one(kml("south")),
    one(kml("east")),
    one(kml("west")),
];

macro_rules! descriptor {
    ($name:ident, $tag:expr, $capability:expr, [$($segment:expr),* $(,)?]) => {
        static $name: Descriptor = Descriptor {
            tag: $tag,
            capability: $capability,
            layout: Layout {
                segments: &[$($segment),*],
            },
        };
    };
}

use Capability as C;

descriptor!(KML, kml("kml"), None, [&[attr("hint"), one(kml("NetworkLinkControl")), group(C::Feature)]]);
descriptor!(NETWORK_LINK_CONTROL, kml("NetworkLinkControl"), None, [&[
    one(kml("minRefreshPeriod")),
    one(kml("maxSessionLength")),
    one(kml("cookie")),
    one(kml("message")),
    one(kml("linkName")),
    one(kml("linkDescription")),
    one(kml("linkSnippet")),
    one(kml("expires")),
    one(kml("Update")),
    group(C::AbstractView),
]]);
descriptor!(UPDATE, kml("Update"), None, [&[one(kml("targetHref")), groups(C::UpdateOperation)]]);
descriptor!(CREATE, kml("Create"), Some(C::UpdateOperation), [&[groups(C::Feature)]]);
descriptor!(DELETE, kml("Delete"), Some(C::UpdateOperation), [&[groups(C::Feature)]]);
descriptor!(CHANGE, kml("Change"), Some(C::UpdateOperation), [&[
    groups(C::Feature),
    groups(C::Geometry),
    groups(C::StyleSelector),
    groups(C::AbstractView),
    groups(C::TimePrimitive),
]]);

descriptor!(DOCUMENT, kml("Document"), Some(C::Feature), [OBJECT, FEATURE, &[many(kml("Schema")), groups(C::Feature)]]);
descriptor!(FOLDER, kml("Folder"), Some(C::Feature), [OBJECT, FEATURE, &[groups(C::Feature)]]);
descriptor!(PLACEMARK, kml("Placemark"), Some(C::Feature), [OBJECT, FEATURE, &[group(C::Geometry)]]);
descriptor!(NETWORK_LINK, kml("NetworkLink"), Some(C::Feature), [OBJECT, FEATURE, &[
    one(kml("refreshVisibility")),
    one(kml("flyToView")),
    one(kml("Link")),
    one(kml("Url")),
]]);
descriptor!(GROUND_OVERLAY, kml("GroundOverlay"), Some(C::Feature), [OBJECT, FEATURE, OVERLAY, &[one(kml("altitude"))], ALTITUDE_MODE, &[
    one(kml("LatLonBox")),
    one(gx("LatLonQuad")),
]]);
descriptor!(SCREEN_OVERLAY, kml("ScreenOverlay"), Some(C::Feature), [OBJECT, FEATURE, OVERLAY, &[
    one(kml("overlayXY")),
    one(kml("screenXY")),
    one(kml("rotationXY")),
    one(kml("size")),
    one(kml("rotation")),
]]);
descriptor!(PHOTO_OVERLAY, kml("PhotoOverlay"), Some(C::Feature), [OBJECT, FEATURE, OVERLAY, &[
    one(kml("rotation")),
    one(kml("ViewVolume")),
    one(kml("ImagePyramid")),
    one(kml("Point")),
    one(kml("shape")),
]]);
descriptor!(TOUR, gx("Tour"), Some(C::Feature), [OBJECT, FEATURE, &[one(gx("Playlist"))]]);

descriptor!(POINT, kml("Point"), Some(C::Geometry), [OBJECT, &[one(kml("extrude"))], ALTITUDE_MODE, &[one(kml("coordinates"))]]);
descriptor!(LINE_STRING, kml("LineString"), Some(C::Geometry), [OBJECT, &[one(kml("extrude")), one(kml("tessellate"))], ALTITUDE_MODE, &[one(kml("coordinates"))]]);
descriptor!(LINEAR_RING, kml("LinearRing"), Some(C::Geometry), [OBJECT, &[one(kml("extrude")), one(kml("tessellate"))], ALTITUDE_MODE, &[one(kml("coordinates"))]]);
descriptor!(POLYGON, kml("Polygon"), Some(C::Geometry), [OBJECT, &[one(kml("extrude")), one(kml("tessellate"))], ALTITUDE_MODE, &[
    one(kml("outerBoundaryIs")),
    many(kml("innerBoundaryIs")),
]]);
descriptor!(OUTER_BOUNDARY, kml("outerBoundaryIs"), None, [&[one(kml("LinearRing"))]]);
descriptor!(INNER_BOUNDARY, kml("innerBoundaryIs"), None, [&[one(kml("LinearRing"))]]);
descriptor!(MULTI_GEOMETRY, kml("MultiGeometry"), Some(C::Geometry), [OBJECT, &[groups(C::Geometry)]]);
descriptor!(MODEL, kml("Model"), Some(C::Geometry), [OBJECT, ALTITUDE_MODE, &[
    one(kml("Location")),
    one(kml("Orientation")),
    one(kml("Scale")),
    one(kml("Link")),
    one(kml("ResourceMap")),
]]);
descriptor!(LOCATION, kml("Location"), None, [OBJECT, &[one(kml("longitude")), one(kml("latitude")), one(kml("altitude"))]]);
descriptor!(ORIENTATION, kml("Orientation"), None, [OBJECT, &[one(kml("heading")), one(kml("tilt")), one(kml("roll"))]]);
descriptor!(SCALE, kml("Scale"), None, [OBJECT, &[one(kml("x")), one(kml("y")), one(kml("z"))]]);
descriptor!(RESOURCE_MAP, kml("ResourceMap"), None, [OBJECT, &[many(kml("Alias"))]]);
descriptor!(ALIAS, kml("Alias"), None, [OBJECT, &[one(kml("targetHref")), one(kml("sourceHref"))]]);

descriptor!(LOOK_AT, kml("LookAt"), Some(C::AbstractView), [OBJECT, &[
    one(kml("longitude")),
    one(kml("latitude")),
    one(kml("altitude")),
    one(kml("heading")),
    one(kml("tilt")),
    one(kml("range")),
], ALTITUDE_MODE]);
descriptor!(CAMERA, kml("Camera"), Some(C::AbstractView), [OBJECT, &[
    one(kml("longitude")),
    one(kml("latitude")),
    one(kml("altitude")),
    one(kml("heading")),
    one(kml("tilt")),
    one(kml("roll")),
], ALTITUDE_MODE]);
descriptor!(TIME_SPAN, kml("TimeSpan"), Some(C::TimePrimitive), [OBJECT, &[one(kml("begin")), one(kml("end"))]]);
descriptor!(TIME_STAMP, kml("TimeStamp"), Some(C::TimePrimitive), [OBJECT, &[one(kml("when"))]]);

descriptor!(STYLE, kml("Style"), Some(C::StyleSelector), [OBJECT, &[
    one(kml("IconStyle")),
    one(kml("LabelStyle")),
    one(kml("LineStyle")),
    one(kml("PolyStyle")),
    one(kml("BalloonStyle")),
    one(kml("ListStyle")),
]]);
descriptor!(STYLE_MAP, kml("StyleMap"), Some(C::StyleSelector), [OBJECT, &[many(kml("Pair"))]]);
descriptor!(PAIR, kml("Pair"), None, [OBJECT, &[one(kml("key")), one(kml("styleUrl")), group(C::StyleSelector)]]);
descriptor!(ICON_STYLE, kml("IconStyle"), None, [OBJECT, COLOR_STYLE, &[
    one(kml("scale")),
    one(kml("heading")),
    one(kml("Icon")),
    one(kml("hotSpot")),
]]);
descriptor!(LABEL_STYLE, kml("LabelStyle"), None, [OBJECT, COLOR_STYLE, &[one(kml("scale"))]]);
descriptor!(LINE_STYLE, kml("LineStyle"), None, [OBJECT, COLOR_STYLE, &[one(kml("width"))]]);
descriptor!(POLY_STYLE, kml("PolyStyle"), None, [OBJECT, COLOR_STYLE, &[one(kml("fill")), one(kml("outline"))]]);
descriptor!(BALLOON_STYLE, kml("BalloonStyle"), None, [OBJECT, &[
    one(kml("bgColor")),
    one(kml("textColor")),
    one(kml("text")),
    one(kml("displayMode")),
]]);
descriptor!(LIST_STYLE, kml("ListStyle"), None, [OBJECT, &[
    one(kml("listItemType")),
    one(kml("bgColor")),
    many(kml("ItemIcon")),
    one(kml("maxSnippetLines")),
]]);
descriptor!(ITEM_ICON, kml("ItemIcon"), None, [OBJECT, &[one(kml("state")), one(kml("href"))]]);

descriptor!(REGION, kml("Region"), None, [OBJECT, &[one(kml("LatLonAltBox")), one(kml("Lod"))]]);
descriptor!(LAT_LON_ALT_BOX, kml("LatLonAltBox"), None, [OBJECT, BOX, &[
    one(kml("minAltitude")),
    one(kml("maxAltitude")),
], ALTITUDE_MODE]);
descriptor!(LOD, kml("Lod"), None, [OBJECT, &[
    one(kml("minLodPixels")),
    one(kml("maxLodPixels")),
    one(kml("minFadeExtent")),
    one(kml("maxFadeExtent")),
]]);
descriptor!(LAT_LON_BOX, kml("LatLonBox"), None, [OBJECT, BOX, &[one(kml("rotation"))]]);
descriptor!(LAT_LON_QUAD, gx("LatLonQuad"), None, [OBJECT, &[one(kml("coordinates"))]]);
descriptor!(LINK_DESC, kml("Link"), None, [OBJECT, LINK]);
descriptor!(ICON, kml("Icon"), None, [OBJECT, LINK]);

descriptor!(EXTENDED_DATA, kml("ExtendedData"), None, [&[many(kml("Data")), many(kml("SchemaData"))]]);
descriptor!(DATA, kml("Data"), None, [OBJECT, &[attr("name"), one(kml("displayName")), one(kml("value"))]]);
descriptor!(SCHEMA_DATA, kml("SchemaData"), None, [OBJECT, &[attr("schemaUrl"), many(kml("SimpleData"))]]);
descriptor!(SIMPLE_DATA, kml("SimpleData"), None, [&[attr("name")]]);
descriptor!(SCHEMA, kml("Schema"), None, [&[attr("id"), attr("name"), many(kml("SimpleField"))]]);
descriptor!(SIMPLE_FIELD, kml("SimpleField"), None, [&[attr("type"), attr("name"), one(kml("displayName"))]]);

descriptor!(ATOM_AUTHOR, atom("author"), None, [&[one(atom("name")), one(atom("uri")), one(atom("email"))]]);
descriptor!(ATOM_LINK, atom("link"), None, [&[
    attr("href"),
    attr("rel"),
    attr("type"),
    attr("hreflang"),
    attr("title"),
    attr("length"),
]]);
descriptor!(SNIPPET, kml("Snippet"), None, [&[attr("maxLines")]]);
descriptor!(LINK_SNIPPET, kml("linkSnippet"), None, [&[attr("maxLines")]]);

descriptor!(HOT_SPOT, kml("hotSpot"), None, [VEC2]);
descriptor!(OVERLAY_XY, kml("overlayXY"), None, [VEC2]);
descriptor!(SCREEN_XY, kml("screenXY"), None, [VEC2]);
descriptor!(ROTATION_XY, kml("rotationXY"), None, [VEC2]);
descriptor!(SIZE, kml("size"), None, [VEC2]);

descriptor!(VIEW_VOLUME, kml("ViewVolume"), None, [OBJECT, &[
    one(kml("leftFov")),
    one(kml("rightFov")),
    one(kml("bottomFov")),
    one(kml("topFov")),
    one(kml("near")),
]]);
descriptor!(IMAGE_PYRAMID, kml("ImagePyramid"), None, [OBJECT, &[
    one(kml("tileSize")),
    one(kml("maxWidth")),
    one(kml("maxHeight")),
    one(kml("gridOrigin")),
]]);

descriptor!(PLAYLIST, gx("Playlist"), None, [OBJECT, &[groups(C::TourPrimitive)]]);
descriptor!(ANIMATED_UPDATE, gx("AnimatedUpdate"), Some(C::TourPrimitive), [OBJECT, &[one(gx("duration")), one(kml("Update"))]]);
descriptor!(FLY_TO, gx("FlyTo"), Some(C::TourPrimitive), [OBJECT, &[
    one(gx("duration")),
    one(gx("flyToMode")),
    group(C::AbstractView),
]]);
descriptor!(SOUND_CUE, gx("SoundCue"), Some(C::TourPrimitive), [OBJECT, &[one(kml("href")), one(gx("delayedStart"))]]);
descriptor!(WAIT, gx("Wait"), Some(C::TourPrimitive), [OBJECT, &[one(gx("duration"))]]);
descriptor!(TOUR_CONTROL, gx("TourControl"), Some(C::TourPrimitive), [OBJECT, &[one(gx("playMode"))]]);

/// Every element kind the codec decodes and encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ElementKind {
    Kml,
    NetworkLinkControl,
    Update,
    Create,
    Delete,
    Change,
    Document,
    Folder,
    Placemark,
    NetworkLink,
    GroundOverlay,
    ScreenOverlay,
    PhotoOverlay,
    Tour,
    Point,
    LineString,
    LinearRing,
    Polygon,
    OuterBoundary,
    InnerBoundary,
    MultiGeometry,
    Model,
    Location,
    Orientation,
    Scale,
    ResourceMap,
    Alias,
    LookAt,
    Camera,
    TimeSpan,
    TimeStamp,
    Style,
    StyleMap,
    Pair,
    IconStyle,
    LabelStyle,
    LineStyle,
    PolyStyle,
    BalloonStyle,
    ListStyle,
    ItemIcon,
    Region,
    LatLonAltBox,
    Lod,
    LatLonBox,
    LatLonQuad,
    Link,
    Icon,
    ExtendedData,
    Data,
    SchemaData,
    SimpleData,
    Schema,
    SimpleField,
    AtomAuthor,
    AtomLink,
    Snippet,
    LinkSnippet,
    HotSpot,
    OverlayXy,
    ScreenXy,
    RotationXy,
    Size,
    ViewVolume,
    ImagePyramid,
    Playlist,
    AnimatedUpdate,
    FlyTo,
    SoundCue,
    Wait,
    TourControl,
}

impl ElementKind {
    /// All kinds, used for tag resolution
    pub const ALL: &'static [ElementKind] = &[
        Self::Kml,
        Self::NetworkLinkControl,
        Self::Update,
        Self::Create,
        Self::Delete,
        Self::Change,
        Self::Document,
        Self::Folder,
        Self::Placemark,
        Self::NetworkLink,
        Self::GroundOverlay,
        Self::ScreenOverlay,
        Self::PhotoOverlay,
        Self::Tour,
        Self::Point,
        Self::LineString,
        Self::LinearRing,
        Self::Polygon,
        Self::OuterBoundary,
        Self::InnerBoundary,
        Self::MultiGeometry,
        Self::Model,
        Self::Location,
        Self::Orientation,
        Self::Scale,
        Self::ResourceMap,
        Self::Alias,
        Self::LookAt,
        Self::Camera,
        Self::TimeSpan,
        Self::TimeStamp,
        Self::Style,
        Self::StyleMap,
        Self::Pair,
        Self::IconStyle,
        Self::LabelStyle,
        Self::LineStyle,
        Self::PolyStyle,
        Self::BalloonStyle,
        Self::ListStyle,
        Self::ItemIcon,
        Self::Region,
        Self::LatLonAltBox,
        Self::Lod,
        Self::LatLonBox,
        Self::LatLonQuad,
        Self::Link,
        Self::Icon,
        Self::ExtendedData,
        Self::Data,
        Self::SchemaData,
        Self::SimpleData,
        Self::Schema,
        Self::SimpleField,
        Self::AtomAuthor,
        Self::AtomLink,
        Self::Snippet,
        Self::LinkSnippet,
        Self::HotSpot,
        Self::OverlayXy,
        Self::ScreenXy,
        Self::RotationXy,
        Self::Size,
        Self::ViewVolume,
        Self::ImagePyramid,
        Self::Playlist,
        Self::AnimatedUpdate,
        Self::FlyTo,
        Self::SoundCue,
        Self::Wait,
        Self::TourControl,
    ];

    /// Static descriptor of this kind
    #[must_use]
    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Self::Kml => &KML,
            Self::NetworkLinkControl => &NETWORK_LINK_CONTROL,
            Self::Update => &UPDATE,
            Self::Create => &CREATE,
            Self::Delete => &DELETE,
            Self::Change => &CHANGE,
            Self::Document => &DOCUMENT,
            Self::Folder => &FOLDER,
            Self::Placemark => &PLACEMARK,
            Self::NetworkLink => &NETWORK_LINK,
            Self::GroundOverlay => &GROUND_OVERLAY,
            Self::ScreenOverlay => &SCREEN_OVERLAY,
            Self::PhotoOverlay => &PHOTO_OVERLAY,
            Self::Tour => &TOUR,
            Self::Point => &POINT,
            Self::LineString => &LINE_STRING,
            Self::LinearRing => &LINEAR_RING,
            Self::Polygon => &POLYGON,
            Self::OuterBoundary => &OUTER_BOUNDARY,
            Self::InnerBoundary => &INNER_BOUNDARY,
            Self::MultiGeometry => &MULTI_GEOMETRY,
            Self::Model => &MODEL,
            Self::Location => &LOCATION,
            Self::Orientation => &ORIENTATION,
            Self::Scale => &SCALE,
            Self::ResourceMap => &RESOURCE_MAP,
            Self::Alias => &ALIAS,
            Self::LookAt => &LOOK_AT,
            Self::Camera => &CAMERA,
            Self::TimeSpan => &TIME_SPAN,
            Self::TimeStamp => &TIME_STAMP,
            Self::Style => &STYLE,
            Self::StyleMap => &STYLE_MAP,
            Self::Pair => &PAIR,
            Self::IconStyle => &ICON_STYLE,
            Self::LabelStyle => &LABEL_STYLE,
            Self::LineStyle => &LINE_STYLE,
            Self::PolyStyle => &POLY_STYLE,
            Self::BalloonStyle => &BALLOON_STYLE,
            Self::ListStyle => &LIST_STYLE,
            Self::ItemIcon => &ITEM_ICON,
            Self::Region => &REGION,
            Self::LatLonAltBox => &LAT_LON_ALT_BOX,
            Self::Lod => &LOD,
            Self::LatLonBox => &LAT_LON_BOX,
            Self::LatLonQuad => &LAT_LON_QUAD,
            Self::Link => &LINK_DESC,
            Self::Icon => &ICON,
            Self::ExtendedData => &EXTENDED_DATA,
            Self::Data => &DATA,
            Self::SchemaData => &SCHEMA_DATA,
            Self::SimpleData => &SIMPLE_DATA,
            Self::Schema => &SCHEMA,
            Self::SimpleField => &SIMPLE_FIELD,
            Self::AtomAuthor => &ATOM_AUTHOR,
            Self::AtomLink => &ATOM_LINK,
            Self::Snippet => &SNIPPET,
            Self::LinkSnippet => &LINK_SNIPPET,
            Self::HotSpot => &HOT_SPOT,
            Self::OverlayXy => &OVERLAY_XY,
            Self::ScreenXy => &SCREEN_XY,
            Self::RotationXy => &ROTATION_XY,
            Self::Size => &SIZE,
            Self::ViewVolume => &VIEW_VOLUME,
            Self::ImagePyramid => &IMAGE_PYRAMID,
            Self::Playlist => &PLAYLIST,
            Self::AnimatedUpdate => &ANIMATED_UPDATE,
            Self::FlyTo => &FLY_TO,
            Self::SoundCue => &SOUND_CUE,
            Self::Wait => &WAIT,
            Self::TourControl => &TOUR_CONTROL,
        }
    }

    /// Canonical tag
    #[inline]
    #[must_use]
    pub fn tag(self) -> QualifiedTag {
        self.descriptor().tag
    }

    /// Abstract group this kind substitutes for
    #[inline]
    #[must_use]
    pub fn capability(self) -> Option<Capability> {
        self.descriptor().capability
    }

    /// Schema-ordered fields
    #[inline]
    #[must_use]
    pub fn layout(self) -> Layout {
        self.descriptor().layout
    }
}

/// Legacy spellings read as another kind
const ALIASES: &[(QualifiedTag, ElementKind)] = &[(kml("Url"), ElementKind::Link)];

/// Resolve a (namespace, local-name) pair to an element kind
#[must_use]
pub fn resolve(namespace: Namespace, local: &str) -> Option<ElementKind> {
    ElementKind::ALL
        .iter()
        .copied()
        .find(|kind| {
            let tag = kind.tag();
            tag.namespace == namespace && tag.local == local
        })
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(tag, _)| tag.namespace == namespace && tag.local == local)
                .map(|(_, kind)| *kind)
        })
}

/// Resolve a parsed element to its kind
#[must_use]
pub fn resolve_node(node: &XmlNode) -> Option<ElementKind> {
    resolve(Namespace::of(node)?, &node.name)
}
