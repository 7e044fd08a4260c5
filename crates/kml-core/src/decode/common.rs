//! Shared elements: links, regions, extended data, atom, screen vectors

use super::fields::Fields;
use crate::model::values::parse_coordinates;
use crate::model::{
    AtomAuthor, AtomLink, Data, ExtendedData, LatLonAltBox, LatLonBox, LatLonQuad, Link, Lod,
    Region, Schema, SchemaData, SimpleData, SimpleField, Snippet, Units, Vec2, Vocabulary,
};
use crate::registry::{atom, kml, resolve_node, ElementKind};
use crate::xml::XmlNode;

/// `Link`, `Icon` or legacy `Url`
pub(crate) fn link(node: &XmlNode) -> Link {
    let kind = resolve_node(node).unwrap_or(ElementKind::Link);
    let fields = Fields::new(kind, node);
    Link {
        object: fields.object(),
        href: fields.text(kml("href")),
        refresh_mode: fields.vocabulary(kml("refreshMode")),
        refresh_interval: fields.double(kml("refreshInterval")),
        view_refresh_mode: fields.vocabulary(kml("viewRefreshMode")),
        view_refresh_time: fields.double(kml("viewRefreshTime")),
        view_bound_scale: fields.double(kml("viewBoundScale")),
        view_format: fields.text(kml("viewFormat")),
        http_query: fields.text(kml("httpQuery")),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn region(node: &XmlNode) -> Region {
    let fields = Fields::new(ElementKind::Region, node);
    Region {
        object: fields.object(),
        lat_lon_alt_box: fields.one(kml("LatLonAltBox")).map(lat_lon_alt_box),
        lod: fields.one(kml("Lod")).map(lod),
        extensions: fields.into_extensions(),
    }
}

fn lat_lon_alt_box(node: &XmlNode) -> LatLonAltBox {
    let fields = Fields::new(ElementKind::LatLonAltBox, node);
    LatLonAltBox {
        object: fields.object(),
        north: fields.double(kml("north")),
        south: fields.double(kml("south")),
        east: fields.double(kml("east")),
        west: fields.double(kml("west")),
        min_altitude: fields.double(kml("minAltitude")),
        max_altitude: fields.double(kml("maxAltitude")),
        altitude_mode: fields.altitude_mode(),
        extensions: fields.into_extensions(),
    }
}

fn lod(node: &XmlNode) -> Lod {
    let fields = Fields::new(ElementKind::Lod, node);
    Lod {
        object: fields.object(),
        min_lod_pixels: fields.double(kml("minLodPixels")),
        max_lod_pixels: fields.double(kml("maxLodPixels")),
        min_fade_extent: fields.double(kml("minFadeExtent")),
        max_fade_extent: fields.double(kml("maxFadeExtent")),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn lat_lon_box(node: &XmlNode) -> LatLonBox {
    let fields = Fields::new(ElementKind::LatLonBox, node);
    LatLonBox {
        object: fields.object(),
        north: fields.double(kml("north")),
        south: fields.double(kml("south")),
        east: fields.double(kml("east")),
        west: fields.double(kml("west")),
        rotation: fields.double(kml("rotation")),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn lat_lon_quad(node: &XmlNode) -> LatLonQuad {
    let fields = Fields::new(ElementKind::LatLonQuad, node);
    LatLonQuad {
        object: fields.object(),
        coordinates: fields
            .one(kml("coordinates"))
            .map(|c| parse_coordinates(c.text_content()))
            .unwrap_or_default(),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn extended_data(node: &XmlNode) -> ExtendedData {
    let fields = Fields::new(ElementKind::ExtendedData, node);
    ExtendedData {
        data: fields.all(kml("Data")).map(data).collect(),
        schema_data: fields.all(kml("SchemaData")).map(schema_data).collect(),
        extensions: fields.into_extensions(),
    }
}

fn data(node: &XmlNode) -> Data {
    let fields = Fields::new(ElementKind::Data, node);
    Data {
        object: fields.object(),
        name: fields.attribute("name"),
        display_name: fields.text(kml("displayName")),
        value: fields.text(kml("value")).unwrap_or_default(),
        extensions: fields.into_extensions(),
    }
}

fn schema_data(node: &XmlNode) -> SchemaData {
    let fields = Fields::new(ElementKind::SchemaData, node);
    SchemaData {
        object: fields.object(),
        schema_url: fields.attribute("schemaUrl"),
        simple_data: fields.all(kml("SimpleData")).map(simple_data).collect(),
        extensions: fields.into_extensions(),
    }
}

fn simple_data(node: &XmlNode) -> SimpleData {
    let fields = Fields::new(ElementKind::SimpleData, node);
    SimpleData {
        name: fields.attribute("name").unwrap_or_default(),
        value: node.text_content().to_string(),
    }
}

pub(crate) fn schema(node: &XmlNode) -> Schema {
    let fields = Fields::new(ElementKind::Schema, node);
    Schema {
        id: fields.attribute("id"),
        name: fields.attribute("name"),
        simple_fields: fields.all(kml("SimpleField")).map(simple_field).collect(),
        extensions: fields.into_extensions(),
    }
}

fn simple_field(node: &XmlNode) -> SimpleField {
    let fields = Fields::new(ElementKind::SimpleField, node);
    SimpleField {
        field_type: fields.attribute("type"),
        name: fields.attribute("name"),
        display_name: fields.text(kml("displayName")),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn atom_author(node: &XmlNode) -> AtomAuthor {
    let fields = Fields::new(ElementKind::AtomAuthor, node);
    AtomAuthor {
        name: fields.text(atom("name")),
        uri: fields.text(atom("uri")),
        email: fields.text(atom("email")),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn atom_link(node: &XmlNode) -> AtomLink {
    let fields = Fields::new(ElementKind::AtomLink, node);
    AtomLink {
        href: fields.attribute("href").unwrap_or_default(),
        rel: fields.attribute("rel"),
        mime_type: fields.attribute("type"),
        hreflang: fields.attribute("hreflang"),
        title: fields.attribute("title"),
        length: fields.attribute_number("length"),
        extensions: fields.into_extensions(),
    }
}

/// `Snippet` or `linkSnippet`
pub(crate) fn snippet(node: &XmlNode) -> Snippet {
    let kind = resolve_node(node).unwrap_or(ElementKind::Snippet);
    let fields = Fields::new(kind, node);
    Snippet {
        max_lines: fields.attribute_number("maxLines"),
        text: node.text_content().to_string(),
    }
}

/// `hotSpot`, `overlayXY`, `screenXY`, `rotationXY` or `size`
pub(crate) fn vec2(node: &XmlNode) -> Vec2 {
    let kind = resolve_node(node).unwrap_or(ElementKind::HotSpot);
    let fields = Fields::new(kind, node);
    Vec2 {
        x: fields.attribute_double("x"),
        y: fields.attribute_double("y"),
        x_units: fields.attribute("xunits").map(|u| Units::from_literal(&u)),
        y_units: fields.attribute("yunits").map(|u| Units::from_literal(&u)),
    }
}
