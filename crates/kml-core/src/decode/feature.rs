//! Root element, features, network link control and updates

use super::common::{
    atom_author, atom_link, extended_data, lat_lon_box, lat_lon_quad, link, region, schema,
    snippet, vec2,
};
use super::fields::Fields;
use super::geometry::{geometry, point};
use super::style::style_selector;
use super::tour::playlist;
use super::view::{abstract_view, time_primitive};
use crate::model::{
    ChangeItem, Document, Feature, FeatureCommon, Folder, GroundOverlay, ImagePyramid, Kml,
    NetworkLink, NetworkLinkControl, Overlay, PhotoOverlay, Placemark, ScreenOverlay, Tour,
    Update, UpdateOperation, ViewVolume,
};
use crate::registry::{atom, gx, kml, resolve_node, xal, Capability, ElementKind, Namespace};
use crate::xml::{NamespaceDecl, XmlNode};
use log::{debug, warn};

pub(crate) fn root(node: &XmlNode) -> Kml {
    let fields = Fields::new(ElementKind::Kml, node);
    Kml {
        namespaces: node
            .namespaces
            .iter()
            .filter(|decl| is_extra_namespace(decl))
            .cloned()
            .collect(),
        hint: fields.attribute("hint"),
        attributes: fields.unrecognized_attributes(),
        network_link_control: fields
            .one(kml("NetworkLinkControl"))
            .map(network_link_control),
        feature: fields.group(Capability::Feature).and_then(feature),
        extensions: fields.into_extensions(),
    }
}

/// Declarations worth carrying besides the four the encoder always writes
fn is_extra_namespace(decl: &NamespaceDecl) -> bool {
    match decl.prefix.as_deref() {
        None | Some("kml" | "gx" | "atom" | "xal") => false,
        Some(_) => !decl.uri.is_empty() && Namespace::from_uri(Some(&decl.uri)).is_none(),
    }
}

pub(crate) fn feature(node: &XmlNode) -> Option<Feature> {
    let kind = resolve_node(node)?;
    if kind.capability() != Some(Capability::Feature) {
        return None;
    }
    let fields = Fields::new(kind, node);
    let common = feature_common(&fields);
    let feature = match kind {
        ElementKind::Document => Feature::Document(Document {
            common,
            schemas: fields.all(kml("Schema")).map(schema).collect(),
            features: children(&fields),
            extensions: fields.into_extensions(),
        }),
        ElementKind::Folder => Feature::Folder(Folder {
            common,
            features: children(&fields),
            extensions: fields.into_extensions(),
        }),
        ElementKind::Placemark => Feature::Placemark(Placemark {
            common,
            geometry: fields.group(Capability::Geometry).and_then(geometry),
            extensions: fields.into_extensions(),
        }),
        ElementKind::NetworkLink => Feature::NetworkLink(NetworkLink {
            common,
            refresh_visibility: fields.boolean(kml("refreshVisibility")),
            fly_to_view: fields.boolean(kml("flyToView")),
            link: fields
                .one(kml("Link"))
                .or_else(|| fields.one(kml("Url")))
                .map(link),
            extensions: network_link_extensions(fields),
        }),
        ElementKind::GroundOverlay => Feature::GroundOverlay(GroundOverlay {
            common,
            overlay: overlay(&fields),
            altitude: fields.double(kml("altitude")),
            altitude_mode: fields.altitude_mode(),
            lat_lon_box: fields.one(kml("LatLonBox")).map(lat_lon_box),
            lat_lon_quad: fields.one(gx("LatLonQuad")).map(lat_lon_quad),
            extensions: fields.into_extensions(),
        }),
        ElementKind::ScreenOverlay => Feature::ScreenOverlay(ScreenOverlay {
            common,
            overlay: overlay(&fields),
            overlay_xy: fields.one(kml("overlayXY")).map(vec2),
            screen_xy: fields.one(kml("screenXY")).map(vec2),
            rotation_xy: fields.one(kml("rotationXY")).map(vec2),
            size: fields.one(kml("size")).map(vec2),
            rotation: fields.double(kml("rotation")),
            extensions: fields.into_extensions(),
        }),
        ElementKind::PhotoOverlay => Feature::PhotoOverlay(PhotoOverlay {
            common,
            overlay: overlay(&fields),
            rotation: fields.double(kml("rotation")),
            view_volume: fields.one(kml("ViewVolume")).map(view_volume),
            image_pyramid: fields.one(kml("ImagePyramid")).map(image_pyramid),
            point: fields.one(kml("Point")).map(point),
            shape: fields.vocabulary(kml("shape")),
            extensions: fields.into_extensions(),
        }),
        ElementKind::Tour => Feature::Tour(Tour {
            common,
            playlist: fields.one(gx("Playlist")).map(playlist),
            extensions: fields.into_extensions(),
        }),
        _ => return None,
    };
    Some(feature)
}

/// A legacy `Url` next to `Link` is kept as extension content
fn network_link_extensions(fields: Fields<'_>) -> Vec<XmlNode> {
    let shadowed = fields.one(kml("Link")).and(fields.one(kml("Url")));
    let mut extensions = fields.into_extensions();
    if let Some(url) = shadowed {
        warn!("NetworkLink has both <Link> and <Url>, keeping <Url> as extension content");
        extensions.push(url.clone().without_declarations());
    }
    extensions
}

fn children(fields: &Fields<'_>) -> Vec<Feature> {
    fields.groups(Capability::Feature).filter_map(feature).collect()
}

fn feature_common(fields: &Fields<'_>) -> FeatureCommon {
    FeatureCommon {
        object: fields.object(),
        name: fields.text(kml("name")),
        visibility: fields.boolean(kml("visibility")),
        open: fields.boolean(kml("open")),
        atom_author: fields.one(atom("author")).map(atom_author),
        atom_link: fields.one(atom("link")).map(atom_link),
        address: fields.text(kml("address")),
        address_details: fields
            .one(xal("AddressDetails"))
            .map(|details| details.clone().without_declarations()),
        phone_number: fields.text(kml("phoneNumber")),
        snippet: fields.one(kml("Snippet")).map(snippet),
        description: fields.text(kml("description")),
        view: fields.group(Capability::AbstractView).and_then(abstract_view),
        time_primitive: fields
            .group(Capability::TimePrimitive)
            .and_then(time_primitive),
        style_url: fields.text(kml("styleUrl")),
        style_selectors: fields
            .groups(Capability::StyleSelector)
            .filter_map(style_selector)
            .collect(),
        region: fields.one(kml("Region")).map(region),
        extended_data: fields.one(kml("ExtendedData")).map(extended_data),
        balloon_visibility: fields.boolean(gx("balloonVisibility")),
    }
}

fn overlay(fields: &Fields<'_>) -> Overlay {
    Overlay {
        color: fields.color(kml("color")),
        draw_order: fields.number(kml("drawOrder")),
        icon: fields.one(kml("Icon")).map(link),
    }
}

fn view_volume(node: &XmlNode) -> ViewVolume {
    let fields = Fields::new(ElementKind::ViewVolume, node);
    ViewVolume {
        object: fields.object(),
        left_fov: fields.double(kml("leftFov")),
        right_fov: fields.double(kml("rightFov")),
        bottom_fov: fields.double(kml("bottomFov")),
        top_fov: fields.double(kml("topFov")),
        near: fields.double(kml("near")),
        extensions: fields.into_extensions(),
    }
}

fn image_pyramid(node: &XmlNode) -> ImagePyramid {
    let fields = Fields::new(ElementKind::ImagePyramid, node);
    ImagePyramid {
        object: fields.object(),
        tile_size: fields.number(kml("tileSize")),
        max_width: fields.number(kml("maxWidth")),
        max_height: fields.number(kml("maxHeight")),
        grid_origin: fields.vocabulary(kml("gridOrigin")),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn network_link_control(node: &XmlNode) -> NetworkLinkControl {
    let fields = Fields::new(ElementKind::NetworkLinkControl, node);
    NetworkLinkControl {
        min_refresh_period: fields.double(kml("minRefreshPeriod")),
        max_session_length: fields.double(kml("maxSessionLength")),
        cookie: fields.text(kml("cookie")),
        message: fields.text(kml("message")),
        link_name: fields.text(kml("linkName")),
        link_description: fields.text(kml("linkDescription")),
        link_snippet: fields.one(kml("linkSnippet")).map(snippet),
        expires: fields.text(kml("expires")).map(|t| t.trim().to_string()),
        update: fields.one(kml("Update")).map(update),
        view: fields.group(Capability::AbstractView).and_then(abstract_view),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn update(node: &XmlNode) -> Update {
    let fields = Fields::new(ElementKind::Update, node);
    let operations = fields
        .groups(Capability::UpdateOperation)
        .filter_map(|child| match resolve_node(child)? {
            ElementKind::Create => Some(UpdateOperation::Create(operation_features(
                ElementKind::Create,
                child,
            ))),
            ElementKind::Delete => Some(UpdateOperation::Delete(operation_features(
                ElementKind::Delete,
                child,
            ))),
            ElementKind::Change => Some(UpdateOperation::Change(change_items(child))),
            _ => None,
        })
        .collect();
    Update {
        target_href: fields.text(kml("targetHref")),
        operations,
        extensions: fields.into_extensions(),
    }
}

fn operation_features(kind: ElementKind, node: &XmlNode) -> Vec<Feature> {
    let fields = Fields::new(kind, node);
    children(&fields)
}

fn change_items(node: &XmlNode) -> Vec<ChangeItem> {
    let fields = Fields::new(ElementKind::Change, node);
    fields
        .children()
        .filter_map(|child| {
            let item = match resolve_node(child)?.capability()? {
                Capability::Feature => ChangeItem::Feature(feature(child)?),
                Capability::Geometry => ChangeItem::Geometry(geometry(child)?),
                Capability::StyleSelector => ChangeItem::StyleSelector(style_selector(child)?),
                Capability::AbstractView => ChangeItem::AbstractView(abstract_view(child)?),
                Capability::TimePrimitive => ChangeItem::TimePrimitive(time_primitive(child)?),
                Capability::TourPrimitive | Capability::UpdateOperation => {
                    debug!("Ignoring <{}> inside <Change>", child.qualified_name());
                    return None;
                }
            };
            Some(item)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Geometry, Shape};
    use crate::xml::parse_str;

    #[test]
    fn test_feature_common_fields() {
        let node = parse_str(
            r#"<Placemark xmlns="http://www.opengis.net/kml/2.2" xmlns:atom="http://www.w3.org/2005/Atom" xmlns:xal="urn:oasis:names:tc:ciq:xsdschema:xAL:2.0" id="pm">
                 <name>Opera House</name>
                 <visibility>0</visibility>
                 <atom:author><atom:name>J. Smith</atom:name></atom:author>
                 <atom:link href="http://example.com"/>
                 <xal:AddressDetails><xal:Country><xal:CountryName>Australia</xal:CountryName></xal:Country></xal:AddressDetails>
                 <Snippet maxLines="2">Short</Snippet>
                 <TimeStamp><when>1997-07-16T07:30:15Z</when></TimeStamp>
                 <styleUrl>#s</styleUrl>
                 <Point><coordinates>151.21037,-33.8526</coordinates></Point>
               </Placemark>"#,
        )
        .unwrap();
        let Some(Feature::Placemark(placemark)) = feature(&node) else {
            panic!("expected a placemark");
        };
        let common = &placemark.common;
        assert_eq!(common.object.id.as_deref(), Some("pm"));
        assert_eq!(common.name.as_deref(), Some("Opera House"));
        assert_eq!(common.visibility, Some(false));
        assert_eq!(
            common.atom_author.as_ref().and_then(|a| a.name.as_deref()),
            Some("J. Smith")
        );
        assert_eq!(common.atom_link.as_ref().map(|l| l.href.as_str()), Some("http://example.com"));
        assert_eq!(
            common.address_details.as_ref().map(|a| a.children.len()),
            Some(1)
        );
        assert_eq!(common.snippet.as_ref().and_then(|s| s.max_lines), Some(2));
        assert!(common.time_primitive.is_some());
        assert!(common.view.is_none());
        assert!(matches!(placemark.geometry, Some(Geometry::Point(_))));
        assert!(placemark.extensions.is_empty());
    }

    #[test]
    fn test_photo_overlay_point_is_not_a_geometry() {
        let node = parse_str(
            "<PhotoOverlay><shape>cylinder</shape><Point><coordinates>1,2,3</coordinates></Point></PhotoOverlay>",
        )
        .unwrap();
        let Some(Feature::PhotoOverlay(photo)) = feature(&node) else {
            panic!("expected a photo overlay");
        };
        assert_eq!(photo.shape, Some(Shape::Cylinder));
        assert!(photo.point.and_then(|p| p.coordinates).is_some());
    }

    #[test]
    fn test_update_keeps_operation_order() {
        let node = parse_str(
            r##"<Update><targetHref>http://example.com/a.kml</targetHref>
                 <Change><Placemark targetId="p1"><name>Renamed</name></Placemark></Change>
                 <Create><Folder targetId="f1"><Placemark><name>New</name></Placemark></Folder></Create>
                 <Delete><Placemark targetId="p2"/></Delete>
               </Update>"##,
        )
        .unwrap();
        let update = update(&node);
        assert_eq!(update.target_href.as_deref(), Some("http://example.com/a.kml"));
        let kinds: Vec<_> = update.operations.iter().map(UpdateOperation::kind).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::Change, ElementKind::Create, ElementKind::Delete]
        );
        let UpdateOperation::Change(items) = &update.operations[0] else {
            panic!("expected Change");
        };
        let ChangeItem::Feature(changed) = &items[0] else {
            panic!("expected a changed feature");
        };
        assert_eq!(changed.common().object.target_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_network_link_reads_legacy_url() {
        let node = parse_str(
            "<NetworkLink><flyToView>1</flyToView><Url><href>http://example.com/live.kml</href></Url></NetworkLink>",
        )
        .unwrap();
        let Some(Feature::NetworkLink(network_link)) = feature(&node) else {
            panic!("expected a network link");
        };
        assert_eq!(network_link.fly_to_view, Some(true));
        assert_eq!(
            network_link.link.and_then(|l| l.href).as_deref(),
            Some("http://example.com/live.kml")
        );
    }

    #[test]
    fn test_network_link_keeps_shadowed_url() {
        let node = parse_str(
            "<NetworkLink><Link><href>new.kml</href></Link><Url><href>old.kml</href></Url></NetworkLink>",
        )
        .unwrap();
        let Some(Feature::NetworkLink(network_link)) = feature(&node) else {
            panic!("expected a network link");
        };
        assert_eq!(network_link.link.and_then(|l| l.href).as_deref(), Some("new.kml"));
        assert_eq!(network_link.extensions.len(), 1);
        assert_eq!(network_link.extensions[0].name, "Url");
        assert_eq!(
            network_link.extensions[0].child(None, "href").map(XmlNode::text_content),
            Some("old.kml")
        );
    }
}
