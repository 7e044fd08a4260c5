//! Features, network link control and updates

use super::builder::NodeBuilder;
use super::common::link_node;
use super::Encode;
use crate::model::{
    ChangeItem, Document, Feature, FeatureCommon, Folder, GroundOverlay, ImagePyramid,
    NetworkLink, NetworkLinkControl, Overlay, PhotoOverlay, Placemark, ScreenOverlay, Tour,
    Update, UpdateOperation, ViewVolume,
};
use crate::registry::{gx, kml, ElementKind};
use crate::xml::XmlNode;

/// Start a feature element with its shared fields written
fn feature_builder(kind: ElementKind, common: &FeatureCommon) -> NodeBuilder {
    NodeBuilder::new(kind)
        .object(&common.object)
        .text(kml("name"), common.name.as_deref())
        .boolean(kml("visibility"), common.visibility)
        .boolean(kml("open"), common.open)
        .encoded(common.atom_author.as_ref())
        .encoded(common.atom_link.as_ref())
        .text(kml("address"), common.address.as_deref())
        .child(common.address_details.clone())
        .text(kml("phoneNumber"), common.phone_number.as_deref())
        .snippet(kml("Snippet"), common.snippet.as_ref())
        .text(kml("description"), common.description.as_deref())
        .encoded(common.view.as_ref())
        .encoded(common.time_primitive.as_ref())
        .text(kml("styleUrl"), common.style_url.as_deref())
        .all(&common.style_selectors)
        .encoded(common.region.as_ref())
        .encoded(common.extended_data.as_ref())
        .boolean(gx("balloonVisibility"), common.balloon_visibility)
}

fn overlay_fields(builder: NodeBuilder, overlay: &Overlay) -> NodeBuilder {
    builder
        .color(kml("color"), overlay.color)
        .number(kml("drawOrder"), overlay.draw_order)
        .child(overlay.icon.as_ref().map(|icon| link_node(ElementKind::Icon, icon)))
}

impl Encode for Feature {
    fn to_node(&self) -> XmlNode {
        match self {
            Self::Document(feature) => feature.to_node(),
            Self::Folder(feature) => feature.to_node(),
            Self::Placemark(feature) => feature.to_node(),
            Self::NetworkLink(feature) => feature.to_node(),
            Self::GroundOverlay(feature) => feature.to_node(),
            Self::ScreenOverlay(feature) => feature.to_node(),
            Self::PhotoOverlay(feature) => feature.to_node(),
            Self::Tour(feature) => feature.to_node(),
        }
    }
}

impl Encode for Document {
    fn to_node(&self) -> XmlNode {
        feature_builder(ElementKind::Document, &self.common)
            .all(&self.schemas)
            .all(&self.features)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Folder {
    fn to_node(&self) -> XmlNode {
        feature_builder(ElementKind::Folder, &self.common)
            .all(&self.features)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Placemark {
    fn to_node(&self) -> XmlNode {
        feature_builder(ElementKind::Placemark, &self.common)
            .encoded(self.geometry.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for NetworkLink {
    fn to_node(&self) -> XmlNode {
        // the legacy `Url` spelling is read but never written
        feature_builder(ElementKind::NetworkLink, &self.common)
            .boolean(kml("refreshVisibility"), self.refresh_visibility)
            .boolean(kml("flyToView"), self.fly_to_view)
            .encoded(self.link.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for GroundOverlay {
    fn to_node(&self) -> XmlNode {
        let builder = feature_builder(ElementKind::GroundOverlay, &self.common);
        overlay_fields(builder, &self.overlay)
            .double(kml("altitude"), self.altitude)
            .altitude_mode(self.altitude_mode.as_ref())
            .encoded(self.lat_lon_box.as_ref())
            .encoded(self.lat_lon_quad.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for ScreenOverlay {
    fn to_node(&self) -> XmlNode {
        let builder = feature_builder(ElementKind::ScreenOverlay, &self.common);
        overlay_fields(builder, &self.overlay)
            .vec2(kml("overlayXY"), self.overlay_xy.as_ref())
            .vec2(kml("screenXY"), self.screen_xy.as_ref())
            .vec2(kml("rotationXY"), self.rotation_xy.as_ref())
            .vec2(kml("size"), self.size.as_ref())
            .double(kml("rotation"), self.rotation)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for PhotoOverlay {
    fn to_node(&self) -> XmlNode {
        let builder = feature_builder(ElementKind::PhotoOverlay, &self.common);
        overlay_fields(builder, &self.overlay)
            .double(kml("rotation"), self.rotation)
            .encoded(self.view_volume.as_ref())
            .encoded(self.image_pyramid.as_ref())
            .encoded(self.point.as_ref())
            .vocabulary(kml("shape"), self.shape.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for ViewVolume {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::ViewVolume)
            .object(&self.object)
            .double(kml("leftFov"), self.left_fov)
            .double(kml("rightFov"), self.right_fov)
            .double(kml("bottomFov"), self.bottom_fov)
            .double(kml("topFov"), self.top_fov)
            .double(kml("near"), self.near)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for ImagePyramid {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::ImagePyramid)
            .object(&self.object)
            .number(kml("tileSize"), self.tile_size)
            .number(kml("maxWidth"), self.max_width)
            .number(kml("maxHeight"), self.max_height)
            .vocabulary(kml("gridOrigin"), self.grid_origin.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Tour {
    fn to_node(&self) -> XmlNode {
        feature_builder(ElementKind::Tour, &self.common)
            .encoded(self.playlist.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for NetworkLinkControl {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::NetworkLinkControl)
            .double(kml("minRefreshPeriod"), self.min_refresh_period)
            .double(kml("maxSessionLength"), self.max_session_length)
            .text(kml("cookie"), self.cookie.as_deref())
            .text(kml("message"), self.message.as_deref())
            .text(kml("linkName"), self.link_name.as_deref())
            .text(kml("linkDescription"), self.link_description.as_deref())
            .snippet(kml("linkSnippet"), self.link_snippet.as_ref())
            .text(kml("expires"), self.expires.as_deref())
            .encoded(self.update.as_ref())
            .encoded(self.view.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Update {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Update)
            .text(kml("targetHref"), self.target_href.as_deref())
            .all(&self.operations)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for UpdateOperation {
    fn to_node(&self) -> XmlNode {
        let builder = NodeBuilder::new(self.kind());
        match self {
            Self::Create(features) | Self::Delete(features) => builder.all(features),
            Self::Change(items) => builder.all(items),
        }
        .build()
    }
}

impl Encode for ChangeItem {
    fn to_node(&self) -> XmlNode {
        match self {
            Self::Feature(item) => item.to_node(),
            Self::Geometry(item) => item.to_node(),
            Self::StyleSelector(item) => item.to_node(),
            Self::AbstractView(item) => item.to_node(),
            Self::TimePrimitive(item) => item.to_node(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Coordinate, LookAt, Point, Snippet, Style, TimeStamp, Units, Vec2,
    };
    use crate::registry::{ATOM_NS, GX_NS, KML_NS};

    fn names(node: &XmlNode) -> Vec<&str> {
        node.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_feature_common_order() {
        let placemark = Placemark::default()
            .with_id("pm")
            .with_geometry(Point::new(Coordinate::new(1.0, 2.0)))
            .with_style_url("#s")
            .with_time_primitive(TimeStamp::default().with_when("2024-01-01"))
            .with_snippet(Snippet::new("short"))
            .with_view(LookAt::default().with_range(100.0))
            .with_name("p")
            .with_balloon_visibility(false)
            .with_style_selector(Style::default().with_id("s"));
        let node = placemark.to_node();
        assert_eq!(node.attribute("id"), Some("pm"));
        assert_eq!(
            names(&node),
            [
                "name",
                "Snippet",
                "LookAt",
                "TimeStamp",
                "styleUrl",
                "Style",
                "balloonVisibility",
                "Point"
            ]
        );
        let balloon = &node.children[6];
        assert!(balloon.is(Some(GX_NS), "balloonVisibility"));
        assert_eq!(balloon.text_content(), "0");
    }

    #[test]
    fn test_atom_fields_in_atom_namespace() {
        let folder = Folder::default()
            .with_atom_author(crate::model::AtomAuthor::default().with_name("Ann"))
            .with_name("f");
        let node = folder.to_node();
        assert!(node.children[0].is(Some(KML_NS), "name"));
        assert!(node.children[1].is(Some(ATOM_NS), "author"));
        assert!(node.children[1].children[0].is(Some(ATOM_NS), "name"));
    }

    #[test]
    fn test_screen_overlay_order() {
        let overlay = ScreenOverlay::default()
            .with_rotation(12.0)
            .with_size(Vec2::new(0.0, 0.0, Units::Fraction))
            .with_overlay_xy(Vec2::new(0.5, 0.5, Units::Fraction))
            .with_icon(crate::model::Link::new("logo.png"))
            .with_draw_order(3);
        let node = overlay.to_node();
        assert_eq!(names(&node), ["drawOrder", "Icon", "overlayXY", "size", "rotation"]);
        assert_eq!(node.children[0].text_content(), "3");
        assert_eq!(node.children[1].children[0].text_content(), "logo.png");
    }

    #[test]
    fn test_update_keeps_operation_order() {
        let update = Update::default()
            .with_target_href("http://example.com/doc.kml")
            .with_operation(UpdateOperation::Delete(vec![Placemark::default()
                .with_target_id("old")
                .into()]))
            .with_operation(UpdateOperation::Create(vec![]))
            .with_operation(UpdateOperation::Change(vec![ChangeItem::Feature(
                Placemark::default().with_target_id("p").with_name("new").into(),
            )]));
        let node = update.to_node();
        assert_eq!(names(&node), ["targetHref", "Delete", "Create", "Change"]);
        assert_eq!(node.children[1].children[0].attribute("targetId"), Some("old"));
        assert!(node.children[2].children.is_empty());
    }

    #[test]
    fn test_network_link_writes_link() {
        let link = NetworkLink::default()
            .with_fly_to_view(true)
            .with_link(crate::model::Link::new("http://example.com/a.kml"));
        let node = link.to_node();
        assert_eq!(names(&node), ["flyToView", "Link"]);
    }
}
