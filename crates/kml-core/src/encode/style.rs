//! Style selectors and sub-styles

use super::builder::NodeBuilder;
use super::common::link_node;
use super::Encode;
use crate::model::{
    BalloonStyle, IconStyle, ItemIcon, LabelStyle, LineStyle, ListStyle, Pair, PolyStyle, Style,
    StyleMap, StyleSelector, Vocabulary,
};
use crate::registry::{kml, ElementKind};
use crate::xml::XmlNode;

impl Encode for StyleSelector {
    fn to_node(&self) -> XmlNode {
        match self {
            Self::Style(style) => style.to_node(),
            Self::StyleMap(map) => map.to_node(),
        }
    }
}

impl Encode for Style {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Style)
            .object(&self.object)
            .encoded(self.icon_style.as_ref())
            .encoded(self.label_style.as_ref())
            .encoded(self.line_style.as_ref())
            .encoded(self.poly_style.as_ref())
            .encoded(self.balloon_style.as_ref())
            .encoded(self.list_style.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for StyleMap {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::StyleMap)
            .object(&self.object)
            .all(&self.pairs)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Pair {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Pair)
            .object(&self.object)
            .vocabulary(kml("key"), self.key.as_ref())
            .text(kml("styleUrl"), self.style_url.as_deref())
            .encoded(self.style_selector.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for IconStyle {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::IconStyle)
            .object(&self.object)
            .color(kml("color"), self.color)
            .vocabulary(kml("colorMode"), self.color_mode.as_ref())
            .double(kml("scale"), self.scale)
            .double(kml("heading"), self.heading)
            .child(self.icon.as_ref().map(|icon| link_node(ElementKind::Icon, icon)))
            .vec2(kml("hotSpot"), self.hot_spot.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for LabelStyle {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::LabelStyle)
            .object(&self.object)
            .color(kml("color"), self.color)
            .vocabulary(kml("colorMode"), self.color_mode.as_ref())
            .double(kml("scale"), self.scale)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for LineStyle {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::LineStyle)
            .object(&self.object)
            .color(kml("color"), self.color)
            .vocabulary(kml("colorMode"), self.color_mode.as_ref())
            .double(kml("width"), self.width)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for PolyStyle {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::PolyStyle)
            .object(&self.object)
            .color(kml("color"), self.color)
            .vocabulary(kml("colorMode"), self.color_mode.as_ref())
            .boolean(kml("fill"), self.fill)
            .boolean(kml("outline"), self.outline)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for BalloonStyle {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::BalloonStyle)
            .object(&self.object)
            .color(kml("bgColor"), self.bg_color)
            .color(kml("textColor"), self.text_color)
            .text(kml("text"), self.text.as_deref())
            .vocabulary(kml("displayMode"), self.display_mode.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for ListStyle {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::ListStyle)
            .object(&self.object)
            .vocabulary(kml("listItemType"), self.list_item_type.as_ref())
            .color(kml("bgColor"), self.bg_color)
            .all(&self.item_icons)
            .number(kml("maxSnippetLines"), self.max_snippet_lines)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for ItemIcon {
    fn to_node(&self) -> XmlNode {
        let state = (!self.state.is_empty()).then(|| {
            self.state
                .iter()
                .map(Vocabulary::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        });
        NodeBuilder::new(ElementKind::ItemIcon)
            .object(&self.object)
            .text(kml("state"), state.as_deref())
            .text(kml("href"), self.href.as_deref())
            .extensions(&self.extensions)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, ItemIconState, Link, StyleState, Units, Vec2};

    #[test]
    fn test_icon_style_writes_icon_element() {
        let style = IconStyle::default()
            .with_color(Color::from_hex("ff00ff00").unwrap())
            .with_icon(Link::default().with_href("pin.png"))
            .with_hot_spot(Vec2 {
                x: Some(0.5),
                y: Some(1.0),
                x_units: Some(Units::Fraction),
                y_units: Some(Units::Pixels),
            });
        let node = style.to_node();
        let names: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["color", "Icon", "hotSpot"]);
        assert_eq!(node.children[0].text_content(), "ff00ff00");
        assert_eq!(node.children[2].attribute("x"), Some("0.5"));
        assert_eq!(node.children[2].attribute("yunits"), Some("pixels"));
    }

    #[test]
    fn test_item_icon_state_joined() {
        let icon = ItemIcon::default()
            .with_state(ItemIconState::Open)
            .with_state(ItemIconState::Error);
        let node = icon.to_node();
        assert_eq!(node.children[0].text_content(), "open error");
    }

    #[test]
    fn test_pair_order() {
        let pair = Pair::new(StyleState::Highlight, "#hot");
        let node = pair.to_node();
        let names: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["key", "styleUrl"]);
    }
}
