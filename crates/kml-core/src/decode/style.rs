//! Style selectors and sub-styles

use super::common::{link, vec2};
use super::fields::Fields;
use crate::model::{
    BalloonStyle, IconStyle, ItemIcon, ItemIconState, LabelStyle, LineStyle, ListStyle, Pair,
    PolyStyle, Style, StyleMap, StyleSelector, Vocabulary,
};
use crate::registry::{kml, resolve_node, Capability, ElementKind};
use crate::xml::XmlNode;

pub(crate) fn style_selector(node: &XmlNode) -> Option<StyleSelector> {
    match resolve_node(node)? {
        ElementKind::Style => Some(StyleSelector::Style(style(node))),
        ElementKind::StyleMap => Some(StyleSelector::StyleMap(style_map(node))),
        _ => None,
    }
}

fn style(node: &XmlNode) -> Style {
    let fields = Fields::new(ElementKind::Style, node);
    Style {
        object: fields.object(),
        icon_style: fields.one(kml("IconStyle")).map(icon_style),
        label_style: fields.one(kml("LabelStyle")).map(label_style),
        line_style: fields.one(kml("LineStyle")).map(line_style),
        poly_style: fields.one(kml("PolyStyle")).map(poly_style),
        balloon_style: fields.one(kml("BalloonStyle")).map(balloon_style),
        list_style: fields.one(kml("ListStyle")).map(list_style),
        extensions: fields.into_extensions(),
    }
}

fn style_map(node: &XmlNode) -> StyleMap {
    let fields = Fields::new(ElementKind::StyleMap, node);
    StyleMap {
        object: fields.object(),
        pairs: fields.all(kml("Pair")).map(pair).collect(),
        extensions: fields.into_extensions(),
    }
}

fn pair(node: &XmlNode) -> Pair {
    let fields = Fields::new(ElementKind::Pair, node);
    Pair {
        object: fields.object(),
        key: fields.vocabulary(kml("key")),
        style_url: fields.text(kml("styleUrl")),
        style_selector: fields
            .group(Capability::StyleSelector)
            .and_then(style_selector),
        extensions: fields.into_extensions(),
    }
}

fn icon_style(node: &XmlNode) -> IconStyle {
    let fields = Fields::new(ElementKind::IconStyle, node);
    IconStyle {
        object: fields.object(),
        color: fields.color(kml("color")),
        color_mode: fields.vocabulary(kml("colorMode")),
        scale: fields.double(kml("scale")),
        heading: fields.double(kml("heading")),
        icon: fields.one(kml("Icon")).map(link),
        hot_spot: fields.one(kml("hotSpot")).map(vec2),
        extensions: fields.into_extensions(),
    }
}

fn label_style(node: &XmlNode) -> LabelStyle {
    let fields = Fields::new(ElementKind::LabelStyle, node);
    LabelStyle {
        object: fields.object(),
        color: fields.color(kml("color")),
        color_mode: fields.vocabulary(kml("colorMode")),
        scale: fields.double(kml("scale")),
        extensions: fields.into_extensions(),
    }
}

fn line_style(node: &XmlNode) -> LineStyle {
    let fields = Fields::new(ElementKind::LineStyle, node);
    LineStyle {
        object: fields.object(),
        color: fields.color(kml("color")),
        color_mode: fields.vocabulary(kml("colorMode")),
        width: fields.double(kml("width")),
        extensions: fields.into_extensions(),
    }
}

fn poly_style(node: &XmlNode) -> PolyStyle {
    let fields = Fields::new(ElementKind::PolyStyle, node);
    PolyStyle {
        object: fields.object(),
        color: fields.color(kml("color")),
        color_mode: fields.vocabulary(kml("colorMode")),
        fill: fields.boolean(kml("fill")),
        outline: fields.boolean(kml("outline")),
        extensions: fields.into_extensions(),
    }
}

fn balloon_style(node: &XmlNode) -> BalloonStyle {
    let fields = Fields::new(ElementKind::BalloonStyle, node);
    BalloonStyle {
        object: fields.object(),
        bg_color: fields.color(kml("bgColor")),
        text_color: fields.color(kml("textColor")),
        text: fields.text(kml("text")),
        display_mode: fields.vocabulary(kml("displayMode")),
        extensions: fields.into_extensions(),
    }
}

fn list_style(node: &XmlNode) -> ListStyle {
    let fields = Fields::new(ElementKind::ListStyle, node);
    ListStyle {
        object: fields.object(),
        list_item_type: fields.vocabulary(kml("listItemType")),
        bg_color: fields.color(kml("bgColor")),
        item_icons: fields.all(kml("ItemIcon")).map(item_icon).collect(),
        max_snippet_lines: fields.number(kml("maxSnippetLines")),
        extensions: fields.into_extensions(),
    }
}

fn item_icon(node: &XmlNode) -> ItemIcon {
    let fields = Fields::new(ElementKind::ItemIcon, node);
    ItemIcon {
        object: fields.object(),
        state: fields
            .one(kml("state"))
            .map(|s| {
                s.text_content()
                    .split_whitespace()
                    .map(ItemIconState::from_literal)
                    .collect()
            })
            .unwrap_or_default(),
        href: fields.text(kml("href")),
        extensions: fields.into_extensions(),
    }
}
