//! Style selectors and sub-styles

use super::common::Link;
use super::values::{
    Color, ColorMode, DisplayMode, ItemIconState, ListItemType, StyleState, Vec2,
};
use super::ObjectInfo;
use crate::registry::ElementKind;
use crate::xml::XmlNode;
use serde::{Deserialize, Serialize};

/// Style substitution group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleSelector {
    /// Inline style
    Style(Style),
    /// Normal/highlight pair of styles
    StyleMap(StyleMap),
}

impl StyleSelector {
    /// Concrete element kind
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Style(_) => ElementKind::Style,
            Self::StyleMap(_) => ElementKind::StyleMap,
        }
    }

    /// `id` of the selector, the target of `styleUrl` references
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Style(style) => style.object.id.as_deref(),
            Self::StyleMap(map) => map.object.id.as_deref(),
        }
    }
}

impl From<Style> for StyleSelector {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}

impl From<StyleMap> for StyleSelector {
    fn from(map: StyleMap) -> Self {
        Self::StyleMap(map)
    }
}

/// `Style`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Point icon
    pub icon_style: Option<IconStyle>,
    /// Label text
    pub label_style: Option<LabelStyle>,
    /// Lines and outlines
    pub line_style: Option<LineStyle>,
    /// Polygon fill
    pub poly_style: Option<PolyStyle>,
    /// Description balloon
    pub balloon_style: Option<BalloonStyle>,
    /// List view entry
    pub list_style: Option<ListStyle>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `StyleMap`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMap {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Pairs in document order
    pub pairs: Vec<Pair>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Pair` of a style map: a state key and the style used in that state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// `normal` or `highlight`
    pub key: Option<StyleState>,
    /// Reference to a shared style
    pub style_url: Option<String>,
    /// Inline style
    pub style_selector: Option<StyleSelector>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

impl Pair {
    /// Pair referencing a shared style
    #[must_use]
    pub fn new(key: StyleState, style_url: impl Into<String>) -> Self {
        Self {
            key: Some(key),
            style_url: Some(style_url.into()),
            ..Self::default()
        }
    }
}

/// `IconStyle`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconStyle {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Tint
    pub color: Option<Color>,
    /// Fixed or random tint
    pub color_mode: Option<ColorMode>,
    /// Size factor
    pub scale: Option<f64>,
    /// Rotation in degrees
    pub heading: Option<f64>,
    /// Icon image
    pub icon: Option<Link>,
    /// Anchor point within the icon
    pub hot_spot: Option<Vec2>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `LabelStyle`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Text color
    pub color: Option<Color>,
    /// Fixed or random color
    pub color_mode: Option<ColorMode>,
    /// Size factor
    pub scale: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `LineStyle`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Line color
    pub color: Option<Color>,
    /// Fixed or random color
    pub color_mode: Option<ColorMode>,
    /// Width in pixels
    pub width: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `PolyStyle`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyStyle {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Fill color
    pub color: Option<Color>,
    /// Fixed or random color
    pub color_mode: Option<ColorMode>,
    /// Fill the polygon
    pub fill: Option<bool>,
    /// Draw the outline
    pub outline: Option<bool>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `BalloonStyle`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BalloonStyle {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Background color
    pub bg_color: Option<Color>,
    /// Foreground color
    pub text_color: Option<Color>,
    /// Balloon template with `$[name]` entities
    pub text: Option<String>,
    /// Show or hide the balloon
    pub display_mode: Option<DisplayMode>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `ListStyle`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListStyle {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// List view behavior
    pub list_item_type: Option<ListItemType>,
    /// Background color
    pub bg_color: Option<Color>,
    /// Icons per state
    pub item_icons: Vec<ItemIcon>,
    /// Snippet lines shown in the list
    pub max_snippet_lines: Option<i32>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `ItemIcon`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemIcon {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// States the icon is used for (space separated in markup)
    pub state: Vec<ItemIconState>,
    /// Icon image
    pub href: Option<String>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

object_setters!(
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
);

setters!(Style {
    with_icon_style(icon_style): opt IconStyle,
    with_label_style(label_style): opt LabelStyle,
    with_line_style(line_style): opt LineStyle,
    with_poly_style(poly_style): opt PolyStyle,
    with_balloon_style(balloon_style): opt BalloonStyle,
    with_list_style(list_style): opt ListStyle,
});

setters!(StyleMap {
    with_pair(pairs): push Pair,
});

setters!(Pair {
    with_key(key): opt StyleState,
    with_style_url(style_url): opt String,
    with_style_selector(style_selector): opt StyleSelector,
});

setters!(IconStyle {
    with_color(color): opt Color,
    with_color_mode(color_mode): opt ColorMode,
    with_scale(scale): opt f64,
    with_heading(heading): opt f64,
    with_icon(icon): opt Link,
    with_hot_spot(hot_spot): opt Vec2,
});

setters!(LabelStyle {
    with_color(color): opt Color,
    with_color_mode(color_mode): opt ColorMode,
    with_scale(scale): opt f64,
});

setters!(LineStyle {
    with_color(color): opt Color,
    with_color_mode(color_mode): opt ColorMode,
    with_width(width): opt f64,
});

setters!(PolyStyle {
    with_color(color): opt Color,
    with_color_mode(color_mode): opt ColorMode,
    with_fill(fill): opt bool,
    with_outline(outline): opt bool,
});

setters!(BalloonStyle {
    with_bg_color(bg_color): opt Color,
    with_text_color(text_color): opt Color,
    with_text(text): opt String,
    with_display_mode(display_mode): opt DisplayMode,
});

setters!(ListStyle {
    with_list_item_type(list_item_type): opt ListItemType,
    with_bg_color(bg_color): opt Color,
    with_item_icon(item_icons): push ItemIcon,
    with_max_snippet_lines(max_snippet_lines): opt i32,
});

setters!(ItemIcon {
    with_state(state): push ItemIconState,
    with_href(href): opt String,
});
