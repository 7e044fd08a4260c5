//! Leaf value types: coordinates, colors, screen vectors and vocabularies

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single coordinate (lon, lat, alt)
///
/// An absent altitude means "ground level" and is never written as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude (degrees)
    pub longitude: f64,
    /// Latitude (degrees)
    pub latitude: f64,
    /// Altitude (meters, optional)
    pub altitude: Option<f64>,
}

impl Coordinate {
    /// Coordinate without altitude
    #[inline]
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    /// Coordinate with altitude
    #[inline]
    #[must_use]
    pub const fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }

    /// Parse one `lon,lat[,alt]` tuple
    #[must_use]
    pub fn parse_tuple(tuple: &str) -> Option<Self> {
        let mut parts = tuple.split(',').map(str::trim);
        let longitude = parts.next()?.parse().ok()?;
        let latitude = parts.next()?.parse().ok()?;
        let altitude = match parts.next() {
            None | Some("") => None,
            Some(alt) => Some(alt.parse().ok()?),
        };
        Some(Self {
            longitude,
            latitude,
            altitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            format_double(self.longitude),
            format_double(self.latitude)
        )?;
        if let Some(altitude) = self.altitude {
            write!(f, ",{}", format_double(altitude))?;
        }
        Ok(())
    }
}

/// Parse a `coordinates` payload
///
/// Tuples are separated by whitespace; whitespace around commas inside a
/// tuple is tolerated. Malformed tuples are skipped with a warning.
#[must_use]
pub fn parse_coordinates(text: &str) -> Vec<Coordinate> {
    join_tuple_parts(text)
        .split_whitespace()
        .filter_map(|tuple| {
            let parsed = Coordinate::parse_tuple(tuple);
            if parsed.is_none() {
                warn!("Skipping malformed coordinate tuple: {tuple:?}");
            }
            parsed
        })
        .collect()
}

/// Render coordinates as space-separated `lon,lat[,alt]` tuples
#[must_use]
pub fn format_coordinates(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove whitespace next to commas so `1, 2, 3` reads as one tuple
fn join_tuple_parts(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    let mut after_comma = false;
    for ch in text.chars() {
        if ch == ',' {
            while joined.ends_with(char::is_whitespace) {
                joined.pop();
            }
            joined.push(ch);
            after_comma = true;
        } else if ch.is_whitespace() && after_comma {
            continue;
        } else {
            joined.push(ch);
            after_comma = false;
        }
    }
    joined
}

/// Render a double without grouping, keeping a fractional part on whole numbers
///
/// Rust's shortest round-trip formatting is used, so `151.21037` stays
/// `151.21037` and `12345` becomes `12345.0`.
#[must_use]
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    let mut text = value.to_string();
    if !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    text
}

/// Parse an `xsd:double`, including the `INF`, `-INF` and `NaN` literals
#[must_use]
pub fn parse_double(text: &str) -> Option<f64> {
    match text.trim() {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        other => other.parse().ok(),
    }
}

/// Parse a KML boolean (`0`, `1`, `true`, `false`)
#[must_use]
pub fn parse_boolean(text: &str) -> Option<bool> {
    match text.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// A KML color, written `aabbggrr` in hex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Opacity
    pub alpha: u8,
    /// Blue channel
    pub blue: u8,
    /// Green channel
    pub green: u8,
    /// Red channel
    pub red: u8,
}

impl Color {
    /// Build a color from RGBA components
    #[inline]
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            alpha,
            blue,
            green,
            red,
        }
    }

    /// Parse `aabbggrr` hex, with an optional leading `#`
    #[must_use]
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 8 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            alpha: channel(0)?,
            blue: channel(2)?,
            green: channel(4)?,
            red: channel(6)?,
        })
    }

    /// Lowercase `aabbggrr` hex
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "{:02x}{:02x}{:02x}{:02x}",
            self.alpha, self.blue, self.green, self.red
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A screen-space vector (`hotSpot`, `overlayXY`, `screenXY`, `rotationXY`, `size`)
///
/// All four parts are attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component
    pub x: Option<f64>,
    /// Vertical component
    pub y: Option<f64>,
    /// Units of `x`
    pub x_units: Option<Units>,
    /// Units of `y`
    pub y_units: Option<Units>,
}

impl Vec2 {
    /// Vector with both components in the same units
    #[must_use]
    pub fn new(x: f64, y: f64, units: Units) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            x_units: Some(units.clone()),
            y_units: Some(units),
        }
    }
}

/// A controlled vocabulary with an explicit "unrecognized" outcome
pub trait Vocabulary: Sized {
    /// Look up a literal; unknown literals are kept verbatim
    fn from_literal(text: &str) -> Self;
    /// Literal as written in markup
    fn as_str(&self) -> &str;
    /// Whether the value came from the vocabulary
    fn is_recognized(&self) -> bool;
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $literal:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Literal outside the vocabulary, kept as written
            Unrecognized(String),
        }

        impl Vocabulary for $name {
            fn from_literal(text: &str) -> Self {
                match text.trim() {
                    $($literal => Self::$variant,)+
                    _ => Self::Unrecognized(text.to_string()),
                }
            }

            fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $literal,)+
                    Self::Unrecognized(text) => text,
                }
            }

            fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// How altitude values are interpreted
    ///
    /// The sea-floor modes belong to the `gx` namespace and are written as
    /// `gx:altitudeMode`.
    AltitudeMode {
        /// Ignore altitude, drape on terrain
        ClampToGround => "clampToGround",
        /// Altitude above terrain
        RelativeToGround => "relativeToGround",
        /// Altitude above sea level
        Absolute => "absolute",
        /// Drape on the sea floor
        ClampToSeaFloor => "clampToSeaFloor",
        /// Altitude above the sea floor
        RelativeToSeaFloor => "relativeToSeaFloor",
    }
}

impl AltitudeMode {
    /// Whether the mode is only valid as `gx:altitudeMode`
    #[must_use]
    pub fn is_extension(&self) -> bool {
        matches!(self, Self::ClampToSeaFloor | Self::RelativeToSeaFloor)
    }
}

vocabulary! {
    /// Color application mode
    ColorMode {
        Normal => "normal",
        Random => "random",
    }
}

vocabulary! {
    /// Balloon display mode
    DisplayMode {
        Default => "default",
        Hide => "hide",
    }
}

vocabulary! {
    /// How a feature and its children appear in the list view
    ListItemType {
        Check => "check",
        RadioFolder => "radioFolder",
        CheckOffOnly => "checkOffOnly",
        CheckHideChildren => "checkHideChildren",
    }
}

vocabulary! {
    /// Time-based link refresh
    RefreshMode {
        OnChange => "onChange",
        OnInterval => "onInterval",
        OnExpire => "onExpire",
    }
}

vocabulary! {
    /// View-based link refresh
    ViewRefreshMode {
        Never => "never",
        OnStop => "onStop",
        OnRequest => "onRequest",
        OnRegion => "onRegion",
    }
}

vocabulary! {
    /// Units of a [`Vec2`] component
    Units {
        Fraction => "fraction",
        Pixels => "pixels",
        InsetPixels => "insetPixels",
    }
}

vocabulary! {
    /// Key of a `StyleMap` pair
    StyleState {
        Normal => "normal",
        Highlight => "highlight",
    }
}

vocabulary! {
    /// Projection of a photo overlay
    Shape {
        Rectangle => "rectangle",
        Cylinder => "cylinder",
        Sphere => "sphere",
    }
}

vocabulary! {
    /// Origin of an image pyramid's tile grid
    GridOrigin {
        LowerLeft => "lowerLeft",
        UpperLeft => "upperLeft",
    }
}

vocabulary! {
    /// State shown by an `ItemIcon`
    ItemIconState {
        Open => "open",
        Closed => "closed",
        Error => "error",
        Fetching0 => "fetching0",
        Fetching1 => "fetching1",
        Fetching2 => "fetching2",
    }
}

vocabulary! {
    /// Camera movement of a `gx:FlyTo`
    FlyToMode {
        Bounce => "bounce",
        Smooth => "smooth",
    }
}

vocabulary! {
    /// Tour playback control
    PlayMode {
        Pause => "pause",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_rendering() {
        let ground = Coordinate::new(151.21037, -33.8526);
        assert_eq!(ground.to_string(), "151.21037,-33.8526");

        let raised = Coordinate::with_altitude(151.21037, -33.8526, 12345.0);
        assert_eq!(raised.to_string(), "151.21037,-33.8526,12345.0");
    }

    #[test]
    fn test_two_component_tuple_has_no_altitude() {
        let coords = parse_coordinates("151.21037,-33.8526");
        assert_eq!(coords, vec![Coordinate::new(151.21037, -33.8526)]);
        assert_eq!(coords[0].altitude, None);
    }

    #[test]
    fn test_parse_coordinates_tolerates_layout() {
        let text = "\n  -122.0,37.0,0  -121.5, 37.5, 10\n\t-121.0,38.0\n";
        let coords = parse_coordinates(text);
        assert_eq!(
            coords,
            vec![
                Coordinate::with_altitude(-122.0, 37.0, 0.0),
                Coordinate::with_altitude(-121.5, 37.5, 10.0),
                Coordinate::new(-121.0, 38.0),
            ]
        );
    }

    #[test]
    fn test_parse_coordinates_skips_bad_tuples() {
        let coords = parse_coordinates("1,2 x,y 3,4,5");
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[1], Coordinate::with_altitude(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(0.0), "0.0");
        assert_eq!(format_double(-2.5), "-2.5");
        assert_eq!(format_double(1_000_000.0), "1000000.0");
        assert_eq!(format_double(f64::INFINITY), "INF");
    }

    #[test]
    fn test_parse_double_literals() {
        assert_eq!(parse_double(" 12.5 "), Some(12.5));
        assert_eq!(parse_double("-INF"), Some(f64::NEG_INFINITY));
        assert!(parse_double("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_double("1,000"), None);
        assert_eq!(parse_double(""), None);
    }

    #[test]
    fn test_parse_boolean() {
        assert_eq!(parse_boolean("1"), Some(true));
        assert_eq!(parse_boolean(" false "), Some(false));
        assert_eq!(parse_boolean("yes"), None);
    }

    #[test]
    fn test_color_hex() {
        let color = Color::from_hex("7F00FFaa").unwrap();
        assert_eq!(color, Color::rgba(0xaa, 0xff, 0x00, 0x7f));
        assert_eq!(color.to_hex(), "7f00ffaa");
        assert_eq!(Color::from_hex("#ff000000").map(|c| c.alpha), Some(0xff));
        assert_eq!(Color::from_hex("red"), None);
    }

    #[test]
    fn test_vocabulary_lookup() {
        assert_eq!(
            AltitudeMode::from_literal("clampToGround"),
            AltitudeMode::ClampToGround
        );
        let bogus = AltitudeMode::from_literal("bogusValue");
        assert_eq!(bogus, AltitudeMode::Unrecognized("bogusValue".to_string()));
        assert!(!bogus.is_recognized());
        assert_eq!(bogus.as_str(), "bogusValue");
        assert!(AltitudeMode::RelativeToSeaFloor.is_extension());
        assert_eq!(Units::InsetPixels.to_string(), "insetPixels");
    }
}
