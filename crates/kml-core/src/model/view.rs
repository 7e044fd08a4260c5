//! Abstract views (`LookAt`, `Camera`) and time primitives

use super::values::AltitudeMode;
use super::ObjectInfo;
use crate::registry::ElementKind;
use crate::xml::XmlNode;
use serde::{Deserialize, Serialize};

/// Viewpoint substitution group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AbstractView {
    /// Viewpoint looking at a target point
    LookAt(LookAt),
    /// Viewpoint at a camera position
    Camera(Camera),
}

impl AbstractView {
    /// Concrete element kind
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::LookAt(_) => ElementKind::LookAt,
            Self::Camera(_) => ElementKind::Camera,
        }
    }
}

impl From<LookAt> for AbstractView {
    fn from(view: LookAt) -> Self {
        Self::LookAt(view)
    }
}

impl From<Camera> for AbstractView {
    fn from(view: Camera) -> Self {
        Self::Camera(view)
    }
}

/// `LookAt`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookAt {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Target longitude
    pub longitude: Option<f64>,
    /// Target latitude
    pub latitude: Option<f64>,
    /// Target altitude
    pub altitude: Option<f64>,
    /// Direction in degrees
    pub heading: Option<f64>,
    /// Angle from vertical in degrees
    pub tilt: Option<f64>,
    /// Distance from the target in meters
    pub range: Option<f64>,
    /// Interpretation of `altitude`
    pub altitude_mode: Option<AltitudeMode>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `Camera`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Camera longitude
    pub longitude: Option<f64>,
    /// Camera latitude
    pub latitude: Option<f64>,
    /// Camera altitude
    pub altitude: Option<f64>,
    /// Direction in degrees
    pub heading: Option<f64>,
    /// Rotation about the x axis in degrees
    pub tilt: Option<f64>,
    /// Rotation about the z axis in degrees
    pub roll: Option<f64>,
    /// Interpretation of `altitude`
    pub altitude_mode: Option<AltitudeMode>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// Time substitution group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePrimitive {
    /// Interval
    TimeSpan(TimeSpan),
    /// Instant
    TimeStamp(TimeStamp),
}

impl TimePrimitive {
    /// Concrete element kind
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::TimeSpan(_) => ElementKind::TimeSpan,
            Self::TimeStamp(_) => ElementKind::TimeStamp,
        }
    }
}

impl From<TimeSpan> for TimePrimitive {
    fn from(time: TimeSpan) -> Self {
        Self::TimeSpan(time)
    }
}

impl From<TimeStamp> for TimePrimitive {
    fn from(time: TimeStamp) -> Self {
        Self::TimeStamp(time)
    }
}

/// `TimeSpan`
///
/// Bounds are kept as written: KML accepts `gYear`, `gYearMonth`, `date`
/// and `dateTime` forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Start (open when absent)
    pub begin: Option<String>,
    /// End (open when absent)
    pub end: Option<String>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `TimeStamp`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeStamp {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Instant as written
    pub when: Option<String>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

object_setters!(LookAt, Camera, TimeSpan, TimeStamp);

setters!(LookAt {
    with_longitude(longitude): opt f64,
    with_latitude(latitude): opt f64,
    with_altitude(altitude): opt f64,
    with_heading(heading): opt f64,
    with_tilt(tilt): opt f64,
    with_range(range): opt f64,
    with_altitude_mode(altitude_mode): opt AltitudeMode,
});

setters!(Camera {
    with_longitude(longitude): opt f64,
    with_latitude(latitude): opt f64,
    with_altitude(altitude): opt f64,
    with_heading(heading): opt f64,
    with_tilt(tilt): opt f64,
    with_roll(roll): opt f64,
    with_altitude_mode(altitude_mode): opt AltitudeMode,
});

setters!(TimeSpan {
    with_begin(begin): opt String,
    with_end(end): opt String,
});

setters!(TimeStamp {
    with_when(when): opt String,
});
