//! Views and time primitives

use super::builder::NodeBuilder;
use super::Encode;
use crate::model::{AbstractView, Camera, LookAt, TimePrimitive, TimeSpan, TimeStamp};
use crate::registry::{kml, ElementKind};
use crate::xml::XmlNode;

impl Encode for AbstractView {
    fn to_node(&self) -> XmlNode {
        match self {
            Self::LookAt(view) => view.to_node(),
            Self::Camera(view) => view.to_node(),
        }
    }
}

impl Encode for LookAt {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::LookAt)
            .object(&self.object)
            .double(kml("longitude"), self.longitude)
            .double(kml("latitude"), self.latitude)
            .double(kml("altitude"), self.altitude)
            .double(kml("heading"), self.heading)
            .double(kml("tilt"), self.tilt)
            .double(kml("range"), self.range)
            .altitude_mode(self.altitude_mode.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Camera {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Camera)
            .object(&self.object)
            .double(kml("longitude"), self.longitude)
            .double(kml("latitude"), self.latitude)
            .double(kml("altitude"), self.altitude)
            .double(kml("heading"), self.heading)
            .double(kml("tilt"), self.tilt)
            .double(kml("roll"), self.roll)
            .altitude_mode(self.altitude_mode.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for TimePrimitive {
    fn to_node(&self) -> XmlNode {
        match self {
            Self::TimeSpan(time) => time.to_node(),
            Self::TimeStamp(time) => time.to_node(),
        }
    }
}

impl Encode for TimeSpan {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::TimeSpan)
            .object(&self.object)
            .text(kml("begin"), self.begin.as_deref())
            .text(kml("end"), self.end.as_deref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for TimeStamp {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::TimeStamp)
            .object(&self.object)
            .text(kml("when"), self.when.as_deref())
            .extensions(&self.extensions)
            .build()
    }
}
