//! Views and time primitives

use super::fields::Fields;
use crate::model::{AbstractView, Camera, LookAt, TimePrimitive, TimeSpan, TimeStamp};
use crate::registry::{kml, resolve_node, ElementKind};
use crate::xml::XmlNode;

pub(crate) fn abstract_view(node: &XmlNode) -> Option<AbstractView> {
    match resolve_node(node)? {
        ElementKind::LookAt => Some(AbstractView::LookAt(look_at(node))),
        ElementKind::Camera => Some(AbstractView::Camera(camera(node))),
        _ => None,
    }
}

fn look_at(node: &XmlNode) -> LookAt {
    let fields = Fields::new(ElementKind::LookAt, node);
    LookAt {
        object: fields.object(),
        longitude: fields.double(kml("longitude")),
        latitude: fields.double(kml("latitude")),
        altitude: fields.double(kml("altitude")),
        heading: fields.double(kml("heading")),
        tilt: fields.double(kml("tilt")),
        range: fields.double(kml("range")),
        altitude_mode: fields.altitude_mode(),
        extensions: fields.into_extensions(),
    }
}

fn camera(node: &XmlNode) -> Camera {
    let fields = Fields::new(ElementKind::Camera, node);
    Camera {
        object: fields.object(),
        longitude: fields.double(kml("longitude")),
        latitude: fields.double(kml("latitude")),
        altitude: fields.double(kml("altitude")),
        heading: fields.double(kml("heading")),
        tilt: fields.double(kml("tilt")),
        roll: fields.double(kml("roll")),
        altitude_mode: fields.altitude_mode(),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn time_primitive(node: &XmlNode) -> Option<TimePrimitive> {
    match resolve_node(node)? {
        ElementKind::TimeSpan => {
            let fields = Fields::new(ElementKind::TimeSpan, node);
            Some(TimePrimitive::TimeSpan(TimeSpan {
                object: fields.object(),
                begin: fields.text(kml("begin")).map(|t| t.trim().to_string()),
                end: fields.text(kml("end")).map(|t| t.trim().to_string()),
                extensions: fields.into_extensions(),
            }))
        }
        ElementKind::TimeStamp => {
            let fields = Fields::new(ElementKind::TimeStamp, node);
            Some(TimePrimitive::TimeStamp(TimeStamp {
                object: fields.object(),
                when: fields.text(kml("when")).map(|t| t.trim().to_string()),
                extensions: fields.into_extensions(),
            }))
        }
        _ => None,
    }
}
