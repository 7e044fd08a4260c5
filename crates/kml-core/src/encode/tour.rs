//! Tour playlists and primitives

use super::builder::NodeBuilder;
use super::Encode;
use crate::model::{AnimatedUpdate, FlyTo, Playlist, SoundCue, TourControl, TourPrimitive, Wait};
use crate::registry::{gx, kml, ElementKind};
use crate::xml::XmlNode;

impl Encode for TourPrimitive {
    fn to_node(&self) -> XmlNode {
        match self {
            Self::AnimatedUpdate(primitive) => primitive.to_node(),
            Self::FlyTo(primitive) => primitive.to_node(),
            Self::SoundCue(primitive) => primitive.to_node(),
            Self::Wait(primitive) => primitive.to_node(),
            Self::TourControl(primitive) => primitive.to_node(),
        }
    }
}

impl Encode for Playlist {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Playlist)
            .object(&self.object)
            .all(&self.primitives)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for AnimatedUpdate {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::AnimatedUpdate)
            .object(&self.object)
            .double(gx("duration"), self.duration)
            .encoded(self.update.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for FlyTo {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::FlyTo)
            .object(&self.object)
            .double(gx("duration"), self.duration)
            .vocabulary(gx("flyToMode"), self.fly_to_mode.as_ref())
            .encoded(self.view.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for SoundCue {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::SoundCue)
            .object(&self.object)
            .text(kml("href"), self.href.as_deref())
            .double(gx("delayedStart"), self.delayed_start)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for Wait {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::Wait)
            .object(&self.object)
            .double(gx("duration"), self.duration)
            .extensions(&self.extensions)
            .build()
    }
}

impl Encode for TourControl {
    fn to_node(&self) -> XmlNode {
        NodeBuilder::new(ElementKind::TourControl)
            .object(&self.object)
            .vocabulary(gx("playMode"), self.play_mode.as_ref())
            .extensions(&self.extensions)
            .build()
    }
}
