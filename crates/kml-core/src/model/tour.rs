//! `gx:Tour` playlists and their primitives

use super::feature::Update;
use super::values::{FlyToMode, PlayMode};
use super::view::AbstractView;
use super::ObjectInfo;
use crate::registry::ElementKind;
use crate::xml::XmlNode;
use serde::{Deserialize, Serialize};

/// Tour step substitution group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TourPrimitive {
    /// Apply an update over a duration
    AnimatedUpdate(AnimatedUpdate),
    /// Move the camera
    FlyTo(FlyTo),
    /// Play a sound
    SoundCue(SoundCue),
    /// Pause the camera
    Wait(Wait),
    /// Pause playback
    TourControl(TourControl),
}

impl TourPrimitive {
    /// Concrete element kind
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::AnimatedUpdate(_) => ElementKind::AnimatedUpdate,
            Self::FlyTo(_) => ElementKind::FlyTo,
            Self::SoundCue(_) => ElementKind::SoundCue,
            Self::Wait(_) => ElementKind::Wait,
            Self::TourControl(_) => ElementKind::TourControl,
        }
    }
}

impl From<AnimatedUpdate> for TourPrimitive {
    fn from(primitive: AnimatedUpdate) -> Self {
        Self::AnimatedUpdate(primitive)
    }
}

impl From<FlyTo> for TourPrimitive {
    fn from(primitive: FlyTo) -> Self {
        Self::FlyTo(primitive)
    }
}

impl From<SoundCue> for TourPrimitive {
    fn from(primitive: SoundCue) -> Self {
        Self::SoundCue(primitive)
    }
}

impl From<Wait> for TourPrimitive {
    fn from(primitive: Wait) -> Self {
        Self::Wait(primitive)
    }
}

impl From<TourControl> for TourPrimitive {
    fn from(primitive: TourControl) -> Self {
        Self::TourControl(primitive)
    }
}

/// `gx:Playlist`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Steps in playback order
    pub primitives: Vec<TourPrimitive>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `gx:AnimatedUpdate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimatedUpdate {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Seconds over which the update is applied
    pub duration: Option<f64>,
    /// Changes to apply
    pub update: Option<Update>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `gx:FlyTo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlyTo {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Seconds spent flying
    pub duration: Option<f64>,
    /// Movement style
    pub fly_to_mode: Option<FlyToMode>,
    /// Destination
    pub view: Option<AbstractView>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `gx:SoundCue`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundCue {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Sound file
    pub href: Option<String>,
    /// Seconds to wait before playing
    pub delayed_start: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `gx:Wait`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wait {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Seconds to hold
    pub duration: Option<f64>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

/// `gx:TourControl`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TourControl {
    /// `id` / `targetId`
    pub object: ObjectInfo,
    /// Playback action
    pub play_mode: Option<PlayMode>,
    /// Unrecognized children
    pub extensions: Vec<XmlNode>,
}

object_setters!(Playlist, AnimatedUpdate, FlyTo, SoundCue, Wait, TourControl);

setters!(Playlist {
    with_primitive(primitives): push TourPrimitive,
});

setters!(AnimatedUpdate {
    with_duration(duration): opt f64,
    with_update(update): opt Update,
});

setters!(FlyTo {
    with_duration(duration): opt f64,
    with_fly_to_mode(fly_to_mode): opt FlyToMode,
    with_view(view): opt AbstractView,
});

setters!(SoundCue {
    with_href(href): opt String,
    with_delayed_start(delayed_start): opt f64,
});

setters!(Wait {
    with_duration(duration): opt f64,
});

setters!(TourControl {
    with_play_mode(play_mode): opt PlayMode,
});
