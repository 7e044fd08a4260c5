//! `gx:Playlist` and tour primitives

use super::feature::update;
use super::fields::Fields;
use super::view::abstract_view;
use crate::model::{AnimatedUpdate, FlyTo, Playlist, SoundCue, TourControl, TourPrimitive, Wait};
use crate::registry::{gx, kml, resolve_node, Capability, ElementKind};
use crate::xml::XmlNode;

pub(crate) fn playlist(node: &XmlNode) -> Playlist {
    let fields = Fields::new(ElementKind::Playlist, node);
    Playlist {
        object: fields.object(),
        primitives: fields
            .groups(Capability::TourPrimitive)
            .filter_map(tour_primitive)
            .collect(),
        extensions: fields.into_extensions(),
    }
}

pub(crate) fn tour_primitive(node: &XmlNode) -> Option<TourPrimitive> {
    let kind = resolve_node(node)?;
    if kind.capability() != Some(Capability::TourPrimitive) {
        return None;
    }
    let fields = Fields::new(kind, node);
    let object = fields.object();
    let primitive = match kind {
        ElementKind::AnimatedUpdate => TourPrimitive::AnimatedUpdate(AnimatedUpdate {
            object,
            duration: fields.double(gx("duration")),
            update: fields.one(kml("Update")).map(update),
            extensions: fields.into_extensions(),
        }),
        ElementKind::FlyTo => TourPrimitive::FlyTo(FlyTo {
            object,
            duration: fields.double(gx("duration")),
            fly_to_mode: fields.vocabulary(gx("flyToMode")),
            view: fields.group(Capability::AbstractView).and_then(abstract_view),
            extensions: fields.into_extensions(),
        }),
        ElementKind::SoundCue => TourPrimitive::SoundCue(SoundCue {
            object,
            href: fields.text(kml("href")),
            delayed_start: fields.double(gx("delayedStart")),
            extensions: fields.into_extensions(),
        }),
        ElementKind::Wait => TourPrimitive::Wait(Wait {
            object,
            duration: fields.double(gx("duration")),
            extensions: fields.into_extensions(),
        }),
        ElementKind::TourControl => TourPrimitive::TourControl(TourControl {
            object,
            play_mode: fields.vocabulary(gx("playMode")),
            extensions: fields.into_extensions(),
        }),
        _ => return None,
    };
    Some(primitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AbstractView, FlyToMode, PlayMode};
    use crate::xml::parse_str;

    #[test]
    fn test_playlist_keeps_step_order() {
        let node = parse_str(
            r#"<gx:Playlist xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
                 <gx:FlyTo><gx:duration>5</gx:duration><gx:flyToMode>smooth</gx:flyToMode>
                   <Camera><longitude>170.15</longitude><latitude>-43.67</latitude></Camera>
                 </gx:FlyTo>
                 <gx:Wait><gx:duration>2.5</gx:duration></gx:Wait>
                 <gx:TourControl><gx:playMode>pause</gx:playMode></gx:TourControl>
                 <gx:SoundCue><href>intro.mp3</href><gx:delayedStart>1</gx:delayedStart></gx:SoundCue>
               </gx:Playlist>"#,
        )
        .unwrap();
        let playlist = playlist(&node);
        let kinds: Vec<_> = playlist.primitives.iter().map(TourPrimitive::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::FlyTo,
                ElementKind::Wait,
                ElementKind::TourControl,
                ElementKind::SoundCue
            ]
        );
        let TourPrimitive::FlyTo(fly_to) = &playlist.primitives[0] else {
            panic!("expected gx:FlyTo");
        };
        assert_eq!(fly_to.fly_to_mode, Some(FlyToMode::Smooth));
        assert!(matches!(fly_to.view, Some(AbstractView::Camera(_))));
        assert!(matches!(
            &playlist.primitives[2],
            TourPrimitive::TourControl(TourControl { play_mode: Some(PlayMode::Pause), .. })
        ));
    }
}
