//! Codec Integration Tests
//!
//! Decode and encode whole documents through the public API:
//! - round trips of populated documents, including extension content
//! - order and optionality of child lists and fields
//! - tolerance of unknown elements and enumeration literals

use kml_core::registry::{ATOM_NS, GX_NS, KML_NS, XAL_NS};
use kml_core::{
    decode_str, encode, to_string, AbstractView, AltitudeMode, AnimatedUpdate, AtomAuthor,
    AtomLink, ChangeItem, Color, Coordinate, Data, Document, EncodeOptions, ExtendedData,
    Feature, FlyTo, FlyToMode, Folder, Geometry, GroundOverlay, IconStyle, Kml, LatLonBox,
    LineString, LinearRing, Link, LookAt, MultiGeometry, NamespaceDecl, NetworkLink,
    NetworkLinkControl, Pair, Placemark, Playlist, Point, Polygon, RefreshMode, Schema,
    SchemaData, SimpleData, SimpleField, Snippet, SoundCue, Style, StyleMap, StyleState,
    TimeSpan, Tour, TourControl, Update, UpdateOperation, Vocabulary, Wait, XmlNode,
};

fn round_trip(kml: &Kml) -> Kml {
    let text = to_string(kml, &EncodeOptions::default()).expect("encode");
    decode_str(&text).expect("well-formed").expect("kml root")
}

fn sydney() -> Coordinate {
    Coordinate::new(151.21037, -33.8526)
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_round_trip_populated_document() {
    let style = Style::default()
        .with_id("pin")
        .with_icon_style(
            IconStyle::default()
                .with_color(Color::from_hex("ff0000ff").expect("hex"))
                .with_scale(1.5)
                .with_icon(Link::new("files/pin.png")),
        );
    let style_map = StyleMap::default()
        .with_id("pin-map")
        .with_pair(Pair::new(StyleState::Normal, "#pin"))
        .with_pair(Pair::new(StyleState::Highlight, "#pin"));

    let address_details = XmlNode::new("AddressDetails")
        .in_namespace(XAL_NS, Some("xal"))
        .with_child(
            XmlNode::new("Country")
                .in_namespace(XAL_NS, Some("xal"))
                .with_child(
                    XmlNode::new("CountryName")
                        .in_namespace(XAL_NS, Some("xal"))
                        .with_text("Australia"),
                ),
        );

    let placemark = Placemark::default()
        .with_id("opera")
        .with_name("Sydney Opera House")
        .with_visibility(true)
        .with_atom_author(AtomAuthor::default().with_name("Harbour Trust"))
        .with_atom_link(AtomLink::default().with_href("http://example.com/opera"))
        .with_address("Bennelong Point")
        .with_address_details(address_details)
        .with_snippet(Snippet::new("Performing arts venue"))
        .with_description("Opened <b>1973</b>")
        .with_view(
            LookAt::default()
                .with_longitude(151.21037)
                .with_latitude(-33.8526)
                .with_range(1200.0)
                .with_tilt(45.0),
        )
        .with_time_primitive(TimeSpan::default().with_begin("1973-10-20"))
        .with_style_url("#pin-map")
        .with_extended_data(
            ExtendedData::default()
                .with_data(Data::new("architect", "Utzon").with_display_name("Architect"))
                .with_schema_data(
                    SchemaData::default()
                        .with_schema_url("#venue")
                        .with_simple_data(SimpleData::new("seats", "5738")),
                ),
        )
        .with_geometry(Point::new(Coordinate::with_altitude(151.21037, -33.8526, 12345.0)));

    let walk = Placemark::default().with_name("Harbour walk").with_geometry(
        LineString::new(vec![
            Coordinate::new(151.2153, -33.8568),
            Coordinate::new(151.2108, -33.8523),
        ])
        .with_tessellate(true)
        .with_altitude_mode(AltitudeMode::ClampToSeaFloor),
    );

    let overlay = GroundOverlay::default()
        .with_name("Map")
        .with_color(Color::from_hex("7fffffff").expect("hex"))
        .with_draw_order(1)
        .with_icon(Link::new("files/map.png").with_refresh_mode(RefreshMode::OnInterval))
        .with_lat_lon_box(
            LatLonBox::default()
                .with_north(-33.85)
                .with_south(-33.86)
                .with_east(151.22)
                .with_west(151.20)
                .with_rotation(-0.5),
        );

    let document = Document::default()
        .with_id("root")
        .with_name("Landmarks")
        .with_open(true)
        .with_style_selector(style)
        .with_style_selector(style_map)
        .with_schema(
            Schema::default()
                .with_id("venue")
                .with_name("Venue")
                .with_simple_field(SimpleField::default().with_name("seats").with_field_type("int")),
        )
        .with_feature(placemark)
        .with_feature(Folder::default().with_name("Walks").with_feature(walk))
        .with_feature(overlay)
        .with_feature(
            NetworkLink::default()
                .with_name("Live")
                .with_refresh_visibility(false)
                .with_link(Link::new("http://example.com/live.kml")),
        );

    let kml = Kml::new(document)
        .with_hint("target=earth")
        .with_namespace(NamespaceDecl::new(Some("ext"), "urn:example:ext"));

    assert_eq!(round_trip(&kml), kml);
}

#[test]
fn test_round_trip_tour_and_updates() {
    let change = UpdateOperation::Change(vec![ChangeItem::Feature(
        Placemark::default()
            .with_target_id("opera")
            .with_visibility(false)
            .into(),
    )]);
    let playlist = Playlist::default()
        .with_primitive(
            FlyTo::default()
                .with_duration(4.5)
                .with_fly_to_mode(FlyToMode::Smooth)
                .with_view(LookAt::default().with_longitude(151.2).with_latitude(-33.8)),
        )
        .with_primitive(Wait::default().with_duration(2.0))
        .with_primitive(
            AnimatedUpdate::default()
                .with_duration(1.0)
                .with_update(Update::default().with_target_href("doc.kml").with_operation(change)),
        )
        .with_primitive(SoundCue::default().with_href("files/intro.mp3"))
        .with_primitive(TourControl::default().with_play_mode(kml_core::PlayMode::Pause));

    let control = NetworkLinkControl::default()
        .with_min_refresh_period(30.0)
        .with_cookie("session=1")
        .with_update(
            Update::default()
                .with_target_href("http://example.com/live.kml")
                .with_operation(UpdateOperation::Delete(vec![Placemark::default()
                    .with_target_id("stale")
                    .into()])),
        );

    let kml = Kml::new(Tour::default().with_name("Harbour tour").with_playlist(playlist))
        .with_network_link_control(control);

    let decoded = round_trip(&kml);
    assert_eq!(decoded, kml);
    let Some(Feature::Tour(tour)) = &decoded.feature else {
        panic!("expected a tour");
    };
    let kinds: Vec<_> = tour
        .playlist
        .iter()
        .flat_map(|p| &p.primitives)
        .map(|p| p.kind().tag().local)
        .collect();
    assert_eq!(kinds, ["FlyTo", "Wait", "AnimatedUpdate", "SoundCue", "TourControl"]);
}

#[test]
fn test_round_trip_keeps_extension_content() {
    let foreign = XmlNode::new("rating")
        .in_namespace("urn:example:ext", Some("ext"))
        .with_attribute("scale", "5")
        .with_text("4");
    let placemark = Placemark::default()
        .with_name("Rated")
        .with_extension(foreign.clone())
        .with_geometry(Point::new(sydney()).with_extension(foreign.clone()));
    let kml = Kml::new(placemark);

    let decoded = round_trip(&kml);
    assert_eq!(decoded, kml);

    let text = to_string(&kml, &EncodeOptions::compact()).expect("encode");
    assert!(text.contains(r#"<ext:rating xmlns:ext="urn:example:ext" scale="5">4</ext:rating></Placemark>"#));
}

#[test]
fn test_round_trip_keeps_mixed_extension_content() {
    let note = XmlNode::new("note")
        .in_namespace("urn:example:ext", Some("ext"))
        .with_text("hello")
        .with_child(
            XmlNode::new("b")
                .in_namespace("urn:example:ext", Some("ext"))
                .with_text("world"),
        );
    let kml = Kml::new(Placemark::default().with_name("Annotated").with_extension(note));

    let once = round_trip(&kml);
    assert_eq!(once, kml);
    assert_eq!(round_trip(&once), kml);

    let text = r#"<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:x="urn:example:x">
  <Placemark><x:n>a<x:b/>tail</x:n></Placemark>
</kml>"#;
    let first = decode_str(text).expect("well-formed").expect("kml root");
    let second = round_trip(&first);
    assert_eq!(second, first);
    assert_eq!(round_trip(&second), first);
}

#[test]
fn test_markup_inside_description_is_kept() {
    let _ = env_logger::builder().is_test(true).try_init();
    let text = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark><description>Hi <b>there</b></description></Placemark>
</kml>"#;
    let kml = decode_str(text).expect("well-formed").expect("kml root");
    let Some(Feature::Placemark(placemark)) = &kml.feature else {
        panic!("expected a placemark");
    };
    assert_eq!(placemark.common.description.as_deref(), Some("Hi "));
    assert_eq!(placemark.extensions.len(), 1);

    let out = to_string(&kml, &EncodeOptions::compact()).expect("encode");
    assert!(out.contains("<b>there</b>"), "{out}");
    assert_eq!(round_trip(&kml), kml);
}

#[test]
fn test_unrecognized_attributes_survive() {
    let text = r#"<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.opengis.net/kml/2.2 ogckml22.xsd">
  <Placemark id="p1" layer="roads"><name>Tagged</name></Placemark>
</kml>"#;
    let kml = decode_str(text).expect("well-formed").expect("kml root");
    assert_eq!(kml.attributes.len(), 1);
    assert_eq!(kml.attributes[0].name, "schemaLocation");
    let Some(Feature::Placemark(placemark)) = &kml.feature else {
        panic!("expected a placemark");
    };
    assert_eq!(placemark.common.object.id.as_deref(), Some("p1"));
    assert_eq!(placemark.common.object.attributes.len(), 1);
    assert_eq!(placemark.common.object.attributes[0].value, "roads");

    let out = to_string(&kml, &EncodeOptions::compact()).expect("encode");
    assert!(out.contains(r#"xsi:schemaLocation="http://www.opengis.net/kml/2.2 ogckml22.xsd""#), "{out}");
    assert!(out.contains(r#"<Placemark id="p1" layer="roads">"#), "{out}");
    assert_eq!(round_trip(&kml), kml);
}

// ============================================================================
// Order and Optionality
// ============================================================================

#[test]
fn test_multi_geometry_order_preserved() {
    let multi = MultiGeometry::default()
        .with_geometry(LineString::new(vec![sydney(), Coordinate::new(151.0, -33.0)]))
        .with_geometry(Point::new(sydney()))
        .with_geometry(
            Polygon::default().with_outer_boundary(LinearRing::new(vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(0.0, 0.0),
            ])),
        )
        .with_geometry(Point::new(Coordinate::new(1.0, 2.0)));
    let kml = Kml::new(Placemark::default().with_geometry(multi));

    let decoded = round_trip(&kml);
    let Some(Feature::Placemark(placemark)) = &decoded.feature else {
        panic!("expected a placemark");
    };
    let Some(Geometry::MultiGeometry(multi)) = &placemark.geometry else {
        panic!("expected a multi geometry");
    };
    let kinds: Vec<_> = multi.geometries.iter().map(|g| g.kind().tag().local).collect();
    assert_eq!(kinds, ["LineString", "Point", "Polygon", "Point"]);
    assert_eq!(decoded, kml);
}

#[test]
fn test_absent_view_stays_absent() {
    let kml = Kml::new(Placemark::default().with_name("No view"));
    let text = to_string(&kml, &EncodeOptions::default()).expect("encode");
    assert!(!text.contains("LookAt"));
    assert!(!text.contains("Camera"));

    let decoded = round_trip(&kml);
    let feature = decoded.feature.expect("feature");
    assert!(feature.common().view.is_none());
    assert!(feature.common().time_primitive.is_none());
    assert!(feature.common().visibility.is_none());
}

#[test]
fn test_encoder_follows_layout_order() {
    let placemark = Placemark::default()
        .with_geometry(Point::new(sydney()))
        .with_balloon_visibility(true)
        .with_extended_data(ExtendedData::default().with_data(Data::new("k", "v")))
        .with_style_url("#s")
        .with_view(LookAt::default().with_range(10.0))
        .with_description("d")
        .with_phone_number("+61 2 9250 7111")
        .with_address("Bennelong Point")
        .with_atom_author(AtomAuthor::default().with_name("a"))
        .with_open(false)
        .with_visibility(true)
        .with_name("n");
    let node = kml_core::encode_feature(&placemark.into());
    let layout = kml_core::ElementKind::Placemark.layout();
    let positions: Vec<_> = node
        .children
        .iter()
        .map(|child| layout.position_of(child).expect("known field"))
        .collect();
    assert_eq!(positions.len(), 12);
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

// ============================================================================
// Leaf Rendering
// ============================================================================

#[test]
fn test_coordinate_rendering() {
    let two = Kml::new(Placemark::default().with_geometry(Point::new(sydney())));
    let text = to_string(&two, &EncodeOptions::compact()).expect("encode");
    assert!(text.contains("<coordinates>151.21037,-33.8526</coordinates>"));

    let three = Kml::new(
        Placemark::default()
            .with_geometry(Point::new(Coordinate::with_altitude(151.21037, -33.8526, 12345.0))),
    );
    let text = to_string(&three, &EncodeOptions::compact()).expect("encode");
    assert!(text.contains("<coordinates>151.21037,-33.8526,12345.0</coordinates>"));
}

#[test]
fn test_sea_floor_mode_uses_gx_element() {
    let point = Point::new(sydney()).with_altitude_mode(AltitudeMode::RelativeToSeaFloor);
    let node = kml_core::encode_geometry(&point.into());
    assert!(node.children[0].is(Some(GX_NS), "altitudeMode"));
    assert_eq!(node.children[0].text_content(), "relativeToSeaFloor");
}

// ============================================================================
// Tolerance
// ============================================================================

#[test]
fn test_unknown_elements_survive_verbatim() {
    let _ = env_logger::builder().is_test(true).try_init();
    let text = r#"<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:x="urn:example:x">
  <Placemark>
    <name>Mystery</name>
    <futureField priority="high">later</futureField>
    <x:meta><x:owner>ops</x:owner></x:meta>
    <Point><coordinates>1,2</coordinates></Point>
  </Placemark>
</kml>"#;
    let kml = decode_str(text).expect("well-formed").expect("kml root");
    let Some(Feature::Placemark(placemark)) = &kml.feature else {
        panic!("expected a placemark");
    };
    assert_eq!(placemark.common.name.as_deref(), Some("Mystery"));
    assert_eq!(placemark.extensions.len(), 2);
    assert!(placemark.extensions[0].is(Some(KML_NS), "futureField"));
    assert_eq!(placemark.extensions[0].attribute("priority"), Some("high"));
    assert!(placemark.extensions[1].is(Some("urn:example:x"), "meta"));
    assert!(matches!(placemark.geometry, Some(Geometry::Point(_))));

    let node = encode(&kml);
    let placemark_node = &node.children[0];
    let names: Vec<_> = placemark_node.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["name", "Point", "futureField", "meta"]);
    assert_eq!(placemark_node.children[3].children[0].text_content(), "ops");
    assert_eq!(round_trip(&kml), kml);
}

#[test]
fn test_enumeration_tolerance() {
    let _ = env_logger::builder().is_test(true).try_init();
    let text = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Folder>
    <Placemark><Point><altitudeMode>clampToGround</altitudeMode><coordinates>1,2</coordinates></Point></Placemark>
    <Placemark><Point><altitudeMode>bogusValue</altitudeMode><coordinates>1,2</coordinates></Point></Placemark>
  </Folder>
</kml>"#;
    let kml = decode_str(text).expect("well-formed").expect("kml root");
    let modes: Vec<_> = kml
        .feature
        .as_ref()
        .expect("folder")
        .placemarks()
        .into_iter()
        .map(|placemark| match &placemark.geometry {
            Some(Geometry::Point(point)) => point.altitude_mode.clone(),
            _ => None,
        })
        .collect();
    assert_eq!(modes[0], Some(AltitudeMode::ClampToGround));
    assert_eq!(modes[1], Some(AltitudeMode::Unrecognized("bogusValue".to_string())));
    assert!(!modes[1].as_ref().is_some_and(Vocabulary::is_recognized));

    let out = to_string(&kml, &EncodeOptions::compact()).expect("encode");
    assert!(out.contains("<altitudeMode>bogusValue</altitudeMode>"));
}

#[test]
fn test_atom_and_gx_prefixes_on_output() {
    let kml = Kml::new(
        Placemark::default()
            .with_atom_author(AtomAuthor::default().with_name("Ann"))
            .with_balloon_visibility(true),
    );
    let node = encode(&kml);
    let placemark = &node.children[0];
    assert!(placemark.children[0].is(Some(ATOM_NS), "author"));
    assert!(placemark.children[1].is(Some(GX_NS), "balloonVisibility"));

    let text = to_string(&kml, &EncodeOptions::compact()).expect("encode");
    assert!(text.contains("<atom:author><atom:name>Ann</atom:name></atom:author>"));
    assert!(text.contains("<gx:balloonVisibility>1</gx:balloonVisibility>"));
}

#[test]
fn test_placemark_without_geometry() {
    let text = r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Placemark><name>Empty</name></Placemark></kml>"#;
    let kml = decode_str(text).expect("well-formed").expect("kml root");
    let Some(Feature::Placemark(placemark)) = &kml.feature else {
        panic!("expected a placemark");
    };
    assert!(placemark.geometry.is_none());
    let view: Option<&AbstractView> = kml
        .feature
        .as_ref()
        .map(Feature::common)
        .and_then(|c| c.view.as_ref());
    assert!(view.is_none());
}
