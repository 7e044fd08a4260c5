//! Serialization Tests
//!
//! Decoded documents can be exported through serde and read back unchanged.

use kml_core::{decode_str, Feature, Geometry, Kml};

const LANDMARKS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
  <Document id="landmarks">
    <name>Landmarks</name>
    <Style id="red"><LineStyle><color>ff0000ff</color><width>2</width></LineStyle></Style>
    <Placemark>
      <name>Bridge</name>
      <styleUrl>#red</styleUrl>
      <LineString>
        <tessellate>1</tessellate>
        <gx:altitudeMode>clampToSeaFloor</gx:altitudeMode>
        <coordinates>151.2108,-33.8523 151.2106,-33.8480</coordinates>
      </LineString>
    </Placemark>
    <Placemark>
      <name>Opera House</name>
      <Point><coordinates>151.21037,-33.8526,12345</coordinates></Point>
    </Placemark>
  </Document>
</kml>"#;

#[test]
fn test_json_export_round_trip() {
    let kml = decode_str(LANDMARKS).unwrap().unwrap();
    let json = serde_json::to_string_pretty(&kml).unwrap();
    assert!(json.contains("\"Opera House\""));
    assert!(json.contains("ClampToSeaFloor"));

    let restored: Kml = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, kml);
}

#[test]
fn test_json_shape_of_geometry() {
    let kml = decode_str(LANDMARKS).unwrap().unwrap();
    let Some(Feature::Document(document)) = &kml.feature else {
        panic!("expected a document");
    };
    let Feature::Placemark(opera) = &document.features[1] else {
        panic!("expected a placemark");
    };
    let Some(Geometry::Point(point)) = &opera.geometry else {
        panic!("expected a point");
    };

    let value = serde_json::to_value(point).unwrap();
    assert_eq!(value["coordinates"]["longitude"], 151.21037);
    assert_eq!(value["coordinates"]["altitude"], 12345.0);
    assert!(value["altitude_mode"].is_null());
}
