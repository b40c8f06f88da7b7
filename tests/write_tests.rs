//! Integration tests for writing CZML documents and reading them back as JSON.

use std::sync::Once;

use chrono::{Duration, TimeZone, Utc};
use czml::prelude::*;
use czml::value::ColorEncoding;
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

fn t(seconds: i64) -> Timestamp {
    Utc.with_ymd_and_hms(2012, 8, 4, 16, 0, 0).unwrap() + Duration::seconds(seconds)
}

fn parse(sink: &MemorySink) -> Value {
    serde_json::from_str(&sink.contents()).expect("document is valid JSON")
}

#[test]
fn test_rectangle_end_to_end() {
    init_tracing();
    let sink = MemorySink::new();
    let settings = WriterSettings::default().with_time_encoding(TimeEncoding::Iso8601);
    let mut doc = CzmlDocument::new(sink.clone(), settings).expect("Failed to start document");
    doc.write_document_packet("end to end").expect("Failed to write document packet");

    {
        let packet = doc.open_packet().expect("Failed to open packet");
        packet.write_id("rect").unwrap();
        let rect = packet.open_rectangle_property().unwrap();
        rect.write_height_property(10.0).unwrap();
        rect.write_outline_color_property(Color::from_rgba(0, 0, 0, 255).unwrap()).unwrap();
        let zindex = rect.open_z_index_property().unwrap();
        zindex.write_samples(&[t(0), t(60)], &[1, 2]).unwrap();
        zindex.close().unwrap();
        rect.close().unwrap();
        packet.close().unwrap();
    }
    doc.finish().expect("Failed to finish document");

    let doc = parse(&sink);
    assert_eq!(doc.as_array().map(Vec::len), Some(2));
    assert_eq!(doc[0]["id"], "document");
    assert_eq!(doc[0]["version"], "1.0");

    let rect = &doc[1]["rectangle"];
    assert!(rect.get("interval").is_none());
    assert_eq!(rect["height"], json!(10.0));
    assert_eq!(rect["outlineColor"], json!({"rgba": [0, 0, 0, 255]}));
    assert_eq!(
        rect["zIndex"],
        json!({"number": ["2012-08-04T16:00:00Z", 1, "2012-08-04T16:01:00Z", 2]})
    );
}

#[test]
fn test_sequence_slicing() {
    init_tracing();
    let sink = MemorySink::new();
    let settings = WriterSettings::default().with_time_encoding(TimeEncoding::Iso8601);
    let mut doc = CzmlDocument::new(sink.clone(), settings).unwrap();
    {
        let packet = doc.open_packet().unwrap();
        packet.write_id("slice").unwrap();
        let rect = packet.open_rectangle_property().unwrap();
        let binding = Binding::samples_range(vec![t(0), t(1), t(2)], vec![1.0, 2.0, 3.0], 1, 2).unwrap();
        rect.write_rotation_property(binding).unwrap();
        rect.close().unwrap();
        packet.close().unwrap();
    }
    doc.finish().unwrap();

    let rotation = &parse(&sink)[0]["rectangle"]["rotation"]["number"];
    assert_eq!(*rotation, json!(["2012-08-04T16:00:01Z", 2.0, "2012-08-04T16:00:02Z", 3.0]));
}

#[test]
fn test_rgba_and_rgbaf_denote_same_color() {
    init_tracing();
    let sink = MemorySink::new();
    let mut doc = CzmlDocument::new(sink.clone(), WriterSettings::default()).unwrap();
    {
        let packet = doc.open_packet().unwrap();
        let rect = packet.open_rectangle_property().unwrap();
        let material = rect.open_material_property().unwrap();
        let solid = material.open_solid_color_property().unwrap();
        solid.write_color_property(Color::from_rgba(255, 0, 0, 255).unwrap()).unwrap();
        solid.close().unwrap();
        material.close().unwrap();
        rect.write_outline_color_property_rgbaf(Color::from_rgbaf(1.0, 0.0, 0.0, 1.0).unwrap())
            .unwrap();
        rect.close().unwrap();
        packet.close().unwrap();
    }
    doc.finish().unwrap();

    let rect = parse(&sink)[0]["rectangle"].clone();
    let rgba: Vec<f64> = rect["material"]["solidColor"]["color"]["rgba"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap() / 255.0)
        .collect();
    let rgbaf: Vec<f64> = rect["outlineColor"]["rgbaf"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(rgba, rgbaf);
    assert_eq!(rgbaf, vec![1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_protocol_misuse() {
    init_tracing();
    let mut doc = CzmlDocument::new(MemorySink::new(), WriterSettings::default()).unwrap();
    let packet = doc.open_packet().unwrap();
    let rect = packet.open_rectangle_property().unwrap();

    let height = rect.open_height_property().unwrap();
    height.write(1.0).unwrap();
    let err = height.write(2.0).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
    height.close().unwrap();

    let interval = TimeInterval::new(t(0), t(10)).unwrap();
    let fill = rect.open_fill_property().unwrap();
    fill.write_interval(&interval).unwrap();
    assert!(fill.write_interval(&interval).unwrap_err().is_invalid_operation());
    fill.write(true).unwrap();
    fill.close().unwrap();

    // A closed writer cannot be closed again.
    rect.close().unwrap();
    assert!(rect.close().unwrap_err().is_invalid_operation());
    packet.close().unwrap();
}

#[test]
fn test_references_and_enums() {
    init_tracing();
    let sink = MemorySink::new();
    let mut doc = CzmlDocument::new(sink.clone(), WriterSettings::default()).unwrap();
    {
        let packet = doc.open_packet().unwrap();
        packet.write_id("copy").unwrap();
        let rect = packet.open_rectangle_property().unwrap();
        rect.write_coordinates_property(
            Reference::with_path("source", ["rectangle", "coordinates"]).unwrap(),
        )
        .unwrap();
        rect.write_height_reference_property(HeightReference::RelativeToGround).unwrap();
        rect.write_classification_type_property("TERRAIN".parse::<ClassificationType>().unwrap())
            .unwrap();
        rect.close().unwrap();
        packet.close().unwrap();
    }
    doc.finish().unwrap();

    let rect = &parse(&sink)[0]["rectangle"];
    assert_eq!(rect["coordinates"], json!({"reference": "#source#rectangle.coordinates"}));
    assert_eq!(rect["heightReference"], "RELATIVE_TO_GROUND");
    assert_eq!(rect["classificationType"], "TERRAIN");
    assert!("GROUND".parse::<ClassificationType>().unwrap_err().is_invalid_argument());
}

#[test]
fn test_standalone_property_writer() {
    init_tracing();
    let sink = MemorySink::new();
    let output = CzmlOutputStream::new(sink.clone(), WriterSettings::default()).into_shared();
    output.borrow_mut().write_start_object().unwrap();

    let mut color: PropertyWriter<Color> = PropertyWriter::new("color");
    {
        let mut scoped = Scoped::open(&mut color, &output).unwrap();
        scoped.write_as(ColorEncoding::Rgbaf, Color::TRANSPARENT).unwrap();
        scoped.finish().unwrap();
    }
    {
        // Dropping the guard without finishing still closes the writer.
        let mut guard = Scoped::open(&mut color, &output).unwrap();
        assert!(guard.write(Color::WHITE).is_ok());
    }
    assert!(!color.is_open());
    output.borrow_mut().write_end_object().unwrap();

    // Both members share a name; the second wins when parsed.
    assert!(sink.contents().starts_with(r#"{"color":{"rgbaf":[0.0,0.0,0.0,0.0]},"color":"#));
}

#[test]
fn test_write_to_file() {
    init_tracing();
    let temp = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp.path();

    let mut doc = CzmlDocument::create(path, WriterSettings::pretty()).expect("Failed to create file");
    doc.write_document_packet("file").unwrap();
    {
        let packet = doc.open_packet().unwrap();
        packet.write_id("box").unwrap();
        let boxg = packet.open_box_property().unwrap();
        boxg.write_dimensions_property(DVec3::new(10.0, 20.0, 30.0)).unwrap();
        boxg.write_outline_property(true).unwrap();
        boxg.close().unwrap();
        packet.close().unwrap();
    }
    doc.finish().expect("Failed to finish file");

    let text = std::fs::read_to_string(path).expect("Failed to read file");
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed[1]["box"],
        json!({"dimensions": {"cartesian": [10.0, 20.0, 30.0]}, "outline": true})
    );
}

#[test]
fn test_settings_from_file() {
    init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    std::io::Write::write_all(
        &mut file,
        br#"{"time_encoding": "epoch_seconds", "epoch": "2012-08-04T16:00:00Z"}"#,
    )
    .unwrap();
    let settings = WriterSettings::load(file.path()).unwrap();

    let sink = MemorySink::new();
    let mut doc = CzmlDocument::new(sink.clone(), settings).unwrap();
    {
        let packet = doc.open_packet().unwrap();
        let rect = packet.open_rectangle_property().unwrap();
        let series = TimeSeries::new(vec![t(30), t(90)], vec![0.5, 1.5]).unwrap();
        rect.write_st_rotation_property(series).unwrap();
        rect.close().unwrap();
        packet.close().unwrap();
    }
    doc.finish().unwrap();

    assert_eq!(
        parse(&sink)[0]["rectangle"]["stRotation"],
        json!({"epoch": "2012-08-04T16:00:00Z", "number": [30.0, 0.5, 90.0, 1.5]})
    );
}
