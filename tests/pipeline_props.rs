// tests/pipeline_props.rs
use quake_dashboard::extract::extract;
use quake_dashboard::feed::types::FeedDocument;
use quake_dashboard::summary::summarize;

const SAMPLE: &str = include_str!("fixtures/usgs_sample.geojson");

fn doc(json: &str) -> FeedDocument {
    serde_json::from_str(json).expect("valid feed json")
}

fn two_ml() -> FeedDocument {
    doc(r#"{"features":[
        {"id":"a","properties":{"mag":2.5,"place":"CA","magType":"ml","time":100,"url":"u1"}},
        {"id":"b","properties":{"mag":3.1,"place":"NV","magType":"ml","time":200,"url":"u2"}}
    ]}"#)
}

#[test]
fn two_ml_events_summarize_to_one_key() {
    let d = two_ml();
    let s = summarize(&d);
    assert_eq!(s.len(), 1);
    assert_eq!(s.get("ml"), Some(2));

    let recs = extract(&d);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].id.as_deref(), Some("a"));
    assert_eq!(recs[0].magnitude, "2.5");
    assert_eq!(recs[0].location, "CA");
    assert_eq!(recs[0].url, "u1");
    assert_eq!(recs[0].time, "1970-01-01 00:00:00 UTC");
    assert_eq!(recs[1].location, "NV");
    assert_eq!(recs[1].magnitude, "3.1");
    for r in &recs {
        assert_ne!(r.magnitude, "N/A");
        assert_ne!(r.time, "N/A");
        assert_ne!(r.url, "N/A");
        assert_ne!(r.location, "Unknown");
    }
}

#[test]
fn missing_place_becomes_unknown() {
    let d = doc(r#"{"features":[{"id":"x","properties":{"mag":1.0,"magType":"md"}}]}"#);
    let r = &extract(&d)[0];
    assert_eq!(r.location, "Unknown");
    assert_eq!(r.time, "N/A");
    assert_eq!(r.url, "N/A");
    assert_eq!(r.magnitude, "1");
}

#[test]
fn feature_without_properties_gets_all_defaults() {
    let d = doc(r#"{"features":[{"id":"bare"}]}"#);
    let r = &extract(&d)[0];
    assert_eq!(r.magnitude, "N/A");
    assert_eq!(r.location, "Unknown");
    assert_eq!(r.mag_type, "N/A");
    assert_eq!(summarize(&d).get("N/A"), Some(1));
}

#[test]
fn extract_keeps_length_and_order() {
    let d = doc(SAMPLE);
    let recs = extract(&d);
    assert_eq!(recs.len(), d.features.len());
    let ids: Vec<_> = recs.iter().map(|r| r.id.clone().unwrap()).collect();
    let want: Vec<_> = d.features.iter().map(|f| f.id.clone().unwrap()).collect();
    assert_eq!(ids, want);
}

#[test]
fn summary_counts_add_up_and_follow_first_seen_order() {
    let d = doc(SAMPLE);
    let s = summarize(&d);
    assert_eq!(s.total(), d.features.len());
    assert_eq!(s.keys().collect::<Vec<_>>(), vec!["md", "ml", "mb"]);
    assert_eq!(s.get("md"), Some(2));
    assert_eq!(s.get("ml"), Some(2));
    assert_eq!(s.get("mb"), Some(1));
}

#[test]
fn null_magnitude_in_feed_uses_default() {
    let d = doc(SAMPLE);
    let last = extract(&d).pop().unwrap();
    assert_eq!(last.id.as_deref(), Some("hv74000001"));
    assert_eq!(last.magnitude, "N/A");
    assert_eq!(last.location, "Unknown");
    assert_eq!(last.mag_type, "md");
}

#[test]
fn empty_document_yields_nothing() {
    let d = FeedDocument::empty();
    assert!(extract(&d).is_empty());
    let s = summarize(&d);
    assert!(s.is_empty());
    assert_eq!(s.total(), 0);
}

#[test]
fn numeric_id_is_kept_as_text() {
    let d = doc(r#"{"features":[
        {"id":42,"properties":{"mag":1.1,"magType":"ml"}},
        {"id":"us1","properties":{"mag":2.2,"magType":"mb"}}
    ]}"#);
    let recs = extract(&d);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].id.as_deref(), Some("42"));
    assert_eq!(recs[1].id.as_deref(), Some("us1"));
}

#[test]
fn null_properties_degrade_to_defaults() {
    let d = doc(r#"{"features":[
        {"id":"blank","properties":null},
        {"id":"ok","properties":{"mag":3.0,"place":"CA","magType":"ml"}}
    ]}"#);
    let recs = extract(&d);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].location, "Unknown");
    assert_eq!(recs[0].magnitude, "N/A");
    assert_eq!(recs[0].mag_type, "N/A");
    assert_eq!(recs[1].location, "CA");
    assert_eq!(summarize(&d).total(), 2);
}

#[test]
fn float_time_is_read_as_millis() {
    let d = doc(r#"{"features":[
        {"id":"f","properties":{"time":1700000000000.0,"magType":"md"}},
        {"id":"i","properties":{"time":1700000000000,"magType":"md"}}
    ]}"#);
    let recs = extract(&d);
    assert_eq!(recs[0].time, "2023-11-14 22:13:20 UTC");
    assert_eq!(recs[0].time, recs[1].time);
}
