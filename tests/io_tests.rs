//! JSON file boundary.

use std::fs;
use std::path::Path;

use marketcanon::domain::{convert_all, MarketConverter};
use marketcanon::error::Error;
use marketcanon::io::{
    read_canonical_markets, read_raw_markets, resolve_input_path, resolve_output_path,
    write_canonical_markets,
};
use marketcanon::testkit::fixtures::SAMPLE_INPUT_JSON;
use rust_decimal_macros::dec;
use tempfile::tempdir;

#[test]
fn reads_sample_and_ignores_unknown_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.json");
    fs::write(&path, SAMPLE_INPUT_JSON).unwrap();

    let markets = read_raw_markets(&path).unwrap();
    assert_eq!(markets.len(), 8);
    assert_eq!(markets[3].outcomes[0].name, "Team A +1.5");
    assert_eq!(markets[3].outcomes[0].odds, Some(dec!(1.8)));

    let extra = dir.path().join("extra.json");
    fs::write(
        &extra,
        r#"[{"name":"1x2","event_id":"1","sport":"football","selections":[{"name":"Draw","odds":3.1,"id":9}]}]"#,
    )
    .unwrap();
    assert_eq!(read_raw_markets(&extra).unwrap()[0].outcomes.len(), 1);
}

#[test]
fn numeric_event_id_reads_as_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.json");
    fs::write(
        &path,
        r#"[
            {"name":"1x2","event_id":123456,"selections":[{"name":"Team A","odds":1.65},{"name":"Draw","odds":3.2},{"name":"Team B","odds":2.6}]},
            {"name":"Total","event_id":"123456","selections":[{"name":"over 2.5","odds":1.85},{"name":"under 2.5","odds":1.95}]}
        ]"#,
    )
    .unwrap();

    let markets = read_raw_markets(&path).unwrap();
    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0].event_id, "123456");

    let report = convert_all(&MarketConverter::default(), &markets);
    assert_eq!(report.converted(), 2);
    assert_eq!(report.markets()[0].market_uid().as_str(), "123456_1");
}

#[test]
fn non_array_root_is_invalid_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("object.json");
    fs::write(&path, r#"{"name":"1x2"}"#).unwrap();

    match read_raw_markets(&path) {
        Err(Error::InvalidShape(message)) => assert!(message.contains("an object")),
        other => panic!("expected invalid shape, got {other:?}"),
    }
}

#[test]
fn invalid_json_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{").unwrap();
    assert!(matches!(read_raw_markets(&path), Err(Error::Json(_))));
}

#[test]
fn directory_is_not_an_input_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        read_raw_markets(dir.path()),
        Err(Error::MissingFile { .. })
    ));
}

#[test]
fn written_output_reads_back() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sample.json");
    fs::write(&input, SAMPLE_INPUT_JSON).unwrap();

    let report = convert_all(&MarketConverter::default(), &read_raw_markets(&input).unwrap());
    let output = resolve_output_path(&input, &dir.path().join("nested/out"), "_output");
    write_canonical_markets(&output, report.markets()).unwrap();

    assert!(output.ends_with("nested/out/sample_output.json"));
    let back = read_canonical_markets(&output).unwrap();
    assert_eq!(back, report.markets());

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("\"selection_uid\": \"123456_18_2.5_12\""));
    assert!(text.contains("\"decimal_odds\": 1.85"));
}

#[test]
fn input_falls_back_to_input_dir() {
    let dir = tempdir().unwrap();
    let input_dir = dir.path().join("input_files");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("feed.json"), "[]").unwrap();

    let resolved = resolve_input_path(Path::new("feed.json"), &input_dir).unwrap();
    assert_eq!(resolved, input_dir.join("feed.json"));
    assert!(read_raw_markets(&resolved).unwrap().is_empty());
}
