//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use diggs_cli::{ConversionOutcome, LogSummary, convert_file};
use diggs_ingest::parse_log;
use diggs_model::{ConversionOptions, FailurePolicy, MeasurementKind, PropertyClass};

const LOG: &str = "\
[HEADER]
BoreholeID=B-2
ID=MWD-7
Client=Hatlapa HD
Contractor=Acme Drilling
Latitude_Modem=38.908318
Longitude_Modem=-77.466659
Altitude_Modem=244.34
[PARAMETER]
Datum;Depth;RateOfPenetration
-;m;m/h
[DATA]
2024-05-06T10:00:00;0.10;12.5
2024-05-06T10:00:05;0.20;13.0
[FOOTER]
";

fn pinned(options: ConversionOptions) -> ConversionOptions {
    options.with_creation_date(NaiveDate::from_ymd_opt(2024, 5, 6).expect("valid date"))
}

fn write_input(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("input.guh");
    fs::write(&path, text).expect("write input");
    path
}

#[test]
fn converts_log_to_diggs_xml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path(), LOG);
    let output = dir.path().join("mwd_diggs.xml");

    let outcome = convert_file(&input, &output, &pinned(ConversionOptions::new()))
        .expect("conversion succeeds");
    let ConversionOutcome::Converted(report) = &outcome else {
        panic!("expected a converted outcome, got {outcome:?}");
    };
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(report.borehole, "B-2");
    assert_eq!(report.measurement, "MWD-7");
    assert_eq!(report.rows, 2);
    assert_eq!(report.parameters, 3);
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);

    let xml = fs::read_to_string(&output).expect("read output");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(r#"<Borehole gml:id="id_B-2">"#));
    assert!(xml.contains(r#"<MeasurementWhileDrilling gml:id="id_MWD-7">"#));
    assert!(xml.contains("<creationDate>2024-05-06</creationDate>"));
}

#[test]
fn missing_input_fails_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("missing.guh");
    let output = dir.path().join("out.xml");

    let error = convert_file(&input, &output, &pinned(ConversionOptions::new()))
        .expect_err("missing input aborts before parsing");
    assert!(format!("{error:#}").contains("input file not found"));
    assert!(!output.exists());
}

#[test]
fn strict_policy_fails_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("missing.guh");
    let output = dir.path().join("out.xml");

    let result = convert_file(&input, &output, &pinned(ConversionOptions::strict()));
    let error = result.expect_err("missing input must fail");
    assert!(format!("{error:#}").contains("input file not found"));
    assert!(!output.exists());
}

#[test]
fn fallback_policy_writes_error_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("missing.guh");
    let output = dir.path().join("out.xml");

    let options = ConversionOptions::new().with_failure_policy(FailurePolicy::Fallback);
    let outcome =
        convert_file(&input, &output, &pinned(options)).expect("fallback is not an error");
    let ConversionOutcome::Fallback { message, .. } = &outcome else {
        panic!("expected a fallback outcome, got {outcome:?}");
    };
    assert_eq!(outcome.exit_code(), 2);
    assert!(message.contains("input file not found"));

    let xml = fs::read_to_string(&output).expect("read fallback");
    assert!(xml.contains(r#"<Diggs xmlns="http://diggsml.org/schemas/2.6""#));
    assert!(xml.contains(r#"gml:id="Fallback_DIGGS""#));
    assert!(xml.contains(r#"<DocumentInformation gml:id="fallback_doc">"#));
    assert!(xml.contains("<comment>Error during conversion: read "));
    assert!(xml.contains("input file not found"));
}

#[test]
fn malformed_content_still_converts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path(), "garbage before sections\n[DATA]\nonly-one-field\n");
    let output = dir.path().join("nested").join("out.xml");

    let outcome = convert_file(&input, &output, &pinned(ConversionOptions::strict()))
        .expect("content problems never abort");
    let ConversionOutcome::Converted(report) = outcome else {
        panic!("expected a converted outcome");
    };
    assert_eq!(report.skipped_lines, 2);
    assert!(report.schema_defaulted);
    assert!(!report.diagnostics.is_empty());
    assert!(output.exists());
}

#[test]
fn test_flavour_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(dir.path(), LOG);
    let output = dir.path().join("test.xml");
    let options = pinned(ConversionOptions::new().with_measurement(MeasurementKind::Test));

    convert_file(&input, &output, &options).expect("conversion succeeds");
    let xml = fs::read_to_string(&output).expect("read output");
    assert!(xml.contains(r#"<Test gml:id="id_MWD-7">"#));
    assert!(xml.contains("<gml:posList>0 0 0.10 0 0 0.20</gml:posList>"));
}

#[test]
fn log_summary_serializes_to_json() {
    let log = parse_log(LOG);
    let summary = LogSummary::from_log("input.guh".into(), &log);
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.columns, Some(3));
    assert_eq!(
        summary.first_timestamp.as_deref(),
        Some("2024-05-06T10:00:00")
    );
    assert_eq!(summary.parameters[1].property_class, PropertyClass::MeasuredDepth);

    let json = serde_json::to_value(&summary).expect("json");
    assert_eq!(json["rows"], 2);
    assert_eq!(json["parameters"][2]["name"], "RateOfPenetration");
    assert_eq!(json["parameters"][2]["property_class"], "PenetrationRate");
}

#[test]
fn inspect_json_snapshot() {
    let log = parse_log("[HEADER]\nBoreholeID=B-2\n[PARAMETER]\nDatum;Depth\n-;m\n[DATA]\nt0;0.5\n");
    let summary = LogSummary::from_log("input.guh".into(), &log);
    let json = summary.to_json().expect("encode summary");

    insta::assert_snapshot!(json, @r#"
    {
      "path": "input.guh",
      "header": {
        "fields": [
          [
            "BoreholeID",
            "B-2"
          ]
        ]
      },
      "parameters": [
        {
          "name": "Datum",
          "unit": "-",
          "property_class": "Missing"
        },
        {
          "name": "Depth",
          "unit": "m",
          "property_class": "MeasuredDepth"
        }
      ],
      "rows": 1,
      "columns": 2,
      "skipped_lines": 0,
      "schema_defaulted": false,
      "max_depth": 0.5,
      "first_timestamp": "t0",
      "last_timestamp": "t0"
    }
    "#);
}
