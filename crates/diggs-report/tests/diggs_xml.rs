//! End-to-end assembly and serialization of parsed drilling logs.

use chrono::NaiveDate;
use diggs_ingest::parse_log;
use diggs_model::{
    ColumnAlignment, ConversionOptions, DataRow, DiggsDocument, HeaderData, MeasurementKind,
    ParameterSchema, XmlElement,
};
use diggs_report::{
    DocumentIds, Namespaces, assemble, assemble_log, measurement, write_diggs_xml, write_document,
};

const SAMPLE: &str = "\
[HEADER]
BoreholeID=B-2
ID=MWD-7
Client=Hatlapa HD 220
Contractor=Acme Drilling
Latitude_Modem=038.908318
Longitude_Modem=-77.466659
Altitude_Modem=244.34
CasingOD(inch)=4.5
Ratio_G1=12.1
CrowdCylArea=3.14
AugerID=6
Rollerbit=4.75
RockCoreSize(inch)=NQ=1.875
[PARAMETER]
Datum;Depth;RateOfPenetration;Gear
-;m;m/h;-
[DATA]
Datum;Depth;RateOfPenetration;Gear
2024-05-06T10:00:00;0.10;12.5;1
2024-05-06T10:00:05;0.20;13.0;1
2024-05-06T10:00:10;-1.75;11.0;2
[FOOTER]
End=1
";

fn pinned() -> ConversionOptions {
    ConversionOptions::new()
        .with_creation_date(NaiveDate::from_ymd_opt(2024, 5, 6).expect("valid date"))
}

fn text_at<'a>(document: &'a DiggsDocument, path: &[&str]) -> Option<&'a str> {
    document.find_path(path).and_then(XmlElement::text)
}

#[test]
fn sample_log_assembles_without_defaults() {
    let log = parse_log(SAMPLE);
    let assembly = assemble_log(&log, &pinned());
    assert!(assembly.is_clean(), "{:?}", assembly.diagnostics);

    let document = &assembly.document;
    let borehole = ["samplingFeature", "Borehole"];
    assert_eq!(
        document.find_path(&borehole).and_then(|b| b.attr("gml:id")),
        Some("id_B-2")
    );
    assert_eq!(
        text_at(
            document,
            &[
                "samplingFeature",
                "Borehole",
                "referencePoint",
                "PointLocation",
                "gml:pos"
            ]
        ),
        Some("38.908318 -77.466659 244.34")
    );
    assert_eq!(
        text_at(
            document,
            &[
                "samplingFeature",
                "Borehole",
                "centerLine",
                "LinearExtent",
                "gml:posList"
            ]
        ),
        Some("38.908318 -77.466659 244.34 38.908318 -77.466659 246.09")
    );
    assert_eq!(
        text_at(document, &["samplingFeature", "Borehole", "totalMeasuredDepth"]),
        Some("1.75")
    );
    assert_eq!(
        text_at(
            document,
            &[
                "samplingFeature",
                "Borehole",
                "constructionMethod",
                "BoreholeConstructionMethod",
                "constructionEquipment",
                "DrillRig",
                "modelNumber"
            ]
        ),
        Some("HD 220")
    );
}

#[test]
fn sample_log_measurement_values() {
    let assembly = assemble_log(&parse_log(SAMPLE), &pinned());
    let result = assembly
        .document
        .find_path(&[
            "measurement",
            "MeasurementWhileDrilling",
            "outcome",
            "MWDResult",
        ])
        .expect("MWD result");

    assert_eq!(
        result
            .find_path(&["timeDomain", "TimePositionList", "timePositionList"])
            .and_then(XmlElement::text),
        Some("2024-05-06T10:00:00 2024-05-06T10:00:05 2024-05-06T10:00:10")
    );
    let result_set = result
        .find_path(&["results", "ResultSet"])
        .expect("result set");
    assert_eq!(
        result_set.child("dataValues").and_then(XmlElement::text),
        Some("0.10,12.5,1\n0.20,13.0,1\n-1.75,11.0,2")
    );
    let properties = result_set
        .find_path(&["parameters", "PropertyParameters", "properties"])
        .expect("properties");
    let names: Vec<&str> = properties
        .children_named("Property")
        .filter_map(|p| p.child("propertyName").and_then(XmlElement::text))
        .collect();
    assert_eq!(names, vec!["Depth", "RateOfPenetration", "Gear"]);
}

#[test]
fn repeated_assembly_is_byte_identical() {
    let log = parse_log(SAMPLE);
    let namespaces = Namespaces::default();
    let first = write_document(&assemble_log(&log, &pinned()).document, &namespaces)
        .expect("first render");
    let second = write_document(&assemble_log(&log, &pinned()).document, &namespaces)
        .expect("second render");
    assert_eq!(first, second);
    assert!(first.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Diggs "));
    assert!(first.contains(r#"xmlns="http://diggsml.org/schemas/2.6""#));
    assert!(first.contains(r#"gml:id="guh2diggs_export""#));
}

#[test]
fn channels_only_alignment_skips_depth_column() {
    let options = pinned().with_columns(ColumnAlignment::ChannelsOnly);
    let assembly = assemble_log(&parse_log(SAMPLE), &options);
    let values = text_at(
        &assembly.document,
        &[
            "measurement",
            "MeasurementWhileDrilling",
            "outcome",
            "MWDResult",
            "results",
            "ResultSet",
            "dataValues",
        ],
    );
    assert_eq!(values, Some("12.5,1\n13.0,1\n11.0,2"));
}

#[test]
fn test_flavour_lists_depth_points() {
    let options = pinned().with_measurement(MeasurementKind::Test);
    let assembly = assemble_log(&parse_log(SAMPLE), &options);
    let result = assembly
        .document
        .find_path(&["measurement", "Test", "outcome", "TestResult"])
        .expect("test result");
    assert_eq!(
        result
            .find_path(&["location", "MultiPointLocation", "gml:posList"])
            .and_then(XmlElement::text),
        Some("0 0 0.10 0 0 0.20 0 0 -1.75")
    );
}

#[test]
fn log_without_parameters_uses_placeholder_row() {
    let log = parse_log("[HEADER]\nBoreholeID=B-9\n");
    assert!(log.schema_defaulted);
    let assembly = assemble_log(&log, &pinned());
    let result = [
        "measurement",
        "MeasurementWhileDrilling",
        "outcome",
        "MWDResult",
    ];
    let result = assembly.document.find_path(&result).expect("result");
    assert_eq!(
        result
            .find_path(&["timeDomain", "TimePositionList", "timePositionList"])
            .and_then(XmlElement::text),
        Some("1900-01-01T00:00:00")
    );
    assert_eq!(
        result
            .find_path(&["results", "ResultSet", "dataValues"])
            .and_then(XmlElement::text),
        Some("0.0")
    );
}

#[test]
fn measurement_fragment() {
    let header: HeaderData = [("BoreholeID", "B1"), ("ID", "M1")].into_iter().collect();
    let schema = ParameterSchema::new(
        vec!["Datum".into(), "Depth".into(), "Torque".into()],
        vec!["-".into(), "m".into(), "-".into()],
    );
    let rows = vec![DataRow::from(vec!["2024-05-06T10:00:00", "0.10", "7"])];
    let ids = DocumentIds::from_header(&header);
    let mut diagnostics = Vec::new();

    let mut document = DiggsDocument::new("frag");
    document.push(measurement(
        &header,
        &schema,
        &rows,
        &ids,
        &ConversionOptions::new(),
        &mut diagnostics,
    ));
    let text = write_document(&document, &Namespaces::new("urn:test")).expect("render");
    assert!(diagnostics.is_empty());

    insta::assert_snapshot!(text, @r##"
    <?xml version="1.0" encoding="UTF-8"?>
    <Diggs xmlns="urn:test" gml:id="frag">
      <measurement>
        <MeasurementWhileDrilling gml:id="id_M1">
          <gml:name>M1</gml:name>
          <investigationTarget>Natural Ground</investigationTarget>
          <projectRef xlink:href="#p1"/>
          <samplingFeatureRef xlink:href="#id_B1"/>
          <outcome>
            <MWDResult gml:id="m1">
              <timeDomain>
                <TimePositionList gml:id="tpl">
                  <timePositionList>2024-05-06T10:00:00</timePositionList>
                </TimePositionList>
              </timeDomain>
              <results>
                <ResultSet>
                  <parameters>
                    <PropertyParameters gml:id="params1">
                      <properties>
                        <Property gml:id="prop1" index="1">
                          <propertyName>Depth</propertyName>
                          <typeData>double</typeData>
                          <propertyClass codeSpace="http://diggsml.org/def/codes/DIGGS/0.1/mwd_properties.xml">measured_depth</propertyClass>
                          <uom>m</uom>
                          <nullValue reason="missing">9999</nullValue>
                        </Property>
                        <Property gml:id="prop2" index="2">
                          <propertyName>Torque</propertyName>
                          <typeData>double</typeData>
                          <propertyClass codeSpace="http://diggsml.org/def/codes/DIGGS/0.1/mwd_properties.xml">missing</propertyClass>
                          <nullValue reason="missing">9999</nullValue>
                        </Property>
                      </properties>
                    </PropertyParameters>
                  </parameters>
                  <dataValues cs="," ts=" " decimal=".">0.10,7</dataValues>
                </ResultSet>
              </results>
            </MWDResult>
          </outcome>
        </MeasurementWhileDrilling>
      </measurement>
    </Diggs>
    "##);
}

#[test]
fn missing_header_fields_are_reported() {
    let assembly = assemble(
        &HeaderData::new(),
        &ParameterSchema::fallback(),
        &[DataRow::from(vec!["t0", "bad"])],
        &pinned(),
    );
    let messages: Vec<String> = assembly
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(messages.contains(&"header field BoreholeID is missing".to_string()));
    assert!(messages.contains(&"last data row has invalid depth 'bad'".to_string()));
    assert!(messages.contains(&"no data row has a numeric depth".to_string()));
}

#[test]
fn document_is_written_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("mwd_diggs.xml");
    let assembly = assemble_log(&parse_log(SAMPLE), &pinned());
    write_diggs_xml(&path, &assembly.document, &Namespaces::default()).expect("write");
    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.contains("<creationDate>2024-05-06</creationDate>"));
    assert!(text.contains("<gml:name>Acme Drilling</gml:name>"));
    assert!(text.contains(r#"<barrelInnerDiameter uom="in">1.875</barrelInnerDiameter>"#));
}
