//! Measurement section: result, time domain, properties and data values.

use diggs_model::header::keys;
use diggs_model::{
    ColumnAlignment, ConversionOptions, DataRow, HeaderData, MeasurementKind,
    PROPERTY_CLASS_CODE_SPACE, ParameterSchema, PropertyClass, XmlElement,
};

use crate::common::{DocumentIds, INVESTIGATION_TARGET, NULL_VALUE, PROJECT_ID, local_ref};
use crate::derived::{Derived, Diagnostic};

/// Timestamps per line of the time position list.
pub const TIMESTAMPS_PER_LINE: usize = 5;

/// Time position list written when there are no rows.
pub const DEFAULT_TIME_POSITIONS: &str = "1900-01-01T00:00:00";

/// Data block written when there are no rows.
pub const DEFAULT_DATA_VALUES: &str = "0.0,0.0";

const ZERO_VALUE: &str = "0.0";

/// Build `measurement/MeasurementWhileDrilling` (or `Test`).
pub fn measurement(
    header: &HeaderData,
    schema: &ParameterSchema,
    rows: &[DataRow],
    ids: &DocumentIds,
    options: &ConversionOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> XmlElement {
    if header.non_empty(keys::MEASUREMENT_ID).is_none() {
        diagnostics.push(Diagnostic::MissingHeaderField {
            key: keys::MEASUREMENT_ID,
        });
    }
    let kind = options.measurement;

    let mut result = XmlElement::new(kind.result_element_name()).with_id("m1");
    if kind == MeasurementKind::Test {
        result.push(depth_locations(rows));
    }
    let time_positions = time_positions(rows).record("time domain", diagnostics);
    result.push(time_domain(time_positions));
    let values = data_values(rows, options.columns).record("data values", diagnostics);
    result.push(results(schema, values));

    let element = XmlElement::new(kind.element_name())
        .with_id(ids.measurement_gml_id())
        .with_child(XmlElement::text_element(
            "gml:name",
            header.get_or_empty(keys::MEASUREMENT_ID),
        ))
        .with_child(XmlElement::text_element(
            "investigationTarget",
            INVESTIGATION_TARGET,
        ))
        .with_child(XmlElement::new("projectRef").with_attr("xlink:href", local_ref(PROJECT_ID)))
        .with_child(
            XmlElement::new("samplingFeatureRef")
                .with_attr("xlink:href", local_ref(&ids.borehole_gml_id())),
        )
        .with_child(XmlElement::new("outcome").with_child(result));

    XmlElement::new("measurement").with_child(element)
}

/// Column-0 values grouped five per line.
///
/// Rows without a timestamp get `1900-01-01T00:00:<row>` so the list stays
/// aligned with the data values.
pub fn time_positions(rows: &[DataRow]) -> Derived<String> {
    if rows.is_empty() {
        return Derived::defaulted(DEFAULT_TIME_POSITIONS.to_string(), Diagnostic::NoRows);
    }
    let mut diagnostics = Vec::new();
    let timestamps: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| match row.timestamp() {
            Some(timestamp) => timestamp.to_string(),
            None => {
                diagnostics.push(Diagnostic::MissingTimestamp { row: index });
                format!("1900-01-01T00:00:{index:02}")
            }
        })
        .collect();
    let text = timestamps
        .chunks(TIMESTAMPS_PER_LINE)
        .map(|group| group.join(" "))
        .collect::<Vec<_>>()
        .join("\n");
    Derived {
        value: text,
        diagnostics,
    }
}

fn time_domain(positions: String) -> XmlElement {
    let list = XmlElement::new("TimePositionList")
        .with_id("tpl")
        .with_child(XmlElement::text_element("timePositionList", positions));
    XmlElement::new("timeDomain").with_child(list)
}

/// One `Property` descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub index: usize,
    pub name: String,
    pub class: PropertyClass,
    pub unit: Option<String>,
}

/// Property descriptors for every parameter except `Datum`, indexed from 1.
pub fn property_specs(schema: &ParameterSchema) -> Vec<PropertySpec> {
    schema
        .channels()
        .enumerate()
        .map(|(position, parameter)| PropertySpec {
            index: position + 1,
            name: parameter.name.to_string(),
            class: PropertyClass::from_name(parameter.name),
            unit: parameter.unit_of_measure().map(str::to_string),
        })
        .collect()
}

fn property_element(spec: &PropertySpec) -> XmlElement {
    let index = spec.index.to_string();
    let mut property = XmlElement::new("Property")
        .with_id(format!("prop{index}"))
        .with_attr("index", index)
        .with_child(XmlElement::text_element("propertyName", spec.name.as_str()))
        .with_child(XmlElement::text_element("typeData", "double"))
        .with_child(
            XmlElement::text_element("propertyClass", spec.class.code())
                .with_attr("codeSpace", PROPERTY_CLASS_CODE_SPACE),
        );
    if let Some(unit) = &spec.unit {
        property.push(XmlElement::text_element("uom", unit.as_str()));
    }
    property.push(XmlElement::text_element("nullValue", NULL_VALUE).with_attr("reason", "missing"));
    property
}

/// Comma-joined row values, one row per line.
///
/// A row too short for `columns` is replaced by zeros, as many as the first
/// row that does cover the columns has (or a single zero).
pub fn data_values(rows: &[DataRow], columns: ColumnAlignment) -> Derived<String> {
    if rows.is_empty() {
        return Derived::defaulted(DEFAULT_DATA_VALUES.to_string(), Diagnostic::NoRows);
    }
    let start = columns.first_value_column();
    let zero_width = rows
        .iter()
        .find_map(|row| row.values_from(start))
        .map_or(1, <[String]>::len);

    let mut diagnostics = Vec::new();
    let lines: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| match row.values_from(start) {
            Some(values) => values.join(","),
            None => {
                diagnostics.push(Diagnostic::ShortDataRow {
                    row: index,
                    fields: row.len(),
                });
                vec![ZERO_VALUE; zero_width].join(",")
            }
        })
        .collect();
    Derived {
        value: lines.join("\n"),
        diagnostics,
    }
}

fn results(schema: &ParameterSchema, values: String) -> XmlElement {
    let properties = XmlElement::new("properties")
        .with_children(property_specs(schema).iter().map(property_element));
    let parameters = XmlElement::new("PropertyParameters")
        .with_id("params1")
        .with_child(properties);
    let data = XmlElement::text_element("dataValues", values)
        .with_attr("cs", ",")
        .with_attr("ts", " ")
        .with_attr("decimal", ".");
    let result_set = XmlElement::new("ResultSet")
        .with_child(XmlElement::new("parameters").with_child(parameters))
        .with_child(data);
    XmlElement::new("results").with_child(result_set)
}

/// Depth points of a test result: `0 0 <depth>` per row with a numeric depth.
fn depth_locations(rows: &[DataRow]) -> XmlElement {
    let points = rows
        .iter()
        .filter(|row| row.depth_value().is_some())
        .filter_map(|row| row.depth().map(|depth| format!("0 0 {}", depth.trim())))
        .collect::<Vec<_>>()
        .join(" ");
    let location = XmlElement::new("MultiPointLocation")
        .with_attr("srsName", "urn:ogc:def:crs:EPSG::4326")
        .with_attr("srsDimension", "1")
        .with_id("loc1")
        .with_child(XmlElement::text_element("gml:posList", points));
    XmlElement::new("location").with_child(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn property_indices_skip_datum_without_gap() {
        let schema = ParameterSchema::new(
            strings(&["Datum", "Depth", "RateOfPenetration"]),
            strings(&["-", "m", "m/h"]),
        );
        let specs = property_specs(&schema);
        let indexed: Vec<(usize, &str)> = specs.iter().map(|s| (s.index, s.name.as_str())).collect();
        assert_eq!(indexed, vec![(1, "Depth"), (2, "RateOfPenetration")]);
        assert_eq!(specs[0].class, PropertyClass::MeasuredDepth);
        assert_eq!(specs[1].class, PropertyClass::PenetrationRate);
    }

    #[test]
    fn datum_in_the_middle_does_not_consume_an_index() {
        let schema = ParameterSchema::new(
            strings(&["Depth", "Datum", "Flow"]),
            strings(&["m", "-", "l/min"]),
        );
        let indices: Vec<usize> = property_specs(&schema).iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn placeholder_unit_is_omitted() {
        let schema = ParameterSchema::new(strings(&["Datum", "Gear"]), strings(&["-", "-"]));
        let specs = property_specs(&schema);
        assert_eq!(specs[0].unit, None);
        let element = property_element(&specs[0]);
        assert!(element.child("uom").is_none());
        assert_eq!(element.child("nullValue").and_then(XmlElement::text), Some("9999"));
    }

    #[test]
    fn unknown_parameter_class_is_missing() {
        let schema = ParameterSchema::new(strings(&["Datum", "Torque"]), strings(&["-", "Nm"]));
        let element = property_element(&property_specs(&schema)[0]);
        assert_eq!(
            element.child("propertyClass").and_then(XmlElement::text),
            Some("missing")
        );
    }

    #[test]
    fn time_positions_wrap_every_five() {
        let rows: Vec<DataRow> = (0..7)
            .map(|i| DataRow::new(vec![format!("t{i}"), "1.0".to_string()]))
            .collect();
        let positions = time_positions(&rows);
        assert_eq!(positions.value, "t0 t1 t2 t3 t4\nt5 t6");
        assert!(!positions.is_default());
    }

    #[test]
    fn missing_timestamp_gets_placeholder() {
        let rows = vec![
            DataRow::from(vec!["t0", "1.0"]),
            DataRow::from(vec!["", "2.0"]),
        ];
        let positions = time_positions(&rows);
        assert_eq!(positions.value, "t0 1900-01-01T00:00:01");
        assert_eq!(
            positions.diagnostics,
            vec![Diagnostic::MissingTimestamp { row: 1 }]
        );
    }

    #[test]
    fn empty_rows_use_default_time_and_values() {
        assert_eq!(time_positions(&[]).value, DEFAULT_TIME_POSITIONS);
        assert_eq!(
            data_values(&[], ColumnAlignment::DepthAndChannels).value,
            DEFAULT_DATA_VALUES
        );
    }

    #[test]
    fn data_values_drop_timestamp_and_keep_depth() {
        let rows = vec![
            DataRow::from(vec!["t0", "0.5", "12", "30"]),
            DataRow::from(vec!["t1", "1.0", "11", "31"]),
        ];
        let values = data_values(&rows, ColumnAlignment::DepthAndChannels);
        assert_eq!(values.value, "0.5,12,30\n1.0,11,31");
    }

    #[test]
    fn channels_only_alignment_drops_depth() {
        let rows = vec![
            DataRow::from(vec!["t0", "0.5", "12", "30"]),
            DataRow::from(vec!["t1", "1.0"]),
        ];
        let values = data_values(&rows, ColumnAlignment::ChannelsOnly);
        assert_eq!(values.value, "12,30\n0.0,0.0");
        assert_eq!(
            values.diagnostics,
            vec![Diagnostic::ShortDataRow { row: 1, fields: 2 }]
        );
    }

    #[test]
    fn short_rows_without_any_valid_row_get_single_zero() {
        let rows = vec![DataRow::from(vec!["t0", "0.5"])];
        let values = data_values(&rows, ColumnAlignment::ChannelsOnly);
        assert_eq!(values.value, "0.0");
    }

    #[test]
    fn depth_locations_skip_unparsable_depths() {
        let rows = vec![
            DataRow::from(vec!["t0", "0.5"]),
            DataRow::from(vec!["t1", "n/a"]),
            DataRow::from(vec!["t2", " 1.25 "]),
        ];
        let location = depth_locations(&rows);
        assert_eq!(
            location
                .find_path(&["MultiPointLocation", "gml:posList"])
                .and_then(XmlElement::text),
            Some("0 0 0.5 0 0 1.25")
        );
    }
}
