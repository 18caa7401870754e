//! Sampling feature: the borehole, its geometry and construction.

use diggs_model::header::keys;
use diggs_model::{DataRow, HeaderData, XmlElement};

use crate::common::{
    CENTER_LINE_ID, DocumentIds, INVESTIGATION_TARGET, LRS_ID, PROJECT_ID, UNKNOWN, local_ref,
};
use crate::derived::{Derived, Diagnostic};
use crate::geometry::{Coordinates, final_depth, format_depth, total_measured_depth};

const POSITION_UOM_LABELS: &str = "dega dega m";
const POSITION_AXIS_LABELS: &str = "latitude longitude height";
const GEAR_COUNT: usize = 5;

/// Build `samplingFeature/Borehole`.
pub fn sampling_feature(
    header: &HeaderData,
    rows: &[DataRow],
    ids: &DocumentIds,
    diagnostics: &mut Vec<Diagnostic>,
) -> XmlElement {
    if header.non_empty(keys::BOREHOLE_ID).is_none() {
        diagnostics.push(Diagnostic::MissingHeaderField {
            key: keys::BOREHOLE_ID,
        });
    }
    let coordinates = Coordinates::from_header(header).record("reference point", diagnostics);
    let bottom_depth = final_depth(rows).record("center line", diagnostics);
    let total_depth = total_measured_depth(rows).record("total measured depth", diagnostics);

    let borehole = XmlElement::new("Borehole")
        .with_id(ids.borehole_gml_id())
        .with_child(XmlElement::text_element(
            "gml:name",
            header.get_or_empty(keys::BOREHOLE_ID),
        ))
        .with_child(XmlElement::text_element(
            "investigationTarget",
            INVESTIGATION_TARGET,
        ))
        .with_child(XmlElement::new("projectRef").with_attr("xlink:href", local_ref(PROJECT_ID)))
        .with_child(reference_point(&coordinates))
        .with_child(center_line(&coordinates, bottom_depth))
        .with_child(linear_referencing())
        .with_child(
            XmlElement::text_element("totalMeasuredDepth", format_depth(total_depth))
                .with_attr("uom", "m"),
        )
        .with_child(casing(header, ids))
        .with_child(construction_method(header, ids, total_depth, diagnostics));

    XmlElement::new("samplingFeature").with_child(borehole)
}

fn position_element(name: &str, text: String) -> XmlElement {
    XmlElement::text_element(name, text)
        .with_attr("srsDimension", "3")
        .with_attr("uomLabels", POSITION_UOM_LABELS)
        .with_attr("axisLabels", POSITION_AXIS_LABELS)
}

fn reference_point(coordinates: &Coordinates) -> XmlElement {
    let point = XmlElement::new("PointLocation")
        .with_id("Point_Location_0-pl")
        .with_child(position_element("gml:pos", coordinates.position()));
    XmlElement::new("referencePoint").with_child(point)
}

/// Two-point line from the surface position down to the last logged depth.
fn center_line(surface: &Coordinates, depth: f64) -> XmlElement {
    let bottom = surface.descend(depth);
    let positions = format!("{} {}", surface.position(), bottom.position());
    let extent = XmlElement::new("LinearExtent")
        .with_id(CENTER_LINE_ID)
        .with_child(position_element("gml:posList", positions));
    XmlElement::new("centerLine").with_child(extent)
}

fn linear_referencing() -> XmlElement {
    let method = XmlElement::new("glr:LinearReferencingMethod")
        .with_id(format!("{CENTER_LINE_ID}_"))
        .with_child(XmlElement::text_element("glr:name", "chainage"))
        .with_child(XmlElement::text_element("glr:type", "absolute"))
        .with_child(XmlElement::text_element("glr:units", "m"));
    let lrs = XmlElement::new("LinearSpatialReferenceSystem")
        .with_id(LRS_ID)
        .with_child(
            XmlElement::text_element("gml:identifier", format!("DIGGS:{LRS_ID}"))
                .with_attr("codeSpace", "DIGGS"),
        )
        .with_child(
            XmlElement::new("glr:linearElement").with_attr("xlink:href", local_ref(CENTER_LINE_ID)),
        )
        .with_child(XmlElement::new("glr:lrm").with_child(method));
    XmlElement::new("linearReferencing").with_child(lrs)
}

fn casing(header: &HeaderData, ids: &DocumentIds) -> XmlElement {
    let casing = XmlElement::new("Casing")
        .with_id(format!("{}_casing1", ids.borehole_gml_id()))
        .with_child(
            XmlElement::text_element("casingOutsideDiameter", header.get_or_empty(keys::CASING_OD))
                .with_attr("uom", "in"),
        );
    XmlElement::new("casing").with_child(casing)
}

fn construction_method(
    header: &HeaderData,
    ids: &DocumentIds,
    total_depth: f64,
    diagnostics: &mut Vec<Diagnostic>,
) -> XmlElement {
    let method_id = format!("{}_cons_method1", ids.borehole);
    let location = XmlElement::new("LinearExtent")
        .with_id(format!("{method_id}_le"))
        .with_child(
            XmlElement::text_element("gml:posList", format!("0 {}", format_depth(total_depth)))
                .with_attr("srsName", local_ref(LRS_ID))
                .with_attr("srsDimension", "1"),
        );
    let method = XmlElement::new("BoreholeConstructionMethod")
        .with_id(method_id)
        .with_child(XmlElement::text_element("gml:name", "Auger"))
        .with_child(XmlElement::new("location").with_child(location))
        .with_child(drill_rig(header, diagnostics))
        .with_child(coring_device(header));
    XmlElement::new("constructionMethod").with_child(method)
}

/// Make and model of the drill rig, split from the `Client` header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigIdentity {
    pub make: String,
    pub model: String,
}

/// First whitespace token is the make, the rest is the model.
pub fn split_make_model(client: &str) -> Derived<RigIdentity> {
    let mut tokens = client.split_whitespace();
    let Some(make) = tokens.next() else {
        return Derived::defaulted(
            RigIdentity {
                make: UNKNOWN.to_string(),
                model: UNKNOWN.to_string(),
            },
            Diagnostic::MissingHeaderField { key: keys::CLIENT },
        );
    };
    let model = tokens.collect::<Vec<_>>().join(" ");
    Derived::found(RigIdentity {
        make: make.to_string(),
        model: if model.is_empty() {
            UNKNOWN.to_string()
        } else {
            model
        },
    })
}

fn drill_rig(header: &HeaderData, diagnostics: &mut Vec<Diagnostic>) -> XmlElement {
    let client = header.get_or_empty(keys::CLIENT).trim();
    let identity = split_make_model(client).record("drill rig", diagnostics);
    let rig_id: String = client.split_whitespace().collect();

    let mut rig = XmlElement::new("DrillRig")
        .with_id(if rig_id.is_empty() { UNKNOWN.to_string() } else { rig_id })
        .with_child(XmlElement::text_element("gml:name", client))
        .with_child(XmlElement::text_element("make", identity.make))
        .with_child(XmlElement::text_element("modelNumber", identity.model));
    for gear in 1..=GEAR_COUNT {
        rig.push(
            XmlElement::text_element(
                "rotaryDriveGearRatio",
                header.get_or_empty(&keys::gear_ratio(gear)),
            )
            .with_attr("gearNumber", gear.to_string()),
        );
    }
    rig.push(
        XmlElement::text_element(
            "crowdCylinderArea",
            header.get(keys::CROWD_CYLINDER_AREA).unwrap_or("0.00"),
        )
        .with_attr("uom", "in2"),
    );
    rig.push(
        XmlElement::new("cuttingToolInfo")
            .with_child(cutting_tool("Auger", header.get_or_empty(keys::AUGER_ID)))
            .with_child(cutting_tool("Roller bit", header.get_or_empty(keys::ROLLER_BIT))),
    );
    XmlElement::new("constructionEquipment").with_child(rig)
}

fn cutting_tool(name: &str, outer_diameter: &str) -> XmlElement {
    XmlElement::new("CuttingTool")
        .with_child(XmlElement::text_element("gml:name", name))
        .with_child(
            XmlElement::text_element("toolOuterDiameter", outer_diameter).with_attr("uom", "in"),
        )
}

/// Barrel diameter from `RockCoreSize(inch)`: the text after the last `=`.
pub fn core_barrel_diameter(raw: Option<&str>) -> String {
    match raw {
        Some(value) => value
            .rsplit('=')
            .next()
            .unwrap_or(value)
            .trim()
            .to_string(),
        None => "0".to_string(),
    }
}

fn coring_device(header: &HeaderData) -> XmlElement {
    let device = XmlElement::new("CoringDevice")
        .with_id("rockcore1")
        .with_child(XmlElement::text_element("gml:name", "Rock core"))
        .with_child(
            XmlElement::text_element(
                "barrelInnerDiameter",
                core_barrel_diameter(header.get(keys::ROCK_CORE_SIZE)),
            )
            .with_attr("uom", "in"),
        );
    XmlElement::new("constructionEquipment").with_child(device)
}
