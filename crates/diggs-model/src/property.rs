//! DIGGS MWD property classes.

use serde::{Deserialize, Serialize};

/// Code space of the MWD property class dictionary.
pub const PROPERTY_CLASS_CODE_SPACE: &str =
    "http://diggsml.org/def/codes/DIGGS/0.1/mwd_properties.xml";

/// Property class of a drilling channel, keyed by its parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyClass {
    MeasuredDepth,
    PenetrationRate,
    RotationShaft,
    RotationTool,
    FluidInjectionVolumeRate,
    FluidInjectionPressure,
    CrowdPressure,
    RotationTach,
    TorqueTach,
    GearNumber,
    AugerOd,
    CoreSize,
    StopDepth,
    /// Parameter name not in the dictionary.
    Missing,
}

impl PropertyClass {
    /// All known classes with the parameter name that selects them.
    pub const KNOWN: [(&'static str, PropertyClass); 13] = [
        ("Depth", PropertyClass::MeasuredDepth),
        ("RateOfPenetration", PropertyClass::PenetrationRate),
        ("RotationShaft", PropertyClass::RotationShaft),
        ("RotationTool", PropertyClass::RotationTool),
        ("Flow", PropertyClass::FluidInjectionVolumeRate),
        ("PressureFlush", PropertyClass::FluidInjectionPressure),
        ("PressurePulldown", PropertyClass::CrowdPressure),
        ("RotationTach", PropertyClass::RotationTach),
        ("TorqueTach", PropertyClass::TorqueTach),
        ("Gear", PropertyClass::GearNumber),
        ("AugerOD", PropertyClass::AugerOd),
        ("RockCoreSize", PropertyClass::CoreSize),
        ("StopDepth", PropertyClass::StopDepth),
    ];

    /// Look up a parameter name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Depth" => Self::MeasuredDepth,
            "RateOfPenetration" => Self::PenetrationRate,
            "RotationShaft" => Self::RotationShaft,
            "RotationTool" => Self::RotationTool,
            "Flow" => Self::FluidInjectionVolumeRate,
            "PressureFlush" => Self::FluidInjectionPressure,
            "PressurePulldown" => Self::CrowdPressure,
            "RotationTach" => Self::RotationTach,
            "TorqueTach" => Self::TorqueTach,
            "Gear" => Self::GearNumber,
            "AugerOD" => Self::AugerOd,
            "RockCoreSize" => Self::CoreSize,
            "StopDepth" => Self::StopDepth,
            _ => Self::Missing,
        }
    }

    /// Code written to `propertyClass`.
    pub fn code(self) -> &'static str {
        match self {
            Self::MeasuredDepth => "measured_depth",
            Self::PenetrationRate => "penetration_rate",
            Self::RotationShaft => "rotation_shaft",
            Self::RotationTool => "rotation_tool",
            Self::FluidInjectionVolumeRate => "fluid_injection_volume_rate",
            Self::FluidInjectionPressure => "fluid_injection_pressure",
            Self::CrowdPressure => "crowd_pressure",
            Self::RotationTach => "rotation_tach",
            Self::TorqueTach => "torque_tach",
            Self::GearNumber => "gear_number",
            Self::AugerOd => "auger_od",
            Self::CoreSize => "core_size",
            Self::StopDepth => "stop_depth",
            Self::Missing => "missing",
        }
    }

    pub fn is_known(self) -> bool {
        self != Self::Missing
    }
}
