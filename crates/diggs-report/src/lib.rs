//! DIGGS 2.6 document assembly and XML output.
//!
//! - [`assemble`] turns a parsed drilling log into a [`DiggsDocument`]
//!   element tree, substituting defaults for anything missing.
//! - [`write_document`] and [`write_diggs_xml`] serialize that tree with the
//!   namespace set in [`Namespaces`].
//! - [`fallback_document`] is the minimal document written when a
//!   conversion fails.
//!
//! [`DiggsDocument`]: diggs_model::DiggsDocument

mod assembler;
mod borehole;
mod common;
mod derived;
mod fallback;
mod geometry;
mod measurement;
mod namespaces;
mod writer;

pub use assembler::{Assembly, assemble, assemble_log, creation_date};
pub use borehole::{RigIdentity, core_barrel_diameter, sampling_feature, split_make_model};
pub use common::{
    DIGGS_NS, DOCUMENT_NAME, DocumentIds, GML_NS, PROJECT_ID, ROOT_ID, UNKNOWN, local_ref,
};
pub use derived::{Derived, Diagnostic};
pub use fallback::{
    FALLBACK_COMMENT_PREFIX, FALLBACK_DOCUMENT_ID, FALLBACK_ROOT_ID, fallback_document,
    last_resort, render_fallback,
};
pub use geometry::{
    Coordinates, DEFAULT_DEPTH_M, DEFAULT_POSITION, final_depth, format_depth,
    total_measured_depth,
};
pub use measurement::{
    DEFAULT_DATA_VALUES, DEFAULT_TIME_POSITIONS, PropertySpec, data_values, measurement,
    property_specs, time_positions,
};
pub use namespaces::Namespaces;
pub use writer::{write_diggs_xml, write_document, write_text, write_to};
